use crate::*;

#[derive(Debug, Default)]
struct FakeHost {
    next_id: u64,
    listeners: Vec<ListenerId>,
    subscribed: usize,
    unsubscribed: usize,
    offset: f64,
    height: f64,
    scrolled_to: Vec<f64>,
}

impl FakeHost {
    fn with_height(height: f64) -> Self {
        Self {
            height,
            ..Self::default()
        }
    }
}

impl ScrollHost for FakeHost {
    fn subscribe(&mut self) -> ListenerId {
        self.next_id += 1;
        self.subscribed += 1;
        let id = ListenerId(self.next_id);
        self.listeners.push(id);
        id
    }

    fn unsubscribe(&mut self, id: ListenerId) {
        self.unsubscribed += 1;
        self.listeners.retain(|l| *l != id);
    }

    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn client_height(&self) -> f64 {
        self.height
    }

    fn scroll_to(&mut self, offset: f64) {
        self.offset = offset;
        self.scrolled_to.push(offset);
    }
}

#[derive(Clone, Debug)]
struct Student {
    id: u32,
    name: String,
}

fn roster(n: u32) -> Vec<Student> {
    (0..n)
        .map(|id| Student {
            id,
            name: format!("Student {id}"),
        })
        .collect()
}

fn scroll(offset: f64, now_ms: u64) -> HostEvent {
    HostEvent::Scroll { offset, now_ms }
}

#[test]
fn mount_registers_listener_and_drop_releases_it() {
    let mut host = FakeHost::with_height(600.0);
    {
        let view = ListView::mount(&mut host, roster(1000), &ListConfig::fixed(65)).unwrap();
        assert!(view.is_mounted());
        assert_eq!(view.host().listeners.len(), 1);
    }
    assert!(host.listeners.is_empty());
    assert_eq!(host.unsubscribed, 1);
}

#[test]
fn unmount_releases_listener_once() {
    let mut host = FakeHost::with_height(600.0);
    {
        let mut view = ListView::mount(&mut host, roster(10), &ListConfig::fixed(65)).unwrap();
        view.unmount();
        view.unmount();
        assert!(!view.is_mounted());
        assert_eq!(view.handle(scroll(100.0, 0)), None);
    }
    assert_eq!(host.subscribed, 1);
    assert_eq!(host.unsubscribed, 1);
}

#[test]
fn invalid_config_fails_before_subscribing() {
    let mut host = FakeHost::with_height(600.0);
    let err = ListView::mount(&mut host, roster(10), &ListConfig::fixed(0)).unwrap_err();
    assert_eq!(err, ConfigError::NonPositiveItemSize { size: 0 });

    let err = ListView::mount(
        &mut host,
        roster(10),
        &ListConfig::fixed(65).with_overscan(-1),
    )
    .unwrap_err();
    assert_eq!(err, ConfigError::NegativeOverscan { overscan: -1 });

    let err = ListView::mount(&mut host, roster(10), &ListConfig::default()).unwrap_err();
    assert_eq!(err, ConfigError::MissingItemSize);

    assert_eq!(host.subscribed, 0);
}

#[test]
fn config_resolves_row_height() {
    assert_eq!(ListConfig::fixed(65).validate(), Ok((RowHeight::Fixed(65), 3)));
    assert_eq!(
        ListConfig::estimated(48).with_overscan(5).validate(),
        Ok((RowHeight::Estimated(48), 5))
    );
    let both = ListConfig {
        item_height: Some(40),
        estimated_item_height: Some(80),
        ..ListConfig::default()
    };
    assert_eq!(both.validate(), Ok((RowHeight::Fixed(40), 3)));
    assert_eq!(
        ListConfig::estimated(-3).validate(),
        Err(ConfigError::NonPositiveItemSize { size: -3 })
    );
}

#[test]
fn scrolling_renders_a_bounded_window() {
    let mut host = FakeHost::with_height(600.0);
    let mut view = ListView::mount(&mut host, roster(1000), &ListConfig::fixed(65)).unwrap();

    let w = view.handle(scroll(650.0, 0)).expect("scroll publishes");
    assert_eq!((w.start_index, w.end_index), (7, 23));

    let frame = view.render(|s, _| s.name.clone());
    let Frame::Rows {
        total_height,
        offset_y,
        rows,
    } = frame
    else {
        panic!("expected rows");
    };
    assert_eq!(total_height, 65_000);
    assert_eq!(offset_y, 455);
    assert_eq!(rows.len(), 16);
    assert_eq!(rows[0].index, 7);
    assert_eq!(rows[0].start, 455);
    assert_eq!(rows[0].size, 65);
    assert_eq!(rows[0].node, "Student 7");
    assert_eq!(rows[15].index, 22);
}

#[test]
fn redundant_scroll_skips_rerender() {
    let mut host = FakeHost::with_height(600.0);
    let mut view = ListView::mount(&mut host, roster(1000), &ListConfig::fixed(65)).unwrap();
    assert!(view.handle(scroll(650.0, 0)).is_some());
    assert_eq!(view.handle(scroll(655.5, 16)), None);
    assert_eq!(view.handle(scroll(660.0, 32)), None);
}

#[test]
fn empty_roster_shows_empty_state() {
    let mut host = FakeHost::with_height(600.0);
    let config = ListConfig::fixed(65).with_empty_message("No students found");
    let view = ListView::mount(&mut host, Vec::<Student>::new(), &config).unwrap();

    assert!(view.window().is_empty());
    assert_eq!(view.window().total_height, 0);
    let frame = view.render(|s, _| s.id);
    assert!(frame.is_empty_state());
    assert!(frame.rows().is_empty());
    assert_eq!(
        frame,
        Frame::Empty {
            message: String::from("No students found")
        }
    );
}

#[test]
fn negative_scroll_offset_clamps_to_top() {
    let mut host = FakeHost::with_height(600.0);
    let mut view = ListView::mount(&mut host, roster(1000), &ListConfig::fixed(65)).unwrap();
    view.handle(scroll(650.0, 0));

    let w = view.handle(scroll(-40.0, 16)).expect("back to top");
    assert_eq!(w.start_index, 0);
    assert_eq!(view.list().viewport().scroll_offset, 0);
}

#[test]
fn resize_narrows_window() {
    let mut host = FakeHost::with_height(600.0);
    let mut view = ListView::mount(&mut host, roster(1000), &ListConfig::fixed(65)).unwrap();
    view.handle(scroll(650.0, 0));

    let w = view
        .handle(HostEvent::Resize { height: 300.0 })
        .expect("resize publishes");
    assert_eq!((w.start_index, w.end_index), (7, 18));
    assert_eq!(view.render(|s, _| s.id).rows().len(), 11);
}

#[test]
fn scroll_to_index_drives_host_and_clamps() {
    let mut host = FakeHost::with_height(600.0);
    {
        let mut view = ListView::mount(&mut host, roster(1000), &ListConfig::fixed(65)).unwrap();
        assert_eq!(view.scroll_to_index(5000, Align::Start), 64_400);
        assert_eq!(view.window().end_index, 1000);
        // The host echoes the scroll back; nothing new to render.
        assert_eq!(view.handle(scroll(64_400.0, 0)), None);
    }
    assert_eq!(host.scrolled_to, vec![64_400.0]);
}

#[test]
fn new_items_snapshot_reshapes_window() {
    let mut host = FakeHost::with_height(600.0);
    let mut view = ListView::mount(&mut host, roster(1000), &ListConfig::fixed(65)).unwrap();
    view.handle(scroll(64_400.0, 0));

    let w = view.set_items(roster(10)).expect("shorter roster publishes");
    assert_eq!((w.start_index, w.end_index), (0, 10));
    assert_eq!(view.items().len(), 10);
    assert_eq!(view.render(|s, _| s.id).rows().len(), 10);
}

#[test]
fn measurement_failures_are_isolated_per_row() {
    let mut host = FakeHost::with_height(100.0);
    let config = ListConfig::estimated(20).with_overscan(0);
    let mut view = ListView::mount(&mut host, roster(50), &config).unwrap();
    assert_eq!(view.window().end_index, 5);

    let mut measurer = |index: usize| -> Result<u32, MeasureError> {
        match index {
            2 => Err(MeasureError::Detached { index }),
            3 => Ok(0),
            _ => Ok(40),
        }
    };
    let pass = view.measure_rendered(&mut measurer);
    assert_eq!(pass.measured, 3);
    assert_eq!(
        pass.failures,
        vec![
            MeasureError::Detached { index: 2 },
            MeasureError::ZeroSize { index: 3 },
        ]
    );
    assert_eq!(pass.failures[1].index(), 3);

    let w = pass.window.expect("measurements change the window");
    assert_eq!((w.start_index, w.end_index), (0, 3));
    assert_eq!(w.total_height, 3 * 40 + 47 * 20);

    let frame = view.render(|s, _| s.id);
    assert_eq!(frame.rows()[2].size, 20);
    assert_eq!(frame.rows()[2].start, 80);
}

#[test]
fn measuring_rows_above_viewport_scrolls_host_to_match() {
    let mut host = FakeHost::with_height(100.0);
    host.offset = 400.0;
    let config = ListConfig::estimated(20);
    let mut view = ListView::mount(&mut host, roster(100), &config).unwrap();
    assert_eq!(
        (view.window().start_index, view.window().end_index),
        (17, 28)
    );

    let mut measurer = |_: usize| -> Result<u32, MeasureError> { Ok(100) };
    let pass = view.measure_rendered(&mut measurer);

    // Rows 17..20 sit above the offset and each grew by 80px.
    assert_eq!(pass.scrolled_to, Some(640));
    assert_eq!(view.list().viewport().scroll_offset, 640);
    assert_eq!(view.host().scroll_offset(), 640.0);
    assert_eq!(view.host().scrolled_to, vec![640.0]);

    let w = pass.window.expect("measurements change the window");
    assert_eq!((w.start_index, w.end_index), (17, 24));
    let frame = view.render(|s, _| s.id);
    let rows = frame.rows();
    let top = view.host().scroll_offset() as u64;
    let bottom = top + view.host().client_height() as u64;
    assert!(rows[0].start <= top);
    let last = &rows[rows.len() - 1];
    assert!(last.start + last.size as u64 >= bottom);

    // The host echoes the programmatic scroll; nothing moves.
    assert_eq!(view.handle(scroll(640.0, 16)), None);
    assert_eq!(view.list().viewport().scroll_offset, 640);

    // Measuring again with the same sizes leaves the host alone.
    let pass = view.measure_rendered(&mut measurer);
    assert_eq!(pass.scrolled_to, None);
    assert_eq!(view.host().scrolled_to.len(), 1);
}

#[test]
fn fixed_rows_skip_measurement() {
    let mut host = FakeHost::with_height(600.0);
    let mut view = ListView::mount(&mut host, roster(100), &ListConfig::fixed(65)).unwrap();
    let mut measurer = |_: usize| -> Result<u32, MeasureError> { Ok(10) };
    assert_eq!(view.measure_rendered(&mut measurer), MeasurePass::default());
    assert_eq!(view.window().total_height, 6500);
}

#[test]
fn measuring_until_stable_covers_new_rows() {
    let mut host = FakeHost::with_height(100.0);
    let config = ListConfig::estimated(10).with_overscan(0);
    let mut view = ListView::mount(&mut host, roster(100), &config).unwrap();
    assert_eq!(view.window().end_index, 10);

    let mut measurer = |_: usize| -> Result<u32, MeasureError> { Ok(50) };
    let w = view
        .measure_until_stable(&mut measurer, 8)
        .expect("window shrinks to the tall rows");
    assert_eq!((w.start_index, w.end_index), (0, 2));
    assert_eq!(view.measure_rendered(&mut measurer).window, None);
}

#[test]
fn tick_ends_scrolling_after_delay() {
    let mut host = FakeHost::with_height(600.0);
    let mut view = ListView::mount(&mut host, roster(100), &ListConfig::fixed(65)).unwrap();
    view.handle(scroll(100.0, 1_000));
    assert!(view.list().is_scrolling());
    assert!(!view.tick(1_100));
    assert!(view.tick(1_150));
    assert!(!view.list().is_scrolling());
}

#[cfg(feature = "serde")]
#[test]
fn config_reads_camel_case_props() {
    let config: ListConfig = serde_json::from_str(
        r#"{ "itemHeight": 65, "overscan": 5, "emptyMessage": "No students found" }"#,
    )
    .unwrap();
    assert_eq!(config.item_height, Some(65));
    assert_eq!(config.estimated_item_height, None);
    assert_eq!(config.overscan, 5);
    assert_eq!(config.empty_message, "No students found");
    assert_eq!(config.is_scrolling_reset_delay_ms, 150);
}
