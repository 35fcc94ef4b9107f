use std::fmt;
use std::sync::Arc;

use vlist::{
    Align, ConfigError, ListOptions, SizeModel, Sizing, Viewport, VirtualList, Window,
    host_extent, host_offset,
};

use crate::{Frame, HostEvent, ListConfig, ListenerId, Measure, MeasureError, Row, ScrollHost};

/// Result of one measurement pass over the rendered rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MeasurePass {
    /// The new window, when measurements changed it.
    pub window: Option<Window>,
    /// Rows whose measured size was applied.
    pub measured: usize,
    /// Rows that fell back to their estimate.
    pub failures: Vec<MeasureError>,
    /// Offset the host was scrolled to, when rows above the viewport changed size.
    pub scrolled_to: Option<u64>,
}

/// A list mounted in a host scroll container.
///
/// The view wraps a [`VirtualList`] and connects it to the host:
/// - `mount` registers a scroll listener; `unmount` (or dropping the view) releases it
/// - `handle` feeds scroll/resize events in and reports whether the window changed
/// - `render` turns the current window into a [`Frame`] of at most `window.len()` rows
/// - `measure_rendered` feeds measured row heights back for estimated lists
///
/// Items are held as an immutable snapshot; replace them with [`ListView::set_items`].
pub struct ListView<T, H: ScrollHost> {
    host: H,
    listener: Option<ListenerId>,
    items: Arc<[T]>,
    list: VirtualList<Sizing>,
    empty_message: String,
}

impl<T, H: ScrollHost> ListView<T, H> {
    /// Validates `config` and mounts on `host`.
    ///
    /// Nothing is registered on the host when the config is rejected.
    pub fn mount(
        host: H,
        items: impl Into<Arc<[T]>>,
        config: &ListConfig,
    ) -> Result<Self, ConfigError> {
        let items = items.into();
        let sizing = config.sizing(items.len())?;
        let options = config.list_options()?;
        Ok(Self::mount_with(
            host,
            items,
            sizing,
            options,
            config.empty_message.clone(),
        ))
    }

    /// Mounts with an already-built size model (e.g. a per-row estimate function).
    ///
    /// The size model is resized to the item count if needed.
    pub fn mount_with(
        mut host: H,
        items: impl Into<Arc<[T]>>,
        mut sizing: Sizing,
        options: ListOptions,
        empty_message: impl Into<String>,
    ) -> Self {
        let items = items.into();
        if sizing.count() != items.len() {
            sizing.set_count(items.len());
        }
        let viewport = Viewport::from_host(host.scroll_offset(), host.client_height());
        let listener = host.subscribe();
        vdebug!(
            count = items.len(),
            height = viewport.height,
            listener = listener.0,
            "ListView::mount"
        );
        Self {
            host,
            listener: Some(listener),
            items,
            list: VirtualList::with_viewport(sizing, options, viewport),
            empty_message: empty_message.into(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn list(&self) -> &VirtualList<Sizing> {
        &self.list
    }

    pub fn window(&self) -> Window {
        self.list.window()
    }

    pub fn is_mounted(&self) -> bool {
        self.listener.is_some()
    }

    /// Releases the scroll listener. Safe to call more than once.
    pub fn unmount(&mut self) {
        if let Some(id) = self.listener.take() {
            self.host.unsubscribe(id);
            vdebug!(listener = id.0, "ListView::unmount");
        }
    }

    /// Applies a host event. Returns the new window when a re-render is needed.
    ///
    /// Events arriving after `unmount` are ignored.
    pub fn handle(&mut self, event: HostEvent) -> Option<Window> {
        if !self.is_mounted() {
            vtrace!(?event, "event after unmount ignored");
            return None;
        }
        match event {
            HostEvent::Scroll { offset, now_ms } => {
                self.list.apply_scroll_event(host_offset(offset), now_ms)
            }
            HostEvent::Resize { height } => self.list.set_viewport_height(host_extent(height)),
        }
    }

    /// Advances `is_scrolling` debouncing. Returns `true` when scrolling just ended.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.list.update_scrolling(now_ms)
    }

    /// Replaces the item snapshot.
    ///
    /// Returns the new window when the list geometry changed. Callers should re-render either
    /// way since row contents may differ.
    pub fn set_items(&mut self, items: impl Into<Arc<[T]>>) -> Option<Window> {
        self.items = items.into();
        self.list.set_count(self.items.len())
    }

    /// Scrolls the host so `index` is in view; out-of-range indexes land on the last row.
    ///
    /// Returns the applied offset.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> u64 {
        let offset = self.list.scroll_to_index(index, align);
        self.host.scroll_to(offset as f64);
        offset
    }

    /// Renders the current window with `render(item, index)`.
    pub fn render<N>(&self, mut render: impl FnMut(&T, usize) -> N) -> Frame<N> {
        if self.items.is_empty() {
            return Frame::Empty {
                message: self.empty_message.clone(),
            };
        }
        let window = self.list.window();
        let sizes = self.list.sizes();
        let rows = window
            .indices()
            .filter_map(|index| {
                let item = self.items.get(index)?;
                Some(Row {
                    index,
                    start: sizes.item_start(index),
                    size: sizes.item_size(index),
                    node: render(item, index),
                })
            })
            .collect();
        Frame::Rows {
            total_height: window.total_height,
            offset_y: window.offset_y,
            rows,
        }
    }

    /// Measures every row of the current window and feeds the sizes back.
    ///
    /// A failed measurement only affects its own row, which falls back to its estimate. Fixed
    /// height lists skip measurement entirely.
    ///
    /// Size changes above the viewport move the scroll offset; the host is scrolled to match so
    /// the visible rows stay put.
    pub fn measure_rendered(&mut self, measurer: &mut impl Measure) -> MeasurePass {
        if self.list.sizes().measurements().is_none() {
            return MeasurePass::default();
        }

        let mut pass = MeasurePass::default();
        let before = self.list.viewport().scroll_offset;
        let mut results = Vec::with_capacity(self.list.window().len());
        for index in self.list.window().indices() {
            let size = match measurer.measure(index) {
                Ok(0) => Err(MeasureError::ZeroSize { index }),
                other => other,
            };
            match size {
                Ok(size) => {
                    pass.measured += 1;
                    results.push((index, Some(size)));
                }
                Err(err) => {
                    vwarn!(index, error = %err, "row measurement failed, using estimate");
                    pass.failures.push(err);
                    results.push((index, None));
                }
            }
        }
        pass.window = self.list.measure_many(results);

        let after = self.list.viewport().scroll_offset;
        if after != before {
            vdebug!(from = before, to = after, "sync host scroll after measurement");
            self.host.scroll_to(after as f64);
            pass.scrolled_to = Some(after);
        }
        pass
    }

    /// Repeats [`ListView::measure_rendered`] until the window stops changing.
    ///
    /// Measuring can pull new rows into the window, which then need measuring too. Returns the
    /// last window published, if any.
    pub fn measure_until_stable(
        &mut self,
        measurer: &mut impl Measure,
        max_passes: usize,
    ) -> Option<Window> {
        let mut last = None;
        for _ in 0..max_passes {
            match self.measure_rendered(measurer).window {
                Some(window) => last = Some(window),
                None => break,
            }
        }
        last
    }
}

impl<T, H: ScrollHost> Drop for ListView<T, H> {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl<T, H: ScrollHost> fmt::Debug for ListView<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListView")
            .field("items", &self.items.len())
            .field("mounted", &self.is_mounted())
            .field("window", &self.list.window())
            .finish_non_exhaustive()
    }
}
