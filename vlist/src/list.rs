use core::cmp;

use crate::{
    Align, ListOptions, Measurable, ScrollDirection, SizeModel, Sizing, Viewport, VisibleRange,
    Window, compute_window, scroll_to_index_offset, visible_range,
};

/// A stateful windowed list.
///
/// The list owns its size model and viewport state and remembers the last window it published.
/// Every mutator recomputes the window and returns `Some(window)` only when it differs from the
/// published one, so adapters can skip re-rendering on redundant scroll or resize events.
///
/// It holds no UI objects: the host drives it with scroll offsets and container heights.
#[derive(Clone, Debug)]
pub struct VirtualList<S = Sizing> {
    sizes: S,
    options: ListOptions,
    viewport: Viewport,
    published: Window,
    is_scrolling: bool,
    scroll_direction: Option<ScrollDirection>,
    last_scroll_event_ms: Option<u64>,
}

impl<S: SizeModel> VirtualList<S> {
    pub fn new(sizes: S, options: ListOptions) -> Self {
        Self::with_viewport(sizes, options, Viewport::default())
    }

    pub fn with_viewport(sizes: S, options: ListOptions, viewport: Viewport) -> Self {
        vdebug!(
            count = sizes.count(),
            overscan = options.overscan,
            height = viewport.height,
            "VirtualList::new"
        );
        let published = compute_window(&sizes, viewport, options.overscan);
        Self {
            sizes,
            options,
            viewport,
            published,
            is_scrolling: false,
            scroll_direction: None,
            last_scroll_event_ms: None,
        }
    }

    pub fn sizes(&self) -> &S {
        &self.sizes
    }

    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn count(&self) -> usize {
        self.sizes.count()
    }

    pub fn total_height(&self) -> u64 {
        self.sizes.total_size()
    }

    /// The last published window.
    pub fn window(&self) -> Window {
        self.published
    }

    /// Items intersecting the viewport, without overscan.
    pub fn visible_range(&self) -> VisibleRange {
        visible_range(&self.sizes, self.viewport)
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    pub fn set_scroll_offset(&mut self, offset: u64) -> Option<Window> {
        let prev = self.viewport.scroll_offset;
        self.scroll_direction = match offset.cmp(&prev) {
            cmp::Ordering::Greater => Some(ScrollDirection::Forward),
            cmp::Ordering::Less => Some(ScrollDirection::Backward),
            cmp::Ordering::Equal => self.scroll_direction,
        };
        self.viewport.scroll_offset = offset;
        self.republish()
    }

    pub fn set_viewport_height(&mut self, height: u32) -> Option<Window> {
        self.viewport.height = height;
        self.republish()
    }

    /// Applies a container height and scroll offset together, publishing at most once.
    pub fn apply_frame(&mut self, height: u32, offset: u64) -> Option<Window> {
        self.viewport.height = height;
        self.set_scroll_offset(offset)
    }

    /// Applies a user scroll (wheel, drag, keyboard) and marks the list as scrolling.
    pub fn apply_scroll_event(&mut self, offset: u64, now_ms: u64) -> Option<Window> {
        vtrace!(offset, now_ms, "apply_scroll_event");
        self.is_scrolling = true;
        self.last_scroll_event_ms = Some(now_ms);
        self.set_scroll_offset(offset)
    }

    /// Resets `is_scrolling` once no scroll event arrived for the configured delay.
    ///
    /// Returns `true` when scrolling just ended.
    pub fn update_scrolling(&mut self, now_ms: u64) -> bool {
        if !self.is_scrolling {
            return false;
        }
        let Some(last) = self.last_scroll_event_ms else {
            return false;
        };
        if now_ms.saturating_sub(last) < self.options.is_scrolling_reset_delay_ms {
            return false;
        }
        self.is_scrolling = false;
        self.scroll_direction = None;
        self.last_scroll_event_ms = None;
        true
    }

    /// Programmatically scrolls so that `index` is in view.
    ///
    /// Out-of-range indexes land on the last item. Returns the applied offset.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> u64 {
        let offset = scroll_to_index_offset(&self.sizes, self.viewport, index, align);
        self.set_scroll_offset(offset);
        offset
    }

    pub fn set_overscan(&mut self, overscan: usize) -> Option<Window> {
        self.options.overscan = overscan;
        self.republish()
    }

    /// Adopts a new collection length.
    pub fn set_count(&mut self, count: usize) -> Option<Window> {
        if self.sizes.count() == count {
            return None;
        }
        self.sizes.set_count(count);
        self.republish()
    }

    /// Replaces the size model (e.g. switching from uniform to measured rows).
    pub fn set_sizes(&mut self, sizes: S) -> Option<Window> {
        self.sizes = sizes;
        self.republish()
    }

    /// Recomputes the window and publishes it if it changed.
    pub fn republish(&mut self) -> Option<Window> {
        let next = compute_window(&self.sizes, self.viewport, self.options.overscan);
        if next == self.published {
            return None;
        }
        vtrace!(
            start = next.start_index,
            end = next.end_index,
            total = next.total_height,
            "publish window"
        );
        self.published = next;
        if let Some(cb) = &self.options.on_change {
            cb(&next);
        }
        Some(next)
    }
}

impl<S: Measurable> VirtualList<S> {
    /// Records the measured size of `index`.
    ///
    /// When the item starts above the scroll offset, the offset moves by the size change so the
    /// rows on screen stay put. Repeating a measurement with an unchanged size publishes nothing.
    pub fn measure(&mut self, index: usize, size: u32) -> Option<Window> {
        self.apply_measurement(index, Some(size));
        self.republish()
    }

    /// Drops the measurement of `index` so it falls back to its estimate.
    pub fn forget_measurement(&mut self, index: usize) -> Option<Window> {
        self.apply_measurement(index, None);
        self.republish()
    }

    /// Applies a batch of measurements and publishes once.
    ///
    /// `None` entries fall back to the estimate for that item only.
    pub fn measure_many(
        &mut self,
        measurements: impl IntoIterator<Item = (usize, Option<u32>)>,
    ) -> Option<Window> {
        for (index, size) in measurements {
            self.apply_measurement(index, size);
        }
        self.republish()
    }

    pub fn reset_measurements(&mut self) -> Option<Window> {
        let cache = self.sizes.measurements_mut()?;
        cache.reset_measurements();
        self.republish()
    }

    fn apply_measurement(&mut self, index: usize, size: Option<u32>) {
        let start = self.sizes.item_start(index);
        let Some(cache) = self.sizes.measurements_mut() else {
            return;
        };
        let delta = match size {
            Some(size) => cache.measure(index, size),
            None => cache.forget(index),
        };
        if delta == 0 || start >= self.viewport.scroll_offset {
            return;
        }
        vtrace!(index, delta, "shift scroll offset for measurement above viewport");
        let offset = self.viewport.scroll_offset;
        self.viewport.scroll_offset = if delta > 0 {
            offset.saturating_add(delta as u64)
        } else {
            offset.saturating_sub(delta.unsigned_abs())
        };
    }
}
