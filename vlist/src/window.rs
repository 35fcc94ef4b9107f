//! The pure part of the engine: viewport + sizes in, index range out.
//!
//! Nothing here holds state, so calling any of these functions twice with the same inputs
//! yields the same result.

use crate::{Align, SizeModel, Viewport, VisibleRange, Window};

/// Computes the overscanned window to materialize for `viewport`.
///
/// The scroll offset is clamped to the scrollable extent first, so over-scrolled hosts (elastic
/// bounce, stale offsets after the list shrank) still get a valid window.
pub fn compute_window<S: SizeModel + ?Sized>(
    sizes: &S,
    viewport: Viewport,
    overscan: usize,
) -> Window {
    let total_height = sizes.total_size();
    let visible = visible_range(sizes, viewport);
    if visible.is_empty() {
        return Window {
            total_height,
            ..Window::default()
        };
    }

    let start_index = visible.start_index.saturating_sub(overscan);
    let end_index = visible
        .end_index
        .saturating_add(overscan)
        .min(sizes.count());
    Window {
        start_index,
        end_index,
        offset_y: sizes.item_start(start_index),
        total_height,
    }
}

/// Items intersecting the viewport, without overscan.
pub fn visible_range<S: SizeModel + ?Sized>(sizes: &S, viewport: Viewport) -> VisibleRange {
    let count = sizes.count();
    if count == 0 || viewport.height == 0 {
        return VisibleRange::EMPTY;
    }
    let total = sizes.total_size();
    if total == 0 {
        // Zero-height rows all fit.
        return VisibleRange {
            start_index: 0,
            end_index: count,
        };
    }

    let offset = clamp_scroll_offset(sizes, viewport.height, viewport.scroll_offset);
    let last_pixel = offset.saturating_add(viewport.height as u64 - 1);

    let start_index = sizes.index_at_offset(offset).unwrap_or(0);
    let end_index = sizes
        .index_at_offset(last_pixel)
        .map_or(count, |i| i + 1)
        .max(start_index);
    VisibleRange {
        start_index,
        end_index,
    }
}

/// Largest offset at which the viewport is still filled by content.
pub fn max_scroll_offset<S: SizeModel + ?Sized>(sizes: &S, viewport_height: u32) -> u64 {
    sizes.total_size().saturating_sub(viewport_height as u64)
}

pub fn clamp_scroll_offset<S: SizeModel + ?Sized>(
    sizes: &S,
    viewport_height: u32,
    offset: u64,
) -> u64 {
    offset.min(max_scroll_offset(sizes, viewport_height))
}

/// Scroll offset that brings `index` into view.
///
/// `index` past the end is clamped to the last item rather than rejected. An empty list always
/// scrolls to 0.
pub fn scroll_to_index_offset<S: SizeModel + ?Sized>(
    sizes: &S,
    viewport: Viewport,
    index: usize,
    align: Align,
) -> u64 {
    let count = sizes.count();
    if count == 0 {
        return 0;
    }
    let index = index.min(count - 1);
    let start = sizes.item_start(index);
    let end = start.saturating_add(sizes.item_size(index) as u64);
    let view = viewport.height as u64;

    let target = match align {
        Align::Start => start,
        Align::End => end.saturating_sub(view),
        Align::Center => {
            let center = start.saturating_add(sizes.item_size(index) as u64 / 2);
            center.saturating_sub(view / 2)
        }
        Align::Auto => {
            let current = viewport.scroll_offset;
            if start >= current && end <= viewport.end() {
                current
            } else if start < current {
                start
            } else {
                end.saturating_sub(view)
            }
        }
    };

    clamp_scroll_offset(sizes, viewport.height, target)
}
