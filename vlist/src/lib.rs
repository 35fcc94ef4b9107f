//! A headless windowed-list engine.
//!
//! Given N items, their sizes along the scroll axis and a viewport (scroll offset + container
//! height), `vlist` computes the contiguous index range worth materializing, plus an overscan
//! buffer, so the number of rendered rows stays bounded regardless of N.
//!
//! Sizes come from a [`SizeModel`]:
//! - [`UniformSizes`] for fixed-height rows (`total = item_size × N`)
//! - [`MeasuredSizes`] for estimate-until-measured rows backed by prefix sums
//!
//! [`compute_window`] is the pure range function. [`VirtualList`] wraps it with viewport state
//! and only republishes a window when it actually changed.
//!
//! For host scroll containers, render callbacks and measurement feedback, see the
//! `vlist-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod fenwick;
mod list;
mod options;
mod sizes;
mod state;
mod types;
mod window;


pub use error::{ConfigError, validate_item_size, validate_overscan};
pub use list::VirtualList;
pub use options::{DEFAULT_OVERSCAN, ListOptions, OnWindowChange};
pub use sizes::{EstimateFn, Measurable, MeasuredSizes, SizeModel, Sizing, UniformSizes};
pub use state::{Viewport, host_extent, host_offset};
pub use types::{Align, ScrollDirection, VisibleRange, Window};
pub use window::{
    clamp_scroll_offset, compute_window, max_scroll_offset, scroll_to_index_offset,
    visible_range,
};
