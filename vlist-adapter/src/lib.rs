//! Rendering adapter for the `vlist` crate.
//!
//! `vlist` is headless and only computes windows. This crate connects it to a host scroll
//! container:
//!
//! - [`ListConfig`]: host-facing configuration, validated at mount time
//! - [`ScrollHost`]: the container contract (listener registration, scroll position, height)
//! - [`ListView`]: a mounted list that turns host events into windows and windows into
//!   [`Frame`]s via a render callback
//! - [`Measure`]: row-height feedback for estimated lists, isolated per row
//!
//! This crate is framework-agnostic: it produces positioned nodes of any type `N` and leaves
//! painting to the host.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod config;
mod error;
mod host;
mod render;
mod view;

#[cfg(test)]
mod tests;

pub use config::{ListConfig, RowHeight};
pub use error::MeasureError;
pub use host::{HostEvent, ListenerId, Measure, ScrollHost};
pub use render::{Frame, Row};
pub use view::{ListView, MeasurePass};

pub use vlist::{Align, ConfigError, Window};
