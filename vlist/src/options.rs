use alloc::sync::Arc;

use crate::{ConfigError, Window, validate_overscan};

/// A callback fired whenever a list publishes a window that differs from the previous one.
pub type OnWindowChange = Arc<dyn Fn(&Window) + Send + Sync>;

/// Number of rows rendered past each edge of the viewport by default.
pub const DEFAULT_OVERSCAN: usize = 3;

/// Configuration for [`crate::VirtualList`].
///
/// Cheap to clone: the callback lives in an `Arc`.
pub struct ListOptions {
    pub overscan: usize,

    /// Debounce for resetting `is_scrolling` after the last scroll event.
    pub is_scrolling_reset_delay_ms: u64,

    /// Optional callback fired with each newly published window.
    pub on_change: Option<OnWindowChange>,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            overscan: DEFAULT_OVERSCAN,
            is_scrolling_reset_delay_ms: 150,
            on_change: None,
        }
    }
}

impl Clone for ListOptions {
    fn clone(&self) -> Self {
        Self {
            overscan: self.overscan,
            is_scrolling_reset_delay_ms: self.is_scrolling_reset_delay_ms,
            on_change: self.on_change.clone(),
        }
    }
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Sets the overscan from a signed host value, rejecting negatives.
    pub fn try_with_overscan(self, overscan: i64) -> Result<Self, ConfigError> {
        Ok(self.with_overscan(validate_overscan(overscan)?))
    }

    pub fn with_is_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.is_scrolling_reset_delay_ms = delay_ms;
        self
    }

    pub fn with_on_change(mut self, on_change: impl Fn(&Window) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(on_change));
        self
    }
}

impl core::fmt::Debug for ListOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListOptions")
            .field("overscan", &self.overscan)
            .field(
                "is_scrolling_reset_delay_ms",
                &self.is_scrolling_reset_delay_ms,
            )
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
