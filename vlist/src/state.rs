/// Scroll position and container height of a list, in pixels.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`, which makes it
/// usable as a snapshot for restoring a list across sessions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Distance scrolled from the top of the track.
    pub scroll_offset: u64,
    /// Height of the visible container.
    pub height: u32,
}

impl Viewport {
    pub fn new(scroll_offset: u64, height: u32) -> Self {
        Self {
            scroll_offset,
            height,
        }
    }

    /// Builds a viewport from raw host numbers (e.g. DOM `scrollTop` / `clientHeight`).
    ///
    /// Negative and NaN values clamp to zero; fractions are floored.
    pub fn from_host(scroll_offset: f64, height: f64) -> Self {
        Self {
            scroll_offset: host_offset(scroll_offset),
            height: host_extent(height),
        }
    }

    /// One past the last visible pixel.
    pub fn end(&self) -> u64 {
        self.scroll_offset.saturating_add(self.height as u64)
    }
}

/// Sanitizes a host scroll offset.
pub fn host_offset(value: f64) -> u64 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    // Float-to-int `as` casts saturate.
    value as u64
}

/// Sanitizes a host container extent.
pub fn host_extent(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    value as u32
}
