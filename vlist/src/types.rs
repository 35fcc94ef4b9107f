use core::ops::Range;

/// Where a scroll-to target should land inside the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    /// Leaves the offset alone when the item is already fully visible, otherwise scrolls the
    /// nearest edge into view.
    #[default]
    Auto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// A contiguous slice of item indexes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl VisibleRange {
    pub const EMPTY: Self = Self {
        start_index: 0,
        end_index: 0,
    };

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn indices(&self) -> Range<usize> {
        self.start_index..self.end_index
    }
}

/// The materialized part of a list for one viewport state.
///
/// `start_index..end_index` already includes overscan. Rows are laid out inside a track of
/// `total_height`, and the rendered block is translated by `offset_y` so that item
/// `start_index` lands at its true position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub start_index: usize,
    pub end_index: usize, // exclusive
    pub offset_y: u64,
    pub total_height: u64,
}

impl Window {
    pub fn range(&self) -> VisibleRange {
        VisibleRange {
            start_index: self.start_index,
            end_index: self.end_index,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.range().is_empty()
    }

    pub fn len(&self) -> usize {
        self.range().len()
    }

    pub fn indices(&self) -> Range<usize> {
        self.start_index..self.end_index
    }
}
