use thiserror::Error;

/// A single row could not be measured.
///
/// Measurement failures never abort a render pass: the row keeps its estimated size.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum MeasureError {
    /// The row's node is not attached to the host (yet, or anymore).
    #[error("row {index} is not attached to the host")]
    Detached { index: usize },

    /// The host reported a zero-height row.
    #[error("row {index} measured as zero height")]
    ZeroSize { index: usize },

    /// Any other host-side failure.
    #[error("measuring row {index} failed: {reason}")]
    Host { index: usize, reason: String },
}

impl MeasureError {
    pub fn index(&self) -> usize {
        match self {
            Self::Detached { index } | Self::ZeroSize { index } | Self::Host { index, .. } => {
                *index
            }
        }
    }
}
