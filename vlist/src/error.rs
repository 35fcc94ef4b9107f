use thiserror::Error;

/// Setup-time configuration errors.
///
/// These are raised when a list is built, never while scrolling.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A uniform item size of zero (or a negative host value) was supplied.
    #[error("item size must be positive, got {size}")]
    NonPositiveItemSize {
        /// The rejected size as supplied by the caller.
        size: i64,
    },

    /// The size estimate returned a non-positive value for an item.
    #[error("estimated size for item {index} must be positive, got {size}")]
    NonPositiveEstimate {
        /// Index of the offending item.
        index: usize,
        /// The rejected estimate.
        size: i64,
    },

    /// A uniform item size does not fit in 32 bits.
    #[error("item size must be at most {max}, got {size}")]
    ItemSizeTooLarge {
        /// The rejected size as supplied by the caller.
        size: i64,
        /// Largest accepted size.
        max: u32,
    },

    /// A negative overscan count was supplied.
    #[error("overscan must not be negative, got {overscan}")]
    NegativeOverscan {
        /// The rejected overscan.
        overscan: i64,
    },

    /// Neither a fixed item size nor an estimate was configured.
    #[error("either a fixed item height or an estimated item height is required")]
    MissingItemSize,
}

/// Converts a host-supplied item size into a validated positive size.
///
/// Sizes above `u32::MAX` are rejected rather than saturated.
pub fn validate_item_size(size: i64) -> Result<u32, ConfigError> {
    if size <= 0 {
        return Err(ConfigError::NonPositiveItemSize { size });
    }
    u32::try_from(size).map_err(|_| ConfigError::ItemSizeTooLarge {
        size,
        max: u32::MAX,
    })
}

/// Converts a host-supplied overscan into a validated count.
pub fn validate_overscan(overscan: i64) -> Result<usize, ConfigError> {
    usize::try_from(overscan).map_err(|_| ConfigError::NegativeOverscan { overscan })
}
