use vlist::{
    ConfigError, DEFAULT_OVERSCAN, ListOptions, Sizing, validate_item_size, validate_overscan,
};

/// Host-facing list configuration.
///
/// Values are kept as the host supplies them (signed, possibly nonsensical) and checked by
/// [`ListConfig::validate`] when a view is mounted, so a bad config fails at setup instead of
/// at scroll time.
///
/// With `feature = "serde"`, this type can be read from camelCase JSON props, e.g.
/// `{ "itemHeight": 65, "overscan": 3 }`. Missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct ListConfig {
    /// Fixed height of every row. Takes precedence over `estimated_item_height`.
    pub item_height: Option<i64>,
    /// Height assumed for rows that have not been measured yet.
    pub estimated_item_height: Option<i64>,
    pub overscan: i64,
    /// Shown instead of rows when the collection is empty.
    pub empty_message: String,
    pub is_scrolling_reset_delay_ms: u64,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            item_height: None,
            estimated_item_height: None,
            overscan: DEFAULT_OVERSCAN as i64,
            empty_message: String::from("No items"),
            is_scrolling_reset_delay_ms: 150,
        }
    }
}

/// The sizing strategy a validated config resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowHeight {
    Fixed(u32),
    Estimated(u32),
}

impl ListConfig {
    /// Rows of one fixed height.
    pub fn fixed(item_height: i64) -> Self {
        Self {
            item_height: Some(item_height),
            ..Self::default()
        }
    }

    /// Rows measured after render, estimated until then.
    pub fn estimated(estimated_item_height: i64) -> Self {
        Self {
            estimated_item_height: Some(estimated_item_height),
            ..Self::default()
        }
    }

    pub fn with_overscan(mut self, overscan: i64) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn validate(&self) -> Result<(RowHeight, usize), ConfigError> {
        let overscan = validate_overscan(self.overscan)?;
        let height = match (self.item_height, self.estimated_item_height) {
            (Some(h), _) => RowHeight::Fixed(validate_item_size(h)?),
            (None, Some(h)) => RowHeight::Estimated(validate_item_size(h)?),
            (None, None) => return Err(ConfigError::MissingItemSize),
        };
        Ok((height, overscan))
    }

    /// Builds the size model for `count` rows.
    pub fn sizing(&self, count: usize) -> Result<Sizing, ConfigError> {
        match self.validate()?.0 {
            RowHeight::Fixed(h) => Sizing::uniform(count, h),
            RowHeight::Estimated(h) => Sizing::measured(count, move |_| h),
        }
    }

    pub fn list_options(&self) -> Result<ListOptions, ConfigError> {
        let (_, overscan) = self.validate()?;
        Ok(ListOptions::new()
            .with_overscan(overscan)
            .with_is_scrolling_reset_delay_ms(self.is_scrolling_reset_delay_ms))
    }
}
