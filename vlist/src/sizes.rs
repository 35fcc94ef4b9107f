use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::ConfigError;
use crate::fenwick::Fenwick;

/// Per-item sizes along the scroll axis.
///
/// This is the seam between sizing strategies and the range computation: [`crate::compute_window`]
/// only talks to this trait, so a list can switch between uniform and measured rows without
/// changing how it is rendered.
pub trait SizeModel {
    fn count(&self) -> usize;

    /// Sum of all item sizes.
    fn total_size(&self) -> u64;

    /// Offset of the first pixel of `index`. `item_start(count())` equals `total_size()`.
    fn item_start(&self, index: usize) -> u64;

    /// Size of `index`, or 0 when out of range.
    fn item_size(&self, index: usize) -> u32;

    /// Index of the item containing `offset`.
    ///
    /// Offsets past the end resolve to the last item. Returns `None` for an empty list.
    fn index_at_offset(&self, offset: u64) -> Option<usize>;

    /// Adopts a new item count (a fresh collection snapshot).
    fn set_count(&mut self, count: usize);
}

/// Every item has the same positive size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniformSizes {
    count: usize,
    item_size: u32,
}

impl UniformSizes {
    pub fn new(count: usize, item_size: u32) -> Result<Self, ConfigError> {
        if item_size == 0 {
            return Err(ConfigError::NonPositiveItemSize { size: 0 });
        }
        Ok(Self { count, item_size })
    }

    pub fn item_size_px(&self) -> u32 {
        self.item_size
    }
}

impl SizeModel for UniformSizes {
    fn count(&self) -> usize {
        self.count
    }

    fn total_size(&self) -> u64 {
        self.item_size as u64 * self.count as u64
    }

    fn item_start(&self, index: usize) -> u64 {
        self.item_size as u64 * index.min(self.count) as u64
    }

    fn item_size(&self, index: usize) -> u32 {
        if index < self.count { self.item_size } else { 0 }
    }

    fn index_at_offset(&self, offset: u64) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let index = offset / self.item_size as u64;
        Some(usize::try_from(index).map_or(self.count - 1, |i| i.min(self.count - 1)))
    }

    fn set_count(&mut self, count: usize) {
        self.count = count;
    }
}

/// Supplies the size of an item that has not been measured yet.
pub type EstimateFn = Arc<dyn Fn(usize) -> u32 + Send + Sync>;

/// Estimated sizes refined by measurements, keyed by index.
///
/// Items use their estimate until [`MeasuredSizes::measure`] records a real size. Estimates for
/// the initial count must be positive; estimates evaluated later are clamped to at least 1. Prefix sums
/// are kept in a Fenwick tree, so a measurement costs `O(log n)` instead of a full rebuild.
#[derive(Clone)]
pub struct MeasuredSizes {
    estimate: EstimateFn,
    sizes: Vec<u32>,
    measured: Vec<bool>,
    sums: Fenwick,
}

impl MeasuredSizes {
    /// Builds the cache from estimates.
    ///
    /// Every estimate is evaluated once here; a zero estimate is rejected.
    pub fn new(
        count: usize,
        estimate: impl Fn(usize) -> u32 + Send + Sync + 'static,
    ) -> Result<Self, ConfigError> {
        Self::with_estimate(count, Arc::new(estimate))
    }

    pub fn with_estimate(count: usize, estimate: EstimateFn) -> Result<Self, ConfigError> {
        let mut sizes = Vec::with_capacity(count);
        for index in 0..count {
            sizes.push(checked_estimate(&estimate, index)?);
        }
        vdebug!(count, "MeasuredSizes::new");
        Ok(Self {
            sums: Fenwick::from_sizes(&sizes),
            measured: alloc::vec![false; count],
            sizes,
            estimate,
        })
    }

    /// Records the measured size of `index` and returns the change against the previous size.
    ///
    /// Out-of-range indexes are ignored.
    pub fn measure(&mut self, index: usize, size: u32) -> i64 {
        let Some(&current) = self.sizes.get(index) else {
            return 0;
        };
        self.measured[index] = true;
        self.replace(index, current, size)
    }

    /// Drops the measurement of `index`, falling back to its estimate.
    pub fn forget(&mut self, index: usize) -> i64 {
        let Some(&current) = self.sizes.get(index) else {
            return 0;
        };
        self.measured[index] = false;
        let estimate = clamped_estimate(&self.estimate, index);
        self.replace(index, current, estimate)
    }

    pub fn reset_measurements(&mut self) {
        for (index, size) in self.sizes.iter_mut().enumerate() {
            *size = clamped_estimate(&self.estimate, index);
        }
        self.measured.fill(false);
        self.sums = Fenwick::from_sizes(&self.sizes);
        vdebug!(count = self.sizes.len(), "reset_measurements");
    }

    pub fn is_measured(&self, index: usize) -> bool {
        self.measured.get(index).copied().unwrap_or(false)
    }

    pub fn measured_count(&self) -> usize {
        self.measured.iter().filter(|m| **m).count()
    }

    fn replace(&mut self, index: usize, current: u32, size: u32) -> i64 {
        if current == size {
            return 0;
        }
        self.sizes[index] = size;
        let delta = size as i64 - current as i64;
        self.sums.add(index, delta);
        delta
    }
}

fn checked_estimate(estimate: &EstimateFn, index: usize) -> Result<u32, ConfigError> {
    match estimate(index) {
        0 => Err(ConfigError::NonPositiveEstimate { index, size: 0 }),
        size => Ok(size),
    }
}

/// Estimate for an item evaluated after construction.
///
/// Only the initial count is validated, so a zero estimate for a later index (new items, a
/// forgotten measurement, a reset) is raised to 1 to keep every item hit-testable.
fn clamped_estimate(estimate: &EstimateFn, index: usize) -> u32 {
    match estimate(index) {
        0 => {
            vwarn!(index, "zero size estimate clamped to 1");
            1
        }
        size => size,
    }
}

impl SizeModel for MeasuredSizes {
    fn count(&self) -> usize {
        self.sizes.len()
    }

    fn total_size(&self) -> u64 {
        self.sums.total()
    }

    fn item_start(&self, index: usize) -> u64 {
        self.sums.prefix_sum(index)
    }

    fn item_size(&self, index: usize) -> u32 {
        self.sizes.get(index).copied().unwrap_or(0)
    }

    fn index_at_offset(&self, offset: u64) -> Option<usize> {
        let count = self.sizes.len();
        if count == 0 {
            return None;
        }
        Some(self.sums.items_before(offset).min(count - 1))
    }

    fn set_count(&mut self, count: usize) {
        let current = self.sizes.len();
        if count < current {
            self.sizes.truncate(count);
            self.measured.truncate(count);
            self.sums.truncate(count);
        } else {
            for index in current..count {
                let size = clamped_estimate(&self.estimate, index);
                self.sizes.push(size);
                self.measured.push(false);
                self.sums.push(size);
            }
        }
        debug_assert_eq!(self.sums.len(), self.sizes.len());
        vdebug!(from = current, to = count, "MeasuredSizes::set_count");
    }
}

impl core::fmt::Debug for MeasuredSizes {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MeasuredSizes")
            .field("count", &self.sizes.len())
            .field("measured", &self.measured_count())
            .field("total_size", &self.sums.total())
            .finish_non_exhaustive()
    }
}

/// A swappable sizing strategy.
#[derive(Clone, Debug)]
pub enum Sizing {
    Uniform(UniformSizes),
    Measured(MeasuredSizes),
}

impl Sizing {
    pub fn uniform(count: usize, item_size: u32) -> Result<Self, ConfigError> {
        UniformSizes::new(count, item_size).map(Self::Uniform)
    }

    pub fn measured(
        count: usize,
        estimate: impl Fn(usize) -> u32 + Send + Sync + 'static,
    ) -> Result<Self, ConfigError> {
        MeasuredSizes::new(count, estimate).map(Self::Measured)
    }

    /// The measurement cache, when this strategy has one.
    pub fn measurements(&self) -> Option<&MeasuredSizes> {
        match self {
            Self::Uniform(_) => None,
            Self::Measured(m) => Some(m),
        }
    }

    pub fn measurements_mut(&mut self) -> Option<&mut MeasuredSizes> {
        match self {
            Self::Uniform(_) => None,
            Self::Measured(m) => Some(m),
        }
    }
}

impl SizeModel for Sizing {
    fn count(&self) -> usize {
        match self {
            Self::Uniform(s) => s.count(),
            Self::Measured(s) => s.count(),
        }
    }

    fn total_size(&self) -> u64 {
        match self {
            Self::Uniform(s) => s.total_size(),
            Self::Measured(s) => s.total_size(),
        }
    }

    fn item_start(&self, index: usize) -> u64 {
        match self {
            Self::Uniform(s) => s.item_start(index),
            Self::Measured(s) => s.item_start(index),
        }
    }

    fn item_size(&self, index: usize) -> u32 {
        match self {
            Self::Uniform(s) => s.item_size(index),
            Self::Measured(s) => s.item_size(index),
        }
    }

    fn index_at_offset(&self, offset: u64) -> Option<usize> {
        match self {
            Self::Uniform(s) => s.index_at_offset(offset),
            Self::Measured(s) => s.index_at_offset(offset),
        }
    }

    fn set_count(&mut self, count: usize) {
        match self {
            Self::Uniform(s) => s.set_count(count),
            Self::Measured(s) => s.set_count(count),
        }
    }
}

/// Size models that can take measurement feedback.
pub trait Measurable: SizeModel {
    /// The measurement cache, or `None` when sizes are fixed.
    fn measurements_mut(&mut self) -> Option<&mut MeasuredSizes>;
}

impl Measurable for MeasuredSizes {
    fn measurements_mut(&mut self) -> Option<&mut MeasuredSizes> {
        Some(self)
    }
}

impl Measurable for Sizing {
    fn measurements_mut(&mut self) -> Option<&mut MeasuredSizes> {
        Sizing::measurements_mut(self)
    }
}
