use alloc::vec::Vec;

/// Binary indexed tree over item sizes.
///
/// Slot `i` (1-based) holds the sum of the `lowbit(i)` sizes ending at item `i - 1`, which
/// gives prefix sums and offset search in `O(log n)`.
#[derive(Clone, Debug, Default)]
pub(crate) struct Fenwick {
    slots: Vec<u64>,
    total: u64,
    top_bit: usize,
}

impl Fenwick {
    pub(crate) fn from_sizes(sizes: &[u32]) -> Self {
        let n = sizes.len();
        let mut slots = alloc::vec![0u64; n + 1];
        let mut total = 0u64;
        for (i, &size) in sizes.iter().enumerate() {
            let slot = i + 1;
            let size = size as u64;
            total = total.saturating_add(size);
            slots[slot] = slots[slot].saturating_add(size);
            let parent = slot + lowbit(slot);
            if parent <= n {
                slots[parent] = slots[parent].saturating_add(slots[slot]);
            }
        }
        Self {
            slots,
            total,
            top_bit: top_bit(n),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len().saturating_sub(1)
    }

    pub(crate) fn total(&self) -> u64 {
        self.total
    }

    /// Drops every item at or after `len`.
    pub(crate) fn truncate(&mut self, len: usize) {
        if len >= self.len() {
            return;
        }
        self.total = self.prefix_sum(len);
        self.slots.truncate(len + 1);
        self.top_bit = top_bit(len);
    }

    /// Appends one item of `size`.
    pub(crate) fn push(&mut self, size: u32) {
        let slot = self.len() + 1;
        let covered_from = slot - lowbit(slot);
        // The new slot covers (covered_from, slot]; everything but the new item is already summed.
        let covered = self
            .prefix_sum(slot - 1)
            .saturating_sub(self.prefix_sum(covered_from));
        self.slots.push(covered.saturating_add(size as u64));
        self.total = self.total.saturating_add(size as u64);
        self.top_bit = top_bit(slot);
    }

    pub(crate) fn add(&mut self, index: usize, delta: i64) {
        let n = self.len();
        if index >= n || delta == 0 {
            return;
        }
        self.total = apply_delta(self.total, delta);
        let mut slot = index + 1;
        while slot <= n {
            self.slots[slot] = apply_delta(self.slots[slot], delta);
            slot += lowbit(slot);
        }
    }

    /// Sum of the first `count` sizes.
    pub(crate) fn prefix_sum(&self, count: usize) -> u64 {
        let mut slot = count.min(self.len());
        let mut sum = 0u64;
        while slot > 0 {
            sum = sum.saturating_add(self.slots[slot]);
            slot &= slot - 1;
        }
        sum
    }

    /// Number of leading items whose combined size is `<= offset`.
    ///
    /// For an offset inside the list this is the index of the item containing it.
    pub(crate) fn items_before(&self, mut offset: u64) -> usize {
        let n = self.len();
        let mut pos = 0usize;
        let mut bit = self.top_bit;
        while bit != 0 {
            let next = pos + bit;
            if next <= n && self.slots[next] <= offset {
                offset -= self.slots[next];
                pos = next;
            }
            bit >>= 1;
        }
        pos
    }
}

fn apply_delta(value: u64, delta: i64) -> u64 {
    if delta >= 0 {
        value.saturating_add(delta as u64)
    } else {
        value.saturating_sub(delta.unsigned_abs())
    }
}

fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

fn top_bit(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        1usize << (usize::BITS - 1 - n.leading_zeros())
    }
}
