//! Draw ordering: z-layers plus stable insertion order.

use core::cmp::Ordering;

/// Z-ordering key for draw items. Higher values appear on top.
///
/// The clock scene uses a handful of small fixed layers (dial, ticks, the
/// three hands); any i32 works.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}

impl Ord for ZIndex {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for ZIndex {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Stable sort key for draw items.
///
/// Ordering rules:
/// 1) `z`: ascending (back-to-front)
/// 2) `order`: ascending (insertion order for equal z)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SortKey {
    /// Z-layer. Lower values are drawn first (further back).
    pub z: ZIndex,
    /// Insertion index within the same z-layer, ensuring stable ordering.
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}

impl Ord for SortKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match self.z.cmp(&other.z) {
            Ordering::Equal => self.order.cmp(&other.order),
            o => o,
        }
    }
}

impl PartialOrd for SortKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn z_compares_numerically() {
        assert!(ZIndex::new(-1) < ZIndex::new(0));
        assert!(ZIndex::new(4) > ZIndex::new(3));
    }

    #[test]
    fn equal_z_falls_back_to_insertion_order() {
        let a = SortKey::new(ZIndex::new(2), 0);
        let b = SortKey::new(ZIndex::new(2), 1);
        let c = SortKey::new(ZIndex::new(3), 0);

        assert!(a < b);
        assert!(b < c);
    }
}
