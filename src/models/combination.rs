use crate::models::Item;

/// Whether bit `index` is set in `mask`. Indices past the mask width are never set.
#[inline]
pub fn mask_contains(mask: u64, index: usize) -> bool {
    index < 64 && mask & (1 << index) != 0
}

/// A non-empty subset of the menu, encoded as a bit-mask over item indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combination {
    /// Bit `i` set means item `i` is included. Never zero.
    pub mask: u64,

    /// Exact sum of member prices.
    pub total: u64,
}

impl Combination {
    pub fn new(mask: u64, total: u64) -> Self {
        Self { mask, total }
    }

    /// Whether item `index` is part of this combination.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        mask_contains(self.mask, index)
    }

    /// Number of items in the combination.
    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// True when no bit is set. Enumeration never produces such a combination.
    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Member items, in menu order.
    pub fn members<'a>(&self, items: &'a [Item]) -> impl Iterator<Item = &'a Item> + use<'a> {
        let mask = self.mask;
        items
            .iter()
            .enumerate()
            .filter(move |(i, _)| mask_contains(mask, *i))
            .map(|(_, item)| item)
    }

    /// Member names, in menu order.
    pub fn names<'a>(&self, items: &'a [Item]) -> Vec<&'a str> {
        self.members(items).map(|item| item.name.as_str()).collect()
    }
}
