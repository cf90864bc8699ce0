use std::hint::black_box;

use crate::models::{mask_contains, Item};

/// One full bit-mask enumeration over `items`, summing set bits for every mask.
///
/// Returns the sum of all subset totals so the work stays observable.
pub fn iterative_enumeration(items: &[Item]) -> u64 {
    let n = items.len();
    let mut checksum: u64 = 0;

    for mask in 1..(1u64 << n) {
        let mut sum: u64 = 0;
        for (i, item) in items.iter().enumerate() {
            if mask_contains(mask, i) {
                sum = sum.saturating_add(item.price);
            }
        }
        checksum = checksum.wrapping_add(black_box(sum));
    }

    checksum
}

/// Binary include/exclude traversal of depth `depth`.
///
/// Each level branches into exactly two calls with no early exit and no
/// payload. Returns the number of calls made, 2^(depth + 1) - 1.
pub fn recursive_traversal(depth: usize) -> u64 {
    visit(black_box(0), black_box(depth))
}

fn visit(index: usize, depth: usize) -> u64 {
    if index == depth {
        return 1;
    }
    // Opaque arguments keep the two identical calls from being merged
    let include = visit(black_box(index + 1), depth);
    let exclude = visit(black_box(index + 1), depth);
    1 + include + exclude
}
