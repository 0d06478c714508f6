//! Factorial arithmetic over [`PermIndex`].
//!
//! Permutation counts are fixed width. The largest factorial that fits in a
//! `u64` is 20!, which bounds the number of symbols a tree may hold.

use crate::PermIndex;

/// Largest `n` for which `n!` fits in a [`PermIndex`].
pub const MAX_SYMBOLS: usize = 20;

/// `n!`, or `None` when it overflows.
pub fn factorial(n: usize) -> Option<PermIndex> {
    (2..=n as PermIndex).try_fold(1 as PermIndex, |acc, k| acc.checked_mul(k))
}

/// Split a 0-based offset among `slots` equally sized sibling subtrees.
///
/// Each subtree below a node with `slots` children holds `(slots - 1)!`
/// permutations. Returns the child to descend into and the offset within it.
pub(crate) fn split(offset: PermIndex, slots: usize) -> Option<(usize, PermIndex)> {
    let block = factorial(slots.checked_sub(1)?)?;
    let digit = usize::try_from(offset / block).ok()?;
    if digit >= slots {
        return None;
    }
    Some((digit, offset % block))
}

/// Factorial number system digits of a 0-based permutation index.
///
/// The digit at position `i` selects a child among the `n - i` symbols still
/// unplaced at depth `i + 1`. Returns `None` when `index >= n!`.
///
/// ```
/// assert_eq!(pmtree::factorial_digits(0, 3), Some(vec![0, 0, 0]));
/// assert_eq!(pmtree::factorial_digits(3, 3), Some(vec![1, 1, 0]));
/// assert_eq!(pmtree::factorial_digits(6, 3), None);
/// ```
pub fn factorial_digits(index: PermIndex, n: usize) -> Option<Vec<usize>> {
    if n == 0 || index >= factorial(n)? {
        return None;
    }

    let mut offset = index;
    let mut digits = Vec::with_capacity(n);
    for slots in (1..=n).rev() {
        let (digit, rest) = split(offset, slots)?;
        digits.push(digit);
        offset = rest;
    }
    Some(digits)
}
