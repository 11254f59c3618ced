//! Backtracking visitors over permutations and subsets of a slice.
//! Rather than materializing every arrangement, each one is handed to a callback
//! which decides whether enumeration continues, so callers can stop as soon as
//! further arrangements cannot change their answer.
//!
//! # Examples
//! ```
//! use std::ops::ControlFlow;
//! use hamilton::cs::combinatorial::backtracking::{for_each_permutation, for_each_subset};
//!
//! let data = vec![1, 2, 3];
//! let mut perms = Vec::new();
//! let _ = for_each_permutation(&data, |p| -> ControlFlow<()> {
//!     perms.push(p.to_vec());
//!     ControlFlow::Continue(())
//! });
//! assert_eq!(perms.len(), 6);
//!
//! let mut subsets = Vec::new();
//! let _ = for_each_subset(&data, 2, |s| -> ControlFlow<()> {
//!     subsets.push(s.to_vec());
//!     ControlFlow::Continue(())
//! });
//! assert_eq!(subsets, vec![vec![1, 2], vec![1, 2, 3], vec![1, 3], vec![2, 3]]);
//! ```

use std::ops::ControlFlow;

use bitvec::prelude::*;

/// Visits every permutation of `items` in lexicographic order of positions:
/// the first slot takes `items[0]`, then `items[1]`, and so on, recursively.
///
/// Returns `ControlFlow::Break` with the visitor's value as soon as the visitor breaks.
///
/// # Example
/// ```
/// use std::ops::ControlFlow;
/// use hamilton::cs::combinatorial::backtracking::for_each_permutation;
///
/// let mut seen = Vec::new();
/// let _ = for_each_permutation(&['a', 'b', 'c'], |p| -> ControlFlow<()> {
///     seen.push(p.iter().collect::<String>());
///     ControlFlow::Continue(())
/// });
/// assert_eq!(seen, vec!["abc", "acb", "bac", "bca", "cab", "cba"]);
/// ```
pub fn for_each_permutation<T, B, F>(items: &[T], mut visit: F) -> ControlFlow<B>
where
    T: Clone,
    F: FnMut(&[T]) -> ControlFlow<B>,
{
    let mut used = bitvec![0; items.len()];
    let mut current = Vec::with_capacity(items.len());
    select_permutation(items, &mut used, &mut current, &mut visit)
}

fn select_permutation<T, B, F>(
    items: &[T],
    used: &mut BitVec,
    current: &mut Vec<T>,
    visit: &mut F,
) -> ControlFlow<B>
where
    T: Clone,
    F: FnMut(&[T]) -> ControlFlow<B>,
{
    if current.len() == items.len() {
        return visit(current);
    }
    for i in 0..items.len() {
        if used[i] {
            continue;
        }
        used.set(i, true);
        current.push(items[i].clone());
        let flow = select_permutation(items, used, current, visit);
        current.pop();
        used.set(i, false);
        flow?;
    }
    ControlFlow::Continue(())
}

/// Visits every subset of `items` holding at least `min_len` elements.
///
/// Subsets keep the relative order of `items` and are produced depth-first in
/// increasing index order, so `[0, 1, 2]` precedes `[0, 1, 2, 3]` which precedes `[0, 1, 3]`.
pub fn for_each_subset<T, B, F>(items: &[T], min_len: usize, mut visit: F) -> ControlFlow<B>
where
    T: Clone,
    F: FnMut(&[T]) -> ControlFlow<B>,
{
    let mut current = Vec::with_capacity(items.len());
    extend_subset(items, 0, min_len, &mut current, &mut visit)
}

fn extend_subset<T, B, F>(
    items: &[T],
    start: usize,
    min_len: usize,
    current: &mut Vec<T>,
    visit: &mut F,
) -> ControlFlow<B>
where
    T: Clone,
    F: FnMut(&[T]) -> ControlFlow<B>,
{
    if current.len() >= min_len {
        visit(current)?;
    }
    for i in start..items.len() {
        current.push(items[i].clone());
        let flow = extend_subset(items, i + 1, min_len, current, visit);
        current.pop();
        flow?;
    }
    ControlFlow::Continue(())
}
