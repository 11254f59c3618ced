pub mod backtracking;

pub use backtracking::{for_each_permutation, for_each_subset};
