pub mod combinatorial;
pub mod graph;

// Re-export all modules
pub use combinatorial::*;
pub use graph::*;
