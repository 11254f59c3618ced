pub mod cs;
pub mod driver;
pub mod error;
pub mod instance;
pub mod report;

pub use cs::{combinatorial, graph};
pub use error::{Error, Result};
