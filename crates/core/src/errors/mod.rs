//! Error types for loadcache operations

mod builders;
mod types;

pub use types::{Error, Result};
