//! Core domain types, errors and settings shared by the `loadcache` crates.
//!
//! ## Key Components
//!
//! - **`errors`**: the `Error` enum and `Result` alias used by every cache
//!   layer. Loader failures travel through it untouched.
//! - **`types`**: the `Sizeable` trait used for byte accounting and the
//!   immutable `ByteView` value handed out by cache groups.
//! - **`config`**: `CacheSettings`, resolved from defaults and the process
//!   environment.
//! - **`constants`**: environment variable names and default budgets.

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    config::CacheSettings,
    constants::*,
    errors::{Error, Result},
    types::{ByteView, Sizeable},
};
