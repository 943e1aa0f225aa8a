//! Core error type definitions

/// Result type alias for loadcache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for loadcache operations
///
/// Cache misses and unknown groups are not errors; they are reported as
/// `None` by the operations that can produce them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A caller supplied an argument the cache cannot work with
    #[error("invalid argument '{argument}': {reason}")]
    InvalidArgument { argument: String, reason: String },

    /// The external loader failed; the source error is passed through verbatim
    #[error(transparent)]
    Loader(#[from] anyhow::Error),

    /// A cache group or the settings were put together incorrectly
    #[error("configuration error: {message}")]
    Configuration { message: String },
}
