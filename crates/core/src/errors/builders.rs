//! Builder methods for creating errors with context

use super::types::Error;

impl Error {
    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            argument: argument.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error came out of the external loader
    #[must_use]
    pub fn is_loader(&self) -> bool {
        matches!(self, Error::Loader(_))
    }

    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }

    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration { .. })
    }
}
