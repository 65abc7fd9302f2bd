//! Error types for the random number core.
//!
//! Every precondition violation is reported synchronously, before the
//! generator state is touched, so a rejected call never perturbs the
//! sequence of draws.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RngError>;

/// Errors raised by the uniform core, the distribution layer and the
/// roll notation parser.
///
/// # Variants
///
/// - `InvalidArgument`: a bound, count or probability parameter is out of range
/// - `InvalidNotation`: a roll notation string could not be parsed
/// - `InvalidConfig`: a [`GeneratorConfig`](crate::GeneratorConfig) failed validation
///
/// # Examples
///
/// ```
/// use fate_core::RngError;
///
/// let err = RngError::invalid_argument("sides", "must be positive, got 0");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid argument 'sides': must be positive, got 0"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RngError {
    /// A parameter lies outside the domain of the operation.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Parameter name.
        name: &'static str,
        /// Description of the violated bound.
        reason: String,
    },

    /// Roll notation could not be parsed.
    #[error("Invalid roll notation: {0}")]
    InvalidNotation(String),

    /// Generator configuration failed validation.
    #[error("Invalid configuration '{name}': {reason}")]
    InvalidConfig {
        /// Configuration field name.
        name: &'static str,
        /// Description of the invalid value.
        reason: String,
    },
}

impl RngError {
    /// Create an invalid argument error.
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Create an invalid notation error.
    pub fn invalid_notation(reason: impl Into<String>) -> Self {
        Self::InvalidNotation(reason.into())
    }

    /// Returns `true` for the invalid-argument kind.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
