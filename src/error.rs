//! Error types for Aproximar operations.

use std::fmt;

/// Main error type for Aproximar operations.
///
/// # Examples
///
/// ```
/// use aproximar::error::AproximarError;
///
/// let err = AproximarError::InvalidArgument {
///     param: "terms".to_string(),
///     value: "-1".to_string(),
///     constraint: ">= 0".to_string(),
/// };
/// assert!(err.to_string().contains("invalid argument"));
/// ```
#[derive(Debug)]
pub enum AproximarError {
    /// Argument outside the function's domain.
    InvalidArgument {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for AproximarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AproximarError::InvalidArgument {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "invalid argument: {param} = {value}, expected {constraint}"
                )
            }
            AproximarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AproximarError {}

impl From<&str> for AproximarError {
    fn from(msg: &str) -> Self {
        AproximarError::Other(msg.to_string())
    }
}

impl From<String> for AproximarError {
    fn from(msg: String) -> Self {
        AproximarError::Other(msg)
    }
}

impl AproximarError {
    /// Create an invalid-argument error with descriptive context.
    #[must_use]
    pub fn invalid_argument(param: &str, value: impl fmt::Display, constraint: &str) -> Self {
        Self::InvalidArgument {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::Other(format!("empty input: {context}"))
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, AproximarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = AproximarError::invalid_argument("terms", -4, ">= 0");
        assert!(err.to_string().contains("terms"));
        assert!(err.to_string().contains("-4"));
        assert!(err.to_string().contains(">= 0"));
    }

    #[test]
    fn test_other_from_str() {
        let err: AproximarError = "something broke".into();
        assert_eq!(err.to_string(), "something broke");
    }

    #[test]
    fn test_empty_input() {
        let err = AproximarError::empty_input("checkpoints");
        assert!(err.to_string().contains("checkpoints"));
    }
}
