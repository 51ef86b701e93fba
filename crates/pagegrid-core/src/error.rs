//! Error types for pagegrid.

/// Errors raised by the core primitives.
///
/// The grid controller itself never fails; these surface only from
/// configuration checks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A value was outside the range its consumer accepts.
    #[error("Invalid value for '{name}': {message}")]
    InvalidValue { name: String, message: String },
}

impl Error {
    /// Create a value error.
    pub fn invalid_value(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            name: name.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_display() {
        let err = Error::invalid_value("fixed_page_size", "must be greater than zero");
        assert_eq!(
            err.to_string(),
            "Invalid value for 'fixed_page_size': must be greater than zero"
        );
    }
}
