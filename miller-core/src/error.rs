//! Error types for miller-core

use thiserror::Error;

/// Result type alias for miller operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failure classification for notation parsing
///
/// Both variants are deterministic and derived entirely from the input
/// string; there is no transient or retryable failure in the parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input is not framed by a recognized delimiter pair
    #[error("invalid format: use parentheses for planes, e.g. (100), or square brackets for directions, e.g. [111]")]
    InvalidFormat,

    /// Delimiters matched but no index digits were recovered
    #[error("no valid indices found")]
    NoValidIndices,
}

/// Error type for miller operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Notation parse failure
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::parse;

    #[test]
    fn test_parse_error_propagates_as_crate_error() {
        fn classify(input: &str) -> Result<&'static str> {
            let notation = parse(input)?;
            Ok(notation.kind())
        }

        assert_eq!(classify("(100)").unwrap(), "plane");

        let err = classify("100").unwrap_err();
        assert!(matches!(err, Error::Parse(ParseError::InvalidFormat)));
        assert_eq!(err.to_string(), ParseError::InvalidFormat.to_string());
    }
}
