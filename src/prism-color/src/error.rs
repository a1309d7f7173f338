//! Error types for color construction and conversion.

use thiserror::Error;

/// Error type for fallible color operations.
///
/// Degenerate numeric inputs (zero alpha, zero chroma, zero lightness) are not
/// errors; the conversions return a defined degenerate result instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The input text could not be parsed as a color.
    #[error("invalid color format {input:?}: {reason}")]
    InvalidFormat {
        /// The rejected input.
        input: String,
        /// What was wrong with it.
        reason: FormatIssue,
    },

    /// A component representation outside the supported set was requested.
    #[error("unsupported component representation: {0}")]
    UnsupportedRepresentation(String),
}

/// The specific reason a color literal was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatIssue {
    /// Hex string had an invalid length.
    #[error("invalid hex length {0} (expected 3, 6, or 8)")]
    InvalidLength(usize),

    /// Invalid hexadecimal character.
    #[error("invalid hex character")]
    InvalidHexChar,

    /// Neither a known color name nor a hex literal.
    #[error("unknown color name")]
    UnknownName,
}

impl ColorError {
    pub(crate) fn invalid_format(input: &str, reason: FormatIssue) -> Self {
        Self::InvalidFormat {
            input: input.to_string(),
            reason,
        }
    }

    /// Returns the format issue if this is an [`ColorError::InvalidFormat`].
    pub fn format_issue(&self) -> Option<FormatIssue> {
        match self {
            Self::InvalidFormat { reason, .. } => Some(*reason),
            Self::UnsupportedRepresentation(_) => None,
        }
    }
}

/// Result type alias using [`ColorError`].
pub type Result<T> = std::result::Result<T, ColorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_message() {
        let err = ColorError::invalid_format("#12345", FormatIssue::InvalidLength(5));
        assert_eq!(
            err.to_string(),
            "invalid color format \"#12345\": invalid hex length 5 (expected 3, 6, or 8)"
        );
        assert_eq!(err.format_issue(), Some(FormatIssue::InvalidLength(5)));
    }

    #[test]
    fn test_unsupported_representation_message() {
        let err = ColorError::UnsupportedRepresentation("u128".into());
        assert_eq!(err.to_string(), "unsupported component representation: u128");
        assert_eq!(err.format_issue(), None);
    }
}
