//! Error raised when an identifier string does not match its grammar

use thiserror::Error;

/// Why an identifier failed to parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorReason {
    #[error("empty input")]
    EmptyInput,

    #[error("missing segment")]
    MissingSegment,

    #[error("unexpected trailing segment '{found}'")]
    UnexpectedTrailingSegment { found: String },

    #[error("empty value segment")]
    EmptyValueSegment,

    #[error("literal mismatch, got '{found}'")]
    LiteralMismatch { found: String },

    /// Only raised when building from fields; a parsed value never holds one
    #[error("value '{value}' contains the separator '/'")]
    SeparatorInValue { value: String },
}

/// An identifier string that does not match the grammar it was parsed against
///
/// Carries the offending input, the segment expected at the point of failure
/// (a value label or a literal keyword) and the reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parsing {input:?} as {grammar} ID: {reason} (expected '{expected}')")]
pub struct MalformedIdentifierError {
    pub input: String,
    /// Display name of the grammar the input was parsed against
    pub grammar: &'static str,
    pub expected: String,
    pub reason: ParseErrorReason,
}

impl MalformedIdentifierError {
    pub fn new(
        input: impl Into<String>,
        grammar: &'static str,
        expected: impl Into<String>,
        reason: ParseErrorReason,
    ) -> Self {
        Self {
            input: input.into(),
            grammar,
            expected: expected.into(),
            reason,
        }
    }

    pub fn is_empty_input(&self) -> bool {
        matches!(self.reason, ParseErrorReason::EmptyInput)
    }

    pub fn is_missing_segment(&self) -> bool {
        matches!(self.reason, ParseErrorReason::MissingSegment)
    }

    pub fn is_literal_mismatch(&self) -> bool {
        matches!(self.reason, ParseErrorReason::LiteralMismatch { .. })
    }

    pub fn is_separator_in_value(&self) -> bool {
        matches!(self.reason, ParseErrorReason::SeparatorInValue { .. })
    }
}
