//! Error types for the calculator
//!
//! Every failure is terminal for the call: `add` either returns a sum or
//! exactly one [`CalcError`].

use std::fmt;

use thiserror::Error;

use crate::parser::Span;

/// Result alias used throughout the library
pub type CalcResult<T> = Result<T, CalcError>;

/// Malformed input: the text cannot be read as a delimited list of integers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A token is not a valid base-10 integer literal
    #[error("invalid number '{token}' at {span}")]
    InvalidNumber {
        /// The offending token, as it appeared in the input
        token: String,
        /// Byte offsets of the token in the input
        span: Span,
    },

    /// A `//` directive declared an empty delimiter
    #[error("custom delimiter must not be empty")]
    EmptyDelimiter,

    /// A `//` directive was not terminated by a newline
    #[error("custom delimiter directive is missing its terminating newline")]
    UnterminatedDirective,
}

/// One or more parsed numbers were negative
///
/// Carries the offending values in input order. The `Display` rendering is
/// `Negative numbers not allowed: -2, -4`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct NegativeNumbersError {
    negatives: Vec<i64>,
}

impl NegativeNumbersError {
    /// Create an error from the negatives found, in input order
    #[must_use]
    pub const fn new(negatives: Vec<i64>) -> Self {
        Self { negatives }
    }

    /// The negative values, in the order they appeared in the input
    #[must_use]
    pub fn negatives(&self) -> &[i64] {
        &self.negatives
    }

    /// Join the negative values with a caller-chosen separator
    #[must_use]
    pub fn render_with(&self, separator: &str) -> String {
        self.negatives.iter().map(i64::to_string).collect::<Vec<_>>().join(separator)
    }
}

impl fmt::Display for NegativeNumbersError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Negative numbers not allowed: {}", self.render_with(", "))
    }
}

/// Any failure of [`crate::add`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The input could not be parsed
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The input contained negative numbers
    #[error(transparent)]
    NegativeNumbers(#[from] NegativeNumbersError),

    /// The sum does not fit in an `i64`
    #[error("sum overflows a 64-bit signed integer")]
    Overflow,
}

impl CalcError {
    /// Stable snake_case label for machine-readable output
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Format(_) => "format",
            Self::NegativeNumbers(_) => "negative_numbers",
            Self::Overflow => "overflow",
        }
    }

    /// Where in the input the failure is, if it points at a token
    #[must_use]
    pub const fn span(&self) -> Option<Span> {
        match self {
            Self::Format(FormatError::InvalidNumber { span, .. }) => Some(*span),
            _ => None,
        }
    }

    /// The negative values, if this is a negative-number failure
    #[must_use]
    pub fn negatives(&self) -> Option<&[i64]> {
        match self {
            Self::NegativeNumbers(err) => Some(err.negatives()),
            _ => None,
        }
    }
}
