//! Delimited string calculator
//!
//! # Examples
//!
//! ```
//! use stringcalc::{add, CalcError};
//!
//! assert_eq!(add("1\n2,3").unwrap(), 6);
//! assert_eq!(add("//;\n1;2").unwrap(), 3);
//!
//! let err = add("1,-2,3,-4").unwrap_err();
//! assert!(matches!(err, CalcError::NegativeNumbers(_)));
//! assert_eq!(err.to_string(), "Negative numbers not allowed: -2, -4");
//! ```

use crate::config::CalcConfig;
use crate::error::{CalcError, CalcResult, FormatError, NegativeNumbersError};
use crate::parser::{self, DEFAULT_DELIMITER, Token};

/// Sum the integers encoded in `input` using the default `,` delimiter
///
/// # Errors
///
/// See [`Calculator::add`].
pub fn add(input: &str) -> CalcResult<i64> {
    Calculator::new().add(input)
}

/// Parses and sums delimited integer strings
///
/// The default delimiter applies to inputs without a `//` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculator {
    default_delimiter: String,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator that splits on `,` by default
    #[must_use]
    pub fn new() -> Self {
        Self {
            default_delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }

    /// Create a calculator with a different default delimiter
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::EmptyDelimiter`] if `delimiter` is empty.
    pub fn with_default_delimiter(delimiter: impl Into<String>) -> Result<Self, FormatError> {
        let default_delimiter = delimiter.into();
        if default_delimiter.is_empty() {
            return Err(FormatError::EmptyDelimiter);
        }
        Ok(Self { default_delimiter })
    }

    /// Create a calculator from loaded configuration
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::EmptyDelimiter`] if the configured delimiter is empty.
    pub fn from_config(config: &CalcConfig) -> Result<Self, FormatError> {
        Self::with_default_delimiter(config.calculator.default_delimiter.as_str())
    }

    /// The delimiter used when the input has no directive
    #[must_use]
    pub fn default_delimiter(&self) -> &str {
        &self.default_delimiter
    }

    /// Sum the integers encoded in `input`
    ///
    /// Negatives are checked before anything is summed, so a failing input
    /// never yields a partial result.
    ///
    /// # Errors
    ///
    /// - [`CalcError::Format`] if the directive or a token is malformed
    /// - [`CalcError::NegativeNumbers`] listing every negative, in input order
    /// - [`CalcError::Overflow`] if the sum does not fit in an `i64`
    pub fn add(&self, input: &str) -> CalcResult<i64> {
        let numbers = self.parse(input)?;

        let negatives: Vec<i64> = numbers.iter().copied().filter(|n| *n < 0).collect();
        if !negatives.is_empty() {
            return Err(NegativeNumbersError::new(negatives).into());
        }

        numbers.iter().try_fold(0_i64, |acc, n| acc.checked_add(*n)).ok_or(CalcError::Overflow)
    }

    /// Parse `input` into its numbers without validating or summing them
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::Format`] if the directive or a token is malformed.
    pub fn parse(&self, input: &str) -> CalcResult<Vec<i64>> {
        if input.is_empty() {
            return Ok(Vec::new());
        }

        let directive = parser::resolve(input, &self.default_delimiter)?;
        let tokens = directive.tokens();
        log::debug!("delimiter {:?}: {} token(s)", directive.delimiter, tokens.len());

        let numbers = tokens.iter().map(parse_number).collect::<Result<Vec<_>, _>>()?;
        Ok(numbers)
    }
}

fn parse_number(token: &Token<'_>) -> Result<i64, FormatError> {
    let text = token.text.trim_ascii();
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(token));
    }
    text.parse::<i64>().map_err(|_| invalid(token))
}

fn invalid(token: &Token<'_>) -> FormatError {
    FormatError::InvalidNumber {
        token: token.text.to_string(),
        span: token.span,
    }
}
