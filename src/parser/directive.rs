//! Custom delimiter directive
//!
//! An input may start with `//<delimiter>\n`. Everything between the marker
//! and the first newline is the delimiter, taken literally.

use crate::error::FormatError;

use super::token::{Token, tokenize};

/// Marker that opens a delimiter directive
pub const DIRECTIVE_MARKER: &str = "//";

/// Delimiter used when the input carries no directive
pub const DEFAULT_DELIMITER: &str = ",";

/// The delimiter in force for one input, and the body it applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'a> {
    /// Active delimiter (never empty)
    pub delimiter: &'a str,
    /// Text left to parse once the directive is stripped
    pub body: &'a str,
    /// Byte offset of `body` in the input (0 without a directive)
    pub body_offset: usize,
}

impl<'a> Directive<'a> {
    /// Tokenize the body, with spans pointing into the original input
    #[must_use]
    pub fn tokens(&self) -> Vec<Token<'a>> {
        let mut tokens = tokenize(self.body, self.delimiter);
        for token in &mut tokens {
            token.span = token.span.shifted(self.body_offset);
        }
        tokens
    }
}

/// Resolve the delimiter for `input`, falling back to `default`
///
/// # Errors
///
/// - [`FormatError::UnterminatedDirective`] if `//` is not followed by a newline
/// - [`FormatError::EmptyDelimiter`] if the directive is `//\n`
pub fn resolve<'a>(input: &'a str, default: &'a str) -> Result<Directive<'a>, FormatError> {
    let Some(rest) = input.strip_prefix(DIRECTIVE_MARKER) else {
        return Ok(Directive {
            delimiter: default,
            body: input,
            body_offset: 0,
        });
    };

    let (delimiter, body) = rest.split_once('\n').ok_or(FormatError::UnterminatedDirective)?;
    if delimiter.is_empty() {
        return Err(FormatError::EmptyDelimiter);
    }

    log::debug!("custom delimiter {delimiter:?}");
    Ok(Directive {
        delimiter,
        body,
        body_offset: input.len() - body.len(),
    })
}
