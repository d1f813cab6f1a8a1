//! Newline normalization and delimiter tokenization

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

/// Byte offsets of a token in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    /// Start byte offset
    pub start: usize,
    /// End byte offset
    pub end: usize,
}

impl Span {
    /// Create a new span
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The same span moved `offset` bytes to the right
    #[must_use]
    pub const fn shifted(self, offset: usize) -> Self {
        Self::new(self.start + offset, self.end + offset)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A non-empty piece of the body between two separators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The token text
    pub text: &'a str,
    /// Where the token sits
    pub span: Span,
}

impl<'a> Token<'a> {
    /// Create a new token
    #[must_use]
    pub const fn new(text: &'a str, span: Span) -> Self {
        Self { text, span }
    }
}

/// Replace every newline in `body` with `delimiter`
///
/// Splitting the result on `delimiter` yields the same tokens as [`tokenize`]
/// on the original body, but without offsets that map back to it. The two
/// only differ when the delimiter is made of digits and overlaps them across
/// a newline.
#[must_use]
pub fn normalize<'a>(body: &'a str, delimiter: &str) -> Cow<'a, str> {
    if body.contains('\n') {
        Cow::Owned(body.replace('\n', delimiter))
    } else {
        Cow::Borrowed(body)
    }
}

/// Split `body` on `delimiter` or a newline, dropping empty pieces
///
/// The delimiter is matched as a literal string; an empty delimiter only
/// splits on newlines. Spans are byte offsets into `body`.
#[must_use]
pub fn tokenize<'a>(body: &'a str, delimiter: &str) -> Vec<Token<'a>> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut at = 0;

    while let Some(rest) = body.get(at..).filter(|r| !r.is_empty()) {
        let separator = if rest.starts_with('\n') {
            1
        } else if !delimiter.is_empty() && rest.starts_with(delimiter) {
            delimiter.len()
        } else {
            at += rest.chars().next().map_or(1, char::len_utf8);
            continue;
        };
        push_piece(&mut tokens, body, start, at);
        at += separator;
        start = at;
    }
    push_piece(&mut tokens, body, start, body.len());

    log::trace!("tokenized {} byte(s) into {} token(s)", body.len(), tokens.len());
    tokens
}

fn push_piece<'a>(tokens: &mut Vec<Token<'a>>, source: &'a str, start: usize, end: usize) {
    if start < end {
        tokens.push(Token::new(&source[start..end], Span::new(start, end)));
    }
}
