//! Input parsing stages
//!
//! Turning an input string into tokens happens in two steps:
//! - [`resolve`] picks the delimiter and strips a `//<delim>\n` directive
//! - [`Directive::tokens`] splits the body on the delimiter or a newline,
//!   dropping empty pieces, with spans into the original input
//!
//! [`normalize`] is the rewrite-newlines-first form of the same split.

mod directive;
mod token;

pub use directive::{DEFAULT_DELIMITER, DIRECTIVE_MARKER, Directive, resolve};
pub use token::{Span, Token, normalize, tokenize};
