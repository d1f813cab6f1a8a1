//! stringcalc - Sum delimited integer strings
//!
//! Inputs are lists of integers separated by `,` or newlines, optionally
//! prefixed with a `//<delimiter>\n` directive choosing another delimiter.
//! Negative numbers are rejected, and every one of them is reported.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod calculator;
pub mod config;
pub mod error;
pub mod output;
pub mod parser;

pub use calculator::{Calculator, add};
pub use error::{CalcError, CalcResult, FormatError, NegativeNumbersError};
