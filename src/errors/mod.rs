//! Error types for lexical analysis.
//!
//! The scanner degrades silently on most malformed input; the only
//! hard failure it can raise lives here, with the source position it
//! was detected at.

pub mod errors;
