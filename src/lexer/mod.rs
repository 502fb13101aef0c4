//! Lexical analysis module.
//!
//! This module contains the lexer that converts source code into a
//! stream of tokens. It handles:
//!
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token line/column tracking
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
