//! Lexical front end for a small C-like scripting language.
//!
//! Source text is supplied as an in-memory string and converted into a
//! flat sequence of classified tokens annotated with line/column
//! positions. There is no parser, type checker, or code generator here;
//! token production is the entire system.

#![allow(clippy::module_inception)]

pub mod errors;
pub mod lexer;
