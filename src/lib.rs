//! # C64 BASIC language core
//!
//! Lexing, parsing and position lookups for Commodore 64 BASIC source,
//! intended to sit underneath an editor's language server.
//!
//! Every call to [`parse`] lexes and parses the whole document and returns
//! a fresh, immutable [`Program`]. Lookups take 0-based editor coordinates.
//! ```text
//! 10 PRINT "HELLO"
//! 20 GOTO 10
//! ```
//! On the text above `program.find_token_at(1, 5)` is `Some("GOTO")` and
//! `program.find_basic_line(10)` is the first line.

pub mod config;
pub mod lang;
pub mod prog;
pub mod term;

pub use config::Config;
pub use lang::{Encoding, Error, Position};
pub use prog::{parse, parse_with, Program};
