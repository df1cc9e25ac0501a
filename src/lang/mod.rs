/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of Commodore 64 BASIC
source into a position-annotated syntax tree.

*/

#[macro_use]
mod error;
mod ident;
mod lex;
mod parse;

pub mod ast;
pub mod token;

pub use error::Error;
pub use ident::Ident;
pub use lex::{lex, Lexeme};
pub use parse::parse;

/// 1-based location of a token in the source text.
/// Columns are counted in code units of the [`Encoding`] used to lex.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Position {
        Position { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Unit in which columns are counted.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Encoding {
    Utf8,
    Utf16,
    Utf32,
}

impl Encoding {
    pub fn width(self, s: &str) -> usize {
        match self {
            Encoding::Utf8 => s.len(),
            Encoding::Utf16 => s.encode_utf16().count(),
            Encoding::Utf32 => s.chars().count(),
        }
    }
}

impl Default for Encoding {
    fn default() -> Self {
        Encoding::Utf16
    }
}

impl std::str::FromStr for Encoding {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            "utf-16" | "utf16" => Ok(Encoding::Utf16),
            "utf-32" | "utf32" => Ok(Encoding::Utf32),
            _ => Err(format!("unknown position encoding '{}'", s)),
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Encoding::Utf8 => write!(f, "utf-8"),
            Encoding::Utf16 => write!(f, "utf-16"),
            Encoding::Utf32 => write!(f, "utf-32"),
        }
    }
}
