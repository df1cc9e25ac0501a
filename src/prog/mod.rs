/*!
## Rust Program Module

A parsed program with its label and physical-line indices, and the
coordinate queries an editor asks of it.

*/

mod listing;
mod program;
mod query;

pub use listing::Listing;
pub use program::Program;

use crate::config::Config;
use crate::lang::{self, Error};

/// Parses `text` with the default [`Config`].
/// `source` names the document and is kept on the result.
pub fn parse(source: &str, text: &str) -> Result<Program, Error> {
    parse_with(source, text, &Config::default())
}

pub fn parse_with(source: &str, text: &str, config: &Config) -> Result<Program, Error> {
    let _span = tracing::debug_span!("parse", source).entered();
    let result = lang::lex(text, config.encoding).and_then(|lexemes| lang::parse(&lexemes));
    match result {
        Ok(lines) => {
            tracing::debug!(lines = lines.len(), "parsed");
            Ok(Program::new(source, lines))
        }
        Err(error) => {
            tracing::debug!(%error, "parse failed");
            Err(error)
        }
    }
}
