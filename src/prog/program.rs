use super::Listing;
use crate::lang::ast::BasicLine;

/// An immutable parse result. Lines are kept in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    source: String,
    lines: Vec<BasicLine>,
    listing: Listing,
}

impl Program {
    pub fn new(source: &str, lines: Vec<BasicLine>) -> Program {
        let listing = Listing::build(&lines);
        Program {
            source: source.to_string(),
            lines,
            listing,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn lines(&self) -> &[BasicLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    /// Lines in ascending label order. A duplicated label yields its last line.
    pub fn labels(&self) -> impl Iterator<Item = (u64, &BasicLine)> + '_ {
        self.listing
            .labels()
            .map(move |(label, index)| (*label, &self.lines[*index]))
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
