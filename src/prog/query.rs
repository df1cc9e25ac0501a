use super::Program;
use crate::lang::ast::BasicLine;

// Editor coordinates are 0-based, positions in the tree are 1-based.

impl Program {
    /// The line starting on 0-based physical line `line`.
    pub fn find_text_line(&self, line: usize) -> Option<&BasicLine> {
        let index = self.listing().physical(line.checked_add(1)?)?;
        self.lines().get(index)
    }

    pub fn find_basic_line(&self, label: u64) -> Option<&BasicLine> {
        let index = self.listing().label(label)?;
        self.lines().get(index)
    }

    /// The keyword on 0-based physical line `line` whose span
    /// `[column, column + length]` contains `character`. Only the top-level
    /// tokens of each statement are searched, keywords inside parentheses
    /// are not found.
    pub fn find_token_at(&self, line: usize, character: usize) -> Option<&'static str> {
        self.find_text_line(line)?
            .statements()
            .iter()
            .flat_map(|statement| &statement.tokens)
            .filter_map(|token| Some((token.position.column, token.keyword()?)))
            .find(|(start, keyword)| *start <= character && character <= start + keyword.len())
            .map(|(_, keyword)| keyword)
    }
}
