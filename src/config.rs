use crate::lang::Encoding;

/// Options for a parse call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Unit for column numbers in positions and queries.
    pub encoding: Encoding,
}

impl Config {
    pub fn with_encoding(mut self, encoding: Encoding) -> Config {
        self.encoding = encoding;
        self
    }
}
