use super::Position;
use thiserror::Error;

/// Failure of a single parse call. No partial tree is produced.
#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum Error {
    /// No lexical rule matched at `position`.
    #[error("{position}: {detail}")]
    Lex { position: Position, detail: String },

    /// The token at `position` does not satisfy any grammar alternative.
    #[error("{position}: expected {expected}, found {found}")]
    Parse {
        position: Position,
        expected: String,
        found: String,
    },
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    (Lex, $pos:expr; $detail:expr) => {
        $crate::lang::Error::Lex {
            position: $pos,
            detail: ($detail).to_string(),
        }
    };
    (Parse, $pos:expr; $expected:expr, $found:expr) => {
        $crate::lang::Error::Parse {
            position: $pos,
            expected: ($expected).to_string(),
            found: ($found).to_string(),
        }
    };
}

impl Error {
    pub fn position(&self) -> Position {
        match self {
            Error::Lex { position, .. } | Error::Parse { position, .. } => *position,
        }
    }

    pub fn is_lex(&self) -> bool {
        matches!(self, Error::Lex { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = error!(Lex, Position::new(3, 7); "unexpected character '$'");
        assert_eq!(e.to_string(), "3:7: unexpected character '$'");
        let e = error!(Parse, Position::new(1, 1); "line label", "identifier ABC");
        assert_eq!(
            e.to_string(),
            "1:1: expected line label, found identifier ABC"
        );
        assert!(e.is_parse());
        assert_eq!(e.position(), Position::new(1, 1));
    }
}
