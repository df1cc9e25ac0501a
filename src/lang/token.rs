/// Commodore 64 BASIC V2 tokens. `REM` is handled by the comment rule.
pub const KEYWORDS: &[&str] = &[
    "END", "FOR", "NEXT", "DATA", "INPUT#", "INPUT", "DIM", "READ", "LET", "GOTO", "GO", "RUN",
    "IF", "RESTORE", "GOSUB", "RETURN", "STOP", "ON", "WAIT", "LOAD", "SAVE", "VERIFY", "DEF",
    "POKE", "PRINT#", "PRINT", "CONT", "LIST", "CLR", "CMD", "SYS", "OPEN", "CLOSE", "GET#",
    "GET", "NEW", "TAB", "SPC", "TO", "FN", "THEN", "NOT", "STEP", "+", "-", "*", "/", "^",
    "AND", "OR", ">", "=", "<", "SGN", "INT", "ABS", "USR", "FRE", "POS", "SQR", "RND", "LOG",
    "EXP", "COS", "SIN", "TAN", "ATN", "PEEK", "LEN", "STR$", "VAL", "ASC", "CHR$", "LEFT$",
    "RIGHT$", "MID$",
];

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Whitespace(usize),
    Keyword(&'static str),
    Comment(String),
    String(String),
    Number(String),
    Ident(String),
    Trailing(char),
    Colon,
    Punct(char),
    Eol,
    Eof,
}

impl Token {
    /// Longest keyword that `s` starts with, ignoring case.
    pub fn keyword_prefix(s: &str) -> Option<&'static str> {
        KEYWORDS
            .iter()
            .filter(|kw| {
                s.get(..kw.len())
                    .map_or(false, |head| head.eq_ignore_ascii_case(kw))
            })
            .max_by_key(|kw| kw.len())
            .copied()
    }

    /// Canonical spelling when `s` is exactly a keyword.
    pub fn from_string(s: &str) -> Option<&'static str> {
        KEYWORDS
            .iter()
            .find(|kw| kw.eq_ignore_ascii_case(s))
            .copied()
    }

    /// Describes the token for "found" in parse errors.
    pub fn describe(&self) -> String {
        use Token::*;
        match self {
            Whitespace(_) => "whitespace".to_string(),
            Keyword(s) => format!("keyword {}", s),
            Comment(_) => "comment".to_string(),
            String(s) => format!("string \"{}\"", s),
            Number(s) => format!("number {}", s),
            Ident(s) => format!("identifier {}", s),
            Trailing(c) | Punct(c) => format!("'{}'", c),
            Colon => "':'".to_string(),
            Eol => "end of line".to_string(),
            Eof => "end of input".to_string(),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Whitespace(u) => write!(f, "{s:>w$}", s = "", w = *u),
            Keyword(s) => write!(f, "{}", s),
            Comment(s) => write!(f, "{}", s),
            String(s) => write!(f, "\"{}\"", s.replace('"', "\\\"")),
            Number(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            Trailing(c) | Punct(c) => write!(f, "{}", c),
            Colon => write!(f, ":"),
            Eol => writeln!(f),
            Eof => Ok(()),
        }
    }
}
