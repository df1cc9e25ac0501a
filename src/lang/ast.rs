use super::{Ident, Position};

/// One program line: a label followed by a comment or by statements.
#[derive(Debug, PartialEq, Clone)]
pub struct BasicLine {
    pub label: u64,
    pub position: Position,
    pub body: Body,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Body {
    Comment(String),
    Statements(Vec<Statement>),
}

#[derive(Debug, PartialEq, Clone)]
pub struct Statement {
    pub position: Position,
    pub tokens: Vec<StatementToken>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct StatementToken {
    pub position: Position,
    pub kind: TokenKind,
    pub trailing: Option<char>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum TokenKind {
    Keyword(&'static str),
    Value(Value),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    Number(f64),
    Variable(Ident),
    String(String),
    Subexpression(Statement),
}

impl BasicLine {
    pub fn comment(&self) -> Option<&str> {
        match &self.body {
            Body::Comment(s) => Some(s.as_str()),
            Body::Statements(_) => None,
        }
    }

    pub fn statements(&self) -> &[Statement] {
        match &self.body {
            Body::Comment(_) => &[],
            Body::Statements(v) => v.as_slice(),
        }
    }
}

impl StatementToken {
    pub fn keyword(&self) -> Option<&'static str> {
        match self.kind {
            TokenKind::Keyword(s) => Some(s),
            TokenKind::Value(_) => None,
        }
    }

    pub fn value(&self) -> Option<&Value> {
        match &self.kind {
            TokenKind::Keyword(_) => None,
            TokenKind::Value(v) => Some(v),
        }
    }
}

// Canonical re-listing. Spacing is normalized, keywords are upper case.

impl std::fmt::Display for BasicLine {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label)?;
        match &self.body {
            Body::Comment(s) => write!(f, " {}", s),
            Body::Statements(v) => {
                for (index, statement) in v.iter().enumerate() {
                    if index > 0 {
                        write!(f, " :")?;
                    }
                    write!(f, " {}", statement)?;
                }
                Ok(())
            }
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (index, token) in self.tokens.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for StatementToken {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.kind {
            TokenKind::Keyword(s) => write!(f, "{}", s)?,
            TokenKind::Value(v) => write!(f, "{}", v)?,
        }
        if let Some(c) = self.trailing {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Value::*;
        match self {
            Number(n) => write!(f, "{}", n),
            Variable(i) => write!(f, "{}", i),
            String(s) => write!(f, "\"{}\"", s.replace('"', "\\\"")),
            Subexpression(s) => write!(f, "({})", s),
        }
    }
}
