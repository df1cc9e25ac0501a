use super::{ast::*, lex::Lexeme, token::*, Error, Ident, Position};

type Result<T> = std::result::Result<T, Error>;

static EOF: Token = Token::Eof;

/// Builds program lines from the output of [`lex`](super::lex).
/// Running out of lexemes is the same as reaching [`Token::Eof`].
pub fn parse(lexemes: &[Lexeme]) -> Result<Vec<BasicLine>> {
    Parser::parse(lexemes)
}

struct Parser<'a> {
    lexemes: &'a [Lexeme],
    index: usize,
    end: Position,
}

impl<'a> Parser<'a> {
    fn parse(lexemes: &'a [Lexeme]) -> Result<Vec<BasicLine>> {
        let end = match lexemes.last() {
            Some(l) => Position::new(l.position.line, l.position.column + l.width),
            None => Position::default(),
        };
        let mut parse = Parser {
            lexemes,
            index: 0,
            end,
        };
        let mut lines: Vec<BasicLine> = vec![];
        loop {
            match parse.token(0) {
                Token::Eof => return Ok(lines),
                Token::Eol => parse.next(),
                _ => lines.push(parse.line()?),
            }
        }
    }

    fn token(&self, n: usize) -> &'a Token {
        self.lexemes
            .get(self.index + n)
            .map_or(&EOF, |l| &l.token)
    }

    fn position(&self, n: usize) -> Position {
        self.lexemes
            .get(self.index + n)
            .map_or(self.end, |l| l.position)
    }

    fn next(&mut self) {
        if self.index < self.lexemes.len() {
            self.index += 1;
        }
    }

    fn error(&self, expected: &str) -> Error {
        error!(Parse, self.position(0); expected, self.token(0).describe())
    }

    fn starts_statement(&self, n: usize) -> bool {
        matches!(
            self.token(n),
            Token::Keyword(_)
                | Token::Number(_)
                | Token::Ident(_)
                | Token::String(_)
                | Token::Punct('(')
        )
    }

    fn line(&mut self) -> Result<BasicLine> {
        let position = self.position(0);
        let label = self.label()?;
        let body = match self.token(0) {
            Token::Comment(s) => {
                self.next();
                Body::Comment(s.clone())
            }
            _ => {
                let mut statements = vec![self.statement()?];
                while let Token::Colon = self.token(0) {
                    self.next();
                    statements.push(self.statement()?);
                }
                Body::Statements(statements)
            }
        };
        match self.token(0) {
            Token::Eol => self.next(),
            Token::Eof => {}
            _ => return Err(self.error("':' or end of line")),
        }
        Ok(BasicLine {
            label,
            position,
            body,
        })
    }

    fn label(&mut self) -> Result<u64> {
        if let Token::Number(s) = self.token(0) {
            if s.bytes().all(|b| b.is_ascii_digit()) {
                if let Ok(label) = s.parse::<u64>() {
                    self.next();
                    return Ok(label);
                }
            }
        }
        Err(self.error("line label"))
    }

    fn statement(&mut self) -> Result<Statement> {
        let position = self.position(0);
        let mut tokens: Vec<StatementToken> = vec![];
        while self.starts_statement(0) {
            tokens.push(self.statement_token()?);
        }
        if tokens.is_empty() {
            return Err(self.error("statement"));
        }
        Ok(Statement { position, tokens })
    }

    fn statement_token(&mut self) -> Result<StatementToken> {
        let position = self.position(0);
        let kind = match self.token(0) {
            Token::Keyword(s) => {
                self.next();
                TokenKind::Keyword(*s)
            }
            _ => TokenKind::Value(self.value()?),
        };
        let trailing = match self.token(0) {
            Token::Trailing(c) => {
                self.next();
                Some(*c)
            }
            _ => None,
        };
        Ok(StatementToken {
            position,
            kind,
            trailing,
        })
    }

    fn value(&mut self) -> Result<Value> {
        let value = match self.token(0) {
            Token::Number(s) => Value::Number(s.parse().map_err(|_| self.error("number"))?),
            Token::Ident(s) => Value::Variable(Ident::new(s)),
            Token::String(s) => Value::String(s.clone()),
            Token::Punct('(') => {
                // Look past the parenthesis so "()" fails at the ")".
                if !self.starts_statement(1) {
                    self.next();
                    return Err(self.error("statement"));
                }
                self.next();
                let statement = self.statement()?;
                if self.token(0) != &Token::Punct(')') {
                    return Err(self.error("')'"));
                }
                Value::Subexpression(statement)
            }
            _ => return Err(self.error("value")),
        };
        self.next();
        Ok(value)
    }
}
