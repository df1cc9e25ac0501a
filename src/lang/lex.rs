use super::{token::*, Encoding, Error, Position};

/// A token with the position of its first character and its width in columns.
#[derive(Debug, PartialEq, Clone)]
pub struct Lexeme {
    pub token: Token,
    pub position: Position,
    pub width: usize,
}

/// Splits `s` into lexemes. Whitespace is dropped and the last lexeme is
/// always [`Token::Eof`].
pub fn lex(s: &str, encoding: Encoding) -> Result<Vec<Lexeme>, Error> {
    BasicLexer::new(s, encoding).collect()
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_basic_newline(c: char) -> bool {
    c == '\n' || c == '\r'
}

fn is_basic_punct(c: char) -> bool {
    "-[]!@#%^&*()+_={}|'<>.?/".contains(c)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

type Match = Option<(Token, usize)>;

struct BasicLexer<'a> {
    src: &'a str,
    offset: usize,
    position: Position,
    encoding: Encoding,
    done: bool,
}

impl<'a> BasicLexer<'a> {
    fn new(src: &'a str, encoding: Encoding) -> BasicLexer<'a> {
        BasicLexer {
            src,
            offset: 0,
            position: Position::default(),
            encoding,
            done: false,
        }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.offset..]
    }

    /// Tries each rule in order and returns the first match.
    fn rule(&self) -> Result<Match, Error> {
        if let Some(m) = self.keyword() {
            return Ok(Some(m));
        }
        if let Some(m) = self.comment() {
            return Ok(Some(m));
        }
        if let Some(m) = self.string()? {
            return Ok(Some(m));
        }
        Ok(self
            .number()
            .or_else(|| self.ident())
            .or_else(|| self.single(|c| c == ',' || c == ';', Token::Trailing))
            .or_else(|| self.single(|c| c == ':', |_| Token::Colon))
            .or_else(|| self.single(is_basic_punct, Token::Punct))
            .or_else(|| self.whitespace())
            .or_else(|| self.eol()))
    }

    fn keyword(&self) -> Match {
        Token::keyword_prefix(self.rest()).map(|kw| (Token::Keyword(kw), kw.len()))
    }

    fn comment(&self) -> Match {
        let rest = self.rest();
        if !rest.get(..3)?.eq_ignore_ascii_case("REM") {
            return None;
        }
        let len = rest.find(is_basic_newline).unwrap_or_else(|| rest.len());
        Some((Token::Comment(rest[..len].to_string()), len))
    }

    fn string(&self) -> Result<Match, Error> {
        let rest = self.rest();
        if !rest.starts_with('"') {
            return Ok(None);
        }
        let mut s = String::new();
        let mut chars = rest.char_indices().skip(1).peekable();
        while let Some((index, ch)) = chars.next() {
            match ch {
                '"' => return Ok(Some((Token::String(s), index + 1))),
                '\\' if matches!(chars.peek(), Some((_, '"'))) => {
                    chars.next();
                    s.push('"');
                }
                '\n' | '\r' => break,
                _ => s.push(ch),
            }
        }
        Err(error!(Lex, self.position; "unterminated string"))
    }

    fn number(&self) -> Match {
        let rest = self.rest();
        let bytes = rest.as_bytes();
        let sign = match bytes.first() {
            Some(b'+') | Some(b'-') => 1,
            _ => 0,
        };
        let mut len = sign + count_digits(&bytes[sign..]);
        if bytes.get(len) == Some(&b'.') {
            let fraction = count_digits(&bytes[len + 1..]);
            if fraction > 0 {
                len += 1 + fraction;
            }
        }
        if len == sign {
            return None;
        }
        Some((Token::Number(rest[..len].to_string()), len))
    }

    fn ident(&self) -> Match {
        let rest = self.rest();
        let letters = rest.bytes().take_while(u8::is_ascii_alphabetic).count();
        if letters == 0 {
            return None;
        }
        let len = match rest.as_bytes().get(letters) {
            Some(b'$') | Some(b'%') => letters + 1,
            _ => letters,
        };
        Some((Token::Ident(rest[..len].to_string()), len))
    }

    fn single(&self, accept: impl Fn(char) -> bool, token: impl Fn(char) -> Token) -> Match {
        let ch = self.rest().chars().next()?;
        if accept(ch) {
            Some((token(ch), ch.len_utf8()))
        } else {
            None
        }
    }

    fn whitespace(&self) -> Match {
        let len = self
            .rest()
            .find(|c: char| !is_basic_whitespace(c))
            .unwrap_or_else(|| self.rest().len());
        if len == 0 {
            return None;
        }
        Some((Token::Whitespace(len), len))
    }

    fn eol(&self) -> Match {
        let len = self
            .rest()
            .find(|c: char| !is_basic_newline(c))
            .unwrap_or_else(|| self.rest().len());
        if len == 0 {
            return None;
        }
        Some((Token::Eol, len))
    }

    fn advance(&mut self, token: &Token, len: usize) -> usize {
        let text = &self.src[self.offset..self.offset + len];
        self.offset += len;
        let width = self.encoding.width(text);
        if let Token::Eol = token {
            let mut chars = text.chars().peekable();
            while let Some(ch) = chars.next() {
                if ch == '\n' || chars.peek() != Some(&'\n') {
                    self.position.line += 1;
                }
            }
            self.position.column = 1;
        } else {
            self.position.column += width;
        }
        width
    }
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = Result<Lexeme, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let position = self.position;
            let ch = match self.rest().chars().next() {
                Some(ch) => ch,
                None => {
                    self.done = true;
                    return Some(Ok(Lexeme {
                        token: Token::Eof,
                        position,
                        width: 0,
                    }));
                }
            };
            let (token, len) = match self.rule() {
                Ok(Some(m)) => m,
                Ok(None) => {
                    self.done = true;
                    return Some(Err(
                        error!(Lex, position; format!("unexpected character '{}'", ch)),
                    ));
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };
            let width = self.advance(&token, len);
            if let Token::Whitespace(_) = token {
                continue;
            }
            return Some(Ok(Lexeme {
                token,
                position,
                width,
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(s: &str) -> Vec<Token> {
        lex(s, Encoding::Utf16)
            .unwrap()
            .into_iter()
            .map(|l| l.token)
            .collect()
    }

    #[test]
    fn test_print_string() {
        assert_eq!(
            tokens("10 PRINT \"HELLO\""),
            vec![
                Token::Number("10".to_string()),
                Token::Keyword("PRINT"),
                Token::String("HELLO".to_string()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_rules_are_ordered() {
        // The keyword rule claims the sign before the number rule sees it.
        assert_eq!(
            tokens("-5"),
            vec![
                Token::Keyword("-"),
                Token::Number("5".to_string()),
                Token::Eof
            ]
        );
        // Identifiers run greedily once started.
        assert_eq!(
            tokens("xprint"),
            vec![Token::Ident("xprint".to_string()), Token::Eof]
        );
        assert_eq!(
            tokens("printx"),
            vec![
                Token::Keyword("PRINT"),
                Token::Ident("x".to_string()),
                Token::Eof
            ]
        );
    }

    #[test]
    fn test_number_forms() {
        assert_eq!(
            tokens(".5 1.25 7."),
            vec![
                Token::Number(".5".to_string()),
                Token::Number("1.25".to_string()),
                Token::Number("7".to_string()),
                Token::Punct('.'),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_remark_eats_line() {
        assert_eq!(
            tokens("10 rem 20 \"x:y\r\n20 END"),
            vec![
                Token::Number("10".to_string()),
                Token::Comment("rem 20 \"x:y".to_string()),
                Token::Eol,
                Token::Number("20".to_string()),
                Token::Keyword("END"),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_string_escape() {
        assert_eq!(
            tokens(r#""say \"hi\"""#),
            vec![Token::String("say \"hi\"".to_string()), Token::Eof]
        );
    }

    #[test]
    fn test_unterminated_string() {
        let e = lex("10 PRINT \"OOPS\n20 END", Encoding::Utf16).unwrap_err();
        assert!(e.is_lex());
        assert_eq!(e.position(), Position::new(1, 10));
    }

    #[test]
    fn test_unexpected_character() {
        let e = lex("10 X = 1\n20 Y = ~2", Encoding::Utf16).unwrap_err();
        assert_eq!(e.position(), Position::new(2, 8));
    }

    #[test]
    fn test_positions() {
        let v = lex("10 A$=\"x\"\r\n\n 20 ?", Encoding::Utf16).unwrap();
        let at: Vec<(usize, usize, usize)> = v
            .iter()
            .map(|l| (l.position.line, l.position.column, l.width))
            .collect();
        assert_eq!(
            at,
            vec![
                (1, 1, 2),
                (1, 4, 2),
                (1, 6, 1),
                (1, 7, 3),
                (1, 10, 3),
                (3, 2, 2),
                (3, 5, 1),
                (3, 6, 0),
            ]
        );
    }

    #[test]
    fn test_lone_carriage_returns() {
        let v = lex("1 END\r2 END\r\r3 END", Encoding::Utf16).unwrap();
        let lines: Vec<usize> = v
            .iter()
            .filter(|l| matches!(l.token, Token::Number(_)))
            .map(|l| l.position.line)
            .collect();
        assert_eq!(lines, vec![1, 2, 4]);
    }

    #[test]
    fn test_columns_follow_encoding() {
        let src = "10 PRINT \"𝄞\";X";
        let utf16 = lex(src, Encoding::Utf16).unwrap();
        let utf32 = lex(src, Encoding::Utf32).unwrap();
        let utf8 = lex(src, Encoding::Utf8).unwrap();
        assert_eq!(utf16[4].token, Token::Ident("X".to_string()));
        assert_eq!(utf16[4].position.column, 15);
        assert_eq!(utf32[4].position.column, 14);
        assert_eq!(utf8[4].position.column, 17);
    }
}
