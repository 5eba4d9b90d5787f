use crate::error::{GrammarError, SourceLocation};

use super::token::{Keyword, SourceToken, Token};

const SYMBOLS: &str = "(){}[]<>,:;=*";
const TAB_WIDTH: usize = 8;

/// Hand-written lexer with one token of look-behind, used by the parser to
/// peek without consuming.
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
    saved_token: Option<SourceToken>,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            saved_token: None,
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }

    fn advance_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.pos += 1;
        match c {
            '\n' => {
                self.line += 1;
                self.column = 1;
            }
            '\t' => self.column += TAB_WIDTH,
            _ => self.column += 1,
        }
        Some(c)
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek_char() {
                Some(c) if c.is_whitespace() => {
                    self.advance_char();
                }
                Some('#') => {
                    while let Some(c) = self.peek_char() {
                        if c == '\n' {
                            break;
                        }
                        self.advance_char();
                    }
                }
                _ => break,
            }
        }
    }

    pub fn unread_token(&mut self, token: SourceToken) {
        self.saved_token = Some(token);
    }

    pub fn read_token(&mut self) -> Result<SourceToken, GrammarError> {
        if let Some(t) = self.saved_token.take() {
            return Ok(t);
        }

        self.skip_whitespace_and_comments();
        let location = self.location();

        let Some(c) = self.peek_char() else {
            return Ok(SourceToken {
                token: Token::Stop,
                location,
            });
        };

        if SYMBOLS.contains(c) {
            self.advance_char();
            return Ok(SourceToken {
                token: Token::Symbol(c),
                location,
            });
        }

        if c == '"' {
            return self.read_string(location);
        }

        if c.is_ascii_digit() || c == '+' || c == '-' || c == '.' {
            return self.read_number(location);
        }

        if c.is_alphabetic() || c == '_' {
            return self.read_identifier_or_keyword(location);
        }

        Err(GrammarError::new(location, format!("invalid character '{c}'")))
    }

    fn read_string(&mut self, location: SourceLocation) -> Result<SourceToken, GrammarError> {
        self.advance_char(); // opening quote
        let mut s = String::new();
        loop {
            match self.advance_char() {
                Some('"') => break,
                Some(c) => s.push(c),
                None => return Err(GrammarError::new(location, "unterminated string literal")),
            }
        }
        Ok(SourceToken {
            token: Token::LiteralString(s),
            location,
        })
    }

    fn read_number(&mut self, location: SourceLocation) -> Result<SourceToken, GrammarError> {
        let mut s = String::new();
        if matches!(self.peek_char(), Some('+') | Some('-')) {
            s.push(self.advance_char().unwrap());
        }
        let mut seen_digit = false;
        while matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
            seen_digit = true;
            s.push(self.advance_char().unwrap());
        }
        if self.peek_char() == Some('.') {
            s.push(self.advance_char().unwrap());
            while matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
                seen_digit = true;
                s.push(self.advance_char().unwrap());
            }
        }
        if matches!(self.peek_char(), Some('e') | Some('E')) {
            let mut exp = String::new();
            exp.push(self.advance_char().unwrap());
            if matches!(self.peek_char(), Some('+') | Some('-')) {
                exp.push(self.advance_char().unwrap());
            }
            if matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
                while matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
                    exp.push(self.advance_char().unwrap());
                }
                s.push_str(&exp);
            }
        }
        if !seen_digit {
            return Err(GrammarError::new(location, format!("invalid number '{s}'")));
        }
        let value: f32 = s
            .parse()
            .map_err(|_| GrammarError::new(location, format!("invalid number '{s}'")))?;
        Ok(SourceToken {
            token: Token::LiteralNumber(value),
            location,
        })
    }

    fn read_identifier_or_keyword(&mut self, location: SourceLocation) -> Result<SourceToken, GrammarError> {
        let mut s = String::new();
        while matches!(self.peek_char(), Some(c) if c.is_alphanumeric() || c == '_') {
            s.push(self.advance_char().unwrap());
        }
        let token = match Keyword::from_str(&s) {
            Some(kw) => Token::Keyword(kw),
            None => Token::Identifier(s),
        };
        Ok(SourceToken { token, location })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexes_keywords_and_identifiers() {
        let mut lexer = Lexer::new("material sky_material");
        let t1 = lexer.read_token().unwrap();
        assert_eq!(t1.token, Token::Keyword(Keyword::Material));
        let t2 = lexer.read_token().unwrap();
        assert_eq!(t2.token, Token::Identifier("sky_material".to_string()));
    }

    #[test]
    fn lexes_negative_numbers() {
        let mut lexer = Lexer::new("-4.5");
        let t = lexer.read_token().unwrap();
        assert_eq!(t.token, Token::LiteralNumber(-4.5));
    }

    #[test]
    fn tab_advances_column_by_eight() {
        let mut lexer = Lexer::new("\tfloat");
        let t = lexer.read_token().unwrap();
        assert_eq!(t.location, SourceLocation::new(1, 9));
    }

    #[test]
    fn unread_token_replays_once() {
        let mut lexer = Lexer::new("float");
        let t = lexer.read_token().unwrap();
        lexer.unread_token(t.clone());
        let replayed = lexer.read_token().unwrap();
        assert_eq!(replayed, t);
    }

    #[test]
    fn comment_is_skipped() {
        let mut lexer = Lexer::new("# a comment\nfloat");
        let t = lexer.read_token().unwrap();
        assert_eq!(t.token, Token::Keyword(Keyword::Float));
        assert_eq!(t.location, SourceLocation::new(2, 1));
    }
}
