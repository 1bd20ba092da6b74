//! Lexical analysis (tokenization)
//!
//! Converts PCL source text into a stream of tokens with span information.

use crate::error::ParseError;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Lexer state for tokenizing source code
pub struct Lexer {
    /// Characters of source code
    chars: Vec<char>,
    /// Current position in chars
    current: usize,
    /// Start position of current token
    start: usize,
}

impl Lexer {
    /// Create a new lexer for the given source code
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            current: 0,
            start: 0,
        }
    }

    /// Tokenize the whole input. The returned stream always ends with `Eof`.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    /// Scan the next token
    fn next_token(&mut self) -> Result<Token, ParseError> {
        self.skip_whitespace_and_comments();
        self.start = self.current;

        let ch = match self.advance() {
            Some(ch) => ch,
            None => return Ok(self.make_token(TokenKind::Eof)),
        };

        match ch {
            ';' => Ok(self.make_token(TokenKind::Semicolon)),
            '(' => Ok(self.make_token(TokenKind::LeftParen)),
            ')' => Ok(self.make_token(TokenKind::RightParen)),
            '{' => Ok(self.make_token(TokenKind::LeftBrace)),
            '}' => Ok(self.make_token(TokenKind::RightBrace)),
            '?' => Ok(self.make_token(TokenKind::Question)),
            '+' => Ok(self.make_token(TokenKind::Plus)),
            '-' => Ok(self.make_token(TokenKind::Minus)),
            '*' => Ok(self.make_token(TokenKind::Star)),
            '/' => Ok(self.make_token(TokenKind::Slash)),
            '%' => Ok(self.make_token(TokenKind::Percent)),
            '^' => Ok(self.make_token(TokenKind::Caret)),
            '=' => {
                if self.match_char('=') {
                    Ok(self.make_token(TokenKind::EqualEqual))
                } else {
                    Ok(self.make_token(TokenKind::Assign))
                }
            }
            '!' => {
                if self.match_char('=') {
                    Ok(self.make_token(TokenKind::NotEqual))
                } else {
                    Ok(self.make_token(TokenKind::Bang))
                }
            }
            '<' => {
                if self.match_char('=') {
                    Ok(self.make_token(TokenKind::LessEqual))
                } else {
                    Ok(self.make_token(TokenKind::Less))
                }
            }
            '>' => {
                if self.match_char('=') {
                    Ok(self.make_token(TokenKind::GreaterEqual))
                } else {
                    Ok(self.make_token(TokenKind::Greater))
                }
            }
            '&' => {
                if self.match_char('&') {
                    Ok(self.make_token(TokenKind::AndAnd))
                } else {
                    Err(ParseError::UnexpectedChar {
                        ch: '&',
                        span: self.token_span(),
                    })
                }
            }
            '|' => {
                if self.match_char('|') {
                    Ok(self.make_token(TokenKind::OrOr))
                } else {
                    Err(ParseError::UnexpectedChar {
                        ch: '|',
                        span: self.token_span(),
                    })
                }
            }
            '0'..='9' => self.number(),
            _ if ch.is_alphabetic() || ch == '_' => Ok(self.identifier()),
            _ => Err(ParseError::UnexpectedChar {
                ch,
                span: self.token_span(),
            }),
        }
    }

    /// Scan the rest of a number literal
    fn number(&mut self) -> Result<Token, ParseError> {
        while matches!(self.peek(), Some('0'..='9')) {
            self.advance();
        }
        let text = self.lexeme();
        // Range check happens here, not in the parser; the literal value
        // itself is re-parsed from the lexeme by the caller.
        if text.parse::<i64>().is_err() {
            return Err(ParseError::NumberOutOfRange {
                text,
                span: self.token_span(),
            });
        }
        Ok(self.make_token(TokenKind::Number))
    }

    /// Scan the rest of an identifier or keyword
    fn identifier(&mut self) -> Token {
        while matches!(self.peek(), Some(ch) if ch.is_alphanumeric() || ch == '_') {
            self.advance();
        }
        let kind = match self.lexeme().as_str() {
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "while" => TokenKind::While,
            "print" => TokenKind::Print,
            _ => TokenKind::Identifier,
        };
        self.make_token(kind)
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek() {
                Some(ch) if ch.is_whitespace() => {
                    self.advance();
                }
                Some('/') if self.peek_next() == Some('/') => {
                    while !matches!(self.peek(), None | Some('\n')) {
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.lexeme(), self.token_span())
    }

    fn lexeme(&self) -> String {
        self.chars[self.start..self.current].iter().collect()
    }

    fn token_span(&self) -> Span {
        Span::new(self.start, self.current)
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.get(self.current).copied();
        if ch.is_some() {
            self.current += 1;
        }
        ch
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.current).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.current + 1).copied()
    }
}
