use std::fmt;

use tracing::info;

use crate::error::SyntaxError;
use crate::span::{Position, Span};

/// The fixed vocabulary. Keywords carry no payload beyond their spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    // Ключевые слова
    If,      // jodi
    Else,    // naile
    While,   // jotokhon
    Is,      // a
    Store,   // rakho
    Show,    // dekha
    Plus,    // er_sathe
    Times,   // gun
    Divide,  // vag
    Equal,   // shoman
    Greater, // beshi
    Less,    // kom
    // Разделители
    Semi,   // ;
    LParen, // (
    RParen, // )
    LBrace, // {
    RBrace, // }
    // Литералы и имена
    Str(String),
    Number(i64),
    Name(String),
    /// Never produced by [`tokenize`]; the parser hands it out past the end.
    Eof,
}

/// Payload-free tag of a [`Token`], used for dispatch and in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    If,
    Else,
    While,
    Is,
    Store,
    Show,
    Plus,
    Times,
    Divide,
    Equal,
    Greater,
    Less,
    Semi,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Str,
    Number,
    Name,
    Eof,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::While => "WHILE",
            Self::Is => "IS",
            Self::Store => "STORE",
            Self::Show => "SHOW",
            Self::Plus => "PLUS",
            Self::Times => "TIMES",
            Self::Divide => "DIVIDE",
            Self::Equal => "EQUAL",
            Self::Greater => "GREATER",
            Self::Less => "LESS",
            Self::Semi => "SEMI",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::Str => "STRING",
            Self::Number => "NUMBER",
            Self::Name => "NAME",
            Self::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::If => TokenKind::If,
            Self::Else => TokenKind::Else,
            Self::While => TokenKind::While,
            Self::Is => TokenKind::Is,
            Self::Store => TokenKind::Store,
            Self::Show => TokenKind::Show,
            Self::Plus => TokenKind::Plus,
            Self::Times => TokenKind::Times,
            Self::Divide => TokenKind::Divide,
            Self::Equal => TokenKind::Equal,
            Self::Greater => TokenKind::Greater,
            Self::Less => TokenKind::Less,
            Self::Semi => TokenKind::Semi,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::LBrace => TokenKind::LBrace,
            Self::RBrace => TokenKind::RBrace,
            Self::Str(_) => TokenKind::Str,
            Self::Number(_) => TokenKind::Number,
            Self::Name(_) => TokenKind::Name,
            Self::Eof => TokenKind::Eof,
        }
    }

    /// The token's payload as text: the keyword spelling, the structural
    /// character, the literal or the name.
    pub fn lexeme(&self) -> String {
        let fixed = match self {
            Self::If => "jodi",
            Self::Else => "naile",
            Self::While => "jotokhon",
            Self::Is => "a",
            Self::Store => "rakho",
            Self::Show => "dekha",
            Self::Plus => "er_sathe",
            Self::Times => "gun",
            Self::Divide => "vag",
            Self::Equal => "shoman",
            Self::Greater => "beshi",
            Self::Less => "kom",
            Self::Semi => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Eof => "",
            Self::Str(text) | Self::Name(text) => return text.clone(),
            Self::Number(n) => return n.to_string(),
        };
        fixed.to_string()
    }
}

/// A token together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
}

impl SpannedToken {
    pub fn kind(&self) -> TokenKind {
        self.token.kind()
    }
}

impl fmt::Display for SpannedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<8} {:?}", self.kind().name(), self.token.lexeme())
    }
}

/// Classifies one delimited word. Keywords win over every other shape.
pub fn classify(word: &str, span: Span) -> Result<Token, SyntaxError> {
    let token = match word {
        "jodi" => Token::If,
        "naile" => Token::Else,
        "jotokhon" => Token::While,
        "a" => Token::Is,
        "rakho" => Token::Store,
        "dekha" => Token::Show,
        "er_sathe" => Token::Plus,
        "gun" => Token::Times,
        "vag" => Token::Divide,
        "shoman" => Token::Equal,
        "beshi" => Token::Greater,
        "kom" => Token::Less,
        _ if is_all_digits(word) => {
            let value = word.parse().map_err(|_| SyntaxError::NumberTooLarge {
                digits: word.to_string(),
                span,
            })?;
            Token::Number(value)
        }
        _ if word.starts_with('"') => Token::Str(word.trim_matches('"').to_string()),
        _ => Token::Name(word.to_string()),
    };
    Ok(token)
}

fn is_all_digits(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit())
}

/// Turns source text into tokens. No EOF token is appended.
pub fn tokenize(source: &str) -> Result<Vec<SpannedToken>, SyntaxError> {
    let mut lexer = Lexer::new();

    for ch in source.chars() {
        lexer.step(ch)?;
    }
    lexer.flush()?;

    info!(tokens = lexer.tokens.len(), "tokenized source");
    Ok(lexer.tokens)
}

struct Lexer {
    tokens: Vec<SpannedToken>,
    buffer: String,
    /// Where the pending buffer began.
    buffer_start: Position,
    /// Position of the character being looked at.
    position: Position,
}

impl Lexer {
    fn new() -> Self {
        Self {
            tokens: Vec::new(),
            buffer: String::new(),
            buffer_start: Position::default(),
            position: Position::default(),
        }
    }

    fn step(&mut self, ch: char) -> Result<(), SyntaxError> {
        match ch {
            ';' | '(' | ')' | '{' | '}' => {
                self.flush()?;
                let token = match ch {
                    ';' => Token::Semi,
                    '(' => Token::LParen,
                    ')' => Token::RParen,
                    '{' => Token::LBrace,
                    _ => Token::RBrace,
                };
                let span = Span::between(self.position, self.position.advance(ch));
                self.tokens.push(SpannedToken { token, span });
            }
            c if c.is_whitespace() => {
                self.flush()?;
            }
            c if c.is_ascii_digit() => {
                // "ab1" is two tokens, NAME and NUMBER
                if !self.buffer.is_empty() && !is_all_digits(&self.buffer) {
                    self.flush()?;
                }
                self.extend(c);
            }
            // A quote turns whatever is pending into a STRING; it never
            // opens a literal, so `"yes"` yields one token at the second quote
            '"' => {
                if !self.buffer.is_empty() {
                    let text = std::mem::take(&mut self.buffer);
                    let span = Span::between(self.buffer_start, self.position);
                    self.tokens.push(SpannedToken {
                        token: Token::Str(text),
                        span,
                    });
                }
            }
            c => self.extend(c),
        }

        self.position = self.position.advance(ch);
        Ok(())
    }

    fn extend(&mut self, ch: char) {
        if self.buffer.is_empty() {
            self.buffer_start = self.position;
        }
        self.buffer.push(ch);
    }

    fn flush(&mut self) -> Result<(), SyntaxError> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let word = std::mem::take(&mut self.buffer);
        let span = Span::between(self.buffer_start, self.position);
        let token = classify(&word, span)?;
        self.tokens.push(SpannedToken { token, span });
        Ok(())
    }
}
