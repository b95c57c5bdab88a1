use tracing::{debug, info};

use super::lexer::{SpannedToken, Token, TokenKind};
use crate::config::Config;
use crate::error::SyntaxError;
use crate::ir::ast::{Block, CompareOp, Condition, Expression, Program, Statement};
use crate::stack::ensure_sufficient_stack;

pub fn parse_tokens(tokens: Vec<SpannedToken>, config: &Config) -> Result<Program, SyntaxError> {
    let mut parser = Parser::new(tokens, config.max_depth);
    let program = parser.parse_program()?;
    info!(statements = program.statements.len(), "parsed program");
    Ok(program)
}

struct Parser {
    tokens: Vec<SpannedToken>,
    position: usize,
    /// Handed out by `current`/`peek` once the cursor runs off the end.
    eof: SpannedToken,
    depth: usize,
    max_depth: usize,
}

impl Parser {
    fn new(tokens: Vec<SpannedToken>, max_depth: usize) -> Self {
        let eof_span = tokens.last().map(|t| t.span.after()).unwrap_or_default();
        Self {
            tokens,
            position: 0,
            eof: SpannedToken {
                token: Token::Eof,
                span: eof_span,
            },
            depth: 0,
            max_depth,
        }
    }

    fn parse_program(&mut self) -> Result<Program, SyntaxError> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            if let Some(statement) = self.parse_statement()? {
                statements.push(statement);
            }
        }

        Ok(Program { statements })
    }

    /// Returns `None` after stepping over a token that cannot start a
    /// statement.
    fn parse_statement(&mut self) -> Result<Option<Statement>, SyntaxError> {
        let statement = match (self.current().kind(), self.peek().kind()) {
            (TokenKind::Name, TokenKind::Is) => self.parse_assignment()?,
            (TokenKind::Str, _) | (TokenKind::Name, TokenKind::Show) => self.parse_print()?,
            (TokenKind::If, _) => self.parse_if()?,
            (TokenKind::While, _) => self.parse_while()?,
            _ => {
                let skipped = self.advance();
                debug!(
                    kind = %skipped.kind(),
                    line = skipped.span.line,
                    column = skipped.span.column,
                    "skipping token that cannot start a statement"
                );
                return Ok(None);
            }
        };
        Ok(Some(statement))
    }

    fn parse_assignment(&mut self) -> Result<Statement, SyntaxError> {
        let target = self.eat_name()?;
        self.eat(TokenKind::Is)?; // 'a'

        let value = match self.current().token.clone() {
            Token::Number(n) => {
                self.advance();
                Expression::Number(n)
            }
            _ => self.parse_expression()?,
        };

        if self.check(TokenKind::Store) {
            self.advance(); // 'rakho' is optional
        }
        self.eat(TokenKind::Semi)?;

        Ok(Statement::Assign { target, value })
    }

    fn parse_print(&mut self) -> Result<Statement, SyntaxError> {
        let value = match self.current().token.clone() {
            Token::Str(text) => {
                self.advance();
                Expression::Str(text)
            }
            _ => self.parse_expression()?,
        };

        self.eat(TokenKind::Show)?; // 'dekha'
        self.eat(TokenKind::Semi)?;

        Ok(Statement::Print { value })
    }

    fn parse_if(&mut self) -> Result<Statement, SyntaxError> {
        self.eat(TokenKind::If)?; // 'jodi'
        let condition = self.parse_condition()?;
        let then_branch = self.parse_block()?;

        let else_branch = if self.check(TokenKind::Else) {
            self.advance(); // 'naile'
            self.parse_block()?
        } else {
            Vec::new()
        };

        Ok(Statement::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn parse_while(&mut self) -> Result<Statement, SyntaxError> {
        self.eat(TokenKind::While)?; // 'jotokhon'
        let condition = self.parse_condition()?;
        let body = self.parse_block()?;

        Ok(Statement::While { condition, body })
    }

    /// `( left op right )`
    fn parse_condition(&mut self) -> Result<Condition, SyntaxError> {
        self.eat(TokenKind::LParen)?;
        let left = self.parse_expression()?;

        let op = match self.current().kind() {
            TokenKind::Equal => CompareOp::Equal,
            TokenKind::Greater => CompareOp::Greater,
            TokenKind::Less => CompareOp::Less,
            found => {
                return Err(SyntaxError::ExpectedComparison {
                    found,
                    span: self.current().span,
                });
            }
        };
        self.advance();

        let right = self.parse_expression()?;
        self.eat(TokenKind::RParen)?;

        Ok(Condition { op, left, right })
    }

    /// `{ statement* }`
    fn parse_block(&mut self) -> Result<Block, SyntaxError> {
        self.eat(TokenKind::LBrace)?;

        let body = self.nested(|parser| {
            let mut body = Vec::new();
            while !parser.check(TokenKind::RBrace) {
                if parser.is_at_end() {
                    break;
                }
                if let Some(statement) = parser.parse_statement()? {
                    body.push(statement);
                }
            }
            Ok(body)
        })?;

        // At end of input this reports the missing '}'
        self.eat(TokenKind::RBrace)?;
        Ok(body)
    }

    fn parse_expression(&mut self) -> Result<Expression, SyntaxError> {
        match self.current().token.clone() {
            Token::Number(n) => {
                self.advance();
                Ok(Expression::Number(n))
            }
            Token::Name(name) => {
                self.advance();
                Ok(Expression::Variable(name))
            }
            Token::LParen => {
                self.advance();
                // Parentheses only group; no operator is applied
                let inner = self.nested(Self::parse_expression)?;
                self.eat(TokenKind::RParen)?;
                Ok(inner)
            }
            other => Err(SyntaxError::ExpectedExpression {
                found: other.kind(),
                span: self.current().span,
            }),
        }
    }

    /// Runs `f` one nesting level deeper, refusing to go past `max_depth`.
    fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, SyntaxError>,
    ) -> Result<T, SyntaxError> {
        if self.depth >= self.max_depth {
            return Err(SyntaxError::NestingTooDeep {
                limit: self.max_depth,
                span: self.current().span,
            });
        }

        self.depth += 1;
        let result = ensure_sufficient_stack(|| f(self));
        self.depth -= 1;
        result
    }

    // Вспомогательные методы
    fn current(&self) -> &SpannedToken {
        self.tokens.get(self.position).unwrap_or(&self.eof)
    }

    fn peek(&self) -> &SpannedToken {
        self.tokens.get(self.position + 1).unwrap_or(&self.eof)
    }

    fn advance(&mut self) -> SpannedToken {
        let token = self.current().clone();
        if !self.is_at_end() {
            self.position += 1;
        }
        token
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current().kind() == kind
    }

    fn eat(&mut self, expected: TokenKind) -> Result<SpannedToken, SyntaxError> {
        let found = self.current();
        if found.kind() != expected {
            return Err(SyntaxError::UnexpectedToken {
                expected,
                found: found.kind(),
                span: found.span,
            });
        }
        Ok(self.advance())
    }

    fn eat_name(&mut self) -> Result<String, SyntaxError> {
        match self.eat(TokenKind::Name)?.token {
            Token::Name(name) => Ok(name),
            other => Err(SyntaxError::UnexpectedToken {
                expected: TokenKind::Name,
                found: other.kind(),
                span: self.current().span,
            }),
        }
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }
}
