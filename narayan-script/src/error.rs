use thiserror::Error;

use crate::ir::ast::CompareOp;
use crate::parser::lexer::TokenKind;
use crate::span::Span;

/// Failures while turning source text into a syntax tree. All of them are fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("Syntax error at {span}: expected {expected}, found {found}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        span: Span,
    },

    #[error("Syntax error at {span}: expected a number, a name or '(', found {found}")]
    ExpectedExpression { found: TokenKind, span: Span },

    #[error("Syntax error at {span}: expected shoman, beshi or kom, found {found}")]
    ExpectedComparison { found: TokenKind, span: Span },

    #[error("Lexer error at {span}: number literal {digits} does not fit in 64 bits")]
    NumberTooLarge { digits: String, span: Span },

    #[error("Syntax error at {span}: nesting exceeds the limit of {limit} levels")]
    NestingTooDeep { limit: usize, span: Span },
}

/// Failures while executing a syntax tree. They abort the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("Runtime error: variable '{name}' is not defined")]
    UndefinedVariable { name: String },

    #[error("Runtime error: cannot compare {left} with {right} using {op}")]
    TypeMismatch {
        op: CompareOp,
        left: &'static str,
        right: &'static str,
    },

    #[error("Runtime error: blocks nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },

    #[error("Runtime error: cannot write output: {message}")]
    OutputFailed { message: String },
}

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}
