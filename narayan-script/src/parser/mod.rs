pub mod lexer;
pub mod parser;

use crate::config::Config;
use crate::error::SyntaxError;
use crate::ir::ast;

/// Source text to AST: lexing and parsing in one step.
pub fn parse(source: &str, config: &Config) -> Result<ast::Program, SyntaxError> {
    let tokens = lexer::tokenize(source)?;
    let program = parser::parse_tokens(tokens, config)?;
    Ok(program)
}
