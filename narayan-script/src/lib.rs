//! # narayan-script
//!
//! Interpreter for NarayanganjScript, a toy language written in the
//! Narayanganj dialect. Source text goes through three stages, each usable on
//! its own:
//!
//! 1. [`tokenize`] turns text into [`SpannedToken`]s,
//! 2. [`parse_tokens`] builds a [`Program`] by recursive descent,
//! 3. [`Interpreter::execute`] walks the tree against a variable store.
//!
//! ```
//! use narayan_script::{run, Config, PrintHandler, Value};
//!
//! let interp = run("x a 7 rakho; x dekha;", &Config::default(), PrintHandler::buffer()).unwrap();
//! assert_eq!(interp.output(), &[Value::Int(7)]);
//! ```

pub mod config;
pub mod error;
pub mod interpreter;
pub mod ir;
pub mod parser;
pub mod span;
mod stack;

pub use config::Config;
pub use error::{RuntimeError, ScriptError, SyntaxError};
pub use interpreter::{Environment, Interpreter, PrintHandler, Value};
pub use ir::ast::Program;
pub use parser::lexer::{SpannedToken, Token, TokenKind, tokenize};
pub use parser::parser::parse_tokens;

/// Lexes, parses and executes `source`. Nothing runs unless the whole program
/// parses.
pub fn run(
    source: &str,
    config: &Config,
    printer: PrintHandler,
) -> Result<Interpreter, ScriptError> {
    let program = parser::parse(source, config)?;
    let mut interpreter = Interpreter::with_print_handler(config, printer);
    interpreter.execute(&program)?;
    Ok(interpreter)
}
