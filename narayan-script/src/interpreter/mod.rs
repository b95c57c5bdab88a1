//! Tree-walking execution of a parsed [`Program`].
//!
//! An [`Interpreter`] owns its [`Environment`] and [`PrintHandler`], so
//! separate instances never share state and can run side by side.

pub mod environment;
pub mod print_handler;
pub mod value;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::RuntimeError;
use crate::ir::ast::{Condition, Expression, Program, Statement};
use crate::stack::ensure_sufficient_stack;

pub use environment::Environment;
pub use print_handler::PrintHandler;
pub use value::Value;

pub struct Interpreter {
    environment: Environment,
    printer: PrintHandler,
    depth: usize,
    max_depth: usize,
}

impl Interpreter {
    /// Interpreter printing to stdout.
    pub fn new(config: &Config) -> Self {
        Self::with_print_handler(config, PrintHandler::Stdout)
    }

    pub fn with_print_handler(config: &Config, printer: PrintHandler) -> Self {
        Self {
            environment: Environment::new(),
            printer,
            depth: 0,
            max_depth: config.max_depth,
        }
    }

    /// Runs every statement in order. The first error stops the run; whatever
    /// was assigned or printed before it stays visible.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn execute(&mut self, program: &Program) -> Result<(), RuntimeError> {
        self.execute_block(&program.statements)?;
        info!(variables = self.environment.len(), "program finished");
        Ok(())
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Values printed so far when buffering output.
    pub fn output(&self) -> &[Value] {
        self.printer.captured()
    }

    fn execute_block(&mut self, block: &[Statement]) -> Result<(), RuntimeError> {
        for statement in block {
            self.execute_statement(statement)?;
        }
        Ok(())
    }

    fn execute_statement(&mut self, statement: &Statement) -> Result<(), RuntimeError> {
        match statement {
            Statement::Assign { target, value } => {
                let value = self.evaluate(value)?;
                debug!(%target, %value, "assign");
                self.environment.assign(target.as_str(), value);
            }
            Statement::Print { value } => {
                let value = self.evaluate(value)?;
                self.printer.emit(&value)?;
            }
            Statement::If {
                condition,
                then_branch,
                else_branch,
            } => {
                let branch = if self.evaluate_condition(condition)? {
                    then_branch
                } else {
                    else_branch
                };
                self.nested(|interp| interp.execute_block(branch))?;
            }
            Statement::While { condition, body } => {
                // No iteration bound: a condition that stays true never returns
                while self.evaluate_condition(condition)? {
                    self.nested(|interp| interp.execute_block(body))?;
                }
            }
        }
        Ok(())
    }

    fn evaluate(&self, expression: &Expression) -> Result<Value, RuntimeError> {
        match expression {
            Expression::Number(n) => Ok(Value::Int(*n)),
            Expression::Str(text) => Ok(Value::Str(text.clone())),
            Expression::Variable(name) => self.environment.get(name).cloned().ok_or_else(|| {
                RuntimeError::UndefinedVariable {
                    name: name.clone(),
                }
            }),
        }
    }

    fn evaluate_condition(&self, condition: &Condition) -> Result<bool, RuntimeError> {
        let left = self.evaluate(&condition.left)?;
        let right = self.evaluate(&condition.right)?;
        left.compare(condition.op, &right)
    }

    fn nested(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<(), RuntimeError>,
    ) -> Result<(), RuntimeError> {
        if self.depth >= self.max_depth {
            return Err(RuntimeError::NestingTooDeep {
                limit: self.max_depth,
            });
        }

        self.depth += 1;
        let result = ensure_sufficient_stack(|| f(self));
        self.depth -= 1;
        result
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
