use std::cmp::Ordering;
use std::fmt;

use crate::error::RuntimeError;
use crate::ir::ast::CompareOp;

/// A runtime value. Numbers print as integers, strings verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Str(String),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "number",
            Self::Str(_) => "string",
        }
    }

    /// Applies `op` with the native ordering of the operands' type. Operands of
    /// different types are never coerced.
    pub fn compare(&self, op: CompareOp, other: &Value) -> Result<bool, RuntimeError> {
        let ordering = match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Str(a), Self::Str(b)) => a.cmp(b),
            _ => {
                return Err(RuntimeError::TypeMismatch {
                    op,
                    left: self.type_name(),
                    right: other.type_name(),
                });
            }
        };

        Ok(match op {
            CompareOp::Equal => ordering == Ordering::Equal,
            CompareOp::Greater => ordering == Ordering::Greater,
            CompareOp::Less => ordering == Ordering::Less,
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}
