//! Where `dekha` output goes.
//!
//! The driver prints to stdout; tests and embedding callers capture values in
//! a buffer and inspect them afterwards.

use std::io::{self, Write};

use super::value::Value;
use crate::error::RuntimeError;

#[derive(Debug, Clone, Default)]
pub enum PrintHandler {
    /// One line per printed value.
    #[default]
    Stdout,
    /// Keeps every printed value, in order.
    Buffer(Vec<Value>),
    /// Discards output.
    Silent,
}

impl PrintHandler {
    pub fn buffer() -> Self {
        Self::Buffer(Vec::new())
    }

    /// Fails only when stdout cannot be written, e.g. a closed pipe.
    pub fn emit(&mut self, value: &Value) -> Result<(), RuntimeError> {
        match self {
            Self::Stdout => write_value(&mut io::stdout().lock(), value)?,
            Self::Buffer(values) => values.push(value.clone()),
            Self::Silent => {}
        }
        Ok(())
    }

    /// Captured values; always empty unless buffering.
    pub fn captured(&self) -> &[Value] {
        match self {
            Self::Buffer(values) => values,
            Self::Stdout | Self::Silent => &[],
        }
    }
}

fn write_value(out: &mut impl Write, value: &Value) -> Result<(), RuntimeError> {
    writeln!(out, "{value}").map_err(|e| RuntimeError::OutputFailed {
        message: e.to_string(),
    })
}
