/// Default limit on block and parenthesis nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Knobs shared by the parser and the interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Deepest allowed nesting of `{ }` blocks and `( )` groups.
    pub max_depth: usize,
}

impl Config {
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
