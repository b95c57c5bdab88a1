use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub statements: Block,
}

/// Statements between `{` and `}`, in source order.
pub type Block = Vec<Statement>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// присваивание, например: x a 5 rakho;
    Assign { target: String, value: Expression },
    /// вывод, например: x dekha; или "salam" dekha;
    Print { value: Expression },
    /// jodi (x beshi 10) { ... } naile { ... }
    If {
        condition: Condition,
        then_branch: Block,
        else_branch: Block,
    },
    /// jotokhon (x kom 5) { ... }
    While { condition: Condition, body: Block },
}

/// Expressions are operands only; the language has no arithmetic nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Number(i64),
    Str(String),
    Variable(String),
}

/// `left op right` inside the parentheses of `jodi` and `jotokhon`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub op: CompareOp,
    pub left: Expression,
    pub right: Expression,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Equal,   // shoman
    Greater, // beshi
    Less,    // kom
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Equal => "shoman",
            Self::Greater => "beshi",
            Self::Less => "kom",
        })
    }
}
