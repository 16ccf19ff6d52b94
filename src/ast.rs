use std::fmt;

use num_bigint::BigInt;

use crate::interpreter::lexer::Position;

/// Represents a literal value in the language.
///
/// WHILE only knows two kinds of constants: natural numbers and booleans.
/// Integers are arbitrary precision so that Gödel numbers produced by
/// `@numeric` can be stored in ordinary variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralValue {
    /// An arbitrary precision integer literal.
    Integer(BigInt),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(BigInt::from(value))
    }
}

impl From<BigInt> for LiteralValue {
    fn from(value: BigInt) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Arithmetic operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ArithOp {
    /// Multiplication (`*`)
    Mul,
    /// Integer division truncating toward zero (`/`)
    Div,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
}

/// Ordering comparisons. Equality has its own node.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CmpMode {
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

/// Syntactic category a Gödel number is decoded into.
///
/// A number alone does not say whether it encodes an arithmetic expression,
/// a boolean expression or a statement, so `@from_numeric` and `@run_numeric`
/// name the category explicitly.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NumericMode {
    /// `a`: arithmetic expression.
    Arith,
    /// `b`: boolean expression.
    Bool,
    /// `stmt`: statement.
    Stmt,
}

impl NumericMode {
    /// Looks up a mode by the name used in source code.
    ///
    /// ## Example
    /// ```
    /// use whilelang::ast::NumericMode;
    ///
    /// assert_eq!(NumericMode::from_name("stmt"), Some(NumericMode::Stmt));
    /// assert_eq!(NumericMode::from_name("c"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "a" => Some(Self::Arith),
            "b" => Some(Self::Bool),
            "stmt" => Some(Self::Stmt),
            _ => None,
        }
    }
}

/// A node of the WHILE abstract syntax tree.
///
/// The variant set is closed: evaluation, rendering and Gödel numbering all
/// match on it exhaustively, so a new variant does not compile until each of
/// the three handles it. Trees are strictly owned; `Value::Code` stores a
/// snapshot rather than a reference into a running program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A sequence of statements separated by `;`.
    Suite(Vec<Self>),
    /// `if <condition> then <suite> [else <suite>]`
    If {
        /// Must evaluate to a boolean.
        condition:   Box<Self>,
        /// Executed when the condition holds.
        then_branch: Box<Self>,
        /// Executed otherwise, if present.
        else_branch: Option<Box<Self>>,
    },
    /// `while <condition> do <suite>`
    While {
        /// Must evaluate to a boolean.
        condition: Box<Self>,
        /// Executed while the condition holds.
        body:      Box<Self>,
    },
    /// `skip`
    Skip,
    /// `<name> := <expression>`
    Assign {
        /// The variable being written.
        name:  String,
        /// The value expression.
        value: Box<Self>,
    },
    /// A literal constant.
    Constant(LiteralValue),
    /// Reference to a variable by name.
    Variable(String),
    /// Logical negation (`!` or `¬`).
    Not(Box<Self>),
    /// `*`, `/`, `+` or `-`.
    Arith {
        /// The operator.
        op:  ArithOp,
        /// Left operand.
        lhs: Box<Self>,
        /// Right operand.
        rhs: Box<Self>,
    },
    /// `=`
    Eq {
        /// Left operand.
        lhs: Box<Self>,
        /// Right operand.
        rhs: Box<Self>,
    },
    /// `&`
    And {
        /// Left operand.
        lhs: Box<Self>,
        /// Right operand.
        rhs: Box<Self>,
    },
    /// `|`
    Or {
        /// Left operand.
        lhs: Box<Self>,
        /// Right operand.
        rhs: Box<Self>,
    },
    /// `<`, `<=`, `>` or `>=`.
    Cmp {
        /// Which ordering is tested.
        mode: CmpMode,
        /// Left operand.
        lhs:  Box<Self>,
        /// Right operand.
        rhs:  Box<Self>,
    },
    /// `@trace`, remembering where it was written.
    Trace(Position),
    /// `@exit`
    Exit,
    /// `@print <name>`
    Print(String),
    /// `@reset`
    Reset,
    /// `@help`
    Help,
    /// `@numeric <suite>`
    Numeric(Box<Self>),
    /// `@from_numeric <mode> <statement>`
    FromNumeric {
        /// Category to decode into.
        mode: NumericMode,
        /// Expression producing the Gödel number.
        num:  Box<Self>,
    },
    /// `@run_numeric <mode> <statement>`
    RunNumeric {
        /// Category to decode into.
        mode: NumericMode,
        /// Expression producing the Gödel number.
        num:  Box<Self>,
    },
    /// `@eval <name>`
    Eval(String),
}

impl Node {
    #[must_use]
    pub fn constant(value: impl Into<LiteralValue>) -> Self {
        Self::Constant(value.into())
    }

    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    #[must_use]
    pub fn arith(op: ArithOp, lhs: Self, rhs: Self) -> Self {
        Self::Arith { op,
                      lhs: Box::new(lhs),
                      rhs: Box::new(rhs) }
    }

    #[must_use]
    pub fn add(lhs: Self, rhs: Self) -> Self {
        Self::arith(ArithOp::Add, lhs, rhs)
    }

    #[must_use]
    pub fn sub(lhs: Self, rhs: Self) -> Self {
        Self::arith(ArithOp::Sub, lhs, rhs)
    }

    #[must_use]
    pub fn mul(lhs: Self, rhs: Self) -> Self {
        Self::arith(ArithOp::Mul, lhs, rhs)
    }

    #[must_use]
    pub fn div(lhs: Self, rhs: Self) -> Self {
        Self::arith(ArithOp::Div, lhs, rhs)
    }

    #[must_use]
    pub fn equal(lhs: Self, rhs: Self) -> Self {
        Self::Eq { lhs: Box::new(lhs),
                   rhs: Box::new(rhs) }
    }

    #[must_use]
    pub fn and(lhs: Self, rhs: Self) -> Self {
        Self::And { lhs: Box::new(lhs),
                    rhs: Box::new(rhs) }
    }

    #[must_use]
    pub fn or(lhs: Self, rhs: Self) -> Self {
        Self::Or { lhs: Box::new(lhs),
                   rhs: Box::new(rhs) }
    }

    #[must_use]
    pub fn cmp(mode: CmpMode, lhs: Self, rhs: Self) -> Self {
        Self::Cmp { mode,
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs) }
    }

    #[must_use]
    pub fn not(expr: Self) -> Self {
        Self::Not(Box::new(expr))
    }

    #[must_use]
    pub fn assign(name: impl Into<String>, value: Self) -> Self {
        Self::Assign { name:  name.into(),
                       value: Box::new(value), }
    }

    #[must_use]
    pub fn while_loop(condition: Self, body: Self) -> Self {
        Self::While { condition: Box::new(condition),
                      body:      Box::new(body), }
    }

    #[must_use]
    pub fn if_then(condition: Self, then_branch: Self, else_branch: Option<Self>) -> Self {
        Self::If { condition:   Box::new(condition),
                   then_branch: Box::new(then_branch),
                   else_branch: else_branch.map(Box::new), }
    }

    /// Returns `true` for nodes that never need parentheses when rendered as
    /// an operand: constants and variables.
    ///
    /// ## Example
    /// ```
    /// use whilelang::ast::Node;
    ///
    /// assert!(Node::variable("x").is_atomic());
    /// assert!(!Node::add(Node::constant(1), Node::constant(2)).is_atomic());
    /// ```
    #[must_use]
    pub const fn is_atomic(&self) -> bool {
        matches!(self, Self::Constant(_) | Self::Variable(_))
    }

    /// Whether the rendered text ends in a suite that would swallow a
    /// following `; statement`.
    fn is_open_ended(&self) -> bool {
        match self {
            Self::If { .. } | Self::While { .. } | Self::Numeric(_) => true,
            Self::Suite(statements) => statements.last().is_some_and(Self::is_open_ended),
            Self::Assign { value, .. } => value.is_open_ended(),
            _ => false,
        }
    }

    /// Short name of the variant, used in diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Suite(_) => "suite",
            Self::If { .. } => "if",
            Self::While { .. } => "while",
            Self::Skip => "skip",
            Self::Assign { .. } => "assignment",
            Self::Constant(_) => "constant",
            Self::Variable(_) => "variable",
            Self::Not(_) => "negation",
            Self::Arith { op: ArithOp::Mul, .. } => "multiplication",
            Self::Arith { op: ArithOp::Div, .. } => "division",
            Self::Arith { op: ArithOp::Add, .. } => "addition",
            Self::Arith { op: ArithOp::Sub, .. } => "subtraction",
            Self::Eq { .. } => "equality",
            Self::And { .. } => "conjunction",
            Self::Or { .. } => "disjunction",
            Self::Cmp { .. } => "comparison",
            Self::Trace(_) => "@trace",
            Self::Exit => "@exit",
            Self::Print(_) => "@print",
            Self::Reset => "@reset",
            Self::Help => "@help",
            Self::Numeric(_) => "@numeric",
            Self::FromNumeric { .. } => "@from_numeric",
            Self::RunNumeric { .. } => "@run_numeric",
            Self::Eval(_) => "@eval",
        }
    }
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Mul => "*",
            Self::Div => "/",
            Self::Add => "+",
            Self::Sub => "-",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for CmpMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for NumericMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Arith => "a",
            Self::Bool => "b",
            Self::Stmt => "stmt",
        };
        write!(f, "{name}")
    }
}

/// Renders a node as an operand, parenthesised unless it is atomic.
struct Operand<'a>(&'a Node);

impl fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_atomic() {
            write!(f, "{}", self.0)
        } else {
            write!(f, "({})", self.0)
        }
    }
}

/// Renders the canonical concrete syntax of a tree.
///
/// The output re-parses to an equivalent tree. Nested suites are flattened.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Suite(statements) => {
                let Some((last, init)) = statements.split_last() else {
                    return write!(f, "skip");
                };
                for statement in init {
                    if statement.is_open_ended() {
                        write!(f, "({statement}); ")?;
                    } else {
                        write!(f, "{statement}; ")?;
                    }
                }
                write!(f, "{last}")
            },
            Self::If { condition,
                       then_branch,
                       else_branch, } => {
                write!(f, "if {} then ({then_branch})", Operand(condition))?;
                if let Some(else_branch) = else_branch {
                    write!(f, " else ({else_branch})")?;
                }
                Ok(())
            },
            Self::While { condition, body } => {
                write!(f, "while {} do ({body})", Operand(condition))
            },
            Self::Skip => write!(f, "skip"),
            Self::Assign { name, value } => write!(f, "{name} := {value}"),
            Self::Constant(value) => write!(f, "{value}"),
            Self::Variable(name) => write!(f, "{name}"),
            Self::Not(expr) => write!(f, "¬{}", Operand(expr)),
            Self::Arith { op, lhs, rhs } => write!(f, "{} {op} {}", Operand(lhs), Operand(rhs)),
            Self::Eq { lhs, rhs } => write!(f, "{} = {}", Operand(lhs), Operand(rhs)),
            Self::And { lhs, rhs } => write!(f, "{} & {}", Operand(lhs), Operand(rhs)),
            Self::Or { lhs, rhs } => write!(f, "{} | {}", Operand(lhs), Operand(rhs)),
            Self::Cmp { mode, lhs, rhs } => {
                write!(f, "{} {mode} {}", Operand(lhs), Operand(rhs))
            },
            Self::Trace(_) => write!(f, "@trace"),
            Self::Exit => write!(f, "@exit"),
            Self::Print(name) => write!(f, "@print {name}"),
            Self::Reset => write!(f, "@reset"),
            Self::Help => write!(f, "@help"),
            Self::Numeric(suite) => write!(f, "@numeric ({suite})"),
            Self::FromNumeric { mode, num } => write!(f, "@from_numeric {mode} {}", Operand(num)),
            Self::RunNumeric { mode, num } => write!(f, "@run_numeric {mode} {}", Operand(num)),
            Self::Eval(name) => write!(f, "@eval {name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_compound_operands_in_parentheses() {
        let tree = Node::mul(Node::add(Node::variable("x"), Node::constant(1)),
                             Node::constant(2));
        assert_eq!(tree.to_string(), "(x + 1) * 2");
    }

    #[test]
    fn renders_negation_of_compound_expression() {
        let tree = Node::not(Node::and(Node::constant(true), Node::constant(false)));
        assert_eq!(tree.to_string(), "¬(true & false)");
    }

    #[test]
    fn renders_control_flow() {
        let tree = Node::if_then(Node::cmp(CmpMode::Less, Node::variable("x"), Node::constant(3)),
                                 Node::assign("y", Node::constant(1)),
                                 Some(Node::Skip));
        assert_eq!(tree.to_string(), "if (x < 3) then (y := 1) else (skip)");

        let tree = Node::while_loop(Node::constant(false), Node::Suite(vec![]));
        assert_eq!(tree.to_string(), "while false do (skip)");
    }

    #[test]
    fn wraps_open_ended_statements_inside_suites() {
        let tree = Node::Suite(vec![Node::while_loop(Node::constant(false), Node::Skip),
                                    Node::assign("x", Node::constant(1))]);
        assert_eq!(tree.to_string(), "(while false do (skip)); x := 1");

        let numeric = Node::Numeric(Box::new(Node::Suite(vec![Node::Skip])));
        let tree = Node::Suite(vec![Node::assign("n", numeric), Node::Skip]);
        assert_eq!(tree.to_string(), "(n := @numeric (skip)); skip");
    }

    #[test]
    fn flattens_nested_suites() {
        let tree = Node::Suite(vec![Node::Suite(vec![Node::Skip, Node::Skip]), Node::Skip]);
        assert_eq!(tree.to_string(), "skip; skip; skip");
    }
}
