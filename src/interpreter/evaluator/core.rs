use std::io::{self, Write};

use crate::{
    ast::Node,
    error::{NumericError, RuntimeError},
    interpreter::{
        evaluator::binary::{comparison::eval_comparison, scalar::eval_arith},
        value::{core::Value, namespace::Namespace},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// [`Signal`] that unwinds evaluation up to the top level.
pub type EvalResult<T> = Result<T, Signal>;

/// Reasons for evaluation to stop early.
#[derive(Debug)]
pub enum Signal {
    /// `@exit` was evaluated.
    Exit,
    /// A runtime error occurred.
    Error(RuntimeError),
}

impl From<RuntimeError> for Signal {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

impl From<NumericError> for Signal {
    fn from(error: NumericError) -> Self {
        Self::Error(error.into())
    }
}

impl From<io::Error> for Signal {
    fn from(error: io::Error) -> Self {
        Self::Error(error.into())
    }
}

/// How a complete run ended.
#[derive(Debug)]
pub enum Outcome {
    /// The program ran to the end, with the value of its last statement.
    Completed(Option<Value>),
    /// The program stopped at `@exit`.
    Terminated,
    /// The program stopped at a runtime error.
    Failed(RuntimeError),
}

impl From<EvalResult<Option<Value>>> for Outcome {
    fn from(result: EvalResult<Option<Value>>) -> Self {
        match result {
            Ok(value) => Self::Completed(value),
            Err(Signal::Exit) => Self::Terminated,
            Err(Signal::Error(error)) => Self::Failed(error),
        }
    }
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the namespace every statement
/// reads and writes, and the sink directives such as `@trace` and `@print`
/// write to. The sink is standard output unless another writer is supplied.
///
/// ## Usage
///
/// A `Context` is created once and reused; the REPL keeps one alive for the
/// whole session so variables survive between lines.
pub struct Context<W: Write = io::Stdout> {
    /// Variables of the current run.
    pub namespace: Namespace,
    pub(in crate::interpreter::evaluator) out: W,
}

impl Context {
    /// Creates a context with an empty namespace that writes to standard
    /// output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_namespace(Namespace::new())
    }

    /// Creates a context around an existing namespace that writes to
    /// standard output.
    #[must_use]
    pub fn with_namespace(namespace: Namespace) -> Self {
        Self::with_output(namespace, io::stdout())
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Context<W> {
    /// Creates a context that writes directive output to `out`.
    ///
    /// # Example
    /// ```
    /// use whilelang::{
    ///     ast::Node,
    ///     interpreter::{evaluator::core::Context, value::namespace::Namespace},
    /// };
    ///
    /// let mut context = Context::with_output(Namespace::new(), Vec::new());
    /// context.run(&Node::Print("x".to_string()));
    ///
    /// assert_eq!(context.output(), b"x := 0\n");
    /// ```
    pub fn with_output(namespace: Namespace, out: W) -> Self {
        Self { namespace, out }
    }

    /// Returns the output sink.
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Splits the context into its namespace and output sink.
    pub fn into_parts(self) -> (Namespace, W) {
        (self.namespace, self.out)
    }

    /// Evaluates a whole program and reports how it ended.
    ///
    /// `@exit` and runtime errors both stop evaluation; any assignments made
    /// before that point stay in the namespace.
    pub fn run(&mut self, node: &Node) -> Outcome {
        self.eval(node).into()
    }

    /// Evaluates a node and returns the resulting value.
    ///
    /// This is the main entry point for evaluation. Every node kind is
    /// handled here or delegated to a specialised method.
    ///
    /// # Returns
    /// `Some(Value)` for nodes that produce a value, or `None` for
    /// statements that do not yield one.
    ///
    /// # Errors
    /// Returns `Signal::Exit` when `@exit` is reached and `Signal::Error`
    /// for runtime errors.
    pub fn eval(&mut self, node: &Node) -> EvalResult<Option<Value>> {
        match node {
            Node::Suite(statements) => self.eval_suite(statements),
            Node::If { condition,
                       then_branch,
                       else_branch, } => {
                self.eval_if(condition, then_branch, else_branch.as_deref())?;
                Ok(None)
            },
            Node::While { condition, body } => {
                self.eval_while(condition, body)?;
                Ok(None)
            },
            Node::Skip => Ok(None),
            Node::Assign { name, value } => {
                let value = self.eval_value(value, || format!("Assignment to {name}"))?;
                self.namespace.insert(name.clone(), value);
                Ok(None)
            },
            Node::Constant(literal) => Ok(Some(Value::from(literal))),
            Node::Variable(name) => Ok(Some(self.namespace.get_or_default(name))),
            Node::Not(expr) => self.eval_not(expr).map(Some),
            Node::Arith { op, lhs, rhs } => {
                let (left, right) = self.eval_operands(lhs, rhs, &op.to_string())?;
                Ok(Some(eval_arith(*op, &left, &right)?))
            },
            Node::Eq { lhs, rhs } => {
                let (left, right) = self.eval_operands(lhs, rhs, "=")?;
                Ok(Some(Value::Bool(left == right)))
            },
            Node::Cmp { mode, lhs, rhs } => {
                let (left, right) = self.eval_operands(lhs, rhs, &mode.to_string())?;
                Ok(Some(eval_comparison(*mode, &left, &right)?))
            },
            Node::And { lhs, rhs } => self.eval_and(lhs, rhs).map(Some),
            Node::Or { lhs, rhs } => self.eval_or(lhs, rhs).map(Some),
            Node::Trace(position) => self.eval_trace(*position),
            Node::Exit => Err(Signal::Exit),
            Node::Print(name) => self.eval_print(name),
            Node::Reset => {
                self.namespace.clear();
                Ok(None)
            },
            Node::Help => self.eval_help(),
            Node::Numeric(suite) => self.eval_numeric(suite),
            Node::FromNumeric { mode, num } => self.eval_from_numeric(*mode, num),
            Node::RunNumeric { mode, num } => self.eval_run_numeric(*mode, num),
            Node::Eval(name) => self.eval_code(name),
        }
    }

    /// Evaluates a node that must produce a value.
    ///
    /// # Parameters
    /// - `node`: The node to evaluate.
    /// - `context`: Describes what needs the value, for the error message.
    ///
    /// # Errors
    /// Returns `RuntimeError::MissingValue` if the node yields nothing.
    pub(in crate::interpreter::evaluator) fn eval_value(&mut self,
                                                        node: &Node,
                                                        context: impl FnOnce() -> String)
                                                        -> EvalResult<Value> {
        match self.eval(node)? {
            Some(value) => Ok(value),
            None => Err(RuntimeError::MissingValue { context: context() }.into()),
        }
    }

    /// Evaluates a node that must produce a boolean.
    pub(in crate::interpreter::evaluator) fn eval_bool(&mut self,
                                                       node: &Node,
                                                       operator: &str)
                                                       -> EvalResult<bool> {
        let value = self.eval_value(node, || format!("The operand of '{operator}'"))?;
        Ok(value.as_bool()?)
    }

    fn eval_operands(&mut self,
                     lhs: &Node,
                     rhs: &Node,
                     operator: &str)
                     -> EvalResult<(Value, Value)> {
        let left = self.eval_value(lhs, || format!("The operand of '{operator}'"))?;
        let right = self.eval_value(rhs, || format!("The operand of '{operator}'"))?;
        Ok((left, right))
    }

    /// Evaluates statements in order and returns the value of the last one.
    ///
    /// An empty suite evaluates to `0`.
    fn eval_suite(&mut self, statements: &[Node]) -> EvalResult<Option<Value>> {
        let mut result = Some(Value::default());
        for statement in statements {
            result = self.eval(statement)?;
        }
        Ok(result)
    }

    fn eval_condition(&mut self, condition: &Node) -> EvalResult<bool> {
        let value = self.eval_value(condition, || "The condition".to_string())?;
        Ok(value.as_bool()?)
    }

    fn eval_if(&mut self,
               condition: &Node,
               then_branch: &Node,
               else_branch: Option<&Node>)
               -> EvalResult<()> {
        if self.eval_condition(condition)? {
            self.eval(then_branch)?;
        } else if let Some(else_branch) = else_branch {
            self.eval(else_branch)?;
        }
        Ok(())
    }

    /// Runs `body` as long as `condition` holds. There is no iteration limit.
    fn eval_while(&mut self, condition: &Node, body: &Node) -> EvalResult<()> {
        while self.eval_condition(condition)? {
            self.eval(body)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::CmpMode;

    fn context() -> Context<Vec<u8>> {
        Context::with_output(Namespace::new(), Vec::new())
    }

    fn x() -> Node {
        Node::variable("x")
    }

    #[test]
    fn counting_loop() {
        let program =
            Node::Suite(vec![Node::assign("x", Node::constant(0)),
                             Node::while_loop(Node::cmp(CmpMode::Less, x(), Node::constant(3)),
                                              Node::assign("x",
                                                           Node::add(x(), Node::constant(1))))]);
        let mut context = context();
        assert!(matches!(context.run(&program), Outcome::Completed(None)));
        assert_eq!(context.namespace.get("x"), Some(&Value::from(3)));
    }

    #[test]
    fn empty_suite_is_zero() {
        let mut context = context();
        assert_eq!(context.eval(&Node::Suite(vec![])).unwrap(), Some(Value::from(0)));
    }

    #[test]
    fn unset_variables_read_as_zero() {
        let mut context = context();
        assert_eq!(context.eval(&x()).unwrap(), Some(Value::from(0)));
        assert!(context.namespace.is_empty());
    }

    #[test]
    fn conditions_must_be_boolean() {
        let mut context = context();
        let program = Node::if_then(Node::constant(1), Node::Skip, None);
        assert!(matches!(context.run(&program),
                         Outcome::Failed(RuntimeError::ExpectedBoolean { found: "integer" })));
    }

    #[test]
    fn else_branch_runs_when_condition_fails() {
        let mut context = context();
        let program = Node::if_then(Node::constant(false),
                                    Node::assign("x", Node::constant(1)),
                                    Some(Node::assign("x", Node::constant(2))));
        context.run(&program);
        assert_eq!(context.namespace.get_or_default("x"), Value::from(2));
    }

    #[test]
    fn exit_keeps_earlier_assignments() {
        let mut context = context();
        let program = Node::Suite(vec![Node::assign("x", Node::constant(1)),
                                       Node::Exit,
                                       Node::assign("x", Node::constant(2))]);
        assert!(matches!(context.run(&program), Outcome::Terminated));
        assert_eq!(context.namespace.get_or_default("x"), Value::from(1));
    }

    #[test]
    fn assigning_a_statement_fails() {
        let mut context = context();
        let program = Node::assign("x", Node::Reset);
        assert!(matches!(context.run(&program),
                         Outcome::Failed(RuntimeError::MissingValue { ref context })
                         if context == "Assignment to x"));
    }

    #[test]
    fn equality_is_structural() {
        let mut context = context();
        let same = Node::equal(Node::constant(2), Node::add(Node::constant(1), Node::constant(1)));
        let mixed = Node::equal(Node::constant(1), Node::constant(true));
        assert_eq!(context.eval(&same).unwrap(), Some(Value::from(true)));
        assert_eq!(context.eval(&mixed).unwrap(), Some(Value::from(false)));
    }
}
