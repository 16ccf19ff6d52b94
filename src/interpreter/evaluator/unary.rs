use std::io::Write;

use crate::{
    ast::Node,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl<W: Write> Context<W> {
    /// Evaluates a logical negation (`!expr` or `¬expr`).
    ///
    /// # Errors
    /// Returns `RuntimeError::ExpectedBoolean` if the operand is not a
    /// boolean.
    ///
    /// # Example
    /// ```
    /// use whilelang::{
    ///     ast::Node,
    ///     interpreter::{
    ///         evaluator::core::Context,
    ///         value::{core::Value, namespace::Namespace},
    ///     },
    /// };
    ///
    /// let mut context = Context::with_output(Namespace::new(), Vec::new());
    /// let result = context.eval_not(&Node::constant(true));
    ///
    /// assert_eq!(result.unwrap(), Value::from(false));
    /// ```
    pub fn eval_not(&mut self, expr: &Node) -> EvalResult<Value> {
        Ok(Value::Bool(!self.eval_bool(expr, "¬")?))
    }
}
