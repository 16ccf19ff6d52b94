use std::io::Write;

use crate::{
    ast::Node,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl<W: Write> Context<W> {
    /// Evaluates `lhs & rhs`.
    ///
    /// The right operand is only evaluated when the left one is `true`.
    ///
    /// # Errors
    /// Returns `RuntimeError::ExpectedBoolean` if an evaluated operand is not
    /// a boolean.
    pub fn eval_and(&mut self, lhs: &Node, rhs: &Node) -> EvalResult<Value> {
        if !self.eval_bool(lhs, "&")? {
            return Ok(Value::Bool(false));
        }
        Ok(Value::Bool(self.eval_bool(rhs, "&")?))
    }

    /// Evaluates `lhs | rhs`.
    ///
    /// The right operand is only evaluated when the left one is `false`.
    pub fn eval_or(&mut self, lhs: &Node, rhs: &Node) -> EvalResult<Value> {
        if self.eval_bool(lhs, "|")? {
            return Ok(Value::Bool(true));
        }
        Ok(Value::Bool(self.eval_bool(rhs, "|")?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::RuntimeError,
        interpreter::{evaluator::core::Signal, value::namespace::Namespace},
    };

    fn context() -> Context<Vec<u8>> {
        Context::with_output(Namespace::new(), Vec::new())
    }

    #[test]
    fn and_short_circuits() {
        let mut context = context();
        let result = context.eval_and(&Node::constant(false), &Node::Exit);
        assert_eq!(result.unwrap(), Value::from(false));
    }

    #[test]
    fn or_short_circuits() {
        let mut context = context();
        let result = context.eval_or(&Node::constant(true), &Node::constant(5));
        assert_eq!(result.unwrap(), Value::from(true));
    }

    #[test]
    fn evaluated_operands_must_be_boolean() {
        let mut context = context();
        let result = context.eval_or(&Node::constant(false), &Node::constant(5));
        assert!(matches!(result,
                         Err(Signal::Error(RuntimeError::ExpectedBoolean { found: "integer" }))));
    }
}
