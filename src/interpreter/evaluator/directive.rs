use std::{io::Write, rc::Rc};

use num_bigint::BigInt;

use crate::{
    ast::{Node, NumericMode},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        help::HELP_MESSAGE,
        lexer::Position,
        value::core::Value,
    },
    numeric::from_num,
};

impl<W: Write> Context<W> {
    /// Writes every variable, in the order they were first assigned.
    ///
    /// ```text
    /// -=-=-=- Trace on line 3 -=-=-=-
    ///   x := 1
    ///   y := true
    /// ```
    pub(in crate::interpreter::evaluator) fn eval_trace(&mut self,
                                                        position: Position)
                                                        -> EvalResult<Option<Value>> {
        writeln!(self.out, "-=-=-=- Trace on line {} -=-=-=-", position.line)?;
        for (name, value) in self.namespace.iter() {
            writeln!(self.out, "  {name} := {value}")?;
        }
        Ok(None)
    }

    /// Writes a single variable as `name := value`. Unset names print `0`.
    pub(in crate::interpreter::evaluator) fn eval_print(&mut self,
                                                        name: &str)
                                                        -> EvalResult<Option<Value>> {
        let value = self.namespace.get_or_default(name);
        writeln!(self.out, "{name} := {value}")?;
        Ok(None)
    }

    pub(in crate::interpreter::evaluator) fn eval_help(&mut self) -> EvalResult<Option<Value>> {
        writeln!(self.out, "{HELP_MESSAGE}")?;
        Ok(None)
    }

    /// Computes the Gödel number of `suite` without running it.
    ///
    /// # Errors
    /// Returns `RuntimeError::Numeric` if the suite has no encoding.
    pub(in crate::interpreter::evaluator) fn eval_numeric(&mut self,
                                                          suite: &Node)
                                                          -> EvalResult<Option<Value>> {
        let number = suite.numeric()?;
        Ok(Some(Value::Integer(BigInt::from(number))))
    }

    /// Evaluates `num` and decodes it into a code value.
    pub(in crate::interpreter::evaluator) fn eval_from_numeric(&mut self,
                                                               mode: NumericMode,
                                                               num: &Node)
                                                               -> EvalResult<Option<Value>> {
        let code = self.decode(mode, num)?;
        Ok(Some(Value::from(code)))
    }

    /// Evaluates `num`, decodes it and evaluates the decoded tree right away.
    pub(in crate::interpreter::evaluator) fn eval_run_numeric(&mut self,
                                                              mode: NumericMode,
                                                              num: &Node)
                                                              -> EvalResult<Option<Value>> {
        let code = self.decode(mode, num)?;
        self.eval(&code)
    }

    /// Evaluates the code stored in variable `name`.
    ///
    /// # Errors
    /// Returns `RuntimeError::NotCode` if the variable holds anything other
    /// than code, including when it is unset.
    pub(in crate::interpreter::evaluator) fn eval_code(&mut self,
                                                       name: &str)
                                                       -> EvalResult<Option<Value>> {
        let Some(Value::Code(code)) = self.namespace.get(name) else {
            return Err(RuntimeError::NotCode { name: name.to_string() }.into());
        };
        let code = Rc::clone(code);
        self.eval(&code)
    }

    fn decode(&mut self, mode: NumericMode, num: &Node) -> EvalResult<Node> {
        let value = self.eval_value(num, || "The Gödel number".to_string())?;
        let number = value.as_integer()?
                          .to_biguint()
                          .ok_or(RuntimeError::NegativeGodelNumber)?;
        Ok(from_num(mode, &number)?)
    }
}
