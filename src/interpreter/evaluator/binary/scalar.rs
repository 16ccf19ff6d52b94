use num_traits::Zero;

use crate::{ast::ArithOp, error::RuntimeError, interpreter::value::core::Value};

/// Applies an arithmetic operator to two integer values.
///
/// Division truncates toward zero, so `-7 / 2` is `-3`.
///
/// # Errors
/// - `RuntimeError::ExpectedNumber` if either operand is not an integer.
/// - `RuntimeError::DivisionByZero` for a zero divisor.
///
/// # Example
/// ```
/// use whilelang::{
///     ast::ArithOp,
///     interpreter::{evaluator::binary::scalar::eval_arith, value::core::Value},
/// };
///
/// let result = eval_arith(ArithOp::Div, &Value::from(7), &Value::from(2));
/// assert_eq!(result.unwrap(), Value::from(3));
///
/// assert!(eval_arith(ArithOp::Div, &Value::from(7), &Value::from(0)).is_err());
/// ```
pub fn eval_arith(op: ArithOp, left: &Value, right: &Value) -> Result<Value, RuntimeError> {
    let left = left.as_integer()?;
    let right = right.as_integer()?;

    let result = match op {
        ArithOp::Add => left + right,
        ArithOp::Sub => left - right,
        ArithOp::Mul => left * right,
        ArithOp::Div => {
            if right.is_zero() {
                return Err(RuntimeError::DivisionByZero);
            }
            left / right
        },
    };
    Ok(Value::Integer(result))
}
