use crate::{ast::CmpMode, error::RuntimeError, interpreter::value::core::Value};

/// Evaluates an ordering comparison of the form `Value <mode> Value`.
///
/// Equality is not handled here: `=` compares any two values structurally,
/// while ordering is only defined for integers.
///
/// # Errors
/// Returns `RuntimeError::ExpectedNumber` if either operand is not an
/// integer.
///
/// # Example
/// ```
/// use whilelang::{
///     ast::CmpMode,
///     interpreter::{evaluator::binary::comparison::eval_comparison, value::core::Value},
/// };
///
/// let result = eval_comparison(CmpMode::LessEqual, &Value::from(3), &Value::from(5));
/// assert_eq!(result.unwrap(), Value::from(true));
/// ```
pub fn eval_comparison(mode: CmpMode, left: &Value, right: &Value) -> Result<Value, RuntimeError> {
    let left = left.as_integer()?;
    let right = right.as_integer()?;

    let result = match mode {
        CmpMode::Less => left < right,
        CmpMode::LessEqual => left <= right,
        CmpMode::Greater => left > right,
        CmpMode::GreaterEqual => left >= right,
    };
    Ok(Value::Bool(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_modes() {
        let cases = [(CmpMode::Less, [false, false, true]),
                     (CmpMode::LessEqual, [false, true, true]),
                     (CmpMode::Greater, [true, false, false]),
                     (CmpMode::GreaterEqual, [true, true, false])];
        for (mode, expected) in cases {
            for (right, expected) in [1, 2, 3].into_iter().zip(expected) {
                let result = eval_comparison(mode, &Value::from(2), &Value::from(right));
                assert_eq!(result.unwrap(), Value::from(expected), "2 {mode} {right}");
            }
        }
    }

    #[test]
    fn code_cannot_be_ordered() {
        let code = Value::from(crate::ast::Node::Skip);
        let result = eval_comparison(CmpMode::Less, &code, &Value::from(1));
        assert!(matches!(result, Err(RuntimeError::ExpectedNumber { found: "code" })));
    }
}
