//! Binary operators applied by the keypad.
//!
//! There is no precedence here: the engine folds chained operators
//! strictly left to right.

use super::{ArithmeticError, ArithmeticResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four keypad operators.
///
/// Serialized as their ASCII symbol so snapshots read `"operation": "+"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    #[serde(rename = "+")]
    Add,
    /// Subtraction (-)
    #[serde(rename = "-")]
    Subtract,
    /// Multiplication (*)
    #[serde(rename = "*")]
    Multiply,
    /// Division (/)
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    /// Every operator in keypad order
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// ASCII symbol, used in history entries and snapshots
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Label printed on the keypad button
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Multiply => "×",
            other => other.symbol(),
        }
    }

    /// Maps an operator character, including the `x`, `×` and `÷` spellings
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' | 'x' | 'X' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator to `lhs` and `rhs`
    pub fn apply(self, lhs: f64, rhs: f64) -> ArithmeticResult {
        let result = match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(ArithmeticError::DivisionByZero);
                }
                lhs / rhs
            }
        };
        Self::check_finite(result)
    }

    fn check_finite(result: f64) -> ArithmeticResult {
        if result.is_finite() {
            Ok(result)
        } else {
            Err(ArithmeticError::Overflow)
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // --- Operator enum tests ---

    #[test]
    fn test_operator_symbols() {
        assert_eq!(Operator::Add.symbol(), "+");
        assert_eq!(Operator::Subtract.symbol(), "-");
        assert_eq!(Operator::Multiply.symbol(), "*");
        assert_eq!(Operator::Divide.symbol(), "/");
    }

    #[test]
    fn test_operator_label_uses_times_sign() {
        assert_eq!(Operator::Multiply.label(), "×");
        assert_eq!(Operator::Divide.label(), "/");
    }

    #[test]
    fn test_operator_from_char() {
        for op in Operator::ALL {
            let c = op.symbol().chars().next().unwrap();
            assert_eq!(Operator::from_char(c), Some(op));
        }
        assert_eq!(Operator::from_char('x'), Some(Operator::Multiply));
        assert_eq!(Operator::from_char('×'), Some(Operator::Multiply));
        assert_eq!(Operator::from_char('÷'), Some(Operator::Divide));
        assert_eq!(Operator::from_char('^'), None);
    }

    #[test]
    fn test_operator_display() {
        assert_eq!(Operator::Subtract.to_string(), "-");
    }

    #[test]
    fn test_operator_serializes_as_symbol() {
        assert_eq!(serde_json::to_string(&Operator::Multiply).unwrap(), "\"*\"");
        let op: Operator = serde_json::from_str("\"/\"").unwrap();
        assert_eq!(op, Operator::Divide);
        assert!(serde_json::from_str::<Operator>("\"%\"").is_err());
    }

    // --- apply tests ---

    #[test]
    fn test_apply_basic_arithmetic() {
        assert_eq!(Operator::Add.apply(1.0, 2.0), Ok(3.0));
        assert_eq!(Operator::Subtract.apply(5.0, 3.0), Ok(2.0));
        assert_eq!(Operator::Multiply.apply(4.0, 3.0), Ok(12.0));
        assert_eq!(Operator::Divide.apply(8.0, 2.0), Ok(4.0));
    }

    #[test]
    fn test_apply_negative_operands() {
        assert_eq!(Operator::Add.apply(-2.0, -3.0), Ok(-5.0));
        assert_eq!(Operator::Multiply.apply(-2.0, 3.0), Ok(-6.0));
        assert_eq!(Operator::Divide.apply(-6.0, -2.0), Ok(3.0));
    }

    #[test]
    fn test_apply_divide_by_zero() {
        assert_eq!(
            Operator::Divide.apply(5.0, 0.0),
            Err(ArithmeticError::DivisionByZero)
        );
        assert_eq!(
            Operator::Divide.apply(0.0, 0.0),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn test_apply_overflow() {
        assert_eq!(
            Operator::Multiply.apply(1e200, 1e200),
            Err(ArithmeticError::Overflow)
        );
        assert_eq!(
            Operator::Add.apply(f64::MAX, f64::MAX),
            Err(ArithmeticError::Overflow)
        );
    }

    #[test]
    fn test_apply_decimals() {
        let result = Operator::Add.apply(0.1, 0.2).unwrap();
        assert!((result - 0.3).abs() < 1e-10);
    }

    // --- Property-based tests ---

    proptest! {
        #[test]
        fn prop_add_commutative(a in -1e10f64..1e10f64, b in -1e10f64..1e10f64) {
            prop_assert_eq!(Operator::Add.apply(a, b), Operator::Add.apply(b, a));
        }

        #[test]
        fn prop_multiply_identity(a in -1e10f64..1e10f64) {
            prop_assert_eq!(Operator::Multiply.apply(a, 1.0), Ok(a));
        }

        #[test]
        fn prop_divide_by_self(a in -1e10f64..1e10f64) {
            prop_assume!(a != 0.0);
            let result = Operator::Divide.apply(a, a).unwrap();
            prop_assert!((result - 1.0).abs() < 1e-12);
        }

        #[test]
        fn prop_subtract_self_is_zero(a in -1e10f64..1e10f64) {
            prop_assert_eq!(Operator::Subtract.apply(a, a), Ok(0.0));
        }
    }
}
