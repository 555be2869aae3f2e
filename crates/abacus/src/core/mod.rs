//! Arithmetic core: operators, display formatting and the bounded history.
//!
//! Nothing in here knows about input modes. The engine composes these
//! pieces into the keypad state machine.

pub mod format;
pub mod history;
mod operations;

pub use operations::Operator;

use thiserror::Error;

/// Result of a single binary operation
pub type ArithmeticResult = Result<f64, ArithmeticError>;

/// Arithmetic failures.
///
/// These never escape the engine as faults. They are rendered as the
/// `"Error"` display and park the session until a clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Result is not a finite number
    #[error("Overflow: result exceeds the representable range")]
    Overflow,
}
