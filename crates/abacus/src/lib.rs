//! Abacus - keypad calculator engine
//!
//! A four-function calculator with memory, a bounded history and
//! persisted preferences, built as a pure state machine: every key press
//! is an [`Event`], and [`transition`] maps the current session and one
//! event to the next session plus the side effects (sound, clipboard,
//! persistence) the caller should run.
//!
//! Operators chain strictly left to right, the way a pocket calculator
//! does, so `2 + 3 * 4 =` shows `20`.
//!
//! # Example
//!
//! ```rust
//! use abacus::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for key in "2 + 3 * 4 =".split_whitespace() {
//!     calc.submit_key(key).unwrap();
//! }
//! assert_eq!(calc.current_state().display(), "20");
//! assert_eq!(calc.current_state().history().latest(), Some("5 * 4 = 20"));
//!
//! // division by zero is a display state, not a fault
//! calc.submit(Event::Digit(1));
//! calc.submit(Event::Operator(Operator::Divide));
//! calc.submit(Event::Digit(0));
//! calc.submit(Event::Equals);
//! assert!(calc.current_state().is_error());
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![warn(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod effect;
pub mod engine;
pub mod error;
pub mod event;
pub mod keymap;
pub mod keypad;
pub mod session;
pub mod snapshot;
pub mod store;

pub use crate::core::{ArithmeticError, Operator};
pub use effect::{Effect, SoundCue};
pub use engine::{transition, Calculator, Transition};
pub use error::{AbacusError, AbacusResult};
pub use event::Event;
pub use keymap::parse_key;
pub use keypad::{Keypad, KeypadButton};
pub use session::{CalculatorSession, InputState};
pub use snapshot::Snapshot;
pub use store::{FileStore, MemoryStore, SnapshotStore};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::history::History;
    pub use crate::core::{ArithmeticError, Operator};
    pub use crate::effect::{Effect, SoundCue};
    pub use crate::engine::{transition, Calculator, Transition};
    pub use crate::error::{AbacusError, AbacusResult};
    pub use crate::event::Event;
    pub use crate::keymap::parse_key;
    pub use crate::keypad::{Keypad, KeypadButton};
    pub use crate::session::{CalculatorSession, InputState};
    pub use crate::snapshot::Snapshot;
    pub use crate::store::{FileStore, MemoryStore, SnapshotStore};
}
