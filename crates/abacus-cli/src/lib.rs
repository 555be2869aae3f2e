//! Abacus CLI Library
//!
//! Terminal front end for the [`abacus`] calculator engine: argument
//! parsing, configuration, logging, effect execution and rendering.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod app;
mod commands;
mod config;
mod effects;
mod error;
pub mod logging;
mod output;

pub use app::App;
pub use commands::{Cli, ColorArg, Commands, PressArgs, ShowArgs};
pub use config::{default_state_path, CliConfig, ColorChoice, Verbosity};
pub use effects::EffectRunner;
pub use error::{CliError, CliResult};
pub use logging::init_logging;
pub use output::Renderer;
