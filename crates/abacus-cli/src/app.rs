//! One CLI invocation: a calculator bound to a snapshot store.

use crate::effects::EffectRunner;
use crate::error::CliResult;
use crate::output::Renderer;
use abacus::{parse_key, AbacusError, Calculator, CalculatorSession, Event, SnapshotStore};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Words that end a REPL session
const QUIT_WORDS: [&str; 2] = ["quit", "exit"];

/// The calculator, its store and how to present it
#[derive(Debug)]
pub struct App<S: SnapshotStore> {
    calculator: Calculator,
    store: S,
    effects: EffectRunner,
    renderer: Renderer,
}

impl<S: SnapshotStore> App<S> {
    /// Loads the session from `store`
    pub fn open(store: S, renderer: Renderer, effects: EffectRunner) -> Self {
        let calculator = Calculator::load_from(&store);
        debug!(display = calculator.current_state().display(), "session loaded");
        Self {
            calculator,
            store,
            effects,
            renderer,
        }
    }

    /// Current session
    #[must_use]
    pub const fn session(&self) -> &CalculatorSession {
        self.calculator.current_state()
    }

    /// The underlying store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    fn submit(&mut self, event: Event) {
        let effects = self.calculator.submit(event);
        self.effects.run(&effects, &mut self.store);
    }

    /// Presses every key in order and renders the result.
    ///
    /// All keys are checked first; one unknown key rejects the whole batch
    /// and nothing is saved.
    pub fn press<K: AsRef<str>>(&mut self, keys: &[K]) -> CliResult<String> {
        let events = keys
            .iter()
            .map(|key| {
                let key = key.as_ref();
                parse_key(key).ok_or_else(|| AbacusError::unknown_key(key))
            })
            .collect::<Result<Vec<_>, _>>()?;

        for event in events {
            self.submit(event);
        }
        Ok(self.renderer.session(self.session()))
    }

    /// Reads whitespace-separated keys per line until EOF, `quit` or `exit`.
    ///
    /// Unknown tokens are reported and skipped. The session is rendered
    /// after every line that held at least one key.
    pub fn repl<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> CliResult<()> {
        writeln!(output, "{}", self.renderer.session(self.session()))?;
        for line in input.lines() {
            let line = line?;
            let mut pressed = false;
            for token in line.split_whitespace() {
                if QUIT_WORDS.contains(&token.to_ascii_lowercase().as_str()) {
                    return Ok(());
                }
                match parse_key(token) {
                    Some(event) => {
                        self.submit(event);
                        pressed = true;
                    }
                    None => {
                        warn!(key = token, "unknown key, skipped");
                        writeln!(output, "unknown key: {token}")?;
                    }
                }
            }
            if pressed {
                writeln!(output, "{}", self.renderer.session(self.session()))?;
            }
        }
        Ok(())
    }

    /// Renders the session, or the snapshot JSON
    pub fn show(&self, json: bool) -> CliResult<String> {
        if json {
            Ok(self.calculator.snapshot().to_json_pretty()?)
        } else {
            Ok(self.renderer.session(self.session()))
        }
    }

    /// Renders the history
    #[must_use]
    pub fn history(&self) -> String {
        self.renderer.history(self.session().history())
    }

    /// Drops the stored snapshot and starts over
    pub fn reset(&mut self) -> CliResult<()> {
        self.store.clear()?;
        self.calculator = Calculator::new();
        Ok(())
    }
}
