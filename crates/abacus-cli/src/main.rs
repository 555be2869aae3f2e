//! Abacus CLI: a keypad calculator that remembers its session
//!
//! ## Usage
//!
//! ```bash
//! abacus press 1 + 2 =     # prints 3
//! abacus press M+ AC MR    # memory survives between runs
//! abacus show --json       # the stored snapshot
//! abacus repl              # one line of keys at a time
//! ```

use abacus::{FileStore, Keypad};
use abacus_cli::{
    init_logging, App, Cli, CliConfig, CliResult, ColorChoice, Commands, EffectRunner, Renderer,
    Verbosity,
};
use clap::Parser;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);
    init_logging(&config)?;

    let renderer = Renderer::new(config.color.should_color());
    let quiet = config.verbosity.is_quiet();

    if matches!(cli.command, Commands::Keypad) {
        print(quiet, &renderer.keypad(&Keypad::new()));
        return Ok(());
    }

    let store = FileStore::new(config.state_path()?);
    let mut app = App::open(store, renderer, EffectRunner::new(quiet));

    match cli.command {
        Commands::Press(args) => {
            let out = app.press(&args.keys)?;
            print(quiet, &out);
        }
        Commands::Show(args) => print(quiet, &app.show(args.json)?),
        Commands::History => print(quiet, &app.history()),
        Commands::Repl => {
            let stdin = io::stdin();
            app.repl(stdin.lock(), io::stdout().lock())?;
        }
        Commands::Reset => {
            app.reset()?;
            print(quiet, "Session cleared");
        }
        Commands::Keypad => {}
    }
    Ok(())
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.into();

    let config = CliConfig::new().with_verbosity(verbosity).with_color(color);
    match &cli.state {
        Some(path) => config.with_state_path(path),
        None => config,
    }
}

fn print(quiet: bool, text: &str) {
    if !quiet {
        println!("{text}");
    }
}
