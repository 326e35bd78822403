use std::process::ExitCode;

use trollhunt::console::Console;
use trollhunt::engine::Vocabulary;
use trollhunt::{Game, GameConfig, GameError, load_builtin_world};

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "game aborted");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Only a world that fails to load is an error. Every way a session ends,
/// a broken terminal included, exits cleanly.
fn run() -> Result<(), GameError> {
    let config = GameConfig::from_env();
    let world = load_builtin_world()?;
    let mut game = Game::new(world, Vocabulary::standard(), &config);
    let mut console = Console::stdio();

    if config.clear_screen {
        console.clear_screen();
    }
    console.play(&mut game);

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, prelude::*};

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
