use std::io::{self, BufRead};

use tracing_subscriber::EnvFilter;

use defender_app::config::AppConfig;
use defender_app::console::{self, ConsoleCommand, HELP};
use defender_app::frontend::{Frontend, JsonLinesFrontend, LogFrontend};
use defender_app::game_loop::{spawn_game_loop, GameLoopCommand};
use defender_profile::JsonFileStore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout can carry the snapshot stream.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = AppConfig::load_or_default();
    let store = JsonFileStore::in_dir(&config.data_dir);
    tracing::info!(profile = %store.path().display(), "Core Defender starting");

    let frontend: Box<dyn Frontend + Send> = match config.json_every {
        Some(every) => Box::new(JsonLinesFrontend::new(io::stdout(), every)),
        None => Box::new(LogFrontend::default()),
    };
    let (cmd_tx, handle) = spawn_game_loop(frontend, store, config.sim_config())?;
    eprintln!("{HELP}");

    for line in io::stdin().lock().lines() {
        let line = line?;
        match console::parse_command(&line) {
            Ok(ConsoleCommand::Player(cmd)) => {
                if cmd_tx.send(GameLoopCommand::Player(cmd)).is_err() {
                    break;
                }
            }
            Ok(ConsoleCommand::Help) => eprintln!("{HELP}"),
            Ok(ConsoleCommand::Quit) => break,
            Err(console::ParseError::Empty) => {}
            Err(e) => eprintln!("{e}"),
        }
    }

    let _ = cmd_tx.send(GameLoopCommand::Shutdown);
    handle.join().map_err(|_| "game loop thread panicked")?;
    Ok(())
}
