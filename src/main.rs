// Terminal Sokoban with ratatui
// Controls: W/A/S/D or arrow keys (immediate response). R to restart, Q to quit.
// Tiles: '#' wall, '@' player, '$' crate, '.' target, '*' crate on target, '+' player on target, ' ' floor.

use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use sokoban::config::GameConfig;
use sokoban::console_interface::ConsoleInput::*;
use sokoban::console_interface::{
    AfterMove, after_move, cleanup_terminal, handle_input, render_game, setup_terminal,
};
use sokoban::core::PuzzleEngine;
use sokoban::core::consts::BUILTIN_LEVEL;
use sokoban::models::GameRenderState;
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = GameConfig::from_args(std::env::args().skip(1))?;
    init_logging(&config)?;

    let options = config.engine_options();
    let engine = match &config.level_path {
        Some(path) => PuzzleEngine::load_file(path, options)?,
        None => PuzzleEngine::load(BUILTIN_LEVEL, options)?,
    };

    let mut terminal = setup_terminal()?;
    let result = run_interactive(engine, &mut terminal);
    cleanup_terminal()?;

    if let Err(err) = &result {
        log::error!("game loop failed: {}", err);
    }
    result
}

fn init_logging(config: &GameConfig) -> Result<(), Box<dyn std::error::Error>> {
    // the terminal is in the alternate screen while playing, so logs go to a file
    let log_out = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(&config.log_file)?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .target(env_logger::Target::Pipe(Box::new(log_out)))
    .init();

    log::info!("sokoban starting with {:?}", config);
    Ok(())
}

fn run_interactive(
    mut engine: PuzzleEngine,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    render_game(
        terminal,
        &GameRenderState {
            engine: &engine,
            last_outcome: None,
            error: None,
        },
    )?;

    loop {
        match handle_input()? {
            Quit => break,
            Restart => {
                engine.restart();
                render_game(
                    terminal,
                    &GameRenderState {
                        engine: &engine,
                        last_outcome: None,
                        error: None,
                    },
                )?;
            }
            UserAction(user_action) => {
                let outcome = engine.apply_action(user_action);
                let to_render = GameRenderState {
                    engine: &engine,
                    last_outcome: Some(outcome),
                    error: outcome.rejection.map(|reason| reason.to_string()),
                };
                render_game(terminal, &to_render)?;

                if after_move(&engine, &outcome) == AfterMove::ShowWinThenQuit {
                    // Keep showing the win screen until user inputs
                    loop {
                        match handle_input()? {
                            Timeout => {}
                            _ => break,
                        }
                    }
                    break;
                }
            }
            Timeout | Unknown => {
                // No input, continue polling
            }
        }
    }

    Ok(())
}
