use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::{LevelFilter, error, info};
use torus_snake::clock::ClockContext;
use torus_snake::config::{ConfigOverrides, GameConfig};
use torus_snake::error::{AppError, ConfigError};
use torus_snake::game::GameState;
use torus_snake::input::{GameInput, InputHandler};
use torus_snake::logging::{default_log_path, init_file_logger};
use torus_snake::renderer::{self, RenderContext, THEME_CLASSIC};
use torus_snake::terminal_runtime::{AppTerminal, TerminalGuard};

#[derive(Debug, Parser)]
#[command(name = "torus-snake", version, about = "Snake on a wrap-around grid")]
struct Cli {
    /// Grid width in cells.
    #[arg(long)]
    width: Option<u16>,

    /// Grid height in cells.
    #[arg(long)]
    height: Option<u16>,

    /// Snake length that wins the game.
    #[arg(long = "win-length")]
    win_length: Option<usize>,

    /// Starting speed in ticks per second.
    #[arg(long)]
    fps: Option<u32>,

    /// JSON config file; defaults to the platform config dir.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log file; defaults to the platform data dir.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log level written to the log file.
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,

    /// Seed for food placement and reset directions.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{error}");
            eprintln!("torus-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = resolve_config(&cli)?;

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    init_file_logger(&log_path, cli.log_level)?;
    info!(
        "starting on {}x{} grid, win length {}, {} ticks/s",
        config.grid.width, config.grid.height, config.win_length, config.fps_default
    );

    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(config, seed),
        None => GameState::new(config),
    };

    let mut session = TerminalGuard::enter()?;
    let render_context = RenderContext::new(THEME_CLASSIC);
    let mut clock = ClockContext::new(Instant::now());
    let mut input = InputHandler::new();

    play(
        session.terminal_mut(),
        &mut state,
        &render_context,
        &mut clock,
        &mut input,
    )?;

    info!(
        "session ended after {} ticks with score {}",
        state.tick_count, state.score
    );
    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<GameConfig, ConfigError> {
    let mut config = GameConfig::load(cli.config.as_deref())?;
    config.apply_overrides(ConfigOverrides {
        width: cli.width,
        height: cli.height,
        win_length: cli.win_length,
        fps: cli.fps,
    });
    config.validate()?;
    Ok(config)
}

/// Drives ticks until the player quits or acknowledges victory.
fn play(
    terminal: &mut AppTerminal,
    state: &mut GameState,
    render_context: &RenderContext,
    clock: &mut ClockContext,
    input: &mut InputHandler,
) -> io::Result<()> {
    loop {
        let snapshot = state.snapshot();
        terminal.draw(|frame| renderer::render(frame, render_context, &snapshot, clock.is_paused()))?;

        let timeout = clock.time_until_next_tick(state.ticks_per_second, Instant::now());
        if let Some(game_input) = input.poll_input(timeout)? {
            match game_input {
                GameInput::Quit => return Ok(()),
                GameInput::Confirm if state.is_finished() => return Ok(()),
                GameInput::Pause if !state.is_finished() => clock.toggle_pause(Instant::now()),
                _ if clock.is_paused() => {}
                other => state.apply_input(other),
            }
        }

        let now = Instant::now();
        if clock.is_due(state.ticks_per_second, now) {
            state.tick();
            clock.mark_tick(now);
            if state.is_finished() {
                clock.stop();
            }
        }
    }
}
