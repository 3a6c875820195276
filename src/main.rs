//! Blockfall terminal runner (default binary).
//!
//! Fixed-rate frame loop: every frame renders the current snapshot, handles
//! keys that arrived while waiting for the next frame, then lets the gravity
//! clock decide whether the session gets a tick.

use std::fs::File;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use blockfall::core::{Session, SessionSnapshot};
use blockfall::input::{command_for_key, should_quit, should_restart};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::Command;
use blockfall::{GravityClock, RunConfig};

fn main() -> Result<()> {
    let config = RunConfig::from_env().context("invalid configuration")?;
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        warn!(error = %err, "runner stopped with an error");
    }
    result
}

/// Install a file logger. The screen belongs to the game, so nothing is
/// installed without a log path.
fn init_logging(config: &RunConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("invalid log filter {:?}", config.log_filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn new_session(config: &RunConfig) -> Session {
    let seed = config.game_seed();
    info!(seed, "new game");
    Session::new(seed)
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    let mut session = new_session(config);
    let mut clock = GravityClock::new();

    let view = GameView::default();
    let mut snap = SessionSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame_duration = GravityClock::frame_duration();
    let mut last_frame = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next frame.
        let timeout = frame_duration.saturating_sub(last_frame.elapsed());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        info!(
                            score = session.score(),
                            lines = session.lines(),
                            "quit"
                        );
                        return Ok(());
                    }

                    if session.is_game_over() && should_restart(key) {
                        session = new_session(config);
                        clock.reset();
                        continue;
                    }

                    match command_for_key(key) {
                        Some(Command::SoftDrop) if !session.is_paused() => clock.hurry(),
                        Some(command) => {
                            session.on_command(command);
                        }
                        None => {}
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Frame.
        if last_frame.elapsed() >= frame_duration {
            last_frame = Instant::now();
            if clock.advance() {
                session.on_tick();
            }
        }
    }
}
