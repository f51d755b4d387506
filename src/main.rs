//! Terminal Snake runner (default binary).
//!
//! This is the composition root. It owns the single game session, and one
//! task handles both key events and timer triggers, so the engine is only
//! ever touched from here. The screen is redrawn after every change.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use tracing::{info, Level};

use tui_snake::core::{GameConfig, GameEngine};
use tui_snake::engine::{GameSession, Scheduler};
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_logging()?;
    let config = GameConfig::load()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config).await;

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to `SNAKE_LOG_PATH` if set; the terminal itself belongs to the game.
fn init_logging() -> Result<()> {
    let Some(path) = std::env::var("SNAKE_LOG_PATH")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
    else {
        return Ok(());
    };

    let level = std::env::var("SNAKE_LOG_LEVEL")
        .ok()
        .and_then(|s| s.trim().parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    let file =
        File::create(&path).with_context(|| format!("failed to create log file {path}"))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| anyhow!(e))
        .context("failed to install log subscriber")
}

async fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let engine = GameEngine::new(config)?;
    let (scheduler, mut triggers) = Scheduler::new();
    let mut session = GameSession::new(engine, &scheduler);
    info!(
        tick_ms = session.engine().tick_ms(),
        apple_ms = session.engine().apple_interval().as_millis() as u64,
        "session ready"
    );

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut events = EventStream::new();
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(session.engine(), Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        dirty |= session.apply_action(action);
                    }
                }
                Some(Ok(Event::Resize(..))) => {
                    term.invalidate();
                    dirty = true;
                }
                Some(Ok(_)) => {}
                Some(Err(err)) => return Err(err).context("failed to read terminal events"),
                None => return Ok(()),
            },
            Some(trigger) = triggers.recv() => {
                dirty |= session.handle(trigger);
            }
        }
    }
}
