//! Terminal runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `stackfall-term`.
//! The engine is driven by wall-clock timestamps through `advance_to`.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use stackfall::config::{parse_args, Command, RunConfig, SEED_ENV, USAGE};
use stackfall::core::GameSnapshot;
use stackfall::input::{should_quit, InputHandler};
use stackfall::session::Session;
use stackfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use stackfall::types::TICK_MS;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let env_seed = std::env::var(SEED_ENV).ok();
    let config = match parse_args(&args, env_seed.as_deref())? {
        Command::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        Command::Run(config) => config,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    let session = result?;

    for line in session.summary_lines() {
        println!("{}", line);
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<Session> {
    let mut session = Session::new(config.resolve_seed(), config.repeat);

    let view = GameView::default();
    let mut input = InputHandler::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let epoch = Instant::now();
    let tick = Duration::from_millis(TICK_MS as u64);
    let mut next_tick = epoch;

    loop {
        // Render.
        session.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input until the next tick is due.
        next_tick += tick;
        loop {
            let timeout = next_tick.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        return Ok(session);
                    }
                    if let Some(ev) = input.handle_key(key) {
                        session.handle(ev);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if let Some(ev) = input.update() {
            session.handle(ev);
        }
        session.advance_to(epoch.elapsed().as_millis() as u64);

        // After a stall, resume the cadence from now instead of catching up.
        let now = Instant::now();
        if next_tick + tick < now {
            next_tick = now;
        }
    }
}
