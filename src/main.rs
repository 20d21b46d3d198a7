//! Gravity runner (default binary).
//!
//! `gravity` plays in the terminal; `gravity trace ...` runs a scripted
//! session headless and prints JSON lines.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use gravity::config::GameConfig;
use gravity::core::{present, GameSession};
use gravity::input::{handle_key_event, handle_mouse_event, should_quit, InputHandler};
use gravity::logging::{init_logging, LogTarget, LoggingConfig};
use gravity::term::TerminalBackend;
use gravity::trace::{parse_trace_args, run_trace};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if let Some(trace) = parse_trace_args(&args, config.seed)? {
        init_logging(LoggingConfig {
            filter: config.log_filter.clone(),
            target: LogTarget::Stderr,
        })?;
        let stdout = io::stdout();
        run_trace(&trace, &mut stdout.lock())?;
        return Ok(());
    }

    // The terminal belongs to the game; only log to a file.
    init_logging(LoggingConfig {
        filter: config.log_filter.clone(),
        target: match &config.log_path {
            Some(path) => LogTarget::File(path.clone()),
            None => LogTarget::Off,
        },
    })?;
    log::info!("gravity starting: seed={} tick_ms={}", config.seed, config.tick_ms);

    let mut backend = TerminalBackend::new();
    backend.enter_terminal()?;

    let result = run(&mut backend, &config);

    // Always try to restore terminal state.
    let _ = backend.exit_terminal();
    result
}

fn run(backend: &mut TerminalBackend, config: &GameConfig) -> Result<()> {
    let mut session = GameSession::new(config.seed);
    let mut input_handler = InputHandler::new();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(config.tick_ms as u64);

    loop {
        present(&mut session, backend)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(action) = input_handler.handle_key_press(key.code) {
                            session.apply_action(action);
                        }
                        if let Some(action) = handle_key_event(key) {
                            session.apply_action(action);
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Keeps a held turn key alive on terminals that repeat.
                        input_handler.handle_key_press(key.code);
                    }
                    KeyEventKind::Release => {
                        if let Some(action) = input_handler.handle_key_release(key.code) {
                            session.apply_action(action);
                        }
                    }
                },
                Event::Mouse(mouse) => {
                    let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
                    if let Some(action) = handle_mouse_event(mouse, cols, rows) {
                        session.apply_action(action);
                    }
                }
                Event::Resize(cols, rows) => backend.resize(cols, rows),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();

            if let Some(action) = input_handler.update() {
                session.apply_action(action);
            }
            session.tick(elapsed.as_millis() as u32);

            for event in session.take_events() {
                log::debug!("event: {:?}", event);
            }
        }

        if session.quit_requested() {
            log::info!("quit requested");
            return Ok(());
        }
    }
}
