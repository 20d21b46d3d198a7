//! Headless trace mode: run a scripted game and print JSON-lines frames.
//!
//! ```text
//! gravity trace [--seed N] [--ticks N] [--every N] [--actions a,b,c]
//! ```
//!
//! Actions are applied one per tick, in order, after the loading screen.
//! A frame is written every `--every` ticks and on any tick that produced
//! events. The run stops early when the session reaches the End screen.

use std::io::Write;

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::core::{GameSession, GameSnapshot};
use crate::types::{GameAction, GameEvent, Screen, LOADING_MS, TICK_MS};

#[derive(Debug, Clone, PartialEq)]
pub struct TraceConfig {
    pub seed: u32,
    pub ticks: u32,
    pub every: u32,
    pub actions: Vec<GameAction>,
}

impl TraceConfig {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            ticks: 600,
            every: 60,
            actions: Vec::new(),
        }
    }
}

/// Parse `trace ...` arguments. Returns `Ok(None)` when the first argument
/// is not `trace`.
pub fn parse_trace_args(args: &[String], default_seed: u32) -> Result<Option<TraceConfig>> {
    if args.first().map(String::as_str) != Some("trace") {
        return Ok(None);
    }

    let mut cfg = TraceConfig::new(default_seed);
    let mut i = 1usize;
    while i < args.len() {
        let flag = args[i].as_str();
        i += 1;
        let value = args
            .get(i)
            .ok_or_else(|| anyhow!("trace: missing value for {}", flag));
        match flag {
            "--seed" => cfg.seed = parse_number(flag, value?)?,
            "--ticks" => cfg.ticks = parse_number(flag, value?)?,
            "--every" => {
                cfg.every = parse_number(flag, value?)?;
                if cfg.every == 0 {
                    return Err(anyhow!("trace: --every must be at least 1"));
                }
            }
            "--actions" => {
                cfg.actions = value?
                    .split(',')
                    .filter(|s| !s.trim().is_empty())
                    .map(|s| {
                        GameAction::from_str(s)
                            .ok_or_else(|| anyhow!("trace: unknown action: {}", s.trim()))
                    })
                    .collect::<Result<_>>()?;
            }
            other => return Err(anyhow!("trace: unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(Some(cfg))
}

fn parse_number(flag: &str, value: &str) -> Result<u32> {
    value
        .parse::<u32>()
        .map_err(|_| anyhow!("trace: invalid {} value: {}", flag, value))
}

#[derive(Debug, Serialize)]
pub struct TracePlayer {
    pub x: i8,
    pub z: i8,
    pub facing: &'static str,
    pub jumping: bool,
    pub on_elevator: bool,
    pub world: [f32; 3],
}

/// One JSON line of trace output.
#[derive(Debug, Serialize)]
pub struct TraceFrame {
    pub tick: u32,
    pub screen: &'static str,
    pub paused: bool,
    pub level: u8,
    pub lives: u8,
    pub health: f32,
    pub score: u32,
    pub coins: u8,
    pub timer: u32,
    pub player: TracePlayer,
    pub view: &'static str,
    pub eye: [f32; 3],
    pub elevator_height: f32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_reason: Option<&'static str>,
}

impl TraceFrame {
    pub fn from_snapshot(tick: u32, snap: &GameSnapshot, events: &[GameEvent]) -> Self {
        let p = &snap.player;
        Self {
            tick,
            screen: snap.screen.as_str(),
            paused: snap.paused,
            level: snap.hud.level,
            lives: snap.hud.lives,
            health: snap.hud.health,
            score: snap.hud.score,
            coins: snap.hud.coins_collected,
            timer: snap.hud.timer,
            player: TracePlayer {
                x: p.cell.x,
                z: p.cell.z,
                facing: p.facing.as_str(),
                jumping: p.jumping,
                on_elevator: p.on_elevator,
                world: p.world.to_array(),
            },
            view: snap.camera.mode.as_str(),
            eye: snap.camera.eye.to_array(),
            elevator_height: snap.elevator_height,
            events: events.iter().map(event_label).collect(),
            end_reason: snap.end_reason.map(|r| r.as_str()),
        }
    }
}

fn event_label(event: &GameEvent) -> String {
    match event {
        GameEvent::CoinCollected { slot } => format!("coin:{slot}"),
        GameEvent::Fell => "fell".to_string(),
        GameEvent::ElevatorBump => "elevator_bump".to_string(),
        GameEvent::LevelCleared { level } => format!("level:{level}"),
        GameEvent::SessionEnded(reason) => format!("end:{}", reason.as_str()),
        GameEvent::ScreenEntered(screen) => format!("screen:{}", screen.as_str()),
    }
}

/// Run the scripted session and write frames to `out`. Returns the number of
/// frames written.
pub fn run_trace<W: Write>(cfg: &TraceConfig, out: &mut W) -> Result<usize> {
    let mut session = GameSession::new(cfg.seed);
    session.new_game();
    session.enter(Screen::Loading);
    session.tick(LOADING_MS);
    let events = session.take_events();

    log::info!(
        "trace: seed={} ticks={} actions={}",
        cfg.seed,
        cfg.ticks,
        cfg.actions.len()
    );

    let mut frames = 0usize;
    write_frame(out, &TraceFrame::from_snapshot(0, &session.snapshot(), &events))?;
    frames += 1;

    let mut actions = cfg.actions.iter();
    for tick in 1..=cfg.ticks {
        if let Some(&action) = actions.next() {
            let applied = session.apply_action(action);
            log::debug!("trace: tick={} action={} applied={}", tick, action.name(), applied);
        }
        session.tick(TICK_MS);
        let events = session.take_events();

        let ended = session.screen() == Screen::End;
        if tick % cfg.every == 0 || !events.is_empty() || ended {
            write_frame(out, &TraceFrame::from_snapshot(tick, &session.snapshot(), &events))?;
            frames += 1;
        }
        if ended || session.quit_requested() {
            break;
        }
    }
    out.flush()?;
    Ok(frames)
}

fn write_frame<W: Write>(out: &mut W, frame: &TraceFrame) -> Result<()> {
    serde_json::to_writer(&mut *out, frame)?;
    out.write_all(b"\n")?;
    Ok(())
}
