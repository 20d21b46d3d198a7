//! Gameplay scenarios driven through the public session API.

use gravity::core::{GameSession, Hazards, SimpleRng};
use gravity::types::*;

/// A session in Play on level 1 with an empty field.
fn playing(seed: u32) -> GameSession {
    let mut session = GameSession::new(seed);
    session.apply_action(GameAction::Activate);
    session.tick(LOADING_MS);
    assert_eq!(session.screen(), Screen::Play);
    session.hazards = Hazards::empty();
    session.take_events();
    session
}

fn walk(session: &mut GameSession, dir: Direction, cells: usize) {
    for _ in 0..cells {
        assert!(session.apply_action(GameAction::Move(dir)));
        session.tick(0);
    }
}

#[test]
fn test_new_game_defaults() {
    let session = playing(12345);
    let p = &session.progress;
    assert_eq!(p.lives(), 3);
    assert_eq!(p.health(), 15.0);
    assert_eq!(p.score(), 0);
    assert_eq!(p.level(), 1);
    assert_eq!(p.timer(), 15);
    assert_eq!(session.player.pos, GridPos::new(0, 9));
    assert!(!session.player.jumping());
}

#[test]
fn test_hole_costs_a_life_and_keeps_progress() {
    let mut session = playing(7);
    session.hazards.set_coin(0, Some(GridPos::new(1, 9)));
    walk(&mut session, Direction::East, 1);
    walk(&mut session, Direction::West, 1);
    assert_eq!(session.progress.score(), 10);

    session.hazards.set_holes(&[80]);
    session.progress.damage(3.0);
    walk(&mut session, Direction::North, 1);

    assert_eq!(session.progress.lives(), 2);
    assert_eq!(session.player.pos, SPAWN);
    assert_eq!(session.progress.health(), MAX_HEALTH);
    assert_eq!(session.progress.score(), 10);
    assert_eq!(session.progress.level(), 1);
    assert_eq!(session.screen(), Screen::Play);
    assert!(session.take_events().contains(&GameEvent::Fell));
}

#[test]
fn test_five_coins_and_exit_clear_the_level() {
    let mut session = playing(99);
    for (slot, z) in (4..=8).rev().enumerate() {
        session.hazards.set_coin(slot, Some(GridPos::new(0, z)));
    }

    walk(&mut session, Direction::North, 9);
    assert_eq!(session.progress.coins_collected(), COINS_TO_CLEAR);
    assert_eq!(session.progress.score(), 5 * COIN_SCORE);

    walk(&mut session, Direction::East, 9);

    assert_eq!(session.progress.level(), 2);
    assert_eq!(session.progress.timer(), 30);
    assert_eq!(session.progress.coins_collected(), 0);
    assert_eq!(session.player.pos, SPAWN);
    assert_eq!(session.screen(), Screen::Play);
    assert!(session
        .take_events()
        .contains(&GameEvent::LevelCleared { level: 2 }));
}

#[test]
fn test_exit_without_enough_coins_does_nothing() {
    let mut session = playing(99);
    session.hazards.set_coin(2, Some(GridPos::new(0, 8)));
    walk(&mut session, Direction::North, 9);
    walk(&mut session, Direction::East, 9);
    assert_eq!(session.player.pos, GridPos::from_index(EXIT_INDEX));
    assert_eq!(session.progress.level(), 1);
    // Slot 2 earns score but no completion credit.
    assert_eq!(session.progress.score(), COIN_SCORE);
    assert_eq!(session.progress.coins_collected(), 0);
}

#[test]
fn test_timer_expiry_ends_play() {
    let mut session = playing(3);
    session.apply_action(GameAction::ToggleView(ViewMode::Tower));
    session.apply_action(GameAction::ToggleView(ViewMode::Follow));
    session.apply_action(GameAction::Turn(Turn::Left));
    session.hazards.set_holes(&[80]);
    walk(&mut session, Direction::North, 1);
    assert_eq!(session.progress.lives(), 2);

    for _ in 0..15 {
        session.tick(TIMER_INTERVAL_MS);
    }

    assert_eq!(session.screen(), Screen::End);
    assert_eq!(session.end_reason(), Some(EndReason::TimeUp));
    assert_eq!(session.progress.lives(), 3);
    assert!(!session.camera.toggles().any());
    assert_eq!(session.snapshot().camera.mode, ViewMode::Default);
}

#[test]
fn test_landing_on_raised_elevator_pushes_back() {
    let mut session = playing(5);
    session.hazards.set_elevator_tiles(&[70]);
    session.elevator.set_steps(ELEVATOR_AMPLITUDE_STEPS, true);

    assert!(session.apply_action(GameAction::Jump));
    for _ in 0..JUMP_STEPS {
        session.tick(0);
    }

    assert!(!session.player.jumping());
    assert_eq!(session.progress.health(), MAX_HEALTH - ELEVATOR_PENALTY);
    assert_eq!(session.player.pos, GridPos::new(0, 8));
    assert!(!session.player.on_elevator);
    assert!(session.take_events().contains(&GameEvent::ElevatorBump));
}

#[test]
fn test_walking_into_raised_elevator_costs_health() {
    let mut session = playing(5);
    session.hazards.set_elevator_tiles(&[80]);
    session.elevator.set_steps(ELEVATOR_AMPLITUDE_STEPS, true);

    walk(&mut session, Direction::North, 1);

    assert_eq!(session.player.pos, SPAWN);
    assert_eq!(session.progress.health(), MAX_HEALTH - ELEVATOR_PENALTY);
    assert!(session.take_events().contains(&GameEvent::ElevatorBump));

    // A second attempt costs again; the third would be fatal.
    walk(&mut session, Direction::North, 1);
    assert_eq!(session.progress.health(), MAX_HEALTH - 2.0 * ELEVATOR_PENALTY);
    walk(&mut session, Direction::North, 1);
    assert_eq!(session.progress.lives(), 2);
    assert_eq!(session.progress.health(), MAX_HEALTH);
    assert_eq!(session.player.pos, SPAWN);
}

#[test]
fn test_jump_replays_identically() {
    let run = || {
        let mut session = playing(1);
        session.apply_action(GameAction::Face(Direction::East));
        session.apply_action(GameAction::Jump);
        let mut heights = Vec::new();
        while session.player.jumping() {
            session.tick(TICK_MS);
            heights.push(session.player.vertical_offset());
        }
        (heights, session.player.pos)
    };
    let (a, pos_a) = run();
    let (b, pos_b) = run();
    assert_eq!(a, b);
    assert_eq!(pos_a, GridPos::new(2, 9));
    assert_eq!(pos_a, pos_b);
}

#[test]
fn test_invariants_hold_under_random_play() {
    let mut session = playing(2024);
    session.progress.set_level(FINAL_LEVEL);
    let mut rng = SimpleRng::new(77);

    let actions = [
        GameAction::Move(Direction::North),
        GameAction::Move(Direction::East),
        GameAction::Move(Direction::South),
        GameAction::Move(Direction::West),
        GameAction::Face(Direction::North),
        GameAction::Jump,
        GameAction::StrideUp,
        GameAction::StrideDown,
        GameAction::ToggleView(ViewMode::Adventure),
        GameAction::Turn(Turn::Right),
        GameAction::TurnRelease,
        GameAction::Activate,
    ];

    for _ in 0..20_000 {
        if rng.next_range(4) == 0 {
            let action = actions[rng.next_range(actions.len() as u32) as usize];
            session.apply_action(action);
        }
        session.tick(TICK_MS);
        session.take_events();

        let p = &session.progress;
        assert!((0.0..=MAX_HEALTH).contains(&p.health()));
        assert!(p.lives() <= MAX_LIVES);
        assert!(p.coins_collected() <= COINS_TO_CLEAR + 1);
        assert!(session.elevator.height().abs() <= 0.5 + 1e-4);
        if session.screen() == Screen::Play {
            assert!(p.level() >= 1 && p.level() <= FINAL_LEVEL);
            assert!(p.lives() >= 1);
        }
    }
}
