//! Controller and session tests - whole games driven by scripted input

use std::time::{Duration, Instant};

use cursed_panels::core::session::{self, RecordingSink};
use cursed_panels::core::{GameConfig, GameState, Grid, ManualClock, ScriptedInput};
use cursed_panels::types::{Command, Flow, Mode, StatusLine, Symbol};

fn config(seed: u32) -> GameConfig {
    GameConfig::new(1, &["a", "b", "c"], 10, 4, seed).unwrap()
}

fn text(state: &GameState) -> Vec<String> {
    state.grid().to_text()
}

#[test]
fn test_golden_game_seed_4() {
    let t0 = Instant::now();
    let mut game = GameState::new(&config(4), t0);
    assert_eq!(
        text(&game),
        ["0101", "2012", "0.0.", "1.1.", "..0.", "..1.", "..0.", "....", "....", "...."]
    );

    // Select (0,0) and push it into (0,1): a 3-run, then a 2-run after falling.
    assert_eq!(game.apply_command(Command::ToggleSelect, t0), Flow::Continue);
    assert_eq!(game.apply_command(Command::MoveDown, t0), Flow::Continue);
    assert_eq!(game.score(), 15);
    assert_eq!(game.panels_cleared(), 5);
    assert_eq!(game.cursor().position(), (0, 1));
    assert!(!game.cursor().selecting());
    assert_eq!(
        text(&game),
        ["1.02", "2.1.", "0.0.", "1.1.", "..0.", "....", "....", "....", "....", "...."]
    );

    assert!(game.tick(t0 + Duration::from_secs(1)).is_none());

    let first = game.tick(t0 + Duration::from_secs(2)).expect("advance due");
    assert!(!first.game_over);
    assert_eq!((first.chain.eliminated, first.chain.score), (4, 16));
    assert_eq!(game.score(), 31);
    assert_eq!(
        text(&game),
        ["021.", "1.0.", "2.1.", "0.0.", "1...", "....", "....", "....", "....", "...."]
    );

    // 2 then 3 eliminated: 4 + floor(1.5 * 9).
    let second = game.tick(t0 + Duration::from_secs(4)).expect("advance due");
    assert_eq!((second.chain.eliminated, second.chain.score), (5, 17));
    assert_eq!(game.score(), 48);
    assert_eq!(game.panels_cleared(), 14);
    assert_eq!(game.speed(), 1);
    assert_eq!(game.mode(), Mode::Playing);
    assert_eq!(
        text(&game),
        ["121.", "0.0.", "1...", "2...", "0...", "1...", "....", "....", "....", "...."]
    );
}

#[test]
fn test_same_seed_same_game() {
    let t0 = Instant::now();
    let play = || {
        let mut game = GameState::new(&config(77), t0);
        for (i, cmd) in [Command::MoveRight, Command::ToggleSelect, Command::MoveDown]
            .into_iter()
            .enumerate()
        {
            game.apply_command(cmd, t0 + Duration::from_millis(i as u64));
        }
        for s in 1..=5 {
            game.tick(t0 + Duration::from_secs(2 * s));
        }
        (text(&game), game.score(), game.mode())
    };
    assert_eq!(play(), play());
}

#[test]
fn test_blocked_move_keeps_selection() {
    let t0 = Instant::now();
    let mut game = GameState::new(&config(4), t0);
    let before = text(&game);

    game.apply_command(Command::ToggleSelect, t0);
    game.apply_command(Command::MoveLeft, t0);
    game.apply_command(Command::MoveUp, t0);
    assert!(game.cursor().selecting());
    assert_eq!(game.status(), StatusLine::Selecting);
    assert_eq!(text(&game), before);
}

#[test]
fn test_session_golden_swap() {
    let t0 = Instant::now();
    let clock = ManualClock::new(t0);
    let mut game = GameState::new(&config(4), t0);
    let mut input = ScriptedInput::commands([Command::ToggleSelect, Command::MoveDown]);
    let mut sink = RecordingSink::default();

    let stats = session::run(&mut game, &mut input, &mut sink, &clock).unwrap();
    assert_eq!(stats.iterations, 3);
    assert_eq!(stats.commands, 3);
    assert_eq!(stats.advances, 0);
    assert_eq!(stats.frames, 3);
    assert_eq!(sink.frames.len(), 3);

    assert_eq!(sink.frames[0].status, StatusLine::Directions);
    assert_eq!(sink.frames[0].score, 0);
    assert_eq!(sink.frames[1].status, StatusLine::Selecting);
    assert!(sink.frames[1].cursor.select);

    let last = sink.frames.last().unwrap();
    assert_eq!(last.score, 15);
    assert_eq!((last.cursor.x, last.cursor.y, last.cursor.select), (0, 1, false));
    assert_eq!(last.status, StatusLine::Directions);
    assert_eq!(last.symbols, ['a', 'b', 'c']);
    let expected = Grid::from_text(&[
        "1.02", "2.1.", "0.0.", "1.1.", "..0.", "....", "....", "....", "....", "....",
    ])
    .unwrap();
    assert_eq!(last.board, expected.cells());
}

#[test]
fn test_session_advances_on_interval() {
    let run_idle = |idle: usize| {
        let t0 = Instant::now();
        let clock = ManualClock::stepping(t0, Duration::from_millis(500));
        let mut game = GameState::new(&config(4), clock.peek());
        let mut input = ScriptedInput::new(std::iter::repeat(None).take(idle));
        session::run(&mut game, &mut input, &mut RecordingSink::default(), &clock).unwrap()
    };

    // Ticks read the clock at 0, 0.5, 1.0, ... seconds; speed 1 advances at 2s.
    assert_eq!(run_idle(4).advances, 0);
    assert_eq!(run_idle(5).advances, 1);
    assert_eq!(run_idle(9).advances, 2);
}

#[test]
fn test_session_pause_excludes_paused_time() {
    let run_with_tail = |tail: usize| {
        let t0 = Instant::now();
        let clock = ManualClock::stepping(t0, Duration::from_millis(500));
        let mut game = GameState::new(&config(4), clock.peek());

        let mut steps = vec![Some(Command::TogglePause)];
        steps.extend(std::iter::repeat(None).take(8));
        steps.push(Some(Command::TogglePause));
        steps.extend(std::iter::repeat(None).take(tail));

        let mut input = ScriptedInput::new(steps);
        let mut sink = RecordingSink::default();
        let stats = session::run(&mut game, &mut input, &mut sink, &clock).unwrap();
        (stats, sink, game)
    };

    // Paused from 0s to 5s: the first advance is due 2s after resuming.
    let (stats, sink, game) = run_with_tail(2);
    assert_eq!(stats.advances, 0);
    assert_eq!(game.mode(), Mode::Playing);
    assert!(sink.frames.iter().any(|f| f.status == StatusLine::Paused));

    let (stats, _, _) = run_with_tail(3);
    assert_eq!(stats.advances, 1);
}

#[test]
fn test_session_game_over_then_decline() {
    let t0 = Instant::now();
    let clock = ManualClock::stepping(t0, Duration::from_secs(1));
    let mut game = GameState::new(&config(4), clock.peek());
    game.grid_mut().set(8, 0, Some(Symbol(0)));

    let mut input = ScriptedInput::new([None, None, None, Some(Command::ConfirmNo)]);
    let mut sink = RecordingSink::default();
    let stats = session::run(&mut game, &mut input, &mut sink, &clock).unwrap();

    assert_eq!(stats.advances, 1);
    assert_eq!(stats.iterations, 4);
    assert_eq!(game.mode(), Mode::GameOver);
    let last = sink.frames.last().unwrap();
    assert_eq!(last.status, StatusLine::GameOver);
    assert_eq!(last.mode, Mode::GameOver);
}

#[test]
fn test_game_over_restart_starts_new_episode() {
    let t0 = Instant::now();
    let mut game = GameState::new(&config(4), t0);
    game.grid_mut().set(8, 0, Some(Symbol(0)));
    let update = game.tick(t0 + Duration::from_secs(2)).unwrap();
    assert!(update.game_over);

    let later = t0 + Duration::from_secs(3);
    assert_eq!(game.apply_command(Command::ConfirmYes, later), Flow::Continue);
    assert_eq!(game.mode(), Mode::Playing);
    assert_eq!(game.episode_id(), 1);
    assert_eq!(game.score(), 0);
    assert_eq!(game.speed(), 1);
    assert_eq!(game.cursor().position(), (0, 0));
    assert!(!game.grid().has_runs());
    assert!(game.grid().is_row_empty(8));

    // The advance clock restarts at the reset.
    assert!(game.tick(later + Duration::from_millis(1900)).is_none());
    assert!(game.tick(later + Duration::from_secs(2)).is_some());
}
