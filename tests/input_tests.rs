//! Input handling: paddle boundaries, pause toggling and quit.

use tui_pong::core::{GameObject, GameState};
use tui_pong::types::{Boundary, Control, Field, GameAction, Player, Velocity, PADDLE_HEIGHT};

fn field20() -> GameState {
    GameState::from_parts(
        Field::new(40, 20),
        GameObject::paddle(Player::One, 0, 0),
        GameObject::paddle(Player::Two, 8, 39),
        GameObject::ball(10, 20, Velocity::new(1, 1)),
    )
}

#[test]
fn top_boundary_denies_move_at_row_zero() {
    let mut s = field20();
    s.handle_user_input(Some(GameAction::Player1Up));
    assert_eq!(s.player1().row(), 0);
}

#[test]
fn down_presses_stop_at_field_height_minus_paddle_height() {
    let mut s = field20();
    for _ in 0..16 {
        s.handle_user_input(Some(GameAction::Player1Down));
    }
    assert_eq!(s.player1().row(), 16);
    assert_eq!(16, 20 - PADDLE_HEIGHT as i32);

    for _ in 0..10 {
        s.handle_user_input(Some(GameAction::Player1Down));
    }
    assert_eq!(s.player1().row(), 16);
}

#[test]
fn paddle_rows_stay_in_range_for_any_key_sequence() {
    let mut s = field20();
    let max = 20 - PADDLE_HEIGHT as i32;
    let keys = [
        GameAction::Player1Up,
        GameAction::Player2Down,
        GameAction::Player1Down,
        GameAction::Player2Up,
        GameAction::Player1Down,
        GameAction::Player2Down,
    ];

    // Deterministic pseudo-random walk.
    let mut seed: u32 = 0x2545_F491;
    for _ in 0..2_000 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        s.handle_user_input(Some(keys[(seed % keys.len() as u32) as usize]));

        for p in [s.player1(), s.player2()] {
            assert!((0..=max).contains(&p.row()), "row {}", p.row());
        }
    }
}

#[test]
fn boundary_kinds_use_paddle_height() {
    let s = field20();
    let p = GameObject::paddle(Player::Two, 15, 39);
    assert!(s.is_within_boundaries(&p, Boundary::Bottom));
    let p = GameObject::paddle(Player::Two, 16, 39);
    assert!(!s.is_within_boundaries(&p, Boundary::Bottom));
    assert!(s.is_within_boundaries(&p, Boundary::Top));
}

#[test]
fn try_move_paddle_reports_whether_it_moved() {
    let mut s = field20();
    assert!(!s.try_move_paddle(Player::One, Boundary::Top));
    assert!(s.try_move_paddle(Player::One, Boundary::Bottom));
    assert_eq!(s.paddle(Player::One).row(), 1);
}

#[test]
fn pause_toggle_round_trips_without_drift() {
    let mut s = field20();
    let before = s.clone();

    for _ in 0..2 {
        s.handle_user_input(Some(GameAction::Pause));
        assert!(s.paused());
        s.handle_user_input(Some(GameAction::Pause));
        assert!(!s.paused());
    }
    assert_eq!(s, before);
}

#[test]
fn quit_is_reported_not_executed() {
    let mut s = field20();
    assert_eq!(s.handle_user_input(Some(GameAction::Quit)), Control::Quit);
    assert_eq!(s.handle_user_input(None), Control::Continue);
    assert_eq!(
        s.handle_user_input(Some(GameAction::Player2Up)),
        Control::Continue
    );
}
