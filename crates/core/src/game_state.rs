//! Game state module - owns the field, both paddles and the ball.
//!
//! Input handling and the physics tick are the only two ways state changes.
//! Neither can fail: all data is fixed-size and in memory.

use std::cmp::Ordering;

use tracing::debug;

use crate::game_object::{GameObject, ObjectKind};
use crate::snapshot::GameSnapshot;
use crate::types::{
    Boundary, Control, Field, GameAction, Player, BALL_START_VELOCITY, PADDLE_HEIGHT,
};

const PLAYER1: usize = 0;
const PLAYER2: usize = 1;
const BALL: usize = 2;

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    field: Field,
    /// Render order: player 1, player 2, ball.
    objects: [GameObject; 3],
    paused: bool,
}

impl GameState {
    /// Lay out a fresh match on `field`.
    ///
    /// Paddles are vertically centred on the left and right edges; the ball
    /// starts in the middle of the field.
    pub fn new(field: Field) -> Self {
        let paddle_row = (field.height / 2).saturating_sub(PADDLE_HEIGHT / 2) as i32;
        let right_col = field.width.saturating_sub(1) as i32;

        Self::from_parts(
            field,
            GameObject::paddle(Player::One, paddle_row, 0),
            GameObject::paddle(Player::Two, paddle_row, right_col),
            GameObject::ball(
                (field.height / 2) as i32,
                (field.width / 2) as i32,
                BALL_START_VELOCITY,
            ),
        )
    }

    /// Build a state from explicit objects (unpaused).
    pub fn from_parts(
        field: Field,
        player1: GameObject,
        player2: GameObject,
        ball: GameObject,
    ) -> Self {
        Self {
            field,
            objects: [player1, player2, ball],
            paused: false,
        }
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// All objects in render order.
    pub fn objects(&self) -> &[GameObject] {
        &self.objects
    }

    pub fn player1(&self) -> &GameObject {
        &self.objects[PLAYER1]
    }

    pub fn player2(&self) -> &GameObject {
        &self.objects[PLAYER2]
    }

    pub fn paddle(&self, player: Player) -> &GameObject {
        &self.objects[Self::paddle_index(player)]
    }

    pub fn ball(&self) -> &GameObject {
        &self.objects[BALL]
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        debug!(paused = self.paused, "pause toggled");
    }

    /// Apply one key's worth of input.
    ///
    /// `None` (no key this frame) is a no-op. Paddle moves are applied even
    /// while paused; only the physics tick honours the pause flag.
    pub fn handle_user_input(&mut self, action: Option<GameAction>) -> Control {
        let Some(action) = action else {
            return Control::Continue;
        };

        match action {
            GameAction::Quit => return Control::Quit,
            GameAction::Pause => self.toggle_pause(),
            GameAction::Player1Up
            | GameAction::Player1Down
            | GameAction::Player2Up
            | GameAction::Player2Down => {
                if let Some((player, boundary)) = action.player_move() {
                    self.try_move_paddle(player, boundary);
                }
            }
        }

        Control::Continue
    }

    /// Move a paddle one row toward `boundary` if it is not already there.
    ///
    /// Returns whether the paddle moved.
    pub fn try_move_paddle(&mut self, player: Player, boundary: Boundary) -> bool {
        let idx = Self::paddle_index(player);
        if !self.is_within_boundaries(&self.objects[idx], boundary) {
            return false;
        }

        let dy = match boundary {
            Boundary::Top => -1,
            Boundary::Bottom => 1,
        };
        self.objects[idx].nudge_row(dy);
        true
    }

    /// Whether `object` may take one more step toward `boundary`.
    pub fn is_within_boundaries(&self, object: &GameObject, boundary: Boundary) -> bool {
        match boundary {
            Boundary::Top => object.row() > 0,
            Boundary::Bottom => {
                object.row() < self.field.height as i32 - object.height() as i32
            }
        }
    }

    /// Advance the world by one tick.
    ///
    /// Collisions are judged from the ball's position before this tick's
    /// movement. A bounce only flips the velocity component; the flipped
    /// velocity first takes effect on the next tick.
    pub fn update_state(&mut self) {
        if self.paused {
            return;
        }

        let ball = self.objects[BALL];
        let hits_paddle = [PLAYER1, PLAYER2]
            .iter()
            .any(|&i| crosses_paddle(&ball, &self.objects[i]));
        let hits_wall = !self.field.contains_row(ball.next_row());

        for object in self.objects.iter_mut() {
            object.advance();
        }

        let mut velocity = ball.velocity();
        if hits_paddle {
            velocity = velocity.flip_col();
        }
        if hits_wall {
            velocity = velocity.flip_row();
        }
        if hits_paddle || hits_wall {
            debug!(
                paddle = hits_paddle,
                wall = hits_wall,
                row = ball.row(),
                col = ball.col(),
                "ball bounced"
            );
            self.objects[BALL].set_velocity(velocity);
        }
    }

    /// Read-only copy for renderers.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot without allocating.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.field = self.field;
        out.objects = self.objects;
        out.paused = self.paused;
    }

    fn paddle_index(player: Player) -> usize {
        match player {
            Player::One => PLAYER1,
            Player::Two => PLAYER2,
        }
    }
}

/// Side-sensitive look-ahead: would `ball`'s next column reach or pass
/// `paddle`'s column from the side it is on now, within the paddle's rows?
///
/// A ball already in the paddle's column is on neither side and never crosses.
fn crosses_paddle(ball: &GameObject, paddle: &GameObject) -> bool {
    debug_assert!(matches!(paddle.kind(), ObjectKind::Paddle(_)));

    if !paddle.spans_row(ball.row()) {
        return false;
    }
    match ball.col().cmp(&paddle.col()) {
        Ordering::Less => ball.next_col() >= paddle.col(),
        Ordering::Greater => ball.next_col() <= paddle.col(),
        Ordering::Equal => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Velocity;

    fn state_with_ball(field: Field, ball: GameObject) -> GameState {
        let right = field.width as i32 - 1;
        GameState::from_parts(
            field,
            GameObject::paddle(Player::One, 4, 0),
            GameObject::paddle(Player::Two, 4, right),
            ball,
        )
    }

    #[test]
    fn new_centres_paddles_on_the_edges() {
        let state = GameState::new(Field::new(40, 20));
        assert_eq!(state.player1().row(), 8);
        assert_eq!(state.player1().col(), 0);
        assert_eq!(state.player2().row(), 8);
        assert_eq!(state.player2().col(), 39);
        assert_eq!((state.ball().row(), state.ball().col()), (10, 20));
        assert_eq!(state.ball().velocity(), BALL_START_VELOCITY);
        assert!(!state.paused());
        assert_eq!(state.objects().len(), 3);
    }

    #[test]
    fn tiny_field_does_not_underflow_paddle_row() {
        let state = GameState::new(Field::new(2, 1));
        assert_eq!(state.player1().row(), 0);
        assert_eq!(state.player2().col(), 1);
    }

    #[test]
    fn paddles_are_untouched_by_tick() {
        let mut state = GameState::new(Field::new(40, 20));
        let p1 = *state.player1();
        let p2 = *state.player2();
        state.update_state();
        assert_eq!(*state.player1(), p1);
        assert_eq!(*state.player2(), p2);
    }

    #[test]
    fn paused_tick_is_a_no_op() {
        let mut state = GameState::new(Field::new(40, 20));
        state.toggle_pause();
        let before = state.clone();
        for _ in 0..5 {
            state.update_state();
        }
        assert_eq!(state, before);
    }

    #[test]
    fn approaching_left_paddle_flips_column_velocity() {
        let field = Field::new(20, 20);
        let mut state = state_with_ball(field, GameObject::ball(5, 1, Velocity::new(1, -2)));

        state.update_state();

        // Movement used the old velocity; the flip applies from the next tick.
        assert_eq!((state.ball().row(), state.ball().col()), (6, -1));
        assert_eq!(state.ball().velocity(), Velocity::new(1, 2));

        state.update_state();
        assert_eq!((state.ball().row(), state.ball().col()), (7, 1));
    }

    #[test]
    fn ball_moving_away_from_paddle_keeps_velocity() {
        let field = Field::new(20, 20);
        let mut state = state_with_ball(field, GameObject::ball(5, 1, Velocity::new(1, 2)));
        state.update_state();
        assert_eq!(state.ball().velocity(), Velocity::new(1, 2));
    }

    #[test]
    fn ball_outside_paddle_rows_passes() {
        let field = Field::new(20, 20);
        let mut state = state_with_ball(field, GameObject::ball(8, 1, Velocity::new(0, -1)));
        state.update_state();
        assert_eq!(state.ball().velocity(), Velocity::new(0, -1));
        assert_eq!(state.ball().col(), 0);
    }

    #[test]
    fn approaching_right_paddle_flips_column_velocity() {
        let field = Field::new(20, 20);
        let mut state = state_with_ball(field, GameObject::ball(7, 18, Velocity::new(-1, 1)));
        state.update_state();
        assert_eq!(state.ball().velocity(), Velocity::new(-1, -1));
        assert_eq!((state.ball().row(), state.ball().col()), (6, 19));
    }

    #[test]
    fn ball_in_paddle_column_does_not_cross_it() {
        let field = Field::new(20, 20);
        let mut state = state_with_ball(field, GameObject::ball(5, 19, Velocity::new(0, -1)));
        state.update_state();
        assert_eq!(state.ball().velocity(), Velocity::new(0, -1));
        assert_eq!(state.ball().col(), 18);

        let mut state = state_with_ball(field, GameObject::ball(5, 0, Velocity::new(0, 1)));
        state.update_state();
        assert_eq!(state.ball().velocity(), Velocity::new(0, 1));
        assert_eq!(state.ball().col(), 1);
    }

    #[test]
    fn walls_flip_row_velocity() {
        let field = Field::new(20, 10);
        let mut state = state_with_ball(field, GameObject::ball(9, 10, Velocity::new(1, 1)));
        state.update_state();
        assert_eq!(state.ball().velocity(), Velocity::new(-1, 1));
        // One-tick excursion past the bottom edge is accepted.
        assert_eq!(state.ball().row(), 10);

        let mut state = state_with_ball(field, GameObject::ball(0, 10, Velocity::new(-1, 1)));
        state.update_state();
        assert_eq!(state.ball().velocity(), Velocity::new(1, 1));
    }

    #[test]
    fn corner_hit_flips_both_components() {
        let field = Field::new(20, 10);
        let mut state = GameState::from_parts(
            field,
            GameObject::paddle(Player::One, 0, 0),
            GameObject::paddle(Player::Two, 0, 19),
            GameObject::ball(0, 1, Velocity::new(-1, -1)),
        );
        state.update_state();
        assert_eq!(state.ball().velocity(), Velocity::new(1, 1));
    }

    #[test]
    fn boundary_checks() {
        let state = GameState::new(Field::new(40, 20));
        let top = GameObject::paddle(Player::One, 0, 0);
        let bottom = GameObject::paddle(Player::One, 16, 0);
        assert!(!state.is_within_boundaries(&top, Boundary::Top));
        assert!(state.is_within_boundaries(&top, Boundary::Bottom));
        assert!(state.is_within_boundaries(&bottom, Boundary::Top));
        assert!(!state.is_within_boundaries(&bottom, Boundary::Bottom));
    }

    #[test]
    fn input_moves_each_paddle_independently() {
        let mut state = GameState::new(Field::new(40, 20));
        state.handle_user_input(Some(GameAction::Player1Down));
        state.handle_user_input(Some(GameAction::Player2Up));
        assert_eq!(state.player1().row(), 9);
        assert_eq!(state.player2().row(), 7);
    }

    #[test]
    fn no_key_is_a_no_op() {
        let mut state = GameState::new(Field::new(40, 20));
        let before = state.clone();
        assert_eq!(state.handle_user_input(None), Control::Continue);
        assert_eq!(state, before);
    }

    #[test]
    fn quit_leaves_state_untouched() {
        let mut state = GameState::new(Field::new(40, 20));
        let before = state.clone();
        assert_eq!(state.handle_user_input(Some(GameAction::Quit)), Control::Quit);
        assert_eq!(state, before);
    }

    #[test]
    fn paddles_move_while_paused() {
        let mut state = GameState::new(Field::new(40, 20));
        state.handle_user_input(Some(GameAction::Pause));
        assert!(state.paused());
        state.handle_user_input(Some(GameAction::Player1Up));
        assert_eq!(state.player1().row(), 7);
    }

    #[test]
    fn snapshot_copies_objects_and_flags() {
        let mut state = GameState::new(Field::new(40, 20));
        state.toggle_pause();
        let snap = state.snapshot();
        assert_eq!(snap.field, state.field());
        assert_eq!(&snap.objects[..], state.objects());
        assert!(snap.paused);
    }
}
