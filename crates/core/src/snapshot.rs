use crate::game_object::GameObject;
use crate::types::{Field, Player, Velocity};

/// Per-frame, read-only view of the game handed to render sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub field: Field,
    /// Render order: player 1, player 2, ball.
    pub objects: [GameObject; 3],
    pub paused: bool,
}

impl GameSnapshot {
    /// True when the physics tick would move something.
    pub fn playable(&self) -> bool {
        !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            field: Field::new(0, 0),
            objects: [
                GameObject::paddle(Player::One, 0, 0),
                GameObject::paddle(Player::Two, 0, 0),
                GameObject::ball(0, 0, Velocity::ZERO),
            ],
            paused: false,
        }
    }
}
