use crate::collision::Rect;

pub const PLAYER_WIDTH: f32 = 60.0;
pub const PLAYER_HEIGHT: f32 = 20.0;
/// Canvas units moved per frame while a direction key is held.
pub const PLAYER_SPEED: f32 = 8.0;

/// The paddle at the bottom of the canvas. Exactly one per session.
#[derive(Debug, Clone)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub moving_left: bool,
    pub moving_right: bool,
    /// While set, enemy shots pass straight through.
    pub invincible: bool,
}

impl Player {
    /// Centered at the bottom edge of a canvas of the given size.
    pub fn new(canvas_width: f32, canvas_height: f32) -> Self {
        Self {
            x: canvas_width / 2.0 - PLAYER_WIDTH / 2.0,
            y: canvas_height - PLAYER_HEIGHT,
            moving_left: false,
            moving_right: false,
            invincible: false,
        }
    }

    /// One frame of horizontal movement, clamped to the canvas (never
    /// wrapped).
    pub fn advance(&mut self, canvas_width: f32) {
        if self.moving_left {
            self.x = (self.x - PLAYER_SPEED).max(0.0);
        }
        if self.moving_right {
            self.x = (self.x + PLAYER_SPEED).min(canvas_width - PLAYER_WIDTH);
        }
    }

    pub fn center_x(&self) -> f32 {
        self.x + PLAYER_WIDTH / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_starts_centered_at_bottom() {
        let player = Player::new(640.0, 480.0);
        assert_eq!(player.x, 290.0);
        assert_eq!(player.y, 460.0);
        assert!(!player.invincible);
    }

    #[test]
    fn test_player_moves_left_and_clamps_at_zero() {
        let mut player = Player::new(640.0, 480.0);
        player.x = 5.0;
        player.moving_left = true;

        player.advance(640.0);
        assert_eq!(player.x, 0.0);

        player.advance(640.0);
        assert_eq!(player.x, 0.0);
    }

    #[test]
    fn test_player_moves_right_and_clamps_at_far_edge() {
        let mut player = Player::new(640.0, 480.0);
        player.x = 576.0;
        player.moving_right = true;

        player.advance(640.0);
        assert_eq!(player.x, 580.0);

        player.advance(640.0);
        assert_eq!(player.x, 580.0);
    }

    #[test]
    fn test_player_stands_still_without_flags() {
        let mut player = Player::new(640.0, 480.0);
        let before = player.x;
        player.advance(640.0);
        assert_eq!(player.x, before);
    }

    // Property-based tests
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_player_never_leaves_canvas(
                initial_x in 0.0f32..580.0,
                moves in prop::collection::vec(prop::bool::ANY, 0..200)
            ) {
                let mut player = Player::new(640.0, 480.0);
                player.x = initial_x;
                for move_right in moves {
                    player.moving_left = !move_right;
                    player.moving_right = move_right;
                    player.advance(640.0);
                }
                prop_assert!(player.x >= 0.0);
                prop_assert!(player.x + PLAYER_WIDTH <= 640.0);
            }
        }
    }
}
