use derive_more::Display;
use std::ops::Not;
use test_strategy::Arbitrary;

/// One of the two sides in a match of Pig.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary)]
#[repr(u8)]
pub enum Player {
    #[display(fmt = "player one")]
    One,
    #[display(fmt = "player two")]
    Two,
}

impl Default for Player {
    fn default() -> Self {
        Player::One
    }
}

impl Not for Player {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}
