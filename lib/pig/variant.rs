use derive_more::Display;
use serde::{Deserialize, Serialize};
use test_strategy::Arbitrary;

/// The scoring rules a match of Pig is played under.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// A single die, rolling a 1 busts the turn.
    #[display(fmt = "standard")]
    Standard,

    /// Two dice, either one showing a 1 busts the turn and a total of 7 scores nothing.
    #[display(fmt = "two dice")]
    TwoDice,

    /// A single die, where an opening 1 scores but any later 1 busts the turn,
    /// as does repeating the face remembered from the opening 1.
    #[display(fmt = "one die duplicate")]
    OneDieDuplicate,
}

impl Default for Variant {
    fn default() -> Self {
        Variant::Standard
    }
}

impl Variant {
    /// The minimum number of dice a match under this variant is played with.
    pub fn dice(&self) -> usize {
        match self {
            Variant::Standard | Variant::OneDieDuplicate => 1,
            Variant::TwoDice => 2,
        }
    }

    /// Whether a running turn score of `score` wins a match played to `target`.
    ///
    /// The standard rules end the match as soon as the target is met, whereas
    /// the other variants require the target to be exceeded.
    pub fn is_winning(&self, score: u32, target: u32) -> bool {
        match self {
            Variant::Standard => score >= target,
            Variant::TwoDice | Variant::OneDieDuplicate => score > target,
        }
    }
}
