use super::Variant;
use derive_more::{Constructor, Display, Error, From};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use test_strategy::Arbitrary;

/// The reason why parsing [`Rules`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse the rules of the match")]
pub struct ParseRulesError(ron::de::SpannedError);

/// The rules a match of Pig is played under.
///
/// Rules are written in [RON], e.g. `(variant: two_dice, winning_score: 50)`,
/// and any field left out takes its default value.
///
/// [RON]: https://github.com/ron-rs/ron
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Arbitrary, Constructor, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Rules {
    /// How rolls are scored.
    pub variant: Variant,

    /// The score a player needs to win the match.
    #[strategy(2u32..=1000)]
    pub winning_score: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            variant: Variant::default(),
            winning_score: 100,
        }
    }
}

impl fmt::Display for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ron::ser::to_string(self).map_err(|_| fmt::Error)?)
    }
}

impl FromStr for Rules {
    type Err = ParseRulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}
