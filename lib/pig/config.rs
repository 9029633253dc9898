use super::{Die, Rules, Variant};
use derive_more::{Display, Error};
use test_strategy::Arbitrary;
use tracing::instrument;

/// The reason why a match could not be configured.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary, Error)]
pub enum ConfigError {
    #[display(fmt = "no dice were given")]
    NoDice,

    #[display(fmt = "the winning score must be greater than 1")]
    ScoreTooLow,

    #[display(fmt = "not enough dice for the two dice variant")]
    InsufficientDice,
}

/// The immutable parameters of a match of Pig.
///
/// This type guarantees that it only holds valid configurations.
#[derive(Debug, Clone)]
pub struct MatchConfig<D> {
    rules: Rules,
    dice: Vec<D>,
}

impl<D: Die> MatchConfig<D> {
    /// Validates the [`Rules`] against the dice the match is to be played with.
    #[instrument(level = "debug", skip(dice), fields(dice = dice.len()), err)]
    pub fn new(rules: Rules, dice: Vec<D>) -> Result<Self, ConfigError> {
        if dice.is_empty() {
            Err(ConfigError::NoDice)
        } else if rules.winning_score <= 1 {
            Err(ConfigError::ScoreTooLow)
        } else if dice.len() < rules.variant.dice() {
            Err(ConfigError::InsufficientDice)
        } else {
            Ok(MatchConfig { rules, dice })
        }
    }

    /// Rolls the `i`-th die.
    pub(crate) fn draw(&mut self, i: usize) -> u32 {
        self.dice[i].roll()
    }
}

impl<D> MatchConfig<D> {
    /// The rules of the match.
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// How rolls are scored.
    pub fn variant(&self) -> Variant {
        self.rules.variant
    }

    /// The score a player needs to win the match.
    pub fn winning_score(&self) -> u32 {
        self.rules.winning_score
    }

    /// The dice the match is played with.
    pub fn dice(&self) -> &[D] {
        &self.dice
    }
}
