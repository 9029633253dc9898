use super::{ConfigError, Die, MatchConfig, MatchState, Player, Rules, TurnState, Variant};
use derive_more::{Display, Error};
use test_strategy::Arbitrary;
use tracing::{debug, instrument};

/// The reason why an action could not be taken.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary, Error)]
pub enum PlayError {
    #[display(fmt = "the match is over")]
    GameOver,

    #[display(fmt = "the player must roll at least once before holding")]
    NoRollYet,
}

/// The face shown by a raw die roll.
fn face(n: u32) -> u32 {
    n.saturating_add(1)
}

/// Holds the state of a match of Pig.
#[derive(Debug, Clone)]
pub struct Game<D> {
    config: MatchConfig<D>,
    turn: TurnState,
    state: MatchState,
}

impl<D> From<MatchConfig<D>> for Game<D> {
    fn from(config: MatchConfig<D>) -> Self {
        Game {
            config,
            turn: TurnState::default(),
            state: MatchState::default(),
        }
    }
}

impl<D: Die> Game<D> {
    /// Starts a match, provided the configuration is valid.
    pub fn new(variant: Variant, winning_score: u32, dice: Vec<D>) -> Result<Self, ConfigError> {
        Ok(MatchConfig::new(Rules::new(variant, winning_score), dice)?.into())
    }

    /// Rolls the dice for the active player.
    ///
    /// Returns the running score of the turn, or 0 if the roll scored nothing.
    /// If the roll busts, the turn passes to the other player. If the roll wins
    /// the match, the winning score is returned instead.
    #[instrument(level = "debug", skip(self), ret, err,
        fields(player = %self.turn.player(), variant = %self.config.variant()))]
    pub fn roll(&mut self) -> Result<u32, PlayError> {
        if self.is_over() {
            return Err(PlayError::GameOver);
        }

        let rolls = self.turn.count_roll();

        Ok(match self.config.variant() {
            Variant::Standard => self.roll_standard(),
            Variant::TwoDice => self.roll_two_dice(),
            Variant::OneDieDuplicate => self.roll_one_die_duplicate(rolls),
        })
    }

    fn roll_standard(&mut self) -> u32 {
        match self.config.draw(0) {
            0 => self.bust(),
            n => self.advance(face(n)),
        }
    }

    fn roll_two_dice(&mut self) -> u32 {
        let (a, b) = (self.config.draw(0), self.config.draw(1));

        if a == 0 || b == 0 {
            return self.bust();
        }

        match face(a).saturating_add(face(b)) {
            7 => {
                debug!(player = %self.turn.player(), "wash");
                0
            }

            sum => self.advance(sum),
        }
    }

    fn roll_one_die_duplicate(&mut self, rolls: u32) -> u32 {
        let n = self.config.draw(0);
        let f = face(n);

        if rolls == 1 && n == 0 {
            // An opening 1 can't repeat anything, so it scores.
            self.turn.remember(f);
            self.turn.add(f);
            f
        } else if n == 0 || f == self.turn.last_face() {
            self.bust()
        } else {
            // Only an opening 1 or the winning face is remembered.
            let score = self.advance(f);
            if self.is_over() {
                self.turn.remember(f);
            }
            score
        }
    }

    /// Adds `points` to the turn, concluding the match if the target is hit.
    fn advance(&mut self, points: u32) -> u32 {
        let score = self.turn.add(points);
        let target = self.config.winning_score();

        if self.config.variant().is_winning(score, target) {
            let p = self.turn.player();
            self.state.conclude(p, score);
            debug!(player = %p, score, "won");
            target
        } else {
            score
        }
    }

    /// Forfeits the turn, keeping the score committed before it.
    fn bust(&mut self) -> u32 {
        let p = self.turn.player();
        let committed = self.state.score(p);
        let forfeited = self.turn.score().saturating_sub(committed);
        debug!(player = %p, forfeited, "bust");
        self.switch(committed);
        0
    }
}

impl<D> Game<D> {
    /// Commits the turn score of the active player and passes the turn.
    #[instrument(level = "debug", skip(self), err,
        fields(player = %self.turn.player(), score = self.turn.score()))]
    pub fn hold(&mut self) -> Result<(), PlayError> {
        if self.is_over() {
            Err(PlayError::GameOver)
        } else if self.turn.rolls() == 0 {
            Err(PlayError::NoRollYet)
        } else {
            self.switch(self.turn.score());
            Ok(())
        }
    }

    fn switch(&mut self, score: u32) {
        let p = self.turn.player();
        self.state.commit(p, score);
        self.turn.pass(self.state.score(!p));
    }

    /// The configuration of this match.
    pub fn config(&self) -> &MatchConfig<D> {
        &self.config
    }

    /// How rolls are scored.
    pub fn variant(&self) -> Variant {
        self.config.variant()
    }

    /// The score a player needs to win the match.
    pub fn winning_score(&self) -> u32 {
        self.config.winning_score()
    }

    /// The progress of the turn in play.
    pub fn turn_state(&self) -> &TurnState {
        &self.turn
    }

    /// The committed standing of the match.
    pub fn match_state(&self) -> &MatchState {
        &self.state
    }

    /// The player whose turn it is.
    pub fn turn(&self) -> Player {
        self.turn.player()
    }

    /// The active player's running score.
    pub fn turn_score(&self) -> u32 {
        self.turn.score()
    }

    /// How many times the dice have been rolled this turn.
    pub fn rolls(&self) -> u32 {
        self.turn.rolls()
    }

    /// The player's score as of their last held or won turn.
    pub fn score(&self, p: Player) -> u32 {
        self.state.score(p)
    }

    /// Whether the match has concluded.
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// The player who won the match, if it has concluded.
    pub fn winner(&self) -> Option<Player> {
        self.state.winner()
    }
}
