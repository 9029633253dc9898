use super::Player;

/// The progress of the turn in play.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TurnState {
    player: Player,
    score: u32,
    rolls: u32,
    last_face: u32,
}

impl TurnState {
    /// The player whose turn it is.
    pub fn player(&self) -> Player {
        self.player
    }

    /// The active player's running score.
    ///
    /// It starts each turn at the player's committed score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// How many times the dice have been rolled this turn.
    pub fn rolls(&self) -> u32 {
        self.rolls
    }

    /// The face remembered for duplicate detection this turn, or 0 if none.
    pub fn last_face(&self) -> u32 {
        self.last_face
    }

    /// Counts a new roll, returning how many rolls this turn has seen.
    pub(crate) fn count_roll(&mut self) -> u32 {
        self.rolls += 1;
        self.rolls
    }

    /// Adds `points` to the running score, returning the updated score.
    pub(crate) fn add(&mut self, points: u32) -> u32 {
        self.score = self.score.saturating_add(points);
        self.score
    }

    pub(crate) fn remember(&mut self, face: u32) {
        self.last_face = face;
    }

    /// Hands the turn to the other player, whose running score starts at `score`.
    pub(crate) fn pass(&mut self, score: u32) {
        *self = TurnState {
            player: !self.player,
            score,
            rolls: 0,
            last_face: 0,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[test]
    fn turn_starts_blank_with_player_one() {
        let t = TurnState::default();
        assert_eq!(t.player(), Player::One);
        assert_eq!((t.score(), t.rolls(), t.last_face()), (0, 0, 0));
    }

    #[proptest]
    fn count_roll_increments_rolls(#[strategy(1u32..16)] n: u32) {
        let mut t = TurnState::default();
        for i in 1..=n {
            assert_eq!(t.count_roll(), i);
        }
        assert_eq!(t.rolls(), n);
    }

    #[proptest]
    fn add_accumulates_score(a: u16, b: u16) {
        let mut t = TurnState::default();
        assert_eq!(t.add(a.into()), u32::from(a));
        assert_eq!(t.add(b.into()), u32::from(a) + u32::from(b));
    }

    #[proptest]
    fn add_saturates(a: u32, b: u32) {
        let mut t = TurnState::default();
        t.add(a);
        assert_eq!(t.add(b), a.saturating_add(b));
    }

    #[proptest]
    fn pass_flips_player_and_resets_turn(a: u16, f: u32, s: u32) {
        let mut t = TurnState::default();
        t.count_roll();
        t.add(a.into());
        t.remember(f);
        t.pass(s);

        assert_eq!(t.player(), Player::Two);
        assert_eq!((t.score(), t.rolls(), t.last_face()), (s, 0, 0));
    }
}
