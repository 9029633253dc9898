use super::Player;

/// The committed standing of a match.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MatchState {
    committed: [u32; 2],
    winner: Option<Player>,
}

impl MatchState {
    /// The player's score as of their last held or won turn.
    pub fn score(&self, p: Player) -> u32 {
        self.committed[p as usize]
    }

    /// Whether the match has concluded.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// The player who won the match, if it has concluded.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub(crate) fn commit(&mut self, p: Player, score: u32) {
        self.committed[p as usize] = score;
    }

    /// Commits the winning score and concludes the match.
    pub(crate) fn conclude(&mut self, p: Player, score: u32) {
        self.commit(p, score);
        self.winner = Some(p);
    }
}
