use crate::{die::Shuffled, io::Io};
use anyhow::Error as Anyhow;
use clap::Parser;
use derive_more::{Display, Error};
use lib::pig::{Die, Game, MatchConfig, Player, Rules};
use std::io::{self, stdin, stdout, Read, Write};
use std::{num::NonZeroU32, str::FromStr};
use tracing::{info, instrument, warn};

/// The reason why parsing a [`Command`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "unknown command `{}`, expected `roll`, `hold` or `quit`", _0)]
pub struct ParseCommandError(#[error(not(source))] String);

/// An action typed in by the active player.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq)]
enum Command {
    #[display(fmt = "roll")]
    Roll,
    #[display(fmt = "hold")]
    Hold,
    #[display(fmt = "quit")]
    Quit,
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "r" | "roll" => Ok(Command::Roll),
            "h" | "hold" => Ok(Command::Hold),
            "q" | "quit" => Ok(Command::Quit),
            _ => Err(ParseCommandError(s.trim().into())),
        }
    }
}

/// A match of Pig between two players sharing the terminal.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// The rules of the match, e.g. `(variant: two_dice, winning_score: 50)`.
    #[clap(default_value_t)]
    rules: Rules,

    /// How many faces each die has.
    #[clap(short, long, default_value = "6")]
    faces: NonZeroU32,

    /// Seeds the dice, picked at random if omitted.
    #[clap(short, long)]
    seed: Option<u64>,
}

impl Default for Play {
    fn default() -> Self {
        Play {
            rules: Rules::default(),
            faces: NonZeroU32::MIN.saturating_add(5),
            seed: None,
        }
    }
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let seed = self.seed.unwrap_or_else(rand::random);

        let dice = (0..self.rules.variant.dice())
            .map(|i| Shuffled::new(self.faces, seed.wrapping_add(i as u64)))
            .collect();

        let game = Game::from(MatchConfig::new(self.rules, dice)?);
        info!(rules = %self.rules, seed, "match started");

        match run(game, &mut Io::new(stdout(), stdin()))? {
            Some(p) => info!(winner = %p, "match concluded"),
            None => warn!("match abandoned"),
        }

        Ok(())
    }
}

/// Plays the match out, returning the winner unless it's abandoned.
fn run<D, W, R>(mut game: Game<D>, io: &mut Io<W, R>) -> io::Result<Option<Player>>
where
    D: Die,
    W: Write,
    R: Read,
{
    while !game.is_over() {
        let p = game.turn();

        let prompt = format!(
            "{p} [{} to {}, turn {}]",
            game.score(p),
            game.winning_score(),
            game.turn_score()
        );

        let cmd = match io.ask(prompt)? {
            None => return Ok(None),
            Some(line) => line.parse(),
        };

        match cmd {
            Err(e) => io.send(e)?,
            Ok(Command::Quit) => return Ok(None),

            Ok(Command::Roll) => match game.roll() {
                Err(e) => io.send(e)?,
                Ok(0) if game.turn() != p => io.send(format_args!("{p} busts"))?,
                Ok(0) => io.send("wash, nothing scored")?,
                Ok(_) if game.is_over() => {}
                Ok(_) => io.send(format_args!("{p} rolls, turn at {}", game.turn_score()))?,
            },

            Ok(Command::Hold) => match game.hold() {
                Err(e) => io.send(e)?,
                Ok(()) => io.send(format_args!("{p} holds at {}", game.score(p)))?,
            },
        }
    }

    let winner = game.winner();

    if let Some(p) = winner {
        io.send(format_args!("{p} wins with {}", game.score(p)))?;
    }

    Ok(winner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib::pig::{Loaded, PlayError, Variant};
    use std::str;
    use test_strategy::proptest;

    fn play<D: Die>(game: Game<D>, input: &str) -> (Option<Player>, String) {
        let mut buf = Vec::new();
        let mut io = Io::new(&mut buf, input.as_bytes());
        let winner = run(game, &mut io).unwrap();
        drop(io);
        (winner, String::from_utf8(buf).unwrap())
    }

    #[proptest]
    fn command_accepts_short_and_long_forms(#[strategy("[ \t]*")] pad: String) {
        for (s, c) in [
            ("r", Command::Roll),
            ("roll", Command::Roll),
            ("HOLD", Command::Hold),
            ("h", Command::Hold),
            ("Quit", Command::Quit),
            ("q", Command::Quit),
        ] {
            assert_eq!(format!("{pad}{s}{pad}").parse(), Ok(c));
        }
    }

    #[proptest]
    fn parsing_printed_command_is_an_identity(#[strategy(0usize..3)] i: usize) {
        let c = [Command::Roll, Command::Hold, Command::Quit][i];
        assert_eq!(c.to_string().parse(), Ok(c));
    }

    #[proptest]
    fn command_rejects_unknown_input(#[strategy("[a-z]{2,8}")] s: String) {
        if !["roll", "hold", "quit"].contains(&s.as_str()) {
            assert_eq!(s.parse::<Command>(), Err(ParseCommandError(s.clone())));
        }
    }

    #[test]
    fn play_reports_the_winner() {
        let game = Game::new(Variant::Standard, 10, vec![Loaded::new(4)]).unwrap();
        let (winner, output) = play(game, "roll\nroll\n");

        assert_eq!(winner, Some(Player::One));
        assert!(output.contains("player one rolls, turn at 5"));
        assert!(output.ends_with("player one wins with 10\n"));
    }

    #[test]
    fn play_passes_the_turn_on_hold_and_bust() {
        let game = Game::new(Variant::Standard, 100, vec![Loaded::cycle(2, [0])]).unwrap();
        let (winner, output) = play(game, "roll\nhold\nroll\nroll\n");

        assert_eq!(winner, None);
        assert!(output.contains("player one holds at 3"));
        assert!(output.contains("player two [0 to 100, turn 0]> "));
        assert!(output.contains("player two busts"));
        assert!(output.contains("player one rolls, turn at 6"));
    }

    #[test]
    fn play_reports_illegal_actions_and_goes_on() {
        let game = Game::new(Variant::Standard, 100, vec![Loaded::new(1)]).unwrap();
        let (winner, output) = play(game, "hold\njump\nquit\nroll\n");

        assert_eq!(winner, None);
        assert!(output.contains(&PlayError::NoRollYet.to_string()));
        assert!(output.contains("unknown command `jump`"));
        assert!(!output.contains("rolls"));
    }

    #[test]
    fn play_reports_a_wash() {
        let dice = vec![Loaded::new(2), Loaded::new(3)];
        let game = Game::new(Variant::TwoDice, 100, dice).unwrap();
        let (_, output) = play(game, "roll\n");

        assert!(output.contains("wash, nothing scored"));
    }

    #[test]
    fn play_is_abandoned_at_end_of_input() {
        let game = Game::new(Variant::Standard, 100, vec![Loaded::new(3)]).unwrap();
        let (winner, output) = play(game, "roll\n");

        assert_eq!(winner, None);
        assert!(!output.contains("wins"));
    }
}
