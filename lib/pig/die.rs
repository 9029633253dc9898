use derive_more::Display;

/// Trait for types that produce die rolls.
///
/// A roll is the raw value `n` of the face `n + 1`, so a regular six-sided die
/// rolls values in `0..6`.
#[cfg_attr(test, mockall::automock)]
pub trait Die {
    /// Rolls the die.
    fn roll(&mut self) -> u32;
}

impl<D: Die + ?Sized> Die for &mut D {
    fn roll(&mut self) -> u32 {
        (**self).roll()
    }
}

impl<D: Die + ?Sized> Die for Box<D> {
    fn roll(&mut self) -> u32 {
        (**self).roll()
    }
}

/// A rigged [`Die`] that cycles through a fixed sequence of rolls.
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash)]
#[display(fmt = "loaded({:?})", rolls)]
pub struct Loaded {
    rolls: Vec<u32>,
    next: usize,
}

impl Loaded {
    /// A die that always rolls `n`.
    pub fn new(n: u32) -> Self {
        Self::cycle(n, [])
    }

    /// A die that alternates between `a` and `b`, starting with `a`.
    pub fn alternating(a: u32, b: u32) -> Self {
        Self::cycle(a, [b])
    }

    /// A die that rolls `first`, followed by `rest`, then starts over.
    pub fn cycle<I: IntoIterator<Item = u32>>(first: u32, rest: I) -> Self {
        Loaded {
            rolls: [first].into_iter().chain(rest).collect(),
            next: 0,
        }
    }

    /// Rigs the die to always roll `n` from now on.
    pub fn load(&mut self, n: u32) {
        *self = Self::new(n);
    }
}

impl Die for Loaded {
    fn roll(&mut self) -> u32 {
        let n = self.rolls[self.next];
        self.next = (self.next + 1) % self.rolls.len();
        n
    }
}
