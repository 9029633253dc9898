use lib::pig::Die;
use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::num::NonZeroU32;

/// A fair [`Die`] that shuffles its faces before every roll.
#[derive(Debug, Clone)]
pub struct Shuffled {
    faces: Vec<u32>,
    rng: ChaCha8Rng,
}

impl Shuffled {
    /// A die with the given number of faces, whose rolls are determined by `seed`.
    pub fn new(faces: NonZeroU32, seed: u64) -> Self {
        Shuffled {
            faces: (0..faces.get()).collect(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Die for Shuffled {
    fn roll(&mut self) -> u32 {
        self.faces.shuffle(&mut self.rng);
        self.faces[0]
    }
}
