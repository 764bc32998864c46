//! Uniform outcome selection and the randomness seam.
//!
//! Both the rotation target and the destination-token pick consume uniform
//! draws through [`UnitRandom`], so a seeded generator (or a scripted test
//! double) controls every random decision the wheel makes.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::entity::Token;

/// Source of uniform draws in `[0, 1)`
pub trait UnitRandom {
    fn next_unit(&mut self) -> f64;
}

impl<R: Rng> UnitRandom for R {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Build the production generator. A fixed seed reproduces an exact sequence
/// of spins, which is how staging runs are kept comparable.
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    }
}

/// Pick the destination token: uniform index `floor(unit * len)`.
///
/// No weighting and no exclusion of the source token; landing back on the
/// token you started with is a legitimate outcome.
pub fn pick<'a>(catalog: &'a [Token], rng: &mut dyn UnitRandom) -> Option<&'a Token> {
    if catalog.is_empty() {
        return None;
    }
    let index = (rng.next_unit() * catalog.len() as f64).floor() as usize;
    // unit draws are < 1.0, but guard the boundary anyway
    catalog.get(index.min(catalog.len() - 1))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::UnitRandom;

    /// Replays a fixed sequence of unit draws, then repeats the last one.
    pub struct ScriptedRandom {
        draws: Vec<f64>,
        cursor: usize,
    }

    impl ScriptedRandom {
        pub fn new(draws: Vec<f64>) -> Self {
            Self { draws, cursor: 0 }
        }
    }

    impl UnitRandom for ScriptedRandom {
        fn next_unit(&mut self) -> f64 {
            let draw = self.draws[self.cursor.min(self.draws.len() - 1)];
            self.cursor += 1;
            draw
        }
    }
}
