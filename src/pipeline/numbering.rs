use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use resolutio_traits::DocumentNumberSource;
use std::ops::RangeInclusive;

/// Range the placeholder symbol number is drawn from.
pub const DOCUMENT_NUMBER_RANGE: RangeInclusive<u32> = 100..=1099;

/// Draws the symbol number uniformly from [`DOCUMENT_NUMBER_RANGE`].
#[derive(Debug, Clone)]
pub struct RandomDocumentNumber {
    rng: StdRng,
}

impl Default for RandomDocumentNumber {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomDocumentNumber {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// A reproducible sequence, for previews that should not flicker.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DocumentNumberSource for RandomDocumentNumber {
    fn next_number(&mut self) -> u32 {
        self.rng.random_range(DOCUMENT_NUMBER_RANGE)
    }
}
