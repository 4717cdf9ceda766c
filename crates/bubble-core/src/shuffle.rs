//! Sources of the starting arrangement

/// Produces a permutation of `1..=n`
pub trait Shuffler {
    fn permutation(&mut self, n: usize) -> Vec<u32>;
}

/// Uniform random permutations via Fisher-Yates
pub struct RandomShuffler {
    rng: SimpleRng,
}

impl RandomShuffler {
    /// Seeded from the operating system (or the browser's crypto API)
    pub fn new() -> Self {
        Self {
            rng: SimpleRng::new(),
        }
    }

    /// Reproducible shuffles for a given seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SimpleRng::with_seed(seed),
        }
    }
}

impl Default for RandomShuffler {
    fn default() -> Self {
        Self::new()
    }
}

impl Shuffler for RandomShuffler {
    fn permutation(&mut self, n: usize) -> Vec<u32> {
        let mut values: Vec<u32> = (1..=n as u32).collect();
        for i in (1..values.len()).rev() {
            let j = self.rng.next_usize(i + 1);
            values.swap(i, j);
        }
        values
    }
}

/// Always hands out the same arrangement.
///
/// The arrangement is used as-is; its length wins over the requested size.
#[derive(Debug, Clone)]
pub struct FixedShuffler {
    arrangement: Vec<u32>,
}

impl FixedShuffler {
    pub fn new(arrangement: Vec<u32>) -> Self {
        Self { arrangement }
    }
}

impl Shuffler for FixedShuffler {
    fn permutation(&mut self, _n: usize) -> Vec<u32> {
        self.arrangement.clone()
    }
}

/// Small PCG-style generator; good enough for shuffling a handful of boxes
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new() -> Self {
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            // getrandom can fail on exotic targets; fall back to a counter
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        Self::with_seed(u64::from_le_bytes(seed_bytes))
    }

    fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        xorshifted.rotate_right(rot) as u64
    }

    fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }
}
