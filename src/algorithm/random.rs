use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded random stream shared by every builder in one generation run
///
/// All draws are uniform floats in `[0, 1)`; integer choices are derived by
/// flooring `unit() * n`, so the same seed always yields the same sequence of
/// decisions. The draw count is tracked so a finished stream can be identified
/// and resumed by a renderer that wants to keep drawing from it.
#[derive(Clone, Debug)]
pub struct DungeonRng {
    rng: StdRng,
    seed: u64,
    draws: u64,
}

impl DungeonRng {
    /// Create a stream at the start of `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            draws: 0,
        }
    }

    /// Rebuild a stream that has already produced `draws` values
    pub fn resume(seed: u64, draws: u64) -> Self {
        let mut stream = Self::new(seed);
        for _ in 0..draws {
            stream.unit();
        }
        stream
    }

    /// Seed this stream was created from
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of values drawn so far
    pub const fn draws(&self) -> u64 {
        self.draws
    }

    /// Uniform float in `[0, 1)`
    pub fn unit(&mut self) -> f64 {
        self.draws += 1;
        self.rng.random::<f64>()
    }

    /// Uniform index in `[0, n)`; always 0 when `n` is 0
    pub fn below(&mut self, n: usize) -> usize {
        let index = (self.unit() * n as f64).floor() as usize;
        index.min(n.saturating_sub(1))
    }

    /// Percentage roll: true with probability `percent / 100`
    pub fn percent(&mut self, percent: u8) -> bool {
        self.unit() * 100.0 < f64::from(percent)
    }

    /// Fisher-Yates shuffle driven by this stream
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }
}

impl PartialEq for DungeonRng {
    fn eq(&self, other: &Self) -> bool {
        self.seed == other.seed && self.draws == other.draws
    }
}

impl Eq for DungeonRng {}
