//! Seeded pseudo-random number generator
//!
//! Deterministic PRNG for reproducible simulations.
//! Uses a simple but effective xorshift algorithm.

/// Seeded random number generator
///
/// Deterministic: same seed = same sequence. One instance is owned per
/// game engine, so concurrent simulations never share a stream.
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a new RNG from a 64-bit seed
    pub fn new(seed: u64) -> Self {
        let mut state = seed.wrapping_mul(0x517cc1b727220a95) ^ 0x9e3779b97f4a7c15;
        if state == 0 {
            state = 0x2545f4914f6cdd1d;
        }

        // Warm up the generator
        let mut rng = Self { state };
        for _ in 0..8 {
            rng.next_u64();
        }

        rng
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64*
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }

    /// Generate next u32
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Uniform f64 in [0, 1) with 53 bits of precision
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Bernoulli draw: true with probability `p`
    ///
    /// Always consumes exactly one draw, so streams stay aligned whether or
    /// not the event fires. `p <= 0` never fires; `p >= 1` always fires.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Fair coin flip
    pub fn coin(&mut self) -> bool {
        self.next_u64() & 1 == 1
    }
}
