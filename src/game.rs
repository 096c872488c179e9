//! Game engine: round execution and simulation

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::payoff;
use crate::random::SeededRng;
use crate::registry::StrategyKind;
use crate::strategy::{Move, Strategy};

/// Upper bound on rounds per simulation
pub const MAX_ROUNDS: u32 = 10_000;

/// Result of a single round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round index
    pub round: u32,
    /// Realized (post-noise) moves
    pub move_a: Move,
    pub move_b: Move,
    pub score_a: u8,
    pub score_b: u8,
    pub cumulative_a: u32,
    pub cumulative_b: u32,
}

/// Result of a complete simulation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub rounds: Vec<RoundRecord>,
    pub total_score_a: u32,
    pub total_score_b: u32,
    pub round_count: u32,
}

/// Repeated-game engine for one pair of strategies.
///
/// Exclusively owns its strategies, histories, and RNG stream; nothing is
/// shared with other engine instances, so simulations can run concurrently
/// without cross-contamination.
pub struct Game {
    strategy_a: Box<dyn Strategy>,
    strategy_b: Box<dyn Strategy>,
    noise: f64,
    rng: SeededRng,
    history_a: Vec<Move>,
    history_b: Vec<Move>,
    total_a: u32,
    total_b: u32,
}

impl Game {
    /// Create an engine for two strategies.
    ///
    /// `noise` is the per-move, per-player probability of flipping an
    /// intended move. Values outside [0, 1] (including NaN) are rejected,
    /// not clamped.
    pub fn new(
        strategy_a: Box<dyn Strategy>,
        strategy_b: Box<dyn Strategy>,
        noise: f64,
        seed: u64,
    ) -> Result<Self, EngineError> {
        if !(0.0..=1.0).contains(&noise) {
            return Err(EngineError::InvalidNoise(noise));
        }

        Ok(Self {
            strategy_a,
            strategy_b,
            noise,
            rng: SeededRng::new(seed),
            history_a: Vec::new(),
            history_b: Vec::new(),
            total_a: 0,
            total_b: 0,
        })
    }

    /// Flip the intended move with probability `noise`.
    ///
    /// Draws are independent per player per round.
    fn apply_noise(&mut self, intended: Move) -> Move {
        if self.rng.chance(self.noise) {
            intended.opposite()
        } else {
            intended
        }
    }

    /// Play one round: decide, perturb, score, record.
    ///
    /// Both strategies see the histories as they stood before this round.
    /// The realized (possibly flipped) moves are what gets scored and
    /// appended to both histories — strategies never learn their own
    /// intended move back.
    pub fn play_round(&mut self) -> RoundRecord {
        let intended_a = self
            .strategy_a
            .decide(&self.history_b, &self.history_a, &mut self.rng);
        let intended_b = self
            .strategy_b
            .decide(&self.history_a, &self.history_b, &mut self.rng);

        let realized_a = self.apply_noise(intended_a);
        let realized_b = self.apply_noise(intended_b);

        let (score_a, score_b) = payoff(realized_a, realized_b);

        self.history_a.push(realized_a);
        self.history_b.push(realized_b);
        self.total_a += score_a as u32;
        self.total_b += score_b as u32;

        RoundRecord {
            round: self.history_a.len() as u32,
            move_a: realized_a,
            move_b: realized_b,
            score_a,
            score_b,
            cumulative_a: self.total_a,
            cumulative_b: self.total_b,
        }
    }

    /// Run a full simulation of `rounds` rounds.
    ///
    /// Validates `rounds` before anything else, then resets both strategies
    /// and clears all accumulated state, so a `Game` can be reused for
    /// repeated runs. Returns the complete trace; never a partial result.
    pub fn simulate(&mut self, rounds: u32) -> Result<SimulationResult, EngineError> {
        if rounds == 0 || rounds > MAX_ROUNDS {
            return Err(EngineError::InvalidRounds(rounds));
        }

        self.strategy_a.reset();
        self.strategy_b.reset();
        self.history_a.clear();
        self.history_b.clear();
        self.total_a = 0;
        self.total_b = 0;

        let mut records = Vec::with_capacity(rounds as usize);
        for _ in 0..rounds {
            records.push(self.play_round());
        }

        Ok(SimulationResult {
            total_score_a: self.total_a,
            total_score_b: self.total_b,
            round_count: rounds,
            rounds: records,
        })
    }
}

/// Run a complete simulation between two catalog strategies.
///
/// One-call entry point for the request layer: constructs fresh strategy
/// instances, validates `noise` and `rounds`, and returns the full trace.
/// Identical inputs (kinds, rounds, noise, seed) reproduce identical
/// results.
pub fn run_simulation(
    kind_a: StrategyKind,
    kind_b: StrategyKind,
    rounds: u32,
    noise: f64,
    seed: u64,
) -> Result<SimulationResult, EngineError> {
    let mut game = Game::new(kind_a.build(), kind_b.build(), noise, seed)?;
    game.simulate(rounds)
}
