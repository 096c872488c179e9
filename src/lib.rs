//! Strategy and game engine for the iterated Prisoner's Dilemma.
//!
//! Simulates repeated two-player games between pluggable decision policies,
//! with per-move noise, a fixed payoff matrix, and a full round-by-round
//! trace. This crate is compiled to:
//! - Native (for the request layer)
//! - WASM (for frontend replay)

mod error;
mod game;
mod random;
mod registry;
mod strategy;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::EngineError;
pub use game::{run_simulation, Game, RoundRecord, SimulationResult, MAX_ROUNDS};
pub use random::SeededRng;
pub use registry::{construct, list_strategies, StrategyInfo, StrategyKind};
pub use strategy::{Move, Strategy};

/// Payoff matrix for the Prisoner's Dilemma
/// Returns (score_a, score_b)
pub fn payoff(a: Move, b: Move) -> (u8, u8) {
    match (a, b) {
        (Move::Cooperate, Move::Cooperate) => (3, 3),
        (Move::Cooperate, Move::Defect) => (0, 5),
        (Move::Defect, Move::Cooperate) => (5, 0),
        (Move::Defect, Move::Defect) => (1, 1),
    }
}
