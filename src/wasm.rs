//! WASM bindings for frontend replay and strategy pickers

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::game::run_simulation;
use crate::registry::{self, StrategyKind};

fn parse_kind(name: &str) -> Result<StrategyKind, JsError> {
    name.parse::<StrategyKind>()
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Get all available strategies as `[{name, description}]`
#[wasm_bindgen]
pub fn list_strategies() -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(&registry::list_strategies())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Get human-readable description of a strategy
#[wasm_bindgen]
pub fn describe_strategy(name: &str) -> Result<String, JsError> {
    Ok(parse_kind(name)?.description().to_string())
}

/// Run a full simulation between two named strategies
///
/// # Arguments
/// * `strategy_a` - Stable name of the first strategy
/// * `strategy_b` - Stable name of the second strategy
/// * `rounds` - Number of rounds (1..=10000)
/// * `noise` - Per-move flip probability in [0, 1]
/// * `seed` - Simulation seed; identical inputs replay identically
///
/// # Returns
/// Serialized SimulationResult with the full round-by-round trace
#[wasm_bindgen]
pub fn simulate(
    strategy_a: &str,
    strategy_b: &str,
    rounds: u32,
    noise: f64,
    seed: u64,
) -> Result<JsValue, JsError> {
    let kind_a = parse_kind(strategy_a)?;
    let kind_b = parse_kind(strategy_b)?;

    let result = run_simulation(kind_a, kind_b, rounds, noise, seed)
        .map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
