//! Strategy registry: stable names, descriptions, and fresh-instance
//! construction.
//!
//! The registry is a factory, not a catalog of shared instances: every
//! `build`/`construct` call returns a new, exclusively-owned strategy, so
//! concurrent simulations can never observe each other's internal state.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::strategy::{
    Adaptive, AlwaysCooperate, AlwaysDefect, GenerousTitForTat, Gradual, GrimTrigger, Grudger,
    HardMajority, Pavlov, Prober, Random, SoftMajority, Strategy, SuspiciousTitForTat, TitForTat,
    TitForTwoTats,
};

/// The closed catalog of built-in strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    AlwaysCooperate,
    AlwaysDefect,
    TitForTat,
    GrimTrigger,
    Pavlov,
    Random,
    Grudger,
    TitForTwoTats,
    GenerousTitForTat,
    SuspiciousTitForTat,
    Gradual,
    Adaptive,
    Prober,
    SoftMajority,
    HardMajority,
}

impl StrategyKind {
    /// Every catalog entry, in stable order
    pub const ALL: [StrategyKind; 15] = [
        StrategyKind::AlwaysCooperate,
        StrategyKind::AlwaysDefect,
        StrategyKind::TitForTat,
        StrategyKind::GrimTrigger,
        StrategyKind::Pavlov,
        StrategyKind::Random,
        StrategyKind::Grudger,
        StrategyKind::TitForTwoTats,
        StrategyKind::GenerousTitForTat,
        StrategyKind::SuspiciousTitForTat,
        StrategyKind::Gradual,
        StrategyKind::Adaptive,
        StrategyKind::Prober,
        StrategyKind::SoftMajority,
        StrategyKind::HardMajority,
    ];

    /// Stable name used by callers to select a strategy
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::AlwaysCooperate => "AlwaysCooperate",
            StrategyKind::AlwaysDefect => "AlwaysDefect",
            StrategyKind::TitForTat => "TitForTat",
            StrategyKind::GrimTrigger => "GrimTrigger",
            StrategyKind::Pavlov => "Pavlov",
            StrategyKind::Random => "Random",
            StrategyKind::Grudger => "Grudger",
            StrategyKind::TitForTwoTats => "TitForTwoTats",
            StrategyKind::GenerousTitForTat => "GenerousTitForTat",
            StrategyKind::SuspiciousTitForTat => "SuspiciousTitForTat",
            StrategyKind::Gradual => "Gradual",
            StrategyKind::Adaptive => "Adaptive",
            StrategyKind::Prober => "Prober",
            StrategyKind::SoftMajority => "SoftMajority",
            StrategyKind::HardMajority => "HardMajority",
        }
    }

    /// Human-readable description for strategy pickers
    pub fn description(self) -> &'static str {
        match self {
            StrategyKind::AlwaysCooperate => "Always cooperates, no matter what happens",
            StrategyKind::AlwaysDefect => "Always defects, pure selfishness",
            StrategyKind::TitForTat => {
                "Starts with cooperation, then copies opponent's last move"
            }
            StrategyKind::GrimTrigger => {
                "Cooperates until opponent defects once, then defects forever"
            }
            StrategyKind::Pavlov => {
                "Win-Stay, Lose-Shift - repeats successful moves, changes unsuccessful ones"
            }
            StrategyKind::Random => "Randomly cooperates or defects with 50% probability each",
            StrategyKind::Grudger => "Holds grudges - one defection and cooperation ends forever",
            StrategyKind::TitForTwoTats => {
                "Only retaliates after opponent defects twice in a row"
            }
            StrategyKind::GenerousTitForTat => {
                "Tit-for-Tat with a 30% chance to forgive a defection"
            }
            StrategyKind::SuspiciousTitForTat => {
                "Like Tit-for-Tat but starts with defection instead"
            }
            StrategyKind::Gradual => "Punishes defections by defecting N times after Nth defection",
            StrategyKind::Adaptive => {
                "Learns from opponent - adapts based on their cooperation rate"
            }
            StrategyKind::Prober => {
                "Tests opponent with D, C, C pattern, then plays Tit-for-Tat if they cooperate"
            }
            StrategyKind::SoftMajority => {
                "Cooperates if opponent has cooperated at least as much as defected"
            }
            StrategyKind::HardMajority => {
                "Defects if opponent has ever defected more than they have cooperated"
            }
        }
    }

    /// Construct a fresh, exclusively-owned instance with initial state
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::AlwaysCooperate => Box::new(AlwaysCooperate),
            StrategyKind::AlwaysDefect => Box::new(AlwaysDefect),
            StrategyKind::TitForTat => Box::new(TitForTat),
            StrategyKind::GrimTrigger => Box::new(GrimTrigger::default()),
            StrategyKind::Pavlov => Box::new(Pavlov),
            StrategyKind::Random => Box::new(Random),
            StrategyKind::Grudger => Box::new(Grudger::default()),
            StrategyKind::TitForTwoTats => Box::new(TitForTwoTats),
            StrategyKind::GenerousTitForTat => Box::new(GenerousTitForTat),
            StrategyKind::SuspiciousTitForTat => Box::new(SuspiciousTitForTat),
            StrategyKind::Gradual => Box::new(Gradual::default()),
            StrategyKind::Adaptive => Box::new(Adaptive),
            StrategyKind::Prober => Box::new(Prober),
            StrategyKind::SoftMajority => Box::new(SoftMajority),
            StrategyKind::HardMajority => Box::new(HardMajority),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| EngineError::UnknownStrategy(s.to_string()))
    }
}

/// Name and description of one catalog entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StrategyInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// List every strategy with its description, in catalog order
pub fn list_strategies() -> Vec<StrategyInfo> {
    StrategyKind::ALL
        .iter()
        .map(|kind| StrategyInfo {
            name: kind.name(),
            description: kind.description(),
        })
        .collect()
}

/// Construct a fresh strategy instance by stable name
pub fn construct(name: &str) -> Result<Box<dyn Strategy>, EngineError> {
    Ok(name.parse::<StrategyKind>()?.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRng;
    use crate::strategy::Move;

    #[test]
    fn test_catalog_is_complete() {
        let infos = list_strategies();
        assert_eq!(infos.len(), 15);
        for info in &infos {
            assert!(!info.description.is_empty(), "{} has no description", info.name);
        }
    }

    #[test]
    fn test_names_are_unique_and_parse_back() {
        for kind in StrategyKind::ALL {
            let parsed: StrategyKind = kind.name().parse().unwrap();
            assert_eq!(parsed, kind);
        }

        let mut names: Vec<_> = StrategyKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), StrategyKind::ALL.len());
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = construct("CopyCat").unwrap_err();
        assert_eq!(err, EngineError::UnknownStrategy("CopyCat".to_string()));

        // Lookup is case-sensitive
        assert!(construct("titfortat").is_err());
    }

    #[test]
    fn test_first_moves_match_catalog() {
        let mut rng = SeededRng::new(42);

        for kind in StrategyKind::ALL {
            if kind == StrategyKind::Random {
                continue;
            }

            let expected = match kind {
                StrategyKind::AlwaysDefect
                | StrategyKind::SuspiciousTitForTat
                | StrategyKind::Prober => Move::Defect,
                _ => Move::Cooperate,
            };

            let mut strategy = kind.build();
            strategy.reset();
            let m = strategy.decide(&[], &[], &mut rng);
            assert_eq!(m, expected, "first move of {}", kind.name());
        }
    }

    #[test]
    fn test_build_returns_fresh_state() {
        let mut rng = SeededRng::new(42);

        // Latch one GrimTrigger instance
        let mut first = StrategyKind::GrimTrigger.build();
        assert_eq!(first.decide(&[Move::Defect], &[Move::Cooperate], &mut rng), Move::Defect);
        assert_eq!(first.decide(&[], &[], &mut rng), Move::Defect);

        // A second instance starts untriggered
        let mut second = StrategyKind::GrimTrigger.build();
        assert_eq!(second.decide(&[], &[], &mut rng), Move::Cooperate);
    }

    #[test]
    fn test_kind_serializes_as_name() {
        let json = serde_json::to_string(&StrategyKind::TitForTwoTats).unwrap();
        assert_eq!(json, "\"TitForTwoTats\"");

        let kind: StrategyKind = serde_json::from_str("\"Gradual\"").unwrap();
        assert_eq!(kind, StrategyKind::Gradual);
    }
}
