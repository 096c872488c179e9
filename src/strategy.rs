//! Strategy catalog: the decision policies and their state machines

use serde::{Deserialize, Serialize};

use crate::random::SeededRng;

/// A move in the Prisoner's Dilemma
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Cooperate,
    Defect,
}

impl Move {
    /// The opposite action (used by the noise model and Pavlov's shift)
    pub fn opposite(self) -> Move {
        match self {
            Move::Cooperate => Move::Defect,
            Move::Defect => Move::Cooperate,
        }
    }
}

/// A stateful decision policy producing one move per round.
///
/// `decide` is called once per round, in round order, with both histories as
/// they stood before the current round (history length = rounds completed).
/// It never mutates the histories but may read and update the policy's own
/// private state. Histories contain realized moves — a player's own history
/// reflects noise-corrupted versions of its past intentions.
pub trait Strategy: std::fmt::Debug {
    /// Choose the next move
    fn decide(
        &mut self,
        opponent_history: &[Move],
        own_history: &[Move],
        rng: &mut SeededRng,
    ) -> Move;

    /// Restore internal state to the policy's initial configuration.
    ///
    /// Idempotent. Invoked once before each new simulation, never mid-run.
    fn reset(&mut self) {}
}

fn cooperation_count(history: &[Move]) -> usize {
    history.iter().filter(|m| **m == Move::Cooperate).count()
}

// ── Stateless policies ───────────────────────────────────────────────

/// Always cooperates, regardless of opponent's actions
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysCooperate;

impl Strategy for AlwaysCooperate {
    fn decide(&mut self, _opponent: &[Move], _own: &[Move], _rng: &mut SeededRng) -> Move {
        Move::Cooperate
    }
}

/// Always defects, regardless of opponent's actions
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysDefect;

impl Strategy for AlwaysDefect {
    fn decide(&mut self, _opponent: &[Move], _own: &[Move], _rng: &mut SeededRng) -> Move {
        Move::Defect
    }
}

/// Copy opponent's last move. Start with cooperate.
#[derive(Clone, Copy, Debug, Default)]
pub struct TitForTat;

impl Strategy for TitForTat {
    fn decide(&mut self, opponent: &[Move], _own: &[Move], _rng: &mut SeededRng) -> Move {
        match opponent.last() {
            None => Move::Cooperate,
            Some(&m) => m,
        }
    }
}

/// Tit-for-Tat but start with defect
#[derive(Clone, Copy, Debug, Default)]
pub struct SuspiciousTitForTat;

impl Strategy for SuspiciousTitForTat {
    fn decide(&mut self, opponent: &[Move], _own: &[Move], _rng: &mut SeededRng) -> Move {
        match opponent.last() {
            None => Move::Defect,
            Some(&m) => m,
        }
    }
}

/// Win-Stay, Lose-Shift: repeat own last move if it matched the opponent's,
/// otherwise switch. Starts with cooperate.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pavlov;

impl Strategy for Pavlov {
    fn decide(&mut self, opponent: &[Move], own: &[Move], _rng: &mut SeededRng) -> Move {
        match (own.last(), opponent.last()) {
            (Some(&own_last), Some(&opp_last)) => {
                if own_last == opp_last {
                    own_last
                } else {
                    own_last.opposite()
                }
            }
            _ => Move::Cooperate,
        }
    }
}

/// Random choice each round, independent of history
#[derive(Clone, Copy, Debug, Default)]
pub struct Random;

impl Strategy for Random {
    fn decide(&mut self, _opponent: &[Move], _own: &[Move], rng: &mut SeededRng) -> Move {
        if rng.coin() {
            Move::Cooperate
        } else {
            Move::Defect
        }
    }
}

/// Defect only if opponent defected twice in a row
#[derive(Clone, Copy, Debug, Default)]
pub struct TitForTwoTats;

impl Strategy for TitForTwoTats {
    fn decide(&mut self, opponent: &[Move], _own: &[Move], _rng: &mut SeededRng) -> Move {
        if opponent.len() < 2 {
            return Move::Cooperate;
        }

        let last_two = &opponent[opponent.len() - 2..];
        if last_two[0] == Move::Defect && last_two[1] == Move::Defect {
            Move::Defect
        } else {
            Move::Cooperate
        }
    }
}

/// Tit-for-Tat with a fixed chance to forgive a defection
#[derive(Clone, Copy, Debug, Default)]
pub struct GenerousTitForTat;

impl GenerousTitForTat {
    const FORGIVENESS: f64 = 0.3;
}

impl Strategy for GenerousTitForTat {
    fn decide(&mut self, opponent: &[Move], _own: &[Move], rng: &mut SeededRng) -> Move {
        match opponent.last() {
            None => Move::Cooperate,
            Some(Move::Defect) if rng.chance(Self::FORGIVENESS) => Move::Cooperate,
            Some(&m) => m,
        }
    }
}

/// Fixed 6-move opening, then cooperate iff the opponent's cumulative
/// cooperation rate is at least one half
#[derive(Clone, Copy, Debug, Default)]
pub struct Adaptive;

impl Adaptive {
    const OPENING: [Move; 6] = [
        Move::Cooperate,
        Move::Cooperate,
        Move::Defect,
        Move::Defect,
        Move::Cooperate,
        Move::Defect,
    ];
}

impl Strategy for Adaptive {
    fn decide(&mut self, opponent: &[Move], own: &[Move], _rng: &mut SeededRng) -> Move {
        if own.len() < Self::OPENING.len() {
            return Self::OPENING[own.len()];
        }

        let coop_rate = cooperation_count(opponent) as f64 / opponent.len() as f64;
        if coop_rate >= 0.5 {
            Move::Cooperate
        } else {
            Move::Defect
        }
    }
}

/// Probe with D, C, C, then mirror the opponent's last move if they
/// cooperated on both probe responses, else always defect.
///
/// The probe check reads the opponent's moves at fixed positions 1 and 2,
/// not the two most recent — the post-probe behavior is decided once and
/// never re-evaluated.
#[derive(Clone, Copy, Debug, Default)]
pub struct Prober;

impl Strategy for Prober {
    fn decide(&mut self, opponent: &[Move], own: &[Move], _rng: &mut SeededRng) -> Move {
        match own.len() {
            0 => Move::Defect,
            1 | 2 => Move::Cooperate,
            _ => {
                if opponent.len() > 2
                    && opponent[1] == Move::Cooperate
                    && opponent[2] == Move::Cooperate
                {
                    opponent[opponent.len() - 1]
                } else {
                    Move::Defect
                }
            }
        }
    }
}

/// Cooperate iff opponent's cooperation count is at least their defection count
#[derive(Clone, Copy, Debug, Default)]
pub struct SoftMajority;

impl Strategy for SoftMajority {
    fn decide(&mut self, opponent: &[Move], _own: &[Move], _rng: &mut SeededRng) -> Move {
        if opponent.is_empty() {
            return Move::Cooperate;
        }

        let coop = cooperation_count(opponent);
        if coop >= opponent.len() - coop {
            Move::Cooperate
        } else {
            Move::Defect
        }
    }
}

/// Cooperate iff opponent's cooperation count strictly exceeds their defections
#[derive(Clone, Copy, Debug, Default)]
pub struct HardMajority;

impl Strategy for HardMajority {
    fn decide(&mut self, opponent: &[Move], _own: &[Move], _rng: &mut SeededRng) -> Move {
        if opponent.is_empty() {
            return Move::Cooperate;
        }

        let coop = cooperation_count(opponent);
        if coop > opponent.len() - coop {
            Move::Cooperate
        } else {
            Move::Defect
        }
    }
}

// ── Stateful policies ────────────────────────────────────────────────

/// Cooperate until opponent defects once, then defect forever.
/// The `triggered` flag latches permanently until reset.
#[derive(Clone, Copy, Debug, Default)]
pub struct GrimTrigger {
    triggered: bool,
}

impl Strategy for GrimTrigger {
    fn decide(&mut self, opponent: &[Move], _own: &[Move], _rng: &mut SeededRng) -> Move {
        if !self.triggered && opponent.contains(&Move::Defect) {
            self.triggered = true;
        }

        if self.triggered {
            Move::Defect
        } else {
            Move::Cooperate
        }
    }

    fn reset(&mut self) {
        self.triggered = false;
    }
}

/// Holds grudges: one defection and cooperation ends forever.
/// Functionally identical to GrimTrigger, kept as a separate catalog entry.
#[derive(Clone, Copy, Debug, Default)]
pub struct Grudger {
    grudge: bool,
}

impl Strategy for Grudger {
    fn decide(&mut self, opponent: &[Move], _own: &[Move], _rng: &mut SeededRng) -> Move {
        if !self.grudge && opponent.contains(&Move::Defect) {
            self.grudge = true;
        }

        if self.grudge {
            Move::Defect
        } else {
            Move::Cooperate
        }
    }

    fn reset(&mut self) {
        self.grudge = false;
    }
}

/// Escalating retaliation: after the opponent's Nth defection trigger,
/// punish with N defections, then calm down with cooperation until own
/// last two moves were both cooperate.
#[derive(Clone, Copy, Debug, Default)]
pub struct Gradual {
    defection_count: u32,
    punishment_remaining: u32,
    calming_down: bool,
}

impl Strategy for Gradual {
    fn decide(&mut self, opponent: &[Move], own: &[Move], _rng: &mut SeededRng) -> Move {
        if self.punishment_remaining > 0 {
            self.punishment_remaining -= 1;
            if self.punishment_remaining == 0 {
                self.calming_down = true;
            }
            return Move::Defect;
        }

        if self.calming_down {
            if own.len() >= 2
                && own[own.len() - 1] == Move::Cooperate
                && own[own.len() - 2] == Move::Cooperate
            {
                self.calming_down = false;
            }
            return Move::Cooperate;
        }

        // New trigger: opponent just defected and we were not already retaliating
        if opponent.last() == Some(&Move::Defect)
            && own.last().map_or(true, |m| *m == Move::Cooperate)
        {
            self.defection_count += 1;
            self.punishment_remaining = self.defection_count;
            return Move::Defect;
        }

        Move::Cooperate
    }

    fn reset(&mut self) {
        self.defection_count = 0;
        self.punishment_remaining = 0;
        self.calming_down = false;
    }
}
