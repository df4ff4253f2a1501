//! Per-session counters and the selection lock.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::TileId;

/// Where a session is in its turn cycle.
///
/// `Idle -> OneSelected -> Resolving -> Idle`, until the last pair moves the
/// session to `Completed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No tile selected.
    Idle,
    /// One tile face up, waiting for the second.
    OneSelected,
    /// Two tiles face up, comparison pending.
    Resolving,
    /// Every pair found.
    Completed,
}

/// Mutable round state of one session.
///
/// ## Invariants
///
/// - `selected.len() <= 2`
/// - `is_resolving` implies `selected.len() == 2`
/// - `pairs_found <= pairs_needed`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Completed pair-checks, counted when the second tile is flipped.
    pub moves_count: u32,

    /// Confirmed matches.
    pub pairs_found: u32,

    /// Face-up, unresolved tiles in selection order.
    pub selected: SmallVec<[TileId; 2]>,

    /// Blocks selections while a comparison is pending.
    pub is_resolving: bool,

    /// Set on the first accepted selection. Hosts use it to start a timer.
    pub started: bool,

    /// Set once every pair has been found.
    pub completed: bool,
}

impl RoundState {
    /// Fresh round: no moves, no pairs, nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the turn phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.completed {
            Phase::Completed
        } else if self.is_resolving {
            Phase::Resolving
        } else if self.selected.is_empty() {
            Phase::Idle
        } else {
            Phase::OneSelected
        }
    }

    /// Whether `id` is currently selected.
    #[must_use]
    pub fn is_selected(&self, id: TileId) -> bool {
        self.selected.contains(&id)
    }

    /// The pair awaiting resolution, if two tiles are selected.
    #[must_use]
    pub fn pending_pair(&self) -> Option<(TileId, TileId)> {
        match self.selected.as_slice() {
            [first, second] => Some((*first, *second)),
            _ => None,
        }
    }
}

/// Counters shown to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stats {
    pub moves_count: u32,
    pub pairs_found: u32,
    pub pairs_needed: u32,
}

impl Stats {
    /// Pairs still hidden on the board.
    #[must_use]
    pub fn pairs_remaining(&self) -> u32 {
        self.pairs_needed.saturating_sub(self.pairs_found)
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "moves {}, pairs {}/{}",
            self.moves_count, self.pairs_found, self.pairs_needed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_round() {
        let round = RoundState::new();

        assert_eq!(round.moves_count, 0);
        assert_eq!(round.pairs_found, 0);
        assert!(round.selected.is_empty());
        assert!(!round.is_resolving);
        assert!(!round.started);
        assert_eq!(round.phase(), Phase::Idle);
    }

    #[test]
    fn test_phase_progression() {
        let mut round = RoundState::new();

        round.selected.push(TileId::new(3));
        assert_eq!(round.phase(), Phase::OneSelected);
        assert_eq!(round.pending_pair(), None);

        round.selected.push(TileId::new(5));
        round.is_resolving = true;
        assert_eq!(round.phase(), Phase::Resolving);
        assert_eq!(round.pending_pair(), Some((TileId::new(3), TileId::new(5))));
        assert!(round.is_selected(TileId::new(5)));

        round.selected.clear();
        round.is_resolving = false;
        round.completed = true;
        assert_eq!(round.phase(), Phase::Completed);
    }

    #[test]
    fn test_selection_stays_inline() {
        let mut round = RoundState::new();
        round.selected.push(TileId::new(0));
        round.selected.push(TileId::new(1));
        assert!(!round.selected.spilled());
    }

    #[test]
    fn test_stats_display() {
        let stats = Stats {
            moves_count: 5,
            pairs_found: 3,
            pairs_needed: 8,
        };
        assert_eq!(stats.to_string(), "moves 5, pairs 3/8");
        assert_eq!(stats.pairs_remaining(), 5);
    }
}
