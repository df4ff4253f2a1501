//! Outcome of a tile selection.

use serde::{Deserialize, Serialize};

/// Why a selection was ignored.
///
/// Rejections are normal gameplay (clicking a face-up tile, clicking while a
/// pair is on display), not errors. They change nothing and emit nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// Every pair has been found.
    Completed,
    /// A pair comparison is pending.
    Resolving,
    /// Two tiles are already selected.
    SelectionFull,
    /// No tile with this id on the board.
    UnknownTile,
    /// The tile is face up awaiting resolution.
    AlreadyFlipped,
    /// The tile belongs to a found pair.
    AlreadyMatched,
}

/// Result of [`GameEngine::select_tile`](super::GameEngine::select_tile).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    /// Ignored; nothing changed.
    Rejected(RejectReason),
    /// First tile of a pair turned face up.
    Flipped,
    /// Second tile turned face up; the pair resolves at `resolves_at`.
    PairPending { resolves_at: u64 },
}

impl Selection {
    /// Whether the selection changed the game.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Selection::Rejected(_))
    }

    /// The rejection reason, if rejected.
    #[must_use]
    pub fn rejection(&self) -> Option<RejectReason> {
        match self {
            Selection::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }
}
