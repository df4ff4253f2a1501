//! A game session: one board plus its round state.

use serde::{Deserialize, Serialize};

use crate::board::Board;

use super::round::{RoundState, Stats};
use super::token::SessionToken;

/// Presentation state of the completion notice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompletionNotice {
    /// The game is not complete.
    #[default]
    Inactive,
    /// The last pair was found; the announcement is scheduled.
    Pending,
    /// `GameCompleted` was emitted and the notice is up.
    Shown,
    /// The player closed the notice.
    Dismissed,
}

/// One board and its round state, from creation to replacement.
///
/// Sessions never share a board or round state. Replacing the session is
/// the only way to start over.
#[derive(Clone, Debug)]
pub struct Session {
    pub token: SessionToken,
    pub board: Board,
    pub round: RoundState,
    pub notice: CompletionNotice,
}

impl Session {
    /// Start a session on `board` with fresh counters.
    #[must_use]
    pub fn new(token: SessionToken, board: Board) -> Self {
        Self {
            token,
            board,
            round: RoundState::new(),
            notice: CompletionNotice::Inactive,
        }
    }

    /// Whether a deferred action tagged with `token` may touch this session.
    #[must_use]
    pub fn is_current(&self, token: SessionToken) -> bool {
        self.token == token
    }

    /// Pairs on this session's board.
    #[must_use]
    pub fn pairs_needed(&self) -> u32 {
        self.board.pair_count() as u32
    }

    /// Counters for display.
    #[must_use]
    pub fn stats(&self) -> Stats {
        Stats {
            moves_count: self.round.moves_count,
            pairs_found: self.round.pairs_found,
            pairs_needed: self.pairs_needed(),
        }
    }
}
