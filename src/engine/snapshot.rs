//! Serializable view of an engine, for hosts that render from data.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::session::{CompletionNotice, Phase, RoundState, SessionToken, Stats};

/// Everything a renderer needs, captured at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub token: SessionToken,
    pub now_ms: u64,
    pub board: Board,
    pub round: RoundState,
    pub stats: Stats,
    pub phase: Phase,
    pub notice: CompletionNotice,
    /// When the host should next advance the clock.
    pub next_deadline: Option<u64>,
}
