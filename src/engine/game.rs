//! The game engine: inbound operations, logical clock, event dispatch.

use crate::board::{generate_board, Board, ImageKey, Tile, TileId, TileState};
use crate::core::{GameConfig, GameRng, GameRngState, RandomSource, Result};
use crate::events::{EventListener, GameEvent};
use crate::schedule::{Deferred, DeferredKind, DeferredQueue};
use crate::session::{
    CompletionNotice, Phase, RoundState, Session, SessionToken, Stats, TokenIssuer,
};

use super::selection::{RejectReason, Selection};
use super::snapshot::GameSnapshot;

/// Memory game engine owning one session at a time.
///
/// ## Threading
///
/// Single-threaded and host-clocked. Inbound calls mutate state and fire
/// events synchronously. Pauses are deferred actions that fire from
/// [`advance`](GameEngine::advance), [`advance_to`](GameEngine::advance_to)
/// or [`run_until_idle`](GameEngine::run_until_idle); nothing blocks.
///
/// ## Example
///
/// ```
/// use memory_tiles::board::{ImageKey, TileId, TileState};
/// use memory_tiles::core::{GameConfig, GameRng};
/// use memory_tiles::engine::GameEngine;
///
/// let config = GameConfig::default().with_pairs_needed(2);
/// let layout: Vec<_> = [1, 2, 1, 2].into_iter().map(ImageKey::new).collect();
/// let mut engine = GameEngine::with_layout(config, GameRng::new(1), &layout).unwrap();
///
/// engine.select_tile(TileId::new(0));
/// engine.select_tile(TileId::new(2));
/// assert!(engine.round().is_resolving);
///
/// engine.advance(1000);
/// assert_eq!(engine.tile(TileId::new(0)).unwrap().state, TileState::Matched);
/// assert_eq!(engine.stats().pairs_found, 1);
/// ```
pub struct GameEngine<R: RandomSource = GameRng> {
    config: GameConfig,
    rng: R,
    issuer: TokenIssuer,
    session: Session,
    queue: DeferredQueue,
    now_ms: u64,
    listeners: Vec<Box<dyn EventListener>>,
}

impl<R: RandomSource> GameEngine<R> {
    /// Create an engine and deal its first board.
    ///
    /// Fails with `GameError::Config` if the pool cannot supply the pairs.
    pub fn new(config: GameConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        let board = generate_board(&config, &mut rng)?;
        Ok(Self::from_board(config, rng, board))
    }

    /// Create an engine whose first board uses an explicit layout.
    pub fn with_layout(config: GameConfig, rng: R, layout: &[ImageKey]) -> Result<Self> {
        config.validate()?;
        let board = Board::from_layout(layout, config.pairs_needed)?;
        Ok(Self::from_board(config, rng, board))
    }

    fn from_board(config: GameConfig, rng: R, board: Board) -> Self {
        let mut issuer = TokenIssuer::new();
        let token = issuer.issue();
        log::debug!("{} started with {} tiles", token, board.len());

        Self {
            config,
            rng,
            issuer,
            session: Session::new(token, board),
            queue: DeferredQueue::new(),
            now_ms: 0,
            listeners: Vec::new(),
        }
    }

    /// Register a listener. Listeners receive events in registration order.
    pub fn add_listener(&mut self, listener: Box<dyn EventListener>) {
        self.listeners.push(listener);
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.session.board
    }

    /// Look up a tile on the current board.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.session.board.get(id)
    }

    #[must_use]
    pub fn round(&self) -> &RoundState {
        &self.session.round
    }

    #[must_use]
    pub fn stats(&self) -> Stats {
        self.session.stats()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.round.phase()
    }

    /// Token of the live session.
    #[must_use]
    pub fn token(&self) -> SessionToken {
        self.session.token
    }

    /// Logical clock, in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    #[must_use]
    pub fn completion_notice(&self) -> CompletionNotice {
        self.session.notice
    }

    /// Final move count once every pair is found.
    #[must_use]
    pub fn final_moves(&self) -> Option<u32> {
        self.session
            .round
            .completed
            .then_some(self.session.round.moves_count)
    }

    /// When the next deferred action is due, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.queue.next_deadline()
    }

    /// Deferred actions queued for the live session.
    #[must_use]
    pub fn pending_actions(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            token: self.session.token,
            now_ms: self.now_ms,
            board: self.session.board.clone(),
            round: self.session.round.clone(),
            stats: self.session.stats(),
            phase: self.phase(),
            notice: self.session.notice,
            next_deadline: self.queue.next_deadline(),
        }
    }

    // === Inbound operations ===

    /// Turn a tile face up.
    ///
    /// Selecting a face-up tile, selecting while a pair is pending, or
    /// selecting an unknown id is rejected with no state change and no event.
    /// The second accepted selection counts a move and schedules the pair's
    /// resolution `resolution_delay_ms` from now.
    pub fn select_tile(&mut self, id: TileId) -> Selection {
        if let Some(reason) = self.rejection(id) {
            log::trace!("{} rejected: {:?}", id, reason);
            return Selection::Rejected(reason);
        }

        let round = &mut self.session.round;
        round.started = true;
        round.selected.push(id);
        self.session.board.set_state(id, TileState::Flipped);
        self.emit(GameEvent::tile(id, TileState::Flipped));

        if self.session.round.selected.len() < 2 {
            return Selection::Flipped;
        }

        self.session.round.moves_count += 1;
        self.session.round.is_resolving = true;
        let resolves_at = self.now_ms.saturating_add(self.config.resolution_delay_ms);
        self.queue
            .schedule(resolves_at, self.session.token, DeferredKind::ResolvePair);
        self.emit(GameEvent::StatsChanged(self.session.stats()));

        Selection::PairPending { resolves_at }
    }

    /// Discard the session and deal a fresh board.
    pub fn new_game(&mut self) -> Result<()> {
        let board = generate_board(&self.config, &mut self.rng)?;
        self.replace_session(board);
        Ok(())
    }

    /// Discard the session and start over on an explicit layout.
    pub fn new_game_with_layout(&mut self, layout: &[ImageKey]) -> Result<()> {
        let board = Board::from_layout(layout, self.config.pairs_needed)?;
        self.replace_session(board);
        Ok(())
    }

    /// Start over on the same layout.
    ///
    /// Every tile turns face down and the counters clear. The session is
    /// replaced, so a pending resolution or announcement is cancelled and a
    /// shown completion notice is dismissed.
    pub fn reset_game(&mut self) {
        let mut board = self.session.board.clone();
        board.hide_all();
        self.replace_session(board);
    }

    /// Close a shown completion notice. Returns false if none was shown.
    pub fn dismiss_completion(&mut self) -> bool {
        if self.session.notice != CompletionNotice::Shown {
            return false;
        }
        self.session.notice = CompletionNotice::Dismissed;
        self.emit(GameEvent::CompletionDismissed);
        true
    }

    /// Close the notice and deal a new game.
    pub fn play_again(&mut self) -> Result<()> {
        self.new_game()
    }

    // === Clock ===

    /// Move the clock forward and fire every action that falls due.
    ///
    /// Returns the number of actions applied; stale actions from replaced
    /// sessions are dropped and not counted.
    pub fn advance(&mut self, elapsed_ms: u64) -> usize {
        self.advance_to(self.now_ms.saturating_add(elapsed_ms))
    }

    /// Move the clock to `now_ms` and fire every action that falls due.
    ///
    /// A time earlier than the current clock fires whatever is already due
    /// without moving the clock back.
    pub fn advance_to(&mut self, now_ms: u64) -> usize {
        let target = now_ms.max(self.now_ms);
        let mut applied = 0;

        while let Some(deferred) = self.queue.pop_due(target) {
            self.now_ms = self.now_ms.max(deferred.due_at);
            if self.apply(deferred) {
                applied += 1;
            }
        }

        self.now_ms = target;
        applied
    }

    /// Fire everything pending, jumping the clock to each deadline.
    pub fn run_until_idle(&mut self) -> usize {
        let mut applied = 0;
        while let Some(deadline) = self.queue.next_deadline() {
            applied += self.advance_to(deadline);
        }
        applied
    }

    // === Internals ===

    fn rejection(&self, id: TileId) -> Option<RejectReason> {
        let round = &self.session.round;
        if round.completed {
            return Some(RejectReason::Completed);
        }
        if round.is_resolving {
            return Some(RejectReason::Resolving);
        }
        if round.selected.len() >= 2 {
            return Some(RejectReason::SelectionFull);
        }
        match self.session.board.get(id).map(|t| t.state) {
            None => Some(RejectReason::UnknownTile),
            Some(TileState::Flipped) => Some(RejectReason::AlreadyFlipped),
            Some(TileState::Matched) => Some(RejectReason::AlreadyMatched),
            Some(TileState::Hidden) => None,
        }
    }

    fn replace_session(&mut self, board: Board) {
        self.dismiss_completion();

        let old = self.session.token;
        let token = self.issuer.issue();

        let cancelled = self.queue.count_for(old);
        if cancelled > 0 {
            log::debug!("{} replaced with {} pending actions", old, cancelled);
        }
        self.queue.clear();
        log::debug!("{} started with {} tiles", token, board.len());

        self.session = Session::new(token, board);
        self.emit(GameEvent::BoardChanged(self.session.board.clone()));
        self.emit(GameEvent::StatsChanged(self.session.stats()));
    }

    /// Apply a due action if its session is still live.
    fn apply(&mut self, deferred: Deferred) -> bool {
        if !self.session.is_current(deferred.token) {
            log::debug!(
                "dropping stale {:?} from {} (live: {})",
                deferred.kind,
                deferred.token,
                self.session.token
            );
            return false;
        }

        match deferred.kind {
            DeferredKind::ResolvePair => self.resolve_pair(deferred.due_at),
            DeferredKind::AnnounceCompletion => self.announce_completion(),
        }
        true
    }

    fn resolve_pair(&mut self, resolved_at: u64) {
        let Some((first, second)) = self.session.round.pending_pair() else {
            log::warn!("resolution fired without a selected pair");
            self.session.round.is_resolving = false;
            return;
        };

        let board = &mut self.session.board;
        let matched = match (board.get(first), board.get(second)) {
            (Some(a), Some(b)) => a.pairs_with(b),
            _ => false,
        };
        let state = if matched {
            TileState::Matched
        } else {
            TileState::Hidden
        };
        board.set_state(first, state);
        board.set_state(second, state);

        let round = &mut self.session.round;
        round.selected.clear();
        round.is_resolving = false;
        if matched {
            round.pairs_found += 1;
        }

        self.emit(GameEvent::tile(first, state));
        self.emit(GameEvent::tile(second, state));
        if !matched {
            return;
        }
        self.emit(GameEvent::StatsChanged(self.session.stats()));

        if self.session.round.pairs_found == self.session.pairs_needed() {
            self.session.round.completed = true;
            self.session.notice = CompletionNotice::Pending;
            self.queue.schedule(
                resolved_at.saturating_add(self.config.completion_delay_ms),
                self.session.token,
                DeferredKind::AnnounceCompletion,
            );
            log::debug!(
                "{} completed in {} moves",
                self.session.token,
                self.session.round.moves_count
            );
        }
    }

    fn announce_completion(&mut self) {
        if self.session.notice != CompletionNotice::Pending {
            return;
        }
        self.session.notice = CompletionNotice::Shown;
        self.emit(GameEvent::GameCompleted {
            final_moves: self.session.round.moves_count,
        });
    }

    fn emit(&mut self, event: GameEvent) {
        for listener in &mut self.listeners {
            listener.on_event(&event);
        }
    }
}

impl GameEngine<GameRng> {
    /// Create an engine backed by a seeded [`GameRng`].
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(config, GameRng::new(seed))
    }

    /// RNG checkpoint. Restoring it and calling `new_game()` deals the same
    /// board the engine would deal next.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}
