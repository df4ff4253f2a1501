//! Time-ordered queue of deferred actions.

use serde::{Deserialize, Serialize};

use crate::session::SessionToken;

/// What a deferred action does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeferredKind {
    /// Compare the two selected tiles.
    ResolvePair,
    /// Emit the completion event.
    AnnounceCompletion,
}

/// An action waiting for its due time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deferred {
    /// Logical time, in milliseconds, at which the action fires.
    pub due_at: u64,
    /// Session the action belongs to.
    pub token: SessionToken,
    pub kind: DeferredKind,
    seq: u64,
}

/// Deferred actions ordered by due time, then by scheduling order.
///
/// The queue never looks at the clock itself. The engine asks for due
/// actions with [`pop_due`](DeferredQueue::pop_due) whenever the host
/// advances time.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DeferredQueue {
    pending: Vec<Deferred>,
    next_seq: u64,
}

impl DeferredQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `kind` for `token`, due at `due_at`.
    pub fn schedule(&mut self, due_at: u64, token: SessionToken, kind: DeferredKind) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Deferred {
            due_at,
            token,
            kind,
            seq,
        });
    }

    /// Remove and return the earliest action due at or before `now`.
    pub fn pop_due(&mut self, now: u64) -> Option<Deferred> {
        let index = self.earliest_index()?;
        if self.pending[index].due_at > now {
            return None;
        }
        Some(self.pending.swap_remove(index))
    }

    /// Due time of the earliest pending action.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.earliest_index().map(|i| self.pending[i].due_at)
    }

    /// Number of pending actions, stale ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of pending actions belonging to `token`.
    #[must_use]
    pub fn count_for(&self, token: SessionToken) -> usize {
        self.pending.iter().filter(|d| d.token == token).count()
    }

    /// Drop every pending action.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    fn earliest_index(&self) -> Option<usize> {
        self.pending
            .iter()
            .enumerate()
            .min_by_key(|(_, d)| (d.due_at, d.seq))
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::TokenIssuer;

    #[test]
    fn test_empty_queue() {
        let mut queue = DeferredQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.next_deadline(), None);
        assert_eq!(queue.pop_due(u64::MAX), None);
    }

    #[test]
    fn test_pop_due_waits_for_deadline() {
        let token = TokenIssuer::new().issue();
        let mut queue = DeferredQueue::new();

        queue.schedule(1000, token, DeferredKind::ResolvePair);

        assert_eq!(queue.next_deadline(), Some(1000));
        assert_eq!(queue.pop_due(999), None);
        assert_eq!(queue.len(), 1);

        let fired = queue.pop_due(1000).unwrap();
        assert_eq!(fired.kind, DeferredKind::ResolvePair);
        assert_eq!(fired.token, token);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_order_by_due_then_sequence() {
        let token = TokenIssuer::new().issue();
        let mut queue = DeferredQueue::new();

        queue.schedule(500, token, DeferredKind::AnnounceCompletion);
        queue.schedule(100, token, DeferredKind::ResolvePair);
        queue.schedule(500, token, DeferredKind::ResolvePair);

        let order: Vec<_> = std::iter::from_fn(|| queue.pop_due(1000))
            .map(|d| (d.due_at, d.kind))
            .collect();

        assert_eq!(
            order,
            vec![
                (100, DeferredKind::ResolvePair),
                (500, DeferredKind::AnnounceCompletion),
                (500, DeferredKind::ResolvePair),
            ]
        );
    }

    #[test]
    fn test_count_for_and_clear() {
        let mut issuer = TokenIssuer::new();
        let old = issuer.issue();
        let current = issuer.issue();
        let mut queue = DeferredQueue::new();

        queue.schedule(10, old, DeferredKind::ResolvePair);
        queue.schedule(20, current, DeferredKind::ResolvePair);

        assert_eq!(queue.count_for(old), 1);
        assert_eq!(queue.count_for(current), 1);

        queue.clear();
        assert!(queue.is_empty());
    }
}
