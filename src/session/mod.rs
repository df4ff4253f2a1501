//! Session state: board, round counters, tokens.
//!
//! A session is the unit that `new_game()` and `reset_game()` replace. Its
//! [`SessionToken`] is what makes deferred actions cancellable: anything
//! scheduled under an old token is ignored once the session is replaced.

mod round;
mod state;
mod token;

pub use round::{Phase, RoundState, Stats};
pub use state::{CompletionNotice, Session};
pub use token::{SessionToken, TokenIssuer};
