//! Session identity tokens.
//!
//! Every session gets a fresh token. Deferred actions carry the token that
//! was current when they were scheduled and are dropped if it no longer is.

use serde::{Deserialize, Serialize};

/// Opaque session identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionToken(u64);

impl SessionToken {
    /// Get the raw token value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// Issues strictly increasing tokens. One per engine.
#[derive(Clone, Debug)]
pub struct TokenIssuer {
    next: u64,
}

impl Default for TokenIssuer {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenIssuer {
    /// Create an issuer whose first token is `Session(1)`.
    #[must_use]
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Issue the next token.
    pub fn issue(&mut self) -> SessionToken {
        let token = SessionToken(self.next);
        self.next += 1;
        token
    }
}
