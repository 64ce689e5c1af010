//! SessionId Value Object
//!
//! Opaque, high-entropy identifier of a server-side session. It is the only
//! piece of session state that ever reaches the browser.
//!
//! ## Usage
//! ```rust
//! use auth::domain::value_object::session_id::SessionId;
//!
//! let id = SessionId::generate();
//! assert_eq!(id.as_str().len(), 43);
//! assert!(SessionId::parse(id.as_str()).is_some());
//! assert!(SessionId::parse("not a session id").is_none());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Random bytes behind every session id (256 bits)
const SESSION_ID_BYTES: usize = 32;
/// Length of the base64url encoding of [`SESSION_ID_BYTES`]
const SESSION_ID_LEN: usize = 43;
/// Namespace of session records inside the shared store
const STORE_KEY_PREFIX: &str = "session:";

#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Mint a fresh id
    pub fn generate() -> Self {
        Self(platform::crypto::random_token(SESSION_ID_BYTES))
    }

    /// Accept only strings that could have come from [`SessionId::generate`]
    ///
    /// Lets the validator reject garbage without a store round trip.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.len() != SESSION_ID_LEN {
            return None;
        }
        let decoded = platform::crypto::from_base64url(raw).ok()?;

        (decoded.len() == SESSION_ID_BYTES).then(|| Self(raw.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key of this session's record in the shared store
    pub fn store_key(&self) -> String {
        format!("{STORE_KEY_PREFIX}{}", self.0)
    }

    /// Short tag safe to put in logs
    ///
    /// Derived from a hash so log lines never carry any part of the id.
    pub fn redacted(&self) -> String {
        let digest = platform::crypto::sha256(self.0.as_bytes());
        platform::crypto::to_base64url(&digest[..6])
    }
}

// Debug never prints the full credential
impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({}…)", self.redacted())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
