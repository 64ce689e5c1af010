//! CSRF State Value Object
//!
//! Random value bound to one login attempt. Issued with the authorization
//! redirect, echoed back by the provider, and compared on callback.

use std::fmt;

/// 128 bits of entropy
const STATE_BYTES: usize = 16;

#[derive(Clone, PartialEq, Eq)]
pub struct CsrfState(String);

impl CsrfState {
    pub fn generate() -> Self {
        Self(platform::crypto::random_token(STATE_BYTES))
    }

    /// Wrap a value read back from the state cookie
    pub fn from_cookie(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Constant-time comparison with the value returned by the provider
    pub fn matches(&self, returned: &str) -> bool {
        !self.0.is_empty() && platform::crypto::constant_time_eq(self.0.as_bytes(), returned.as_bytes())
    }
}

impl fmt::Debug for CsrfState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CsrfState(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_state_matches_itself_only() {
        let state = CsrfState::generate();
        assert_eq!(state.as_str().len(), 22);
        assert!(state.matches(state.as_str()));
        assert!(!state.matches("wrong"));
        assert!(!state.matches(CsrfState::generate().as_str()));
    }

    #[test]
    fn test_empty_cookie_never_matches() {
        assert!(!CsrfState::from_cookie("").matches(""));
    }
}
