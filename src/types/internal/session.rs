use poem::session::Session;
use serde::{Deserialize, Serialize};

/// Key under which the admin state lives in the server-side session
pub const ADMIN_SESSION_KEY: &str = "admin";

/// Admin login state kept in the session store
///
/// `expires_at` is absolute: activity does not extend it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminSession {
    pub authenticated: bool,
    pub username: String,
    /// Unix timestamp (seconds)
    pub expires_at: i64,
}

impl AdminSession {
    /// Session state for a freshly logged-in admin
    pub fn issue(username: impl Into<String>, now: i64, ttl_secs: i64) -> Self {
        Self {
            authenticated: true,
            username: username.into(),
            expires_at: now + ttl_secs,
        }
    }

    pub fn is_active(&self, now: i64) -> bool {
        self.authenticated && now < self.expires_at
    }

    /// Read the admin state from a session, if any was stored
    pub fn load(session: &Session) -> Option<Self> {
        session.get::<AdminSession>(ADMIN_SESSION_KEY)
    }

    pub fn save(&self, session: &Session) {
        session.set(ADMIN_SESSION_KEY, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issued_session_expires_after_ttl() {
        let state = AdminSession::issue("fouzi", 1_000, 7_200);

        assert_eq!(state.username, "fouzi");
        assert_eq!(state.expires_at, 8_200);
        assert!(state.is_active(1_000));
        assert!(state.is_active(8_199));
        assert!(!state.is_active(8_200));
    }

    #[test]
    fn test_unauthenticated_state_is_never_active() {
        let state = AdminSession {
            authenticated: false,
            username: "fouzi".to_string(),
            expires_at: i64::MAX,
        };

        assert!(!state.is_active(0));
    }

    #[test]
    fn test_session_round_trips_through_session_store() {
        let session = Session::default();
        assert!(AdminSession::load(&session).is_none());

        let state = AdminSession::issue("fouzi", 10, 20);
        state.save(&session);

        assert_eq!(AdminSession::load(&session), Some(state));
    }
}
