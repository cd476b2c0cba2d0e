use super::session::AdminSession;

/// How a denied request wants to be told about it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDenied {
    /// Caller accepts JSON: answer with the API error envelope
    Api,
    /// Anything else (browsers): answer with an HTML fragment
    Page,
}

impl AccessDenied {
    /// Pick the rejection shape from the request's `Accept` header
    pub fn for_accept(accept: Option<&str>) -> Self {
        match accept {
            Some(value) if value.contains("application/json") => AccessDenied::Api,
            _ => AccessDenied::Page,
        }
    }
}

/// Decide whether a request may reach an admin-only handler
///
/// Returns the logged-in username, or the rejection matching what the caller
/// declared it can read.
pub fn authorize(
    state: Option<&AdminSession>,
    accept: Option<&str>,
    now: i64,
) -> Result<String, AccessDenied> {
    match state {
        Some(session) if session.is_active(now) => Ok(session.username.clone()),
        _ => Err(AccessDenied::for_accept(accept)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_session_is_allowed() {
        let state = AdminSession::issue("fouzi", 100, 60);

        assert_eq!(authorize(Some(&state), None, 120), Ok("fouzi".to_string()));
    }

    #[test]
    fn test_missing_session_is_denied_with_page_by_default() {
        assert_eq!(authorize(None, None, 0), Err(AccessDenied::Page));
        assert_eq!(authorize(None, Some("text/html"), 0), Err(AccessDenied::Page));
    }

    #[test]
    fn test_json_callers_get_api_rejection() {
        assert_eq!(
            authorize(None, Some("application/json, text/plain, */*"), 0),
            Err(AccessDenied::Api)
        );
    }

    #[test]
    fn test_expired_session_is_denied() {
        let state = AdminSession::issue("fouzi", 100, 60);

        assert_eq!(
            authorize(Some(&state), Some("application/json"), 160),
            Err(AccessDenied::Api)
        );
    }
}
