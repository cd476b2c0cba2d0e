use crate::errors::ApiError;
use crate::types::internal::{AccessDenied, AdminSession, authorize};
use chrono::Utc;
use poem::{
    Endpoint, FromRequest, IntoResponse, Request, RequestBody, Response, Result,
    http::header, session::Session,
};
use std::sync::Arc;

/// Extractor that only succeeds for requests with an active admin session
///
/// Holds the logged-in username. On failure the request is answered with a
/// 401 shaped after its `Accept` header and the handler never runs.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminGuard(pub String);

/// Run the access decision for a request
pub fn check_admin(req: &Request) -> std::result::Result<String, AccessDenied> {
    let state = req
        .extensions()
        .get::<Session>()
        .and_then(AdminSession::load);
    let accept = req.header(header::ACCEPT);

    authorize(state.as_ref(), accept, Utc::now().timestamp()).inspect_err(|denied| {
        tracing::debug!("Denied {} {} ({:?})", req.method(), req.uri().path(), denied);
    })
}

impl<'a> FromRequest<'a> for AdminGuard {
    async fn from_request(req: &'a Request, _body: &mut RequestBody) -> Result<Self> {
        check_admin(req)
            .map(AdminGuard)
            .map_err(|denied| ApiError::from(denied).into())
    }
}

/// Gate for the admin interface's static files
pub async fn gate_admin_files<E: Endpoint>(ep: Arc<E>, req: Request) -> Result<Response> {
    match check_admin(&req) {
        Ok(_) => Ok(ep.call(req).await?.into_response()),
        Err(denied) => Ok(ApiError::from(denied).into_response()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with(session: Option<Session>, accept: Option<&str>) -> Request {
        let mut builder = Request::builder();
        if let Some(accept) = accept {
            builder = builder.header(header::ACCEPT, accept);
        }
        let mut req = builder.finish();
        if let Some(session) = session {
            req.extensions_mut().insert(session);
        }
        req
    }

    #[test]
    fn test_no_session_middleware_denies() {
        let req = request_with(None, Some("application/json"));

        assert_eq!(check_admin(&req), Err(AccessDenied::Api));
    }

    #[test]
    fn test_logged_in_session_allows() {
        let session = Session::default();
        AdminSession::issue("fouzi", Utc::now().timestamp(), 60).save(&session);
        let req = request_with(Some(session), None);

        assert_eq!(check_admin(&req), Ok("fouzi".to_string()));
    }

    #[test]
    fn test_expired_session_denies_with_page() {
        let session = Session::default();
        AdminSession::issue("fouzi", Utc::now().timestamp() - 120, 60).save(&session);
        let req = request_with(Some(session), Some("text/html"));

        assert_eq!(check_admin(&req), Err(AccessDenied::Page));
    }
}
