use super::ApiTags;
use crate::app_data::AppData;
use crate::errors::{ApiError, LoginError};
use crate::services::PageService;
use crate::stores::AdminStore;
use crate::types::dto::auth::LoginForm;
use crate::types::dto::common::MessageResponse;
use crate::types::internal::AdminSession;
use chrono::Utc;
use poem::session::Session;
use poem_openapi::{
    OpenApi,
    payload::{Form, Html, Json},
};
use std::sync::Arc;

/// Landing page, admin login and logout
pub struct SessionApi {
    admin_store: Arc<AdminStore>,
    page_service: Arc<PageService>,
    session_ttl_secs: i64,
}

impl SessionApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            admin_store: app_data.admin_store.clone(),
            page_service: app_data.page_service.clone(),
            session_ttl_secs: app_data.settings.session_ttl_secs,
        }
    }
}

#[OpenApi]
impl SessionApi {
    /// Storefront landing page
    #[oai(path = "/", method = "get", tag = "ApiTags::Session")]
    async fn landing(&self) -> Result<Html<String>, ApiError> {
        let page = self.page_service.landing_page().await?;
        Ok(Html(page))
    }

    /// Log in as admin
    ///
    /// On success the session is marked authenticated and the admin
    /// interface document is returned.
    #[oai(path = "/login", method = "post", tag = "ApiTags::Session")]
    async fn login(
        &self,
        session: &Session,
        body: Form<LoginForm>,
    ) -> Result<Html<String>, LoginError> {
        let Some((username, password)) = body.credentials() else {
            return Err(LoginError::missing_credentials());
        };

        let username = self
            .admin_store
            .verify_credentials(username, password)
            .await
            .map_err(LoginError::from_internal_error)?;

        AdminSession::issue(&username, Utc::now().timestamp(), self.session_ttl_secs)
            .save(session);
        tracing::info!("Admin '{}' logged in", username);

        let page = self
            .page_service
            .admin_page()
            .await
            .map_err(LoginError::from_internal_error)?;

        Ok(Html(page))
    }

    /// End the current session
    #[oai(path = "/logout", method = "post", tag = "ApiTags::Session")]
    async fn logout(&self, session: &Session) -> Json<MessageResponse> {
        if let Some(state) = AdminSession::load(session) {
            tracing::info!("Admin '{}' logged out", state.username);
        }
        session.purge();

        Json(MessageResponse::new("Logged out"))
    }
}
