use crate::errors::internal::{CatalogError, CredentialError, InternalError};
use crate::types::dto::common::ErrorResponse;
use crate::types::internal::AccessDenied;
use poem_openapi::{
    ApiResponse,
    payload::{Html, Json},
};
use std::fmt;

/// Error responses shared by the catalog, order and session endpoints
#[derive(ApiResponse, Debug)]
pub enum ApiError {
    /// Missing or invalid input
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),

    /// No active admin session, caller accepts JSON
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// No active admin session, caller is a browser
    #[oai(status = 401)]
    UnauthorizedPage(Html<String>),

    /// Addressed resource does not exist
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Store or filesystem failure
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(envelope(message))
    }

    pub fn unauthorized() -> Self {
        ApiError::Unauthorized(envelope("Access denied: admin login required"))
    }

    pub fn unauthorized_page() -> Self {
        ApiError::UnauthorizedPage(Html(fragment("Access denied")))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(envelope(message))
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        ApiError::InternalError(envelope(message))
    }

    /// Convert InternalError to ApiError
    ///
    /// This is the explicit conversion point from internal errors to API
    /// errors. Infrastructure failures are logged and their text is passed
    /// through so the admin interface can show what the store reported.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Catalog(CatalogError::UnknownProduct(_)) => {
                Self::bad_request(err.to_string())
            }
            InternalError::Catalog(_) => Self::not_found(err.to_string()),
            InternalError::Credential(CredentialError::UserNotFound(_)) => {
                Self::not_found(err.to_string())
            }
            InternalError::Credential(CredentialError::IncorrectPassword(_)) => {
                Self::unauthorized()
            }
            InternalError::Database { operation, .. } => {
                tracing::error!("Database error in {}: {}", operation, err);
                Self::internal_error(err.to_string())
            }
            InternalError::Crypto { operation, .. } => {
                tracing::error!("Crypto error in {}: {}", operation, err);
                Self::internal_error("An internal error occurred")
            }
            InternalError::Upload { operation, .. } => {
                tracing::error!("Upload error in {}: {}", operation, err);
                Self::internal_error(err.to_string())
            }
            InternalError::Page { path, .. } => {
                tracing::error!("Page error for {}: {}", path, err);
                Self::internal_error(err.to_string())
            }
        }
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            ApiError::BadRequest(json)
            | ApiError::Unauthorized(json)
            | ApiError::NotFound(json)
            | ApiError::InternalError(json) => json.0.error.clone(),
            ApiError::UnauthorizedPage(html) => html.0.clone(),
        }
    }

    /// Get the HTTP status code from the error variant
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::Unauthorized(_) | ApiError::UnauthorizedPage(_) => 401,
            ApiError::NotFound(_) => 404,
            ApiError::InternalError(_) => 500,
        }
    }
}

impl From<AccessDenied> for ApiError {
    fn from(denied: AccessDenied) -> Self {
        match denied {
            AccessDenied::Api => ApiError::unauthorized(),
            AccessDenied::Page => ApiError::unauthorized_page(),
        }
    }
}

impl From<InternalError> for ApiError {
    fn from(err: InternalError) -> Self {
        ApiError::from_internal_error(err)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// HTML error responses for the login form
#[derive(ApiResponse, Debug)]
pub enum LoginError {
    /// Form fields missing or unreadable
    #[oai(status = 400)]
    BadRequest(Html<String>),

    /// No admin with that username
    #[oai(status = 404)]
    UnknownUser(Html<String>),

    /// Password did not match
    #[oai(status = 401)]
    WrongPassword(Html<String>),

    /// Store failure or admin page missing
    #[oai(status = 500)]
    InternalError(Html<String>),
}

impl LoginError {
    pub fn missing_credentials() -> Self {
        Self::bad_request("Username and password are required")
    }

    pub fn bad_request(message: &str) -> Self {
        LoginError::BadRequest(Html(fragment(message)))
    }

    pub fn unknown_user() -> Self {
        LoginError::UnknownUser(Html(fragment("Unknown username")))
    }

    pub fn wrong_password() -> Self {
        LoginError::WrongPassword(Html(fragment("Incorrect password")))
    }

    pub fn internal_error(message: &str) -> Self {
        LoginError::InternalError(Html(fragment(&format!("Error: {}", message))))
    }

    /// Convert InternalError to LoginError
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Credential(CredentialError::UserNotFound(username)) => {
                tracing::debug!("Login attempt for unknown user {}", username);
                Self::unknown_user()
            }
            InternalError::Credential(CredentialError::IncorrectPassword(username)) => {
                tracing::debug!("Login attempt with wrong password for {}", username);
                Self::wrong_password()
            }
            _ => {
                tracing::error!("Login failed: {}", err);
                Self::internal_error(&err.to_string())
            }
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            LoginError::BadRequest(_) => 400,
            LoginError::UnknownUser(_) => 404,
            LoginError::WrongPassword(_) => 401,
            LoginError::InternalError(_) => 500,
        }
    }
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginError::BadRequest(html)
            | LoginError::UnknownUser(html)
            | LoginError::WrongPassword(html)
            | LoginError::InternalError(html) => write!(f, "{}", html.0),
        }
    }
}

fn envelope(message: impl Into<String>) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        error: message.into(),
    })
}

/// Wrap a message in the small HTML fragment browsers get on errors
pub(crate) fn fragment(message: &str) -> String {
    format!("<h2>{}</h2>", escape_html(message))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
