use crate::errors::{ApiError, LoginError};
use poem::{Endpoint, IntoResponse, Request, Response, Result};
use poem_openapi::error::{
    ContentTypeError, ParseMultipartError, ParseParamError, ParsePathError,
    ParseRequestPayloadError,
};
use std::sync::Arc;

/// Whether the error was raised while reading the request's params or body
pub fn is_input_error(err: &poem::Error) -> bool {
    err.is::<ParseRequestPayloadError>()
        || err.is::<ParseParamError>()
        || err.is::<ParsePathError>()
        || err.is::<ParseMultipartError>()
        || err.is::<ContentTypeError>()
}

/// Answer malformed input with the same 400 shapes the handlers use
///
/// Extractor failures never reach a handler, so without this they would go
/// out as plain text. The login form gets an HTML fragment, everything else
/// the `{ "error": ... }` envelope.
pub async fn render_input_errors<E: Endpoint>(ep: Arc<E>, req: Request) -> Result<Response> {
    let is_login = req.original_uri().path() == "/login";

    match ep.call(req).await {
        Ok(resp) => Ok(resp.into_response()),
        Err(err) if is_input_error(&err) => {
            tracing::debug!("Rejected request input: {}", err);
            let message = err.to_string();
            Ok(if is_login {
                LoginError::bad_request(&message).into_response()
            } else {
                ApiError::bad_request(message).into_response()
            })
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem::http::StatusCode;

    #[test]
    fn test_parse_errors_are_input_errors() {
        let payload: poem::Error = ParseRequestPayloadError {
            reason: "Expected input type \"integer_int32\", found \"1\"".to_string(),
        }
        .into();
        let path: poem::Error = ParsePathError {
            name: "param0",
            reason: "invalid digit found in string".to_string(),
        }
        .into();
        let content_type: poem::Error = ContentTypeError::ExpectContentType.into();

        assert!(is_input_error(&payload));
        assert!(is_input_error(&path));
        assert!(is_input_error(&content_type));
    }

    #[test]
    fn test_other_errors_pass_through() {
        let denied: poem::Error = ApiError::unauthorized().into();
        let missing = poem::Error::from_status(StatusCode::NOT_FOUND);

        assert!(!is_input_error(&denied));
        assert!(!is_input_error(&missing));
    }
}
