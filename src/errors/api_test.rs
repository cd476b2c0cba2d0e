#[cfg(test)]
mod tests {
    use crate::errors::internal::{CatalogError, CredentialError, InternalError};
    use crate::errors::{ApiError, LoginError};
    use crate::types::internal::AccessDenied;
    use sea_orm::DbErr;

    #[test]
    fn test_all_error_variants_have_correct_status_codes() {
        assert_eq!(ApiError::bad_request("missing name").status_code(), 400);
        assert_eq!(ApiError::unauthorized().status_code(), 401);
        assert_eq!(ApiError::unauthorized_page().status_code(), 401);
        assert_eq!(ApiError::not_found("gone").status_code(), 404);
        assert_eq!(ApiError::internal_error("boom").status_code(), 500);
    }

    #[test]
    fn test_access_denied_maps_to_matching_shape() {
        let api: ApiError = AccessDenied::Api.into();
        assert!(matches!(api, ApiError::Unauthorized(_)));

        let page: ApiError = AccessDenied::Page.into();
        assert!(matches!(page, ApiError::UnauthorizedPage(_)));
        assert!(page.message().starts_with("<h2>"));
    }

    #[test]
    fn test_missing_rows_map_to_not_found() {
        let error = ApiError::from_internal_error(CatalogError::CategoryNotFound(9).into());

        assert_eq!(error.status_code(), 404);
        assert_eq!(error.message(), "Category not found: 9");
    }

    #[test]
    fn test_unknown_ordered_product_is_a_client_error() {
        let error = ApiError::from_internal_error(CatalogError::UnknownProduct(42).into());

        assert_eq!(error.status_code(), 400);
        assert!(error.message().contains("42"));
    }

    #[test]
    fn test_database_errors_surface_store_text() {
        let db_err = DbErr::Custom("UNIQUE constraint failed: categories.name".to_string());
        let error = ApiError::from_internal_error(InternalError::database("create_category", db_err));

        assert_eq!(error.status_code(), 500);
        assert!(error.message().contains("UNIQUE constraint failed"));
    }

    #[test]
    fn test_crypto_errors_are_not_exposed() {
        let error = ApiError::from_internal_error(InternalError::crypto("argon2_init", "bad pepper"));

        assert_eq!(error.status_code(), 500);
        assert!(!error.message().contains("pepper"));
    }

    #[test]
    fn test_login_errors_are_html() {
        let unknown =
            LoginError::from_internal_error(CredentialError::UserNotFound("x".to_string()).into());
        assert_eq!(unknown.status_code(), 404);
        assert_eq!(unknown.to_string(), "<h2>Unknown username</h2>");

        let wrong = LoginError::from_internal_error(
            CredentialError::IncorrectPassword("x".to_string()).into(),
        );
        assert_eq!(wrong.status_code(), 401);
        assert_eq!(wrong.to_string(), "<h2>Incorrect password</h2>");
    }

    #[test]
    fn test_login_internal_error_escapes_message() {
        let error = LoginError::internal_error("<script>");

        assert_eq!(error.status_code(), 500);
        assert_eq!(error.to_string(), "<h2>Error: &lt;script&gt;</h2>");
    }

    #[test]
    fn test_login_form_errors_are_bad_requests() {
        let missing = LoginError::missing_credentials();
        assert_eq!(missing.status_code(), 400);
        assert_eq!(missing.to_string(), "<h2>Username and password are required</h2>");

        let unreadable = LoginError::bad_request("parse request payload error: <form>");
        assert_eq!(unreadable.status_code(), 400);
        assert_eq!(
            unreadable.to_string(),
            "<h2>parse request payload error: &lt;form&gt;</h2>"
        );
    }
}
