use super::guard::gate_admin_files;
use super::rejections::render_input_errors;
use super::{CategoriesApi, HealthApi, OrdersApi, ProductsApi, SessionApi};
use crate::app_data::AppData;
use crate::services::pages::ADMIN_PAGE;
use crate::services::uploads::PUBLIC_PREFIX;
use poem::{
    Endpoint, EndpointExt, Route,
    endpoint::StaticFilesEndpoint,
    session::{CookieConfig, MemoryStorage, ServerSession},
};
use poem_openapi::OpenApiService;
use std::sync::Arc;
use std::time::Duration;

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "storefront_session";

/// Assemble the full route tree
///
/// ```text
/// /uploads/*  stored product images
/// /css/*      stylesheets
/// /admin/*    admin interface, behind the admin gate
/// /swagger    OpenAPI UI
/// /*          JSON and HTML operations
/// ```
pub fn build_app(app_data: Arc<AppData>) -> impl Endpoint {
    let settings = app_data.settings.clone();

    let api_service = OpenApiService::new(
        (
            HealthApi,
            SessionApi::new(app_data.clone()),
            CategoriesApi::new(app_data.clone()),
            ProductsApi::new(app_data.clone()),
            OrdersApi::new(app_data.clone()),
        ),
        "Storefront Admin API",
        env!("CARGO_PKG_VERSION"),
    );
    let ui = api_service.swagger_ui();
    let api = api_service.around(|ep, req| render_input_errors(ep, req));

    let admin_files = StaticFilesEndpoint::new(app_data.page_service.admin_dir())
        .index_file(ADMIN_PAGE)
        .around(|ep, req| gate_admin_files(ep, req));

    let session_cookie = CookieConfig::default()
        .name(SESSION_COOKIE)
        .http_only(true)
        .secure(false)
        .max_age(Duration::from_secs(settings.session_ttl_secs.unsigned_abs()));

    Route::new()
        .nest(PUBLIC_PREFIX, StaticFilesEndpoint::new(app_data.upload_service.dir()))
        .nest("/css", StaticFilesEndpoint::new(&settings.styles_dir))
        .nest("/admin", admin_files)
        .nest("/swagger", ui)
        .nest("/", api)
        .with(ServerSession::new(session_cookie, MemoryStorage::new()))
}
