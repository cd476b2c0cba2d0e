// API layer - HTTP endpoints
pub mod categories;
pub mod guard;
pub mod health;
pub mod orders;
pub mod products;
pub mod rejections;
pub mod routes;
pub mod session;

use poem_openapi::Tags;

pub use categories::CategoriesApi;
pub use guard::AdminGuard;
pub use health::HealthApi;
pub use orders::OrdersApi;
pub use products::ProductsApi;
pub use routes::build_app;
pub use session::SessionApi;

/// Tags grouping the operations in the generated docs
#[derive(Tags)]
pub(crate) enum ApiTags {
    /// Health check endpoints
    Health,
    /// Landing page, login and logout
    Session,
    /// Category taxonomy
    Categories,
    /// Product catalog
    Products,
    /// Customer orders
    Orders,
}
