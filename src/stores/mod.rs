// Stores layer - Data access and repository pattern
pub mod admin_store;
pub mod category_store;
pub mod order_store;
pub mod product_store;

pub use admin_store::AdminStore;
pub use category_store::CategoryStore;
pub use order_store::OrderStore;
pub use product_store::ProductStore;
