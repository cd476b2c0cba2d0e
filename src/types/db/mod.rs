// Database entities - SeaORM models
pub mod admin;
pub mod category;
pub mod order;
pub mod product;
