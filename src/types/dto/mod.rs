// API data transfer objects - poem-openapi models
pub mod auth;
pub mod category;
pub mod common;
pub mod order;
pub mod product;
