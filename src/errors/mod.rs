// Errors layer - Error type definitions
pub mod api;
pub mod internal;

// Re-exports for convenience
pub use api::{ApiError, LoginError};
pub use internal::{CatalogError, CredentialError, InternalError};

#[cfg(test)]
mod api_test;
