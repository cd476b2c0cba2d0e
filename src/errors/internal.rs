use thiserror::Error;

/// Internal error type for store and service operations
///
/// Infrastructure variants (Database, Crypto, Upload, Page) are shared by all
/// stores and services; domain variants carry the outcome a handler has to
/// map to a status code.
///
/// Not exposed via API. Handlers convert with `ApiError::from_internal_error`
/// or `LoginError::from_internal_error`.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Database query or statement failed
    #[error("Database error: {operation} failed: {source}")]
    Database {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    /// Password hashing or verification could not run
    #[error("Crypto error: {operation} failed: {message}")]
    Crypto { operation: String, message: String },

    /// Writing an uploaded file failed
    #[error("Upload error: {operation} failed: {source}")]
    Upload {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// A static HTML document could not be read
    #[error("Page error: reading {path} failed: {source}")]
    Page {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl InternalError {
    /// Create a database error with context
    pub fn database(operation: impl Into<String>, source: sea_orm::DbErr) -> Self {
        Self::Database {
            operation: operation.into(),
            source,
        }
    }

    /// Create a crypto error with context
    pub fn crypto(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Crypto {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create an upload error with context
    pub fn upload(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Upload {
            operation: operation.into(),
            source,
        }
    }

    /// Create a page error for the given file
    pub fn page(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Page {
            path: path.into(),
            source,
        }
    }
}

/// Admin credential errors
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Incorrect password for user: {0}")]
    IncorrectPassword(String),
}

/// Catalog and order errors
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Category not found: {0}")]
    CategoryNotFound(i32),

    #[error("Product not found: {0}")]
    ProductNotFound(i32),

    #[error("Order not found: {0}")]
    OrderNotFound(i32),

    /// An order referenced a product that does not exist
    #[error("Ordered product does not exist: {0}")]
    UnknownProduct(i32),
}
