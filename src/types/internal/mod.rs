// Internal types - never serialized over the API
pub mod access;
pub mod order;
pub mod product;
pub mod session;

pub use access::{AccessDenied, authorize};
pub use order::{OrderDraft, OrderDraftError};
pub use product::{DraftError, ProductDraft};
pub use session::AdminSession;
