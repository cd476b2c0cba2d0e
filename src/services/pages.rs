use crate::errors::InternalError;
use std::path::{Path, PathBuf};

/// Landing page file inside the pages directory
pub const LANDING_PAGE: &str = "intro.html";

/// Admin interface directory inside the pages directory
pub const ADMIN_DIR: &str = "admin";

/// Admin interface entry document inside `ADMIN_DIR`
pub const ADMIN_PAGE: &str = "admin.html";

/// Reads the static HTML documents the handlers answer with
pub struct PageService {
    pages_dir: PathBuf,
}

impl PageService {
    pub fn new(pages_dir: impl Into<PathBuf>) -> Self {
        Self {
            pages_dir: pages_dir.into(),
        }
    }

    /// Directory served, behind the admin gate, under `/admin`
    pub fn admin_dir(&self) -> PathBuf {
        self.pages_dir.join(ADMIN_DIR)
    }

    pub async fn landing_page(&self) -> Result<String, InternalError> {
        read_page(&self.pages_dir.join(LANDING_PAGE)).await
    }

    pub async fn admin_page(&self) -> Result<String, InternalError> {
        read_page(&self.admin_dir().join(ADMIN_PAGE)).await
    }
}

async fn read_page(path: &Path) -> Result<String, InternalError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| InternalError::page(path.display().to_string(), e))
}
