use crate::errors::InternalError;
use chrono::Utc;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// URL prefix under which stored images are served
pub const PUBLIC_PREFIX: &str = "/uploads";

/// Stores uploaded product images on disk
///
/// File names are the receipt time in milliseconds plus the original
/// extension. When that name is taken a `-N` suffix is appended.
pub struct UploadService {
    dir: PathBuf,
}

impl UploadService {
    /// Create the service, making sure the directory exists
    pub async fn new(dir: impl Into<PathBuf>) -> Result<Self, InternalError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| InternalError::upload("create_upload_dir", e))?;

        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the bytes under a fresh name and return the public path
    pub async fn store(
        &self,
        original_name: Option<&str>,
        bytes: &[u8],
    ) -> Result<String, InternalError> {
        let stem = Utc::now().timestamp_millis().to_string();
        let ext = extension_of(original_name);

        let mut attempt = 0u32;
        loop {
            let file_name = if attempt == 0 {
                format!("{}{}", stem, ext)
            } else {
                format!("{}-{}{}", stem, attempt, ext)
            };
            let path = self.dir.join(&file_name);

            let opened = tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await;

            match opened {
                Ok(mut file) => {
                    file.write_all(bytes)
                        .await
                        .map_err(|e| InternalError::upload("write_upload", e))?;
                    file.flush()
                        .await
                        .map_err(|e| InternalError::upload("flush_upload", e))?;

                    tracing::debug!("Stored upload {} ({} bytes)", file_name, bytes.len());
                    return Ok(format!("{}/{}", PUBLIC_PREFIX, file_name));
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
                Err(e) => return Err(InternalError::upload("create_upload", e)),
            }
        }
    }

    /// Remove a stored image given its public path
    ///
    /// Used when the row that would have pointed at it was never written.
    /// Paths outside this directory are ignored.
    pub async fn discard(&self, public_path: &str) {
        let Some(file_name) = public_path
            .strip_prefix(PUBLIC_PREFIX)
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|name| !name.is_empty() && !name.contains(['/', '\\']) && *name != "..")
        else {
            tracing::warn!("Not discarding {}: not a stored upload", public_path);
            return;
        };

        match tokio::fs::remove_file(self.dir.join(file_name)).await {
            Ok(()) => tracing::debug!("Discarded upload {}", file_name),
            Err(e) => tracing::warn!("Failed to discard upload {}: {}", file_name, e),
        }
    }
}

/// Extension of the client's file name, dot included, or empty
///
/// Only ASCII alphanumerics are kept so the name cannot escape the directory.
fn extension_of(original_name: Option<&str>) -> String {
    let ext = original_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ext.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
        })
        .unwrap_or_default();

    if ext.is_empty() {
        String::new()
    } else {
        format!(".{}", ext.to_ascii_lowercase())
    }
}
