use std::path::Path;

use chrono::Utc;
use tokio::fs;

use crate::errors::AppError;
use crate::prelude::Result;

pub const MAX_RESUME_BYTES: usize = 10 * 1024 * 1024;

/// A resume that passed the intake filter but has not been written to disk.
/// The durable write is deferred until every other precondition holds, so a
/// failed request never leaves an orphaned file behind.
#[derive(Debug)]
pub struct BufferedUpload {
    pub original_filename: String,
    pub data: Vec<u8>,
}

pub async fn ensure_upload_dir(dir: &str) -> Result<()> {
    fs::create_dir_all(dir).await?;
    Ok(())
}

/// Intake filter, applied at the transport boundary ahead of field validation.
pub fn check_upload(content_type: Option<&str>, size: usize) -> Result<()> {
    if !content_type.unwrap_or("").contains("pdf") {
        return Err(AppError::UploadRejected(
            "Only PDF files are allowed.".into(),
        ));
    }
    if size > MAX_RESUME_BYTES {
        return Err(AppError::UploadRejected(
            "File too large. Maximum size is 10MB".into(),
        ));
    }
    Ok(())
}

pub fn stored_filename(original: &str) -> String {
    format!("{}-{}", Utc::now().timestamp_millis(), original)
}

/// Writes the buffered upload under `dir` and returns the path stored on the
/// candidate record.
pub async fn persist(dir: &str, upload: &BufferedUpload) -> Result<String> {
    let path = Path::new(dir).join(stored_filename(&upload.original_filename));
    fs::write(&path, &upload.data).await?;
    Ok(path.to_string_lossy().into_owned())
}

/// Best-effort removal, used to clean up after a failed insert and to cascade
/// on candidate deletion.
pub async fn discard(path: &str) {
    if let Err(err) = fs::remove_file(path).await {
        tracing::warn!("could not remove stored resume {}: {}", path, err);
    }
}
