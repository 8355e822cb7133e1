// src/cursor.rs
use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

/// Plain-text file holding the id of the most recently notified entry.
/// Absence of the file is the valid first-run state. A failed save must
/// surface: swallowing it would re-notify the same batch on every run.
pub struct CursorStore {
    path: PathBuf,
}

impl CursorStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub async fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path).await {
            Ok(s) => {
                let id = s.trim().to_string();
                tracing::debug!(cursor = %id, "loaded last-seen id");
                Ok(if id.is_empty() { None } else { Some(id) })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("no last-seen file, treating as first run");
                Ok(None)
            }
            Err(e) => {
                Err(e).with_context(|| format!("reading cursor from {}", self.path.display()))
            }
        }
    }

    /// Overwrites the stored id. Writes a sibling temp file and renames it
    /// over the target so a later `load` never sees a partial write.
    pub async fn save(&self, id: &str) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("creating state dir {}", dir.display()))?;
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, id)
            .await
            .with_context(|| format!("writing cursor to {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .await
            .with_context(|| format!("committing cursor to {}", self.path.display()))?;
        tracing::debug!(cursor = %id, "saved last-seen id");
        Ok(())
    }
}
