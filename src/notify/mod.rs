// src/notify/mod.rs
pub mod email;

use anyhow::Result;

use crate::source::Entry;

/// Delivery seam for the run controller. The cursor commit is conditioned
/// on `notify` succeeding, so a failed send must return `Err`, never
/// pretend completion.
#[async_trait::async_trait]
pub trait DigestNotifier {
    /// Called only with a non-empty batch, newest-first.
    async fn notify(&self, subject: &str, entries: &[Entry]) -> Result<()>;
}

/// One line per entry, joined in the given order.
pub fn format_digest(entries: &[Entry]) -> String {
    entries
        .iter()
        .map(|e| format!("- {}: {} ({})", e.date, e.title, e.link))
        .collect::<Vec<_>>()
        .join("\n")
}
