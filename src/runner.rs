// src/runner.rs
//! Run controller: one load → fetch → filter → notify → commit pass.

use anyhow::{Context, Result};

use crate::cursor::CursorStore;
use crate::filter::split_new;
use crate::notify::DigestNotifier;
use crate::source::QuestionSource;

#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    NoNewEntries,
    Notified { count: usize },
}

/// Drives a single run to one of its two terminal outcomes. Side-effect
/// order on the notify path is fixed: deliver the digest first, persist
/// the cursor only once delivery succeeded. A delivery failure leaves the
/// stored cursor untouched so the same batch is retried next run.
pub async fn run_once(
    source: &dyn QuestionSource,
    notifier: &dyn DigestNotifier,
    store: &CursorStore,
    subject: &str,
) -> Result<RunOutcome> {
    let cursor = store.load().await.context("loading cursor")?;

    let results = source
        .fetch()
        .await
        .with_context(|| format!("fetching results from {} source", source.name()))?;
    if results.is_empty() {
        tracing::debug!("no results for the query, nothing to do");
        return Ok(RunOutcome::NoNewEntries);
    }

    let (new_entries, new_cursor) = split_new(&results, cursor.as_deref());
    if new_entries.is_empty() {
        tracing::info!("no new questions since last run");
        return Ok(RunOutcome::NoNewEntries);
    }

    notifier
        .notify(subject, &new_entries)
        .await
        .context("delivering digest")?;

    if let Some(id) = new_cursor {
        store.save(&id).await.context("persisting cursor")?;
    }

    Ok(RunOutcome::Notified {
        count: new_entries.len(),
    })
}
