//! pq-watch — Binary Entrypoint
//! One run per invocation: load cursor, fetch the question search, filter
//! for novelty, email a digest, commit the cursor. Scheduling lives
//! outside (cron / CI workflow); a fatal failure at any stage exits
//! non-zero with the prior cursor intact.

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pq_watch::notify::email::EmailNotifier;
use pq_watch::{build_source, run_once, Config, CursorStore, RunOutcome};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env in local/dev; no-op where the scheduler injects real env.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = Config::from_env()?;
    let source = build_source(&cfg)?;
    let notifier = EmailNotifier::new(&cfg)?;
    let store = CursorStore::new(cfg.state_path.clone());

    if cfg.send_probe {
        notifier.send_probe().await?;
    }

    match run_once(source.as_ref(), &notifier, &store, &cfg.subject).await? {
        RunOutcome::NoNewEntries => tracing::info!("run complete, nothing to report"),
        RunOutcome::Notified { count } => tracing::info!(count, "run complete, digest sent"),
    }
    Ok(())
}
