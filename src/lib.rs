// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod config;
pub mod cursor;
pub mod filter;
pub mod notify;
pub mod runner;
pub mod source;

// ---- Re-exports for stable public API ----
pub use crate::config::{Config, SourceKind};
pub use crate::cursor::CursorStore;
pub use crate::filter::split_new;
pub use crate::notify::{format_digest, DigestNotifier};
pub use crate::runner::{run_once, RunOutcome};
pub use crate::source::{build_source, Entry, QuestionSource};
