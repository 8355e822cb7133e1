// src/source/mod.rs
pub mod api;
pub mod html;

use anyhow::Result;

use crate::config::{Config, SourceKind};

/// One notifiable parliamentary question as delivered by a source.
///
/// `id` is the stable equality key across runs: the absolute page URL for
/// the scraped variant, the record's assigned identifier for the API
/// variant. `date` is a display label only, never parsed or compared.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub date: String,
    pub link: String,
}

/// Capability seam over the two fetch variants. Implementations return
/// entries in the source's native order (assumed newest-first by the
/// novelty filter) and treat an empty result set as a valid outcome, not
/// an error.
#[async_trait::async_trait]
pub trait QuestionSource {
    async fn fetch(&self) -> Result<Vec<Entry>>;
    fn name(&self) -> &'static str;
}

/// Pick the fetch backend the configuration asked for.
pub fn build_source(cfg: &Config) -> Result<Box<dyn QuestionSource>> {
    Ok(match cfg.source {
        SourceKind::Html => Box::new(html::HtmlSearchSource::new(&cfg.query)?),
        SourceKind::Api => Box::new(api::QuestionsApiSource::new(&cfg.query)?),
    })
}
