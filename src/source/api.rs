use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use super::{Entry, QuestionSource};

const API_URL: &str = "https://api.oireachtas.ie/v1/questions";
const SITE_ROOT: &str = "https://www.oireachtas.ie";
const PAGE_LIMIT: u32 = 50;

// Tolerant shapes for the questions endpoint: every field we read is
// optional so a partially filled record degrades instead of failing the
// whole payload.

#[derive(Debug, Deserialize)]
struct QuestionsResponse {
    #[serde(default)]
    results: Vec<QuestionResult>,
}

#[derive(Debug, Deserialize)]
struct QuestionResult {
    question: QuestionRecord,
}

#[derive(Debug, Deserialize)]
struct QuestionRecord {
    uri: Option<String>,
    date: Option<String>,
    #[serde(rename = "showAs")]
    show_as: Option<String>,
    #[serde(rename = "questionNumber")]
    question_number: Option<u32>,
}

/// Queries the questions JSON API for a fixed topic, windowed to the
/// current calendar day. Entry identity is the record's assigned `uri`.
pub struct QuestionsApiSource {
    client: reqwest::Client,
    query: String,
}

impl QuestionsApiSource {
    pub fn new(query: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("building http client")?;
        Ok(Self {
            client,
            query: query.to_string(),
        })
    }

    /// Map an API payload to entries, keeping the endpoint's order.
    /// Records without a `uri` have no stable identity and are dropped.
    pub fn parse_response(body: &str) -> Result<Vec<Entry>> {
        let resp: QuestionsResponse =
            serde_json::from_str(body).context("parsing questions api json")?;

        let mut out = Vec::with_capacity(resp.results.len());
        for r in resp.results {
            let q = r.question;
            let Some(uri) = q.uri else {
                tracing::debug!("skipping question record without uri");
                continue;
            };
            let date = q.date.unwrap_or_else(|| "Unknown date".to_string());
            let title = q
                .show_as
                .unwrap_or_else(|| "Parliamentary question".to_string());
            // Display link: the site's question page when we can construct
            // it, otherwise the record uri itself.
            let link = match q.question_number {
                Some(n) => format!("{SITE_ROOT}/en/debates/question/{date}/{n}/"),
                None => uri.clone(),
            };
            out.push(Entry {
                id: uri,
                title,
                date,
                link,
            });
        }
        Ok(out)
    }
}

#[async_trait]
impl QuestionSource for QuestionsApiSource {
    async fn fetch(&self) -> Result<Vec<Entry>> {
        let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
        let limit = PAGE_LIMIT.to_string();
        tracing::debug!(query = %self.query, date = %today, "fetching questions api");

        let body = self
            .client
            .get(API_URL)
            .query(&[
                ("q", self.query.as_str()),
                ("date_start", today.as_str()),
                ("date_end", today.as_str()),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            .context("questions api get()")?
            .error_for_status()
            .context("questions api non-2xx")?
            .text()
            .await
            .context("questions api .text()")?;

        let entries = Self::parse_response(&body)?;
        tracing::debug!(count = entries.len(), "parsed questions api results");
        Ok(entries)
    }

    fn name(&self) -> &'static str {
        "api"
    }
}
