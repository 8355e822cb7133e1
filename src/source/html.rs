use anyhow::{Context, Result};
use async_trait::async_trait;
use once_cell::sync::OnceCell;
use regex::Regex;

use super::{Entry, QuestionSource};

const SITE_ROOT: &str = "https://www.oireachtas.ie";
const SEARCH_URL: &str = "https://www.oireachtas.ie/en/debates/questions/";

// The search page serves an empty shell to clients without a browser UA.
const USER_AGENT: &str = "Mozilla/5.0 (compatible; pq-watch/0.1)";

/// Scrapes the debates search results page for a fixed query.
/// Entry identity is the absolute page URL of each result.
pub struct HtmlSearchSource {
    client: reqwest::Client,
    url: reqwest::Url,
}

impl HtmlSearchSource {
    pub fn new(query: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("building http client")?;
        let url = reqwest::Url::parse_with_params(SEARCH_URL, &[("q", query)])
            .context("building search url")?;
        Ok(Self { client, url })
    }

    /// Extract entries from a results page, in document order (the site
    /// lists newest first). Result elements without an anchor are skipped;
    /// a missing date label renders as "Unknown date".
    pub fn parse_results(html: &str) -> Vec<Entry> {
        static RE_ITEM: OnceCell<Regex> = OnceCell::new();
        static RE_LINK: OnceCell<Regex> = OnceCell::new();
        static RE_DATE: OnceCell<Regex> = OnceCell::new();
        let re_item =
            RE_ITEM.get_or_init(|| Regex::new(r#"class="[^"]*\bresult-item\b[^"]*""#).unwrap());
        let re_link = RE_LINK
            .get_or_init(|| Regex::new(r#"(?is)<a[^>]*\bhref="([^"]+)"[^>]*>(.*?)</a>"#).unwrap());
        let re_date = RE_DATE.get_or_init(|| {
            Regex::new(r#"(?is)class="[^"]*\bresult-date\b[^"]*"[^>]*>([^<]*)"#).unwrap()
        });

        // Slice the page into one chunk per result element; the first anchor
        // and date label inside a chunk belong to that element.
        let starts: Vec<usize> = re_item.find_iter(html).map(|m| m.start()).collect();
        let mut out = Vec::with_capacity(starts.len());
        for (i, &start) in starts.iter().enumerate() {
            let end = starts.get(i + 1).copied().unwrap_or(html.len());
            let chunk = &html[start..end];

            let Some(caps) = re_link.captures(chunk) else {
                continue;
            };
            let href = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            let link = if href.starts_with('/') {
                format!("{SITE_ROOT}{href}")
            } else {
                href.to_string()
            };
            let title = clean_text(caps.get(2).map(|m| m.as_str()).unwrap_or_default());
            let date = re_date
                .captures(chunk)
                .map(|c| clean_text(&c[1]))
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| "Unknown date".to_string());

            out.push(Entry {
                id: link.clone(),
                title,
                date,
                link,
            });
        }
        out
    }
}

/// Entity-decode, strip tags, collapse whitespace.
fn clean_text(s: &str) -> String {
    static RE_TAGS: OnceCell<Regex> = OnceCell::new();
    static RE_WS: OnceCell<Regex> = OnceCell::new();
    let re_tags = RE_TAGS.get_or_init(|| Regex::new(r"(?is)</?[^>]+>").unwrap());
    let re_ws = RE_WS.get_or_init(|| Regex::new(r"\s+").unwrap());

    let decoded = html_escape::decode_html_entities(s).to_string();
    let stripped = re_tags.replace_all(&decoded, "");
    re_ws.replace_all(&stripped, " ").trim().to_string()
}

#[async_trait]
impl QuestionSource for HtmlSearchSource {
    async fn fetch(&self) -> Result<Vec<Entry>> {
        tracing::debug!(url = %self.url, "fetching question search page");
        let body = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .context("search page get()")?
            .error_for_status()
            .context("search page non-2xx")?
            .text()
            .await
            .context("search page .text()")?;

        let entries = Self::parse_results(&body);
        tracing::debug!(count = entries.len(), "parsed search results");
        Ok(entries)
    }

    fn name(&self) -> &'static str {
        "html"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_decodes_strips_and_collapses() {
        let s = "  <b>Join&nbsp;family</b>\n visa &amp; reunification  ";
        assert_eq!(clean_text(s), "Join family visa & reunification");
    }

    #[test]
    fn query_is_encoded_into_the_search_url() {
        let src = HtmlSearchSource::new("join family visa").unwrap();
        assert_eq!(
            src.url.as_str(),
            "https://www.oireachtas.ie/en/debates/questions/?q=join+family+visa"
        );
    }
}
