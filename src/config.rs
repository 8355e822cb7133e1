// src/config.rs
use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;

/// Which backend serves the question search (see `source::build_source`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Scrape the debates search results page.
    Html,
    /// Query the questions JSON API.
    Api,
}

/// Everything the run needs, resolved once at startup. Constructors take
/// this by reference; nothing reads the environment after this point.
#[derive(Debug, Clone)]
pub struct Config {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_user: String,
    pub smtp_pass: String,
    pub mail_from: String,
    pub mail_to: String,
    pub query: String,
    pub source: SourceKind,
    pub state_path: PathBuf,
    pub subject: String,
    /// Opt-in: send one probe email before the real run (debug aid).
    pub send_probe: bool,
}

const DEFAULT_STATE_PATH: &str = "state/last_seen_id.txt";
const DEFAULT_SUBJECT: &str = "New parliamentary questions";

fn required(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("{key} missing"))
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let smtp_host = required("SMTP_HOST")?;
        let smtp_port = match std::env::var("SMTP_PORT") {
            Ok(v) => v.parse::<u16>().context("SMTP_PORT is not a port number")?,
            Err(_) => 587,
        };
        let smtp_user = required("SMTP_USER")?;
        let smtp_pass = required("SMTP_PASS")?;
        let mail_from = std::env::var("NOTIFY_EMAIL_FROM").unwrap_or_else(|_| smtp_user.clone());
        let mail_to = required("NOTIFY_EMAIL_TO")?;
        let query = required("PQ_QUERY")?;

        let source = match std::env::var("PQ_SOURCE") {
            Ok(v) => match v.to_ascii_lowercase().as_str() {
                "html" => SourceKind::Html,
                "api" => SourceKind::Api,
                other => return Err(anyhow!("PQ_SOURCE must be 'html' or 'api', got '{other}'")),
            },
            Err(_) => SourceKind::Html,
        };

        let state_path = std::env::var("PQ_STATE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATE_PATH));
        let subject =
            std::env::var("NOTIFY_SUBJECT").unwrap_or_else(|_| DEFAULT_SUBJECT.to_string());
        let send_probe = std::env::var("PQ_SEND_PROBE").ok().is_some_and(|v| v == "1");

        Ok(Self {
            smtp_host,
            smtp_port,
            smtp_user,
            smtp_pass,
            mail_from,
            mail_to,
            query,
            source,
            state_path,
            subject,
            send_probe,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    const ALL_VARS: &[&str] = &[
        "SMTP_HOST",
        "SMTP_PORT",
        "SMTP_USER",
        "SMTP_PASS",
        "NOTIFY_EMAIL_FROM",
        "NOTIFY_EMAIL_TO",
        "PQ_QUERY",
        "PQ_SOURCE",
        "PQ_STATE_PATH",
        "NOTIFY_SUBJECT",
        "PQ_SEND_PROBE",
    ];

    fn set_minimum() {
        for k in ALL_VARS {
            env::remove_var(k);
        }
        env::set_var("SMTP_HOST", "smtp.example.test");
        env::set_var("SMTP_USER", "bot@example.test");
        env::set_var("SMTP_PASS", "hunter2");
        env::set_var("NOTIFY_EMAIL_TO", "me@example.test");
        env::set_var("PQ_QUERY", "join family visa");
    }

    #[serial_test::serial]
    #[test]
    fn minimum_env_yields_defaults() {
        set_minimum();
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.smtp_port, 587);
        assert_eq!(cfg.mail_from, "bot@example.test"); // falls back to SMTP_USER
        assert_eq!(cfg.source, SourceKind::Html);
        assert_eq!(cfg.state_path, PathBuf::from("state/last_seen_id.txt"));
        assert_eq!(cfg.subject, "New parliamentary questions");
        assert!(!cfg.send_probe);
    }

    #[serial_test::serial]
    #[test]
    fn explicit_values_win_over_defaults() {
        set_minimum();
        env::set_var("SMTP_PORT", "2525");
        env::set_var("NOTIFY_EMAIL_FROM", "alerts@example.test");
        env::set_var("PQ_SOURCE", "API");
        env::set_var("PQ_STATE_PATH", "/tmp/pq-cursor");
        env::set_var("PQ_SEND_PROBE", "1");
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.smtp_port, 2525);
        assert_eq!(cfg.mail_from, "alerts@example.test");
        assert_eq!(cfg.source, SourceKind::Api);
        assert_eq!(cfg.state_path, PathBuf::from("/tmp/pq-cursor"));
        assert!(cfg.send_probe);
    }

    #[serial_test::serial]
    #[test]
    fn missing_required_and_bad_values_error() {
        set_minimum();
        env::remove_var("PQ_QUERY");
        assert!(Config::from_env().is_err());

        set_minimum();
        env::set_var("SMTP_PORT", "not-a-port");
        assert!(Config::from_env().is_err());

        set_minimum();
        env::set_var("PQ_SOURCE", "rss");
        assert!(Config::from_env().is_err());
    }
}
