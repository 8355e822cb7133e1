use anyhow::{Context, Result};
use lettre::message::{header, Mailbox, Message};
use lettre::transport::smtp::{authentication::Credentials, AsyncSmtpTransport};
use lettre::{AsyncTransport, Tokio1Executor};

use super::{format_digest, DigestNotifier};
use crate::config::Config;
use crate::source::Entry;

pub struct EmailNotifier {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl EmailNotifier {
    /// Builds the transport from configuration. No connection is opened
    /// here; the relay is only contacted on send.
    pub fn new(cfg: &Config) -> Result<Self> {
        let creds = Credentials::new(cfg.smtp_user.clone(), cfg.smtp_pass.clone());
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&cfg.smtp_host)
            .context("invalid SMTP_HOST")?
            .port(cfg.smtp_port)
            .credentials(creds)
            .build();

        let from = cfg.mail_from.parse().context("invalid NOTIFY_EMAIL_FROM")?;
        let to = cfg.mail_to.parse().context("invalid NOTIFY_EMAIL_TO")?;

        Ok(Self { mailer, from, to })
    }

    async fn send_plain(&self, subject: &str, body: String) -> Result<()> {
        let msg = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(subject)
            .header(header::ContentType::TEXT_PLAIN)
            .body(body)
            .context("build email")?;

        self.mailer.send(msg).await.context("send email")?;
        Ok(())
    }

    /// Opt-in debug aid (`PQ_SEND_PROBE=1`): one test message to confirm
    /// the relay credentials before the real run.
    pub async fn send_probe(&self) -> Result<()> {
        tracing::info!("sending probe email");
        self.send_plain("pq-watch probe", "Probe email from pq-watch.".to_string())
            .await
    }
}

#[async_trait::async_trait]
impl DigestNotifier for EmailNotifier {
    async fn notify(&self, subject: &str, entries: &[Entry]) -> Result<()> {
        let body = format_digest(entries);
        tracing::info!(count = entries.len(), to = %self.to, "sending digest email");
        self.send_plain(subject, body).await
    }
}
