//! Contact message delivery.
//!
//! With a Resend API key configured, each valid contact submission is sent
//! as an email to the site owner. Without one, the message is only logged.

use client::state::forms::ContactForm;
use leptos::prelude::*;
use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;
use tracing::info;

use crate::config::ContactConfig;

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("contact delivery failed: {0}")]
    Delivery(String),
}

/// Destination for contact form messages.
#[async_trait::async_trait]
pub trait ContactSink: Send + Sync {
    async fn deliver(&self, message: &ContactForm) -> Result<(), ContactError>;
}

/// Pick the sink matching the configuration.
#[must_use]
pub fn sink_from_config(config: &ContactConfig) -> std::sync::Arc<dyn ContactSink> {
    match &config.resend_api_key {
        Some(key) => std::sync::Arc::new(ResendSink::new(key, &config.from, &config.to)),
        None => {
            info!("RESEND_API_KEY not set; contact messages will be logged only");
            std::sync::Arc::new(LogSink)
        }
    }
}

pub struct ResendSink {
    resend: Resend,
    from: String,
    to: String,
}

impl ResendSink {
    #[must_use]
    pub fn new(api_key: &str, from: &str, to: &str) -> Self {
        Self { resend: Resend::new(api_key), from: from.to_owned(), to: to.to_owned() }
    }
}

#[async_trait::async_trait]
impl ContactSink for ResendSink {
    async fn deliver(&self, message: &ContactForm) -> Result<(), ContactError> {
        let subject = format!("Portfolio contact: {}", message.subject.trim());
        let html = render_contact_email(message);
        let email = CreateEmailBaseOptions::new(&self.from, [self.to.as_str()], subject).with_html(&html);
        self.resend
            .emails
            .send(email)
            .await
            .map_err(|e| ContactError::Delivery(e.to_string()))?;
        info!(from = %message.email.trim(), "contact message delivered");
        Ok(())
    }
}

/// Records the message in the log and reports success.
pub struct LogSink;

#[async_trait::async_trait]
impl ContactSink for LogSink {
    async fn deliver(&self, message: &ContactForm) -> Result<(), ContactError> {
        info!(
            name = %message.name.trim(),
            email = %message.email.trim(),
            subject = %message.subject.trim(),
            message = %message.message.trim(),
            "contact message received"
        );
        Ok(())
    }
}

/// Email body for a contact message. User input is rendered as escaped text.
#[must_use]
pub fn render_contact_email(message: &ContactForm) -> String {
    let from = format!("{} <{}>", message.name.trim(), message.email.trim());
    let subject = message.subject.trim().to_owned();
    let mut lines = message.message.trim().lines().map(str::to_owned);
    let first = lines.next().unwrap_or_default();
    let rest: Vec<String> = lines.collect();
    Owner::new().with(move || {
        view! {
            <p><strong>"From:"</strong>" "{from}</p>
            <p><strong>"Subject:"</strong>" "{subject}</p>
            <p>{first}{rest.into_iter().map(|line| view! { <br/>{line} }).collect_view()}</p>
        }
        .to_html()
    })
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
