//! Transactional email through the Resend REST API.
//!
//! Sending is best effort: failures are logged and never returned to the caller.

use dioxus_logger::tracing;
use serde::{Deserialize, Serialize};

use crate::server::config::EmailConfig;

const RESEND_EMAILS_URL: &str = "https://api.resend.com/emails";
const APPROVAL_SUBJECT: &str = "Welcome to AGI House India!";

#[derive(Serialize)]
struct ResendEmail<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: String,
}

#[derive(Deserialize)]
struct ResendResponse {
    id: Option<String>,
}

/// What happened to an email send attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailOutcome {
    /// Accepted by Resend with this message id, if one was returned.
    Sent(Option<String>),
    /// No API key is configured.
    Skipped,
    /// The request failed; details were logged.
    Failed,
}

#[derive(Clone)]
pub struct EmailService {
    http_client: reqwest::Client,
    config: EmailConfig,
    app_url: String,
}

impl EmailService {
    /// Creates a new EmailService instance.
    ///
    /// # Arguments
    /// - `http_client` - Shared outbound HTTP client
    /// - `config` - Resend key and sender address
    /// - `app_url` - Public base URL used for links in emails
    pub fn new(http_client: reqwest::Client, config: EmailConfig, app_url: String) -> Self {
        Self {
            http_client,
            config,
            app_url,
        }
    }

    /// Tells a member their profile was approved, linking to their public profile.
    ///
    /// # Arguments
    /// - `user_id` - The approved member
    /// - `to` - Recipient address
    /// - `name` - Recipient display name, if known
    ///
    /// # Returns
    /// - `EmailOutcome` - Sent, skipped for lack of configuration, or failed
    pub async fn send_approval(&self, user_id: i32, to: &str, name: Option<&str>) -> EmailOutcome {
        let Some(api_key) = self.config.resend_api_key.as_deref() else {
            tracing::info!("RESEND_API_KEY not set, skipping approval email to {}", to);
            return EmailOutcome::Skipped;
        };

        let profile_url = format!("{}/members/{}", self.app_url, user_id);
        let body = ResendEmail {
            from: &self.config.from,
            to: [to],
            subject: APPROVAL_SUBJECT,
            html: approval_html(name, &profile_url),
        };

        let response = match self
            .http_client
            .post(RESEND_EMAILS_URL)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                tracing::error!("Failed to send approval email to {}: {}", to, err);
                return EmailOutcome::Failed;
            }
        };

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(
                "Resend rejected approval email to {} ({}): {}",
                to,
                status,
                error_text
            );
            return EmailOutcome::Failed;
        }

        let id = match response.json::<ResendResponse>().await {
            Ok(body) => body.id,
            Err(err) => {
                tracing::warn!("Unreadable Resend response for {}: {}", to, err);
                None
            }
        };

        tracing::info!("Approval email sent to {}: {:?}", to, id);
        EmailOutcome::Sent(id)
    }
}

/// Renders the approval email body.
fn approval_html(name: Option<&str>, profile_url: &str) -> String {
    let name = name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(escape_html)
        .unwrap_or_else(|| "there".to_string());

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
</head>
<body style="font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background-color: #0f0f0f; color: #ffffff; margin: 0; padding: 40px 20px;">
  <div style="max-width: 600px; margin: 0 auto; background-color: #1a1a1a; border-radius: 16px; padding: 40px; border: 1px solid #333;">
    <h1 style="color: #a855f7; margin: 0 0 24px; font-size: 28px;">Welcome to AGI House India!</h1>
    <p style="color: #e5e5e5; font-size: 16px; line-height: 1.6; margin: 0 0 16px;">Hi {name},</p>
    <p style="color: #e5e5e5; font-size: 16px; line-height: 1.6; margin: 0 0 24px;">
      Great news! Your profile has been approved and is now visible in the member directory.
    </p>
    <a href="{profile_url}" style="display: inline-block; background-color: #a855f7; color: #ffffff; text-decoration: none; padding: 14px 28px; border-radius: 8px; font-weight: 600; font-size: 16px;">
      View Your Profile
    </a>
    <p style="color: #999; font-size: 14px; line-height: 1.6; margin: 24px 0 0; padding-top: 24px; border-top: 1px solid #333;">
      See you at the next event!<br>
      <strong style="color: #e5e5e5;">AGI House India</strong>
    </p>
  </div>
</body>
</html>"#
    )
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expected: the greeting falls back to "there" and the profile link is embedded
    #[test]
    fn approval_html_greets_and_links() {
        let html = approval_html(Some("  "), "https://example.com/members/7");
        assert!(html.contains("Hi there,"));
        assert!(html.contains(r#"href="https://example.com/members/7""#));

        let html = approval_html(Some("Asha"), "https://example.com/members/7");
        assert!(html.contains("Hi Asha,"));

        let html = approval_html(Some("<b>Ravi</b>"), "https://example.com/members/7");
        assert!(html.contains("Hi &lt;b&gt;Ravi&lt;/b&gt;,"));
    }

    /// Expected: without an API key nothing is sent
    #[tokio::test]
    async fn skips_without_api_key() {
        let service = EmailService::new(
            reqwest::Client::new(),
            EmailConfig {
                resend_api_key: None,
                from: "Club <hello@example.com>".to_string(),
            },
            "https://example.com".to_string(),
        );

        let outcome = service.send_approval(1, "member@example.com", None).await;
        assert_eq!(outcome, EmailOutcome::Skipped);
    }
}
