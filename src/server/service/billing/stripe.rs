//! Minimal Stripe REST client for hosted checkout and the billing portal.

use dioxus_logger::tracing;
use serde::Deserialize;

use crate::server::error::{billing::BillingError, AppError};

const STRIPE_API_URL: &str = "https://api.stripe.com/v1";

#[derive(Deserialize)]
struct HostedSession {
    url: Option<String>,
}

pub struct StripeClient<'a> {
    http_client: &'a reqwest::Client,
    secret_key: &'a str,
}

impl<'a> StripeClient<'a> {
    pub fn new(http_client: &'a reqwest::Client, secret_key: &'a str) -> Self {
        Self {
            http_client,
            secret_key,
        }
    }

    /// Creates a subscription-mode checkout session.
    ///
    /// The user id is written to both the session and the subscription metadata so
    /// webhooks can attribute the payment.
    ///
    /// # Arguments
    /// - `user_id` - Id of the paying user
    /// - `email` - Prefilled customer email
    /// - `price_id` - Stripe price of the selected plan
    /// - `app_url` - Base URL for the success and cancel redirects
    ///
    /// # Returns
    /// - `Ok(String)` - URL of the hosted checkout page
    /// - `Err(AppError)` - Request failed or Stripe rejected it
    pub async fn create_checkout_session(
        &self,
        user_id: i32,
        email: &str,
        price_id: &str,
        app_url: &str,
    ) -> Result<String, AppError> {
        let user_id = user_id.to_string();
        let params = [
            ("mode", "subscription".to_string()),
            ("customer_email", email.to_string()),
            ("line_items[0][price]", price_id.to_string()),
            ("line_items[0][quantity]", "1".to_string()),
            (
                "success_url",
                format!(
                    "{}/billing/success?session_id={{CHECKOUT_SESSION_ID}}",
                    app_url
                ),
            ),
            ("cancel_url", format!("{}/pricing", app_url)),
            ("metadata[userId]", user_id.clone()),
            ("subscription_data[metadata][userId]", user_id),
        ];

        self.post_form("checkout/sessions", &params).await
    }

    /// Creates a billing portal session for an existing customer.
    ///
    /// # Returns
    /// - `Ok(String)` - URL of the hosted portal
    /// - `Err(AppError)` - Request failed or Stripe rejected it
    pub async fn create_portal_session(
        &self,
        customer_id: &str,
        return_url: &str,
    ) -> Result<String, AppError> {
        let params = [
            ("customer", customer_id.to_string()),
            ("return_url", return_url.to_string()),
        ];

        self.post_form("billing_portal/sessions", &params).await
    }

    async fn post_form(&self, path: &str, params: &[(&str, String)]) -> Result<String, AppError> {
        let response = self
            .http_client
            .post(format!("{}/{}", STRIPE_API_URL, path))
            .basic_auth(self.secret_key, None::<&str>)
            .form(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::error!("Stripe {} failed ({}): {}", path, status, message);
            return Err(BillingError::Provider {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let session: HostedSession = response.json().await?;

        session.url.ok_or_else(|| {
            AppError::InternalError(format!("Stripe {} response has no url", path))
        })
    }
}
