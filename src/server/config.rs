use crate::server::error::{config::ConfigError, AppError};

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

/// Stripe credentials and the price ids backing each paid plan.
#[derive(Clone, Debug, Default)]
pub struct StripeConfig {
    pub secret_key: Option<String>,
    pub webhook_secret: Option<String>,
    pub premium_price_id: Option<String>,
    pub enterprise_price_id: Option<String>,
}

/// Resend credentials for transactional email.
#[derive(Clone, Debug, Default)]
pub struct EmailConfig {
    pub resend_api_key: Option<String>,
    pub from: String,
}

/// Cloudinary credentials for the gallery. The gallery is empty when unset.
#[derive(Clone, Debug)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub folder: String,
}

pub struct Config {
    pub database_url: String,
    pub app_url: String,
    pub setup_secret: String,

    pub google_client_id: String,
    pub google_client_secret: String,
    pub google_redirect_url: String,

    pub google_auth_url: String,
    pub google_token_url: String,
    pub google_userinfo_url: String,

    pub stripe: StripeConfig,
    pub email: EmailConfig,
    pub cloudinary: Option<CloudinaryConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let cloudinary = match (
            optional("CLOUDINARY_CLOUD_NAME"),
            optional("CLOUDINARY_API_KEY"),
            optional("CLOUDINARY_API_SECRET"),
        ) {
            (Some(cloud_name), Some(api_key), Some(api_secret)) => Some(CloudinaryConfig {
                cloud_name,
                api_key,
                api_secret,
                folder: optional("CLOUDINARY_FOLDER").unwrap_or_else(|| "gallery".to_string()),
            }),
            _ => None,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            app_url: required("APP_URL")?.trim_end_matches('/').to_string(),
            setup_secret: required("SETUP_SECRET")?,
            google_client_id: required("GOOGLE_CLIENT_ID")?,
            google_client_secret: required("GOOGLE_CLIENT_SECRET")?,
            google_redirect_url: required("GOOGLE_REDIRECT_URL")?,
            google_auth_url: GOOGLE_AUTH_URL.to_string(),
            google_token_url: GOOGLE_TOKEN_URL.to_string(),
            google_userinfo_url: GOOGLE_USERINFO_URL.to_string(),
            stripe: StripeConfig {
                secret_key: optional("STRIPE_SECRET_KEY"),
                webhook_secret: optional("STRIPE_WEBHOOK_SECRET"),
                premium_price_id: optional("STRIPE_PREMIUM_PRICE_ID"),
                enterprise_price_id: optional("STRIPE_ENTERPRISE_PRICE_ID"),
            },
            email: EmailConfig {
                resend_api_key: optional("RESEND_API_KEY"),
                from: optional("EMAIL_FROM")
                    .unwrap_or_else(|| "AGI House India <hello@agihouse.in>".to_string()),
            },
            cloudinary,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads an optional variable, treating an empty value as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}
