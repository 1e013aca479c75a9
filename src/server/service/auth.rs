use dioxus_logger::tracing;
use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use url::Url;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{UpsertUserParam, User},
    state::OAuth2Client,
};

/// Identity claims returned by Google's userinfo endpoint.
#[derive(Debug, Deserialize)]
pub struct GoogleUser {
    pub email: String,
    #[serde(default)]
    pub email_verified: Option<bool>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

/// Service for Google OAuth2 sign-in.
///
/// Users are keyed by their Google email. Name and picture are refreshed on every
/// sign-in; admin status and billing links are left untouched.
pub struct AuthService<'a> {
    /// Database connection for user operations.
    pub db: &'a DatabaseConnection,
    /// HTTP client for the token exchange and userinfo request.
    pub http_client: &'a reqwest::Client,
    /// OAuth2 client configured with Google's endpoints.
    pub oauth_client: &'a OAuth2Client,
    /// Google userinfo endpoint.
    pub userinfo_url: &'a str,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `http_client` - Reference to the HTTP client for Google API requests
    /// - `oauth_client` - Reference to the configured OAuth2 client
    /// - `userinfo_url` - Google userinfo endpoint
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        userinfo_url: &'a str,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            userinfo_url,
        }
    }

    /// Generates a Google OAuth2 login URL with CSRF protection.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Tuple containing the authorization URL and CSRF state token
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .url();

        (authorize_url, csrf_state)
    }

    /// Handles the OAuth2 callback and signs the user in.
    ///
    /// Exchanges the authorization code for an access token, fetches the Google identity
    /// and creates or refreshes the user row keyed by email.
    ///
    /// # Arguments
    /// - `authorization_code` - OAuth2 authorization code from the Google callback
    ///
    /// # Returns
    /// - `Ok(User)` - Signed-in user
    /// - `Err(AppError::AuthErr)` - OAuth2 token exchange failed or the email is unverified
    /// - `Err(AppError::ReqwestErr)` - Failed to fetch the Google identity
    /// - `Err(AppError::DbErr)` - Database error during user upsert
    pub async fn callback(&self, authorization_code: String) -> Result<User, AppError> {
        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(AuthError::from)?;

        let google_user = self.fetch_google_user(&token).await?;
        let email = verified_email(&google_user)?;

        let user = UserRepository::new(self.db)
            .upsert(UpsertUserParam {
                email,
                name: google_user.name,
                image: google_user.picture,
            })
            .await?;

        Ok(user)
    }

    /// Retrieves the Google identity for the access token.
    async fn fetch_google_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<GoogleUser, AppError> {
        let access_token = token.access_token().secret();

        let user_info = self
            .http_client
            .get(self.userinfo_url)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .error_for_status()?
            .json::<GoogleUser>()
            .await?;

        Ok(user_info)
    }
}

/// Returns the normalized email of a Google identity whose address is verified.
///
/// # Returns
/// - `Ok(String)` - Trimmed, lowercased email
/// - `Err(AuthError::UnverifiedEmail)` - Google did not report the email as verified
pub fn verified_email(google_user: &GoogleUser) -> Result<String, AuthError> {
    if google_user.email_verified != Some(true) {
        tracing::warn!("Rejected sign-in for unverified Google email {}", google_user.email);
        return Err(AuthError::UnverifiedEmail(google_user.email.clone()));
    }

    Ok(google_user.email.trim().to_lowercase())
}
