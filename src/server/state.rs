//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - HTTP client for Google, Stripe, Resend and Cloudinary requests
//! - OAuth2 client for Google sign-in
//! - Gallery service owning the process-wide image cache
//! - Email service for member notifications
//! - Billing and operator settings read from configuration

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    config::{Config, StripeConfig},
    service::{
        email::EmailService,
        gallery::{GalleryCache, GalleryService},
    },
};

/// Type alias for the OAuth2 client configured for Google authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `OAuth2Client` is designed to be cloned
/// - `GalleryService` shares its cache through an `Arc`
/// - `String` and config structs are cloned when needed
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for making external API requests.
    ///
    /// Configured with redirects disabled.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Google sign-in flow.
    pub oauth_client: OAuth2Client,

    /// Google endpoint returning the signed-in account's email and name.
    pub google_userinfo_url: String,

    /// Stripe credentials and plan price ids.
    pub stripe: StripeConfig,

    /// Gallery image source and its cache.
    pub gallery: GalleryService,

    /// Transactional email sender.
    pub email: EmailService,

    /// Shared operator secret for admin setup and manual migrations.
    pub setup_secret: String,

    /// Application base URL without a trailing slash.
    ///
    /// Used for Stripe return URLs and links in emails.
    pub app_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// This constructor is called once during server startup after the database,
    /// HTTP and OAuth clients have been initialized. The gallery and email services
    /// are built here from the configuration and share the HTTP client.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `oauth_client` - OAuth2 client for Google authentication
    /// - `config` - Application configuration
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        config: &Config,
    ) -> Self {
        let gallery = GalleryService::new(
            http_client.clone(),
            config.cloudinary.clone(),
            GalleryCache::default(),
        );
        let email = EmailService::new(
            http_client.clone(),
            config.email.clone(),
            config.app_url.clone(),
        );

        Self {
            db,
            http_client,
            oauth_client,
            google_userinfo_url: config.google_userinfo_url.clone(),
            stripe: config.stripe.clone(),
            gallery,
            email,
            setup_secret: config.setup_secret.clone(),
            app_url: config.app_url.clone(),
        }
    }
}
