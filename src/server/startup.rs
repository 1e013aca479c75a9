use axum::http::{header, HeaderValue, Method};
use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use time::Duration;
use tower_http::cors::CorsLayer;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Days an idle session stays valid.
const SESSION_IDLE_DAYS: i64 = 30;

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the cookie session layer backed by the application database.
///
/// Sessions are stored in the same Sqlite database as application data so that a
/// signed-in browser survives restarts. The session table is created if missing.
///
/// # Arguments
/// - `db` - Connected application database
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to wrap the API router with
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(SESSION_IDLE_DAYS)));

    Ok(session_layer)
}

/// Builds the shared HTTP client for Google, Stripe, Resend and Cloudinary.
///
/// Redirects are disabled so a compromised upstream cannot bounce requests to
/// internal addresses.
pub fn setup_reqwest_client() -> reqwest::Client {
    reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap_or_default()
}

/// Builds the OAuth2 client for Google sign-in.
///
/// # Arguments
/// - `config` - Application configuration with Google credentials and endpoints
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with auth and token endpoints set
/// - `Err(AppError::ConfigErr)` - One of the configured URLs is malformed
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let auth_url = AuthUrl::new(config.google_auth_url.clone())
        .map_err(|source| invalid_url("GOOGLE_AUTH_URL", source))?;
    let token_url = TokenUrl::new(config.google_token_url.clone())
        .map_err(|source| invalid_url("GOOGLE_TOKEN_URL", source))?;
    let redirect_url = RedirectUrl::new(config.google_redirect_url.clone())
        .map_err(|source| invalid_url("GOOGLE_REDIRECT_URL", source))?;

    let client = BasicClient::new(ClientId::new(config.google_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.google_client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url);

    Ok(client)
}

fn invalid_url(name: &str, source: url::ParseError) -> AppError {
    ConfigError::InvalidUrl {
        name: name.to_string(),
        source,
    }
    .into()
}

/// Restricts cross-origin API calls to the configured application origin.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer allowing credentialed requests from `APP_URL`
/// - `Err(AppError::ConfigErr)` - `APP_URL` is not a valid origin
pub fn setup_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let origin = HeaderValue::from_str(&config.app_url)
        .map_err(|_| ConfigError::InvalidOrigin(config.app_url.clone()))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}
