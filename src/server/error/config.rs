use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// A configured URL could not be parsed.
    ///
    /// Raised while building the OAuth client from `GOOGLE_REDIRECT_URL`.
    #[error("Invalid URL in {name}: {source}")]
    InvalidUrl {
        /// Name of the environment variable holding the URL
        name: String,
        #[source]
        source: url::ParseError,
    },

    /// `APP_URL` cannot be used as a CORS origin header.
    #[error("Invalid application origin: {0}")]
    InvalidOrigin(String),
}
