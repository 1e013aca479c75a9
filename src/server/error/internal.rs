use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A text column holds a value outside its closed set.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown value '{value}' stored in column {column}")]
    UnknownEnumValue {
        /// Table and column the value was read from
        column: &'static str,
        /// The stored value
        value: String,
    },

    /// A JSON list column could not be decoded.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to decode list stored in column {column}: {source}")]
    InvalidStoredList {
        /// Table and column the value was read from
        column: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
