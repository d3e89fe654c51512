//! RETS session error types.
//!
//! Every error in this crate is a construction-time configuration error:
//! once a [`Session`](crate::Session) exists, digest computation and state
//! updates are infallible. Construction fails atomically and never produces
//! a partial session.

use thiserror::Error;

/// Configuration errors raised while resolving connection options.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No URL was supplied in the connection options.
    #[error("options.url is required")]
    MissingUrl,

    /// The `url` config value is neither a string nor a table.
    #[error("options.url is not a string or an object")]
    InvalidUrlType,

    /// The URL string could not be parsed.
    #[error("invalid options.url: {0}")]
    Parse(#[from] url::ParseError),

    /// The parsed URL has an empty host.
    #[error("invalid options.url.host")]
    InvalidHost,

    /// The embedded `user:pass` component is missing or malformed.
    #[error("invalid options.url.auth")]
    InvalidAuth,

    /// A config file could not be read.
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    /// A config file could not be parsed as TOML.
    #[error("failed to parse config file: {0}")]
    Toml(String),
}

/// Result type alias for session construction.
pub type Result<T> = std::result::Result<T, ConfigError>;

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Toml(err.to_string())
    }
}
