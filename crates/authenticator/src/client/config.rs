use crate::error::{ConfigError, InternalError};
use url::Url;

const TOKEN_PATH: &str = "/oauth/ro";

/// Settings for one resource-owner password exchange.
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: Endpoint,
    pub client_id: String,
    pub connection: String,
    pub scope: String,
}

impl Config {
    /// Fails with the name of the first value that is empty.
    pub fn new(
        endpoint: impl Into<String>,
        client_id: impl Into<String>,
        connection: impl Into<String>,
        scope: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let endpoint = required("endpoint", endpoint.into())?;
        let client_id = required("id", client_id.into())?;
        let connection = required("connection", connection.into())?;
        let scope = required("scope", scope.into())?;

        Ok(Self {
            endpoint: Endpoint { url: endpoint },
            client_id,
            connection,
            scope,
        })
    }
}

fn required(name: &'static str, value: String) -> Result<String, ConfigError> {
    if value.is_empty() {
        Err(ConfigError::Missing(name))
    } else {
        Ok(value)
    }
}

/// Base address of the identity provider, kept exactly as configured.
#[derive(Debug, Clone)]
pub struct Endpoint {
    url: String,
}

impl Endpoint {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// The token path is appended verbatim, so a trailing slash on the endpoint is kept.
    pub fn token(&self) -> Result<Url, InternalError> {
        Url::parse(&format!("{}{TOKEN_PATH}", self.url)).map_err(Into::into)
    }
}
