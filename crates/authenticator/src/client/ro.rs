use crate::client::config::Config;
use crate::error::{Error, HttpError, InternalError};
use crate::token::Token;
use authenticator_http::{BaseHttpClient, HttpClient, HttpRequest, HttpResponse};
use http::Method;
use http::header::CONTENT_TYPE;
use std::fmt;

const GRANT_TYPE: &str = "password";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Outcome of a single exchange.
///
/// The body is whatever the provider answered with, regardless of status code. It is empty when the
/// request could not be built or sent, in which case `error` says why.
#[derive(Debug)]
pub struct Authentication {
    body: Vec<u8>,
    error: Option<Error>,
}

impl Authentication {
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    #[must_use]
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn token(&self) -> Token {
        Token::decode(&self.body)
    }
}

/// Client for the resource-owner password endpoint (`oauth/ro`).
pub struct RoClient<C = HttpClient>
where
    C: BaseHttpClient,
{
    config: Config,
    http_client: C,
}

impl<C> RoClient<C>
where
    C: BaseHttpClient,
{
    #[must_use]
    pub fn new(config: Config, http_client: C) -> Self {
        Self { config, http_client }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Form fields of the token request, ordered by key.
    #[must_use]
    pub fn form<'a>(&'a self, credentials: &'a Credentials) -> [(&'static str, &'a str); 6] {
        [
            ("client_id", self.config.client_id.as_str()),
            ("connection", self.config.connection.as_str()),
            ("grant_type", GRANT_TYPE),
            ("password", credentials.password.as_str()),
            ("scope", self.config.scope.as_str()),
            ("username", credentials.username.as_str()),
        ]
    }

    pub fn token_request(&self, credentials: &Credentials) -> Result<HttpRequest, Error> {
        let url = self.config.endpoint.token()?;
        let body = serde_urlencoded::to_string(self.form(credentials)).map_err(InternalError::from)?;

        http::request::Request::builder()
            .method(Method::POST)
            .uri(url.as_str())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body.into_bytes())
            .map_err(|err| HttpError::from(err).into())
    }

    /// Runs the exchange. Never fails: errors end up in [`Authentication::error`].
    pub async fn authenticate(&self, credentials: &Credentials) -> Authentication {
        match self.exchange(credentials).await {
            Ok(response) => Authentication {
                body: response.into_body(),
                error: None,
            },
            Err(error) => {
                tracing::warn!(error = &error as &dyn std::error::Error, "Token request failed");
                Authentication {
                    body: Vec::new(),
                    error: Some(error),
                }
            }
        }
    }

    async fn exchange(&self, credentials: &Credentials) -> Result<HttpResponse<Vec<u8>>, Error> {
        let request = self.token_request(credentials)?;
        tracing::debug!(uri = %request.uri(), username = %credentials.username, "Performing token request.");
        self.http_client
            .request_bytes(request)
            .await
            .map_err(|err| HttpError::Transport(Box::new(err)).into())
    }
}
