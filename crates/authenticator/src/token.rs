use serde::Deserialize;

/// Token envelope returned by the `oauth/ro` endpoint.
///
/// Every field is optional and nothing about the token itself is validated.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct Token {
    pub token_type: Option<String>,
    pub access_token: Option<String>,
    pub id_token: Option<String>,
}

impl Token {
    /// Best-effort decode. A body that is not a JSON object of this shape yields an empty token.
    #[must_use]
    pub fn decode(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_else(|error| {
            tracing::debug!(error = &error as &dyn std::error::Error, "Response body is not a token");
            Self::default()
        })
    }

    #[must_use]
    pub fn id_token(&self) -> &str {
        self.id_token.as_deref().unwrap_or_default()
    }
}
