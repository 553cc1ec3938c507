use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),

    #[error(transparent)]
    Encode(#[from] serde_urlencoded::ser::Error),
}

#[derive(Error, Debug)]
pub enum HttpError {
    #[error(transparent)]
    Transport(Box<dyn std::error::Error + Send + Sync>),

    #[error(transparent)]
    Http(#[from] http::Error),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required value `{0}`")]
    Missing(&'static str),
}
