use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Client(#[from] reqwest::Error),

    #[error(transparent)]
    Http(#[from] http::Error),
}
