use authenticator::error::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum UsageError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Expected a username and a password, got {0} argument(s)")]
    Credentials(usize),
}
