use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::{Directive, LevelFilter, ParseError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use typed_builder::TypedBuilder;

#[derive(TypedBuilder, Debug)]
pub(crate) struct TracingConfig {
    pub package: &'static str,
    pub version: &'static str,
    #[builder(default)]
    pub debug: bool,
}

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error(transparent)]
    Directive(#[from] ParseError),
    #[error(transparent)]
    TracingInit(#[from] tracing_subscriber::util::TryInitError),
}

impl TracingConfig {
    fn filter(&self) -> Result<EnvFilter, ParseError> {
        let default_level = if self.debug {
            LevelFilter::DEBUG
        } else {
            LevelFilter::OFF
        };
        let filter = EnvFilter::builder()
            .with_default_directive(default_level.into())
            .from_env_lossy();
        if !self.debug {
            return Ok(filter);
        }
        Ok(filter
            .add_directive("hyper_util=info".parse::<Directive>()?)
            .add_directive("reqwest=info".parse::<Directive>()?))
    }
}

/// Logs go to stderr so stdout only carries the exchange output. Silent unless `debug` is set or
/// `RUST_LOG` says otherwise.
pub(crate) fn setup(config: TracingConfig) -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(config.filter()?)
        .try_init()?;
    tracing::debug!(package = config.package, version = config.version, "Tracing initialized");
    Ok(())
}
