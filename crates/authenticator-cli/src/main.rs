mod error;
mod logging;
mod opt;
mod run;

use crate::logging::TracingConfig;
use crate::opt::Cli;
use clap::Parser;
use std::io;

// Every path exits with status 0, diagnostics included. Parse errors, `--help` and `--version`
// are all rendered to stdout.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            print!("{}", error.render());
            return;
        }
    };

    if let Err(error) = logging::setup(
        TracingConfig::builder()
            .package(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .debug(cli.debug)
            .build(),
    ) {
        println!("[ERROR] {error}");
    }

    let mut stdout = io::stdout().lock();
    if let Err(error) = run::run(cli, &mut stdout).await {
        tracing::error!(error = &error as &dyn std::error::Error, "Failed to write output");
    }
}
