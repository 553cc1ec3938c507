use crate::opt::Cli;
use authenticator::{BaseHttpClient, Credentials, HttpClient, RoClient};
use std::fmt::Display;
use std::io::{self, Write};

pub(crate) const USAGE: &str = "You need to provide the `id`, `connection`, `scope` and `endpoint` flags and a username/password pair in order to fetch the token
For more information type: `authenticator --help`";

pub(crate) async fn run<W: Write>(cli: Cli, out: &mut W) -> io::Result<()> {
    let (config, credentials) = match cli.into_request() {
        Ok(request) => request,
        Err(error) => {
            tracing::debug!(error = &error as &dyn std::error::Error, "Incomplete invocation");
            return writeln!(out, "{USAGE}");
        }
    };

    let http_client = match HttpClient::new() {
        Ok(http_client) => http_client,
        Err(error) => return report_error(out, &error),
    };

    authenticate(&RoClient::new(config, http_client), &credentials, out).await
}

/// Prints any error, the raw response body and the id token, one per line.
pub(crate) async fn authenticate<C, W>(client: &RoClient<C>, credentials: &Credentials, out: &mut W) -> io::Result<()>
where
    C: BaseHttpClient,
    W: Write,
{
    let authentication = client.authenticate(credentials).await;
    if let Some(error) = authentication.error() {
        report_error(out, error)?;
    }

    out.write_all(authentication.body())?;
    writeln!(out)?;
    writeln!(out, "{}", authentication.token().id_token())
}

fn report_error<W: Write>(out: &mut W, error: &dyn Display) -> io::Result<()> {
    writeln!(out, "[ERROR] {error}")
}
