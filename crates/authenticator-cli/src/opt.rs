use crate::error::UsageError;
use authenticator::{Config, Credentials};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "authenticator",
    version,
    about = "Authenticator can fetch a token from Active Directory for a given user",
    override_usage = "authenticator [OPTIONS] <username> <password>"
)]
pub(crate) struct Cli {
    /// The endpoint to authenticate with
    #[arg(short, long)]
    pub(crate) endpoint: Option<String>,

    /// The client ID of your application
    #[arg(short, long)]
    pub(crate) id: Option<String>,

    /// The connection name of your application
    #[arg(short, long)]
    pub(crate) connection: Option<String>,

    /// The scopes you wish the id_token to contain
    #[arg(short, long)]
    pub(crate) scope: Option<String>,

    /// Write debug logs to stderr
    #[arg(short, long)]
    pub(crate) debug: bool,

    /// The username and password to authenticate with
    #[arg(value_name = "ARGS", trailing_var_arg = true)]
    pub(crate) args: Vec<String>,
}

impl Cli {
    pub(crate) fn into_request(self) -> Result<(Config, Credentials), UsageError> {
        let count = self.args.len();
        let mut args = self.args.into_iter();
        let (Some(username), Some(password)) = (args.next(), args.next()) else {
            return Err(UsageError::Credentials(count));
        };
        let config = Config::new(
            self.endpoint.unwrap_or_default(),
            self.id.unwrap_or_default(),
            self.connection.unwrap_or_default(),
            self.scope.unwrap_or_default(),
        )?;
        Ok((config, Credentials::new(username, password)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use authenticator::error::ConfigError;
    use clap::error::ErrorKind;

    const FLAGS: [&str; 9] = [
        "authenticator",
        "-e",
        "https://example.com",
        "-i",
        "abc",
        "-c",
        "conn1",
        "-s",
        "openid",
    ];

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(FLAGS.iter().chain(args)).unwrap()
    }

    #[test]
    fn test_short_flags() {
        let (config, credentials) = parse(&["bob", "secret"]).into_request().unwrap();
        assert_eq!(config.endpoint.as_str(), "https://example.com");
        assert_eq!(config.client_id, "abc");
        assert_eq!(config.connection, "conn1");
        assert_eq!(config.scope, "openid");
        assert_eq!(credentials.username, "bob");
        assert_eq!(credentials.password, "secret");
    }

    #[test]
    fn test_long_flags() {
        let cli = Cli::try_parse_from([
            "authenticator",
            "--endpoint",
            "https://example.com",
            "--id",
            "abc",
            "--connection",
            "conn1",
            "--scope",
            "openid",
            "--debug",
            "bob",
            "secret",
        ])
        .unwrap();
        assert!(cli.debug);
        let (config, credentials) = cli.into_request().unwrap();
        assert_eq!(config.client_id, "abc");
        assert_eq!(credentials.username, "bob");
    }

    #[test]
    fn test_password_with_leading_hyphen() {
        let (_, credentials) = parse(&["bob", "-secret"]).into_request().unwrap();
        assert_eq!(credentials.password, "-secret");
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let (_, credentials) = parse(&["bob", "secret", "extra"]).into_request().unwrap();
        assert_eq!(credentials.username, "bob");
        assert_eq!(credentials.password, "secret");
    }

    #[test]
    fn test_missing_credentials() {
        assert!(matches!(parse(&[]).into_request(), Err(UsageError::Credentials(0))));
        assert!(matches!(parse(&["bob"]).into_request(), Err(UsageError::Credentials(1))));
    }

    #[test]
    fn test_empty_flag() {
        let cli = Cli::try_parse_from([
            "authenticator",
            "-e",
            "https://example.com",
            "-i",
            "abc",
            "-c",
            "conn1",
            "-s",
            "",
            "bob",
            "secret",
        ])
        .unwrap();
        assert!(matches!(
            cli.into_request(),
            Err(UsageError::Config(ConfigError::Missing("scope")))
        ));
    }

    #[test]
    fn test_omitted_flag_is_missing() {
        let cli = Cli::try_parse_from([
            "authenticator",
            "-e",
            "https://example.com",
            "-i",
            "abc",
            "-c",
            "conn1",
            "bob",
            "secret",
        ])
        .unwrap();
        assert_eq!(cli.scope, None);
        assert!(matches!(
            cli.into_request(),
            Err(UsageError::Config(ConfigError::Missing("scope")))
        ));
    }

    #[test]
    fn test_help_and_version() {
        let error = Cli::try_parse_from(["authenticator", "--help"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::DisplayHelp);
        assert!(error.render().to_string().contains("<username> <password>"));

        let error = Cli::try_parse_from(["authenticator", "--version"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_unknown_flag() {
        let error = Cli::try_parse_from(["authenticator", "--password", "secret"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UnknownArgument);
    }
}
