use clap::Parser;

use crate::shared_options::SharedOptions;

pub(crate) fn clap3_help_style() -> clap::builder::Styles {
    use clap::builder::styling::AnsiColor;
    clap::builder::Styles::styled()
        .header(AnsiColor::Yellow.on_default())
        .usage(AnsiColor::Green.on_default())
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Interactive shell for listing S3 buckets and uploading company files
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None, styles = clap3_help_style())]
pub(crate) struct Arguments {
    #[clap(long, short='R', env = "REGION")]
    pub region: Option<String>,

    #[clap(long, env = "ACCESS_KEY_ID", hide_env_values = true)]
    pub access_key_id: Option<String>,

    #[clap(long, env = "SECRET_ACCESS_KEY", hide_env_values = true)]
    pub secret_access_key: Option<String>,

    #[clap(long, short='e')]
    /// Use custom endpoint URL for other S3 implementations
    pub endpoint: Option<http::uri::Uri>,

    #[clap(long)]
    /// Override config profile name
    pub profile: Option<String>,

    #[clap(flatten)]
    pub shared: SharedOptions,
}

#[derive(Debug, PartialEq, Eq)]
pub enum MainResult {
    Success,
    ErrorConsole,
}

impl std::process::Termination for MainResult {
    fn report(self) -> std::process::ExitCode {
        match self {
            Self::Success => std::process::ExitCode::SUCCESS,
            Self::ErrorConsole => std::process::ExitCode::from(1),
        }
    }
}

#[test]
fn test_arguments() {
    let args = Arguments::try_parse_from(["s3shell", "-R", "us-east-1", "--endpoint", "http://localhost:9000", "-v", "--acl", "public-read"]).unwrap();
    assert_eq!(args.region.as_deref(), Some("us-east-1"));
    let endpoint = args.endpoint.unwrap();
    assert_eq!(endpoint.host(), Some("localhost"));
    assert_eq!(endpoint.port_u16(), Some(9000));
    assert!(args.shared.verbose);
    assert_eq!(args.shared.acl.as_deref(), Some("public-read"));
}

#[test]
fn test_arguments_reject_positionals() {
    assert!(Arguments::try_parse_from(["s3shell", "upload"]).is_err());
}
