use clap::Args;

#[derive(Args, Debug, Clone, Default)]
pub struct SharedOptions {
    /// Log each dispatched command and upload details to stderr
    #[clap(long, short='v', global = true)]
    pub verbose: bool,

    /// Canned ACL applied to uploaded objects, e.g. public-read
    #[clap(long, global = true)]
    pub acl: Option<String>,
}
