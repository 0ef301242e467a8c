//! Invocation configuration
//!
//! All knobs the pipeline needs (install prefix, archive host, auth token,
//! sudo user) live in one [`Config`] value built once per invocation and
//! passed down explicitly. Nothing here is process-global.

use crate::cli::Cli;

/// Default installation prefix substituted for `{{prefix}}`.
pub const DEFAULT_PREFIX: &str = "/usr/local";

/// Default archive host; serves `/{owner}/{repo}/zip/{ref}` archives.
pub const DEFAULT_HOST: &str = "https://codeload.github.com";

/// Configuration for a single gitpack invocation
#[derive(Debug, Clone)]
pub struct Config {
    /// Installation prefix, the value of the `{{prefix}}` placeholder
    pub prefix: String,

    /// Archive host base URL
    pub host: String,

    /// Bearer credential sent as `Authorization: token <value>` on fetches
    pub token: Option<String>,

    /// Invoking privileged user's original identity (`SUDO_USER`), if any
    pub sudo_user: Option<String>,

    /// Verbose output
    pub verbose: bool,
}

impl Config {
    /// Build the invocation configuration from parsed CLI arguments.
    ///
    /// `SUDO_USER` is the only ambient input; everything else comes from
    /// flags or their env fallbacks, which clap already resolved.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            prefix: cli.prefix.clone(),
            host: cli.host.clone(),
            token: cli.token.clone(),
            sudo_user: std::env::var("SUDO_USER").ok(),
            verbose: cli.verbose,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            host: DEFAULT_HOST.to_string(),
            token: None,
            sudo_user: None,
            verbose: false,
        }
    }
}
