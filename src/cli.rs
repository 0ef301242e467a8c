//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

use crate::config;

/// gitpack - minimal manifest-driven package manager
///
/// Install or remove software by fetching a repository archive and running
/// the actions its gitpack manifest declares.
#[derive(Parser, Debug)]
#[command(
    name = "gitpack",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Minimal manifest-driven package manager",
    long_about = "gitpack fetches a repository archive, locates the gitpack manifest inside it, \
                  and executes the install or remove actions the manifest declares.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  gitpack add owner/repo\n    \
                  gitpack add owner/repo@v1.2.0\n    \
                  gitpack --token TOKEN add owner/private-repo\n    \
                  gitpack rm owner/repo"
)]
pub struct Cli {
    /// Bearer credential sent with every fetch request
    #[arg(long, global = true, env = "GITPACK_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Installation prefix substituted for {{prefix}}
    #[arg(long, global = true, env = "GITPACK_PREFIX", default_value = config::DEFAULT_PREFIX)]
    pub prefix: String,

    /// Archive host base URL
    #[arg(long, global = true, env = "GITPACK_HOST", default_value = config::DEFAULT_HOST, hide = true)]
    pub host: String,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install a package from a repository
    Add(TargetArgs),

    /// Remove a previously installed package
    Rm(TargetArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Repository target for add and rm
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Default branch:\n    gitpack add owner/repo\n\n\
                  Specific branch or tag:\n    gitpack add owner/repo@dev")]
pub struct TargetArgs {
    /// Repository to operate on, as owner/repo or owner/repo@ref
    pub target: String,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    gitpack completions --shell bash > ~/.bash_completion.d/gitpack\n\n\
                  Generate zsh completions:\n    gitpack completions --shell zsh > ~/.zfunc/_gitpack")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
