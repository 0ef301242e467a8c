//! Rm command CLI wrapper

use crate::cli::TargetArgs;
use crate::config::Config;
use crate::error::Result;
use crate::pipeline::{self, CommandKind};

/// Run the rm command: fetch the repository and execute its `rm` actions.
pub fn run(config: &Config, args: &TargetArgs) -> Result<()> {
    pipeline::run(CommandKind::Rm, &args.target, config)
}
