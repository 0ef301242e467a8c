//! Add command CLI wrapper

use crate::cli::TargetArgs;
use crate::config::Config;
use crate::error::Result;
use crate::pipeline::{self, CommandKind};

/// Run the add command: fetch the repository and execute its `add` actions.
pub fn run(config: &Config, args: &TargetArgs) -> Result<()> {
    pipeline::run(CommandKind::Add, &args.target, config)
}
