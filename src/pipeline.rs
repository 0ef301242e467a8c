//! Install/remove orchestration
//!
//! One invocation is one pass through: parse target → scoped scratch dir →
//! fetch and extract → locate manifest → run the command's action list.
//! The scratch directory is released on every exit path (it is a
//! [`tempfile::TempDir`], cleaned up on drop), and the working-directory
//! change into the extracted repository is scoped the same way.

use std::path::Path;

use tempfile::TempDir;

use crate::config::Config;
use crate::error::{GitpackError, Result};
use crate::fetch;
use crate::manifest::{self, Package};
use crate::refspec::RefSpec;
use crate::temp;
use crate::ui;
use crate::workdir::WorkdirGuard;

/// Which action list a pipeline run executes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Run the manifest's `add` actions
    Add,
    /// Run the manifest's `rm` actions
    Rm,
}

impl CommandKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Rm => "rm",
        }
    }
}

/// Run the full pipeline for one command invocation.
pub fn run(kind: CommandKind, target: &str, config: &Config) -> Result<()> {
    // Fails before any network traffic on a malformed target.
    let spec = RefSpec::parse(target)?;

    let scratch = TempDir::new_in(temp::scratch_base())?;
    execute(kind, &spec, config, scratch.path())
    // `scratch` drops here on success and failure alike.
}

fn execute(kind: CommandKind, spec: &RefSpec, config: &Config, scratch: &Path) -> Result<()> {
    let repo_dir = fetch::fetch_repository(spec, config, scratch)?;

    let _workdir = WorkdirGuard::change_to(&repo_dir)?;
    let doc = manifest::locate(Path::new(".")).ok_or(GitpackError::ManifestNotFound)?;
    let package = Package::from_manifest(&doc, config);

    let label = if package.name.is_empty() {
        spec.to_string()
    } else {
        package.name.clone()
    };

    let succeeded = match kind {
        CommandKind::Add => package.add.run(&package, config),
        CommandKind::Rm => package.rm.run(&package, config),
    };

    if succeeded {
        let verb = match kind {
            CommandKind::Add => "added",
            CommandKind::Rm => "removed",
        };
        ui::success(format!("{verb} {label}"));
        Ok(())
    } else {
        Err(GitpackError::ActionsFailed {
            command: kind.as_str().to_string(),
            name: label,
        })
    }
}
