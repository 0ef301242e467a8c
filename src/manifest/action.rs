//! Manifest action model
//!
//! An action list is a heterogeneous YAML sequence: mappings with an `sh` key
//! become script actions, the literal string `remove_files` becomes a
//! file-removal action. Entry shapes that match neither are dropped without
//! an error; this tolerant parse is long-standing manifest behavior that
//! existing manifests rely on, not a schema to tighten. An empty section
//! still yields a usable list: a single [`RemoveAction`].
//!
//! Actions report success as a boolean. A failing script line or an
//! undeletable file is an ordinary outcome, not an error to raise.

use std::process::Command;

use serde::Deserialize;
use serde_yaml::Value;

use crate::config::Config;
use crate::manifest::Package;
use crate::placeholder;
use crate::ui;

/// Manifest entry that selects the file-removal action.
pub const REMOVE_FILES_ENTRY: &str = "remove_files";

/// YAML value that is either one string or a sequence of strings
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub(crate) fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }
}

/// Runs shell command lines in declared order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptAction {
    /// Raw, unexpanded command lines
    scripts: Vec<String>,
}

impl ScriptAction {
    pub fn new(scripts: Vec<String>) -> Self {
        Self { scripts }
    }

    /// Expand placeholders in each line and run it through `sh -c`.
    ///
    /// Stops at the first failing line. Returns `true` only when every line
    /// exited with status zero.
    pub fn run(&self, config: &Config) -> bool {
        for line in &self.scripts {
            let command = placeholder::expand(line, config);
            if config.verbose {
                ui::info(format!("$ {command}"));
            }
            match Command::new("sh").arg("-c").arg(&command).status() {
                Ok(status) if status.success() => {}
                Ok(status) => {
                    ui::warn(format!("command failed ({status}): {command}"));
                    return false;
                }
                Err(err) => {
                    ui::warn(format!("could not run '{command}': {err}"));
                    return false;
                }
            }
        }
        true
    }

    /// Declared command lines, unexpanded.
    #[allow(dead_code)] // Used by tests
    pub fn scripts(&self) -> &[String] {
        &self.scripts
    }
}

/// Deletes the files a package declares
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemoveAction;

impl RemoveAction {
    /// Attempt to delete every declared file.
    ///
    /// All deletions are attempted even after a failure; the result is `true`
    /// only when every one succeeded.
    pub fn run(&self, package: &Package) -> bool {
        let mut all_removed = true;
        for file in &package.files {
            match std::fs::remove_file(file) {
                Ok(()) => ui::info(format!("removed {file}")),
                Err(err) => {
                    ui::warn(format!("failed to remove {file}: {err}"));
                    all_removed = false;
                }
            }
        }
        all_removed
    }
}

/// One executable step of an install or remove procedure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Run shell command lines
    Script(ScriptAction),

    /// Delete the package's declared files
    RemoveFiles(RemoveAction),
}

impl Action {
    /// Execute this action against `package`. `true` means every sub-step
    /// succeeded.
    pub fn run(&self, package: &Package, config: &Config) -> bool {
        match self {
            Self::Script(script) => script.run(config),
            Self::RemoveFiles(remove) => remove.run(package),
        }
    }

    /// Parse one manifest entry into an action, or `None` for shapes that
    /// are not recognized.
    fn from_entry(entry: &Value) -> Option<Self> {
        match entry {
            Value::String(s) if s == REMOVE_FILES_ENTRY => {
                Some(Self::RemoveFiles(RemoveAction))
            }
            Value::Mapping(_) => {
                let sh = entry.get("sh")?;
                let scripts = serde_yaml::from_value::<OneOrMany>(sh.clone())
                    .ok()?
                    .into_vec();
                Some(Self::Script(ScriptAction::new(scripts)))
            }
            _ => None,
        }
    }
}

/// Ordered, never-empty sequence of actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionList {
    actions: Vec<Action>,
}

impl ActionList {
    /// Build an action list from a manifest section.
    ///
    /// A missing section, a non-sequence value, or a sequence with no
    /// recognized entries all produce the default list of exactly one
    /// [`RemoveAction`].
    pub fn from_section(section: Option<&Value>) -> Self {
        let mut actions = Vec::new();

        if let Some(Value::Sequence(entries)) = section {
            for entry in entries {
                if let Some(action) = Action::from_entry(entry) {
                    actions.push(action);
                }
                // Unrecognized entry shapes contribute no action.
            }
        }

        if actions.is_empty() {
            actions.push(Action::RemoveFiles(RemoveAction));
        }

        Self { actions }
    }

    /// Run every action in declared order, stopping at the first failure.
    pub fn run(&self, package: &Package, config: &Config) -> bool {
        self.actions.iter().all(|action| action.run(package, config))
    }

    /// Parsed actions, in declared order.
    #[allow(dead_code)] // Used by tests
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}
