//! Manifest model and location
//!
//! A gitpack manifest is a YAML document whose top-level `gitpack` key
//! declares a package: its identity, the files it installs, and the `add`
//! and `rm` action lists. This module is organized into:
//! - [`action`]: the polymorphic action model (`sh` scripts, `remove_files`)
//! - [`package`]: manifest-to-[`Package`] construction
//! - [`locate`]: the candidate-path search for manifest files

pub mod action;
pub mod locate;
pub mod package;

pub use action::ActionList;
pub use locate::locate;
pub use package::Package;

#[cfg(test)]
pub use action::{Action, RemoveAction};
