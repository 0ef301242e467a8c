//! Manifest candidate search
//!
//! Repositories may carry their manifest under a handful of conventional
//! names and directories. Candidates are probed in a fixed priority order and
//! the first one that exists, parses, and has a top-level `gitpack` key wins.
//! A candidate that exists but fails to parse is logged and skipped, exactly
//! as if it were absent; only total exhaustion is reported to the caller,
//! and even that is a `None`, not an error.

use std::path::Path;

use serde_yaml::Value;

use crate::ui;

/// Manifest filenames, in priority order.
pub const MANIFEST_NAMES: [&str; 3] = [".gitpack.yaml", ".manifest.yaml", ".dep.yaml"];

/// Subdirectories searched after the base directory itself, in order.
const SEARCH_DIRS: [&str; 5] = [".", ".gitpack", ".github", ".gitlab", ".meta"];

/// Top-level key a manifest document must carry.
const MANIFEST_KEY: &str = "gitpack";

/// Search `base` for a manifest and return its `gitpack` sub-document.
pub fn locate(base: &Path) -> Option<Value> {
    for name in MANIFEST_NAMES {
        if let Some(doc) = probe(&base.join(name)) {
            return Some(doc);
        }
    }
    for dir in SEARCH_DIRS {
        for name in MANIFEST_NAMES {
            if let Some(doc) = probe(&base.join(dir).join(name)) {
                return Some(doc);
            }
        }
    }
    None
}

/// Probe one candidate path. Any miss (absent, unreadable, unparseable, or
/// no `gitpack` key) returns `None` and the search moves on.
fn probe(path: &Path) -> Option<Value> {
    if !path.is_file() {
        return None;
    }

    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            ui::warn(format!("skipping {}: {err}", path.display()));
            return None;
        }
    };

    match serde_yaml::from_str::<Value>(&text) {
        Ok(doc) => doc
            .get(MANIFEST_KEY)
            .filter(|section| !section.is_null())
            .cloned(),
        Err(err) => {
            ui::warn(format!("skipping {}: {err}", path.display()));
            None
        }
    }
}
