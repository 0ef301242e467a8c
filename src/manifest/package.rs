//! Package construction from a parsed manifest
//!
//! Construction never fails: missing keys coerce to empty values and odd
//! scalar shapes coerce through their display form. By the time a [`Package`]
//! exists, its file list is already placeholder-expanded.

use serde_yaml::Value;

use crate::config::Config;
use crate::manifest::ActionList;
use crate::manifest::action::OneOrMany;
use crate::placeholder;

/// A package as declared by a repository manifest
#[derive(Debug, Clone)]
pub struct Package {
    /// Package name
    pub name: String,

    /// Package category
    #[allow(dead_code)] // Used by tests
    pub category: String,

    /// Declared file paths, placeholder-expanded
    pub files: Vec<String>,

    /// Actions run by `gitpack add`
    pub add: ActionList,

    /// Actions run by `gitpack rm`
    pub rm: ActionList,
}

impl Package {
    /// Build a package from the manifest's `gitpack` sub-document.
    pub fn from_manifest(doc: &Value, config: &Config) -> Self {
        Self {
            name: scalar_to_string(doc.get("name")),
            category: scalar_to_string(doc.get("category")),
            files: files_from(doc.get("files"), config),
            add: ActionList::from_section(doc.get("add")),
            rm: ActionList::from_section(doc.get("rm")),
        }
    }
}

/// Coerce a scalar manifest value to a string; missing keys become empty.
fn scalar_to_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Read the `files` key, accepting one string or a sequence of strings, and
/// expand placeholders in every element.
fn files_from(value: Option<&Value>, config: &Config) -> Vec<String> {
    let Some(value) = value else {
        return Vec::new();
    };
    serde_yaml::from_value::<OneOrMany>(value.clone())
        .map(OneOrMany::into_vec)
        .unwrap_or_default()
        .iter()
        .map(|file| placeholder::expand(file, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{Action, RemoveAction};

    fn doc(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_full_manifest() {
        let doc = doc(
            r#"
name: hello
category: utils
files:
  - "{{prefix}}/bin/hello"
  - "{{prefix}}/share/man/man1/hello.1"
add:
  - sh: make install PREFIX={{prefix}}
rm:
  - remove_files
"#,
        );
        let package = Package::from_manifest(&doc, &Config::default());
        assert_eq!(package.name, "hello");
        assert_eq!(package.category, "utils");
        assert_eq!(
            package.files,
            vec![
                "/usr/local/bin/hello".to_string(),
                "/usr/local/share/man/man1/hello.1".to_string()
            ]
        );
        assert_eq!(package.add.actions().len(), 1);
        assert_eq!(package.rm.actions(), &[Action::RemoveFiles(RemoveAction)]);
    }

    #[test]
    fn test_missing_keys_never_fail() {
        let doc = doc("{}");
        let package = Package::from_manifest(&doc, &Config::default());
        assert_eq!(package.name, "");
        assert_eq!(package.category, "");
        assert!(package.files.is_empty());
        // Both action lists get the default remove action.
        assert_eq!(package.add.actions(), &[Action::RemoveFiles(RemoveAction)]);
        assert_eq!(package.rm.actions(), &[Action::RemoveFiles(RemoveAction)]);
    }

    #[test]
    fn test_scalar_files_becomes_one_element_list() {
        let doc = doc("files: \"{{prefix}}/bin/x\"");
        let package = Package::from_manifest(&doc, &Config::default());
        assert_eq!(package.files, vec!["/usr/local/bin/x".to_string()]);
    }

    #[test]
    fn test_files_expand_with_configured_prefix() {
        let config = Config {
            prefix: "/opt/tools".to_string(),
            ..Config::default()
        };
        let doc = doc("files: [\"{{prefix}}/bin/x\"]");
        let package = Package::from_manifest(&doc, &config);
        assert_eq!(package.files, vec!["/opt/tools/bin/x".to_string()]);
    }

    #[test]
    fn test_numeric_scalars_coerce_to_strings() {
        let doc = doc("name: 42\ncategory: true");
        let package = Package::from_manifest(&doc, &Config::default());
        assert_eq!(package.name, "42");
        assert_eq!(package.category, "true");
    }
}
