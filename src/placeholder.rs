//! Placeholder substitution for manifest strings
//!
//! Manifests template file paths and script lines with a fixed set of tokens.
//! Expansion is a pure string transform: every occurrence of a known token is
//! replaced, unknown tokens are left verbatim, and a string without tokens
//! comes back unchanged.

use crate::config::Config;

/// Token replaced with the configured installation prefix.
pub const PREFIX_TOKEN: &str = "{{prefix}}";

/// Token replaced with the invoking sudo user, or nothing when absent.
pub const SUDO_USER_TOKEN: &str = "{{sudo.user}}";

/// Expand every known placeholder token in `input`.
pub fn expand(input: &str, config: &Config) -> String {
    input
        .replace(PREFIX_TOKEN, &config.prefix)
        .replace(SUDO_USER_TOKEN, config.sudo_user.as_deref().unwrap_or(""))
}
