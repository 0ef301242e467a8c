//! Terminal output helpers
//!
//! Thin wrappers around `console` styles so the rest of the code prints
//! through one place. Warnings go to stderr; ordinary progress goes to stdout.

use console::Style;

/// Print an ordinary status line.
pub fn info(message: impl AsRef<str>) {
    println!("{}", message.as_ref());
}

/// Print a success line (bold green marker).
pub fn success(message: impl AsRef<str>) {
    println!(
        "{} {}",
        Style::new().bold().green().apply_to("✓"),
        message.as_ref()
    );
}

/// Print a warning to stderr (bold yellow marker).
pub fn warn(message: impl AsRef<str>) {
    eprintln!(
        "{} {}",
        Style::new().bold().yellow().apply_to("Warning:"),
        message.as_ref()
    );
}
