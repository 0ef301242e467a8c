//! Progress bar display for archive downloads

use indicatif::{ProgressBar, ProgressStyle};

/// Byte-count progress bar for a download with a known content length.
pub fn download_bar(total_bytes: u64) -> ProgressBar {
    let style = ProgressStyle::default_bar()
        .template("[{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
        .unwrap()
        .progress_chars("#>-");

    let bar = ProgressBar::new(total_bytes);
    bar.set_style(style);
    bar
}
