//! Scoped working-directory changes
//!
//! The pipeline runs manifest actions from inside the extracted repository.
//! [`WorkdirGuard`] changes the process working directory and restores the
//! previous one when dropped, so every exit path (including `?` returns)
//! leaves the process where it started.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Guard that restores the previous working directory on drop
#[derive(Debug)]
pub struct WorkdirGuard {
    previous: PathBuf,
}

impl WorkdirGuard {
    /// Change the working directory to `path`, remembering the current one.
    pub fn change_to(path: &Path) -> Result<Self> {
        let previous = std::env::current_dir()?;
        std::env::set_current_dir(path)?;
        Ok(Self { previous })
    }
}

impl Drop for WorkdirGuard {
    fn drop(&mut self) {
        // Nothing sensible to do if the original directory is gone.
        let _ = std::env::set_current_dir(&self.previous);
    }
}
