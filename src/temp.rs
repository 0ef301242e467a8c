//! Base directory for scratch space
//!
//! Every invocation works inside its own temporary directory. The base for
//! those directories must be absolute: with TMPDIR=tmp (or ./tmp) a relative
//! base would land the scratch space under the current working directory,
//! which the pipeline later changes.

use std::env;
use std::path::PathBuf;

/// Absolute directory under which per-invocation scratch dirs are created.
pub fn scratch_base() -> PathBuf {
    let base = env::temp_dir();
    if base.is_absolute() {
        return base;
    }

    #[cfg(windows)]
    {
        env::var("TEMP")
            .or_else(|_| env::var("TMP"))
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
    }
    #[cfg(not(windows))]
    {
        PathBuf::from("/tmp")
    }
}
