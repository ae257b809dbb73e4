//! Typed errors for the scan phase.
//!
//! Only `MissingDirectory` is fatal to a run; every per-file failure is
//! caught at the file boundary in `commands::annotate` and reported without
//! stopping the remaining files.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The computed nodes directory does not exist. The run aborts before
    /// touching any file.
    #[error("nodes directory not found: {0}")]
    MissingDirectory(PathBuf),

    /// A directory entry could not be read while walking the tree.
    #[error("failed to walk source tree")]
    Walk(#[from] walkdir::Error),
}
