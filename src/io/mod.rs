pub mod walker;

pub use walker::{walk_source_files, FileWalker};
