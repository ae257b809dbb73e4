//! Process-wide constant configuration.
//!
//! The reserved-class and dynamic-port tables are static lookup data with no
//! lifecycle beyond the run; nothing here is mutable after startup.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// File extension the walker selects on.
pub const SOURCE_EXTENSION: &str = "ts";

/// Fixed subpath from the project root to the node sources.
pub const NODES_SUBPATH: &str = "src/three/nodes";

/// The framework's own root classes; files declaring these are never
/// rewritten.
const RESERVED_BASE_CLASSES: [&str; 3] = ["Node", "BaseThreeNode", "TweakpaneNode"];

/// Classes whose ports are added at runtime, so their names cannot be
/// enumerated from the source text.
const DYNAMIC_PORT_NODES: [&str; 2] = ["MergeNode", "SplitNode"];

/// Port name substituted for dynamically added ports. It flows through
/// synthesis like any extracted name, rendering as the literal `'string'`.
pub const DYNAMIC_PORT_PLACEHOLDER: &str = "string";

pub fn is_reserved_base_class(class_name: &str) -> bool {
    RESERVED_BASE_CLASSES.contains(&class_name)
}

pub fn is_dynamic_ports_node(class_name: &str) -> bool {
    DYNAMIC_PORT_NODES.contains(&class_name)
}

/// Resolve the nodes directory from the install location: the executable's
/// directory's parent joined with [`NODES_SUBPATH`]. No flags, environment
/// variables, or config files participate.
pub fn default_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("failed to resolve executable path")?;
    let install_dir = exe
        .parent()
        .context("executable path has no parent directory")?;
    let project_root = install_dir.parent().unwrap_or(install_dir);
    Ok(project_root.join(NODES_SUBPATH))
}
