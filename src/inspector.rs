//! Declaration inspection.
//!
//! Pattern-based, not syntax-tree-based: the first `export class X extends Y`
//! occurrence in the file text is taken as the declaration, and a separate
//! pattern detects an existing type-parameter list after any base class name.

use once_cell::sync::Lazy;
use regex::Regex;

static CLASS_DECL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"export class (\w+) extends (\w+)").unwrap());

static TYPE_PARAMS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"extends \w+<[^>]+>").unwrap());

/// The textual class header found in a file. Derived per file, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub class_name: String,
    pub base_class: String,
    pub annotated: bool,
}

/// Find the first exported class declaration in the file text, or `None`
/// when the file is not a candidate.
pub fn inspect(content: &str) -> Option<Declaration> {
    let caps = CLASS_DECL_RE.captures(content)?;
    Some(Declaration {
        class_name: caps[1].to_string(),
        base_class: caps[2].to_string(),
        annotated: TYPE_PARAMS_RE.is_match(content),
    })
}
