//! Splices synthesized type parameters into a class declaration and writes
//! the result back.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

static DECL_SPLICE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(export class \w+ extends \w+)(\s*\{)").unwrap());

/// Rewrite every `export class X extends Y {` span to carry a two-line
/// parameter list: `<\n  <inputs>,\n  <outputs>\n>` between the base class
/// name and the opening brace. A file with several exported classes gets the
/// same annotations on each. Returns `None` when the pattern is absent,
/// leaving the caller to surface the miss as a warning rather than a silent
/// skip.
pub fn splice_annotation(content: &str, input_ty: &str, output_ty: &str) -> Option<String> {
    let updated = DECL_SPLICE_RE.replace_all(content, |caps: &Captures| {
        format!("{}<\n  {},\n  {}\n>{}", &caps[1], input_ty, output_ty, &caps[2])
    });

    match updated {
        Cow::Borrowed(_) => None,
        Cow::Owned(text) => Some(text),
    }
}

/// Overwrite `path` via a temp file in the same directory followed by a
/// rename, so a failure mid-write never leaves a truncated source file.
pub fn write_rewritten(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .with_context(|| format!("not a file path: {}", path.display()))?;
    let tmp = dir.join(format!(".{}.porttyper", file_name.to_string_lossy()));

    fs::write(&tmp, content)
        .with_context(|| format!("failed to write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("failed to replace {}", path.display()))?;
    Ok(())
}
