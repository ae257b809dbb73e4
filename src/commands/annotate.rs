//! The annotate run: walk the nodes tree and rewrite each candidate class
//! declaration to carry its port names as type parameters.
//!
//! Files are processed one at a time, fully, in sorted order. Unexpected
//! read/write failures are caught per file and never stop the run; only a
//! missing root directory aborts before any file is touched.

use crate::config::{is_dynamic_ports_node, is_reserved_base_class};
use crate::extractor::port_sets;
use crate::inspector::inspect;
use crate::io::walk_source_files;
use crate::report::{FileOutcome, RunSummary, SkipReason};
use crate::rewriter::{splice_annotation, write_rewritten};
use crate::synthesizer::synthesize;
use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::Path;

/// Process every source file under `root` and print progress plus a final
/// summary. Returns the summary so callers (and tests) can inspect counts.
pub fn run(root: &Path) -> RunSummary {
    println!("Scanning {}...", root.display());

    let files = match walk_source_files(root) {
        Ok(files) => files,
        Err(err) => {
            log::error!("{err}");
            return RunSummary::default();
        }
    };

    println!("Found {} TypeScript files", files.len());

    let mut summary = RunSummary::default();
    for path in &files {
        let relative = path.strip_prefix(root).unwrap_or(path);
        println!("\n{}", relative.display().to_string().bold());
        summary.record(process_file(path));
    }

    summary.print();
    summary
}

/// Per-file error boundary: any read/write failure is logged with the path
/// and counted, and the run moves on.
fn process_file(path: &Path) -> FileOutcome {
    match try_process(path) {
        Ok(outcome) => outcome,
        Err(err) => {
            log::error!("{}: {err:#}", path.display());
            FileOutcome::Errored
        }
    }
}

fn try_process(path: &Path) -> Result<FileOutcome> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    // Skip conditions, checked in order; the first match wins.
    let Some(decl) = inspect(&content) else {
        return Ok(FileOutcome::Skipped(SkipReason::NoCandidate));
    };
    if is_reserved_base_class(&decl.class_name) {
        return Ok(FileOutcome::Skipped(SkipReason::ReservedClass));
    }
    if decl.annotated {
        println!("  {} already typed", "ok:".green());
        return Ok(FileOutcome::Skipped(SkipReason::AlreadyAnnotated));
    }

    if is_dynamic_ports_node(&decl.class_name) {
        println!("  dynamic ports node");
    }
    let (inputs, outputs) = port_sets(&content, &decl.class_name);
    println!("  inputs:  {}", describe_ports(&inputs));
    println!("  outputs: {}", describe_ports(&outputs));

    let input_ty = synthesize(&inputs);
    let output_ty = synthesize(&outputs);

    match splice_annotation(&content, &input_ty, &output_ty) {
        Some(updated) => {
            write_rewritten(path, &updated)?;
            println!(
                "  {} added type parameters: <{input_ty}, {output_ty}>",
                "modified:".green()
            );
            Ok(FileOutcome::Modified)
        }
        None => {
            println!(
                "  {} could not find class declaration pattern",
                "warning:".yellow()
            );
            log::warn!("{}: splice pattern not found", path.display());
            Ok(FileOutcome::Skipped(SkipReason::NoSpliceMatch))
        }
    }
}

fn describe_ports(names: &[String]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}
