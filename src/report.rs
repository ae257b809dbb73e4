//! Per-file outcomes and the run summary.

use colored::*;

/// Why a file was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No `export class X extends Y` declaration found.
    NoCandidate,
    /// The class is one of the framework's own root classes.
    ReservedClass,
    /// The declaration already carries a type-parameter list.
    AlreadyAnnotated,
    /// A candidate was found but the splice pattern did not match, likely
    /// unexpected formatting. Surfaced as a warning, not a silent skip.
    NoSpliceMatch,
}

/// Terminal state for one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Modified,
    Skipped(SkipReason),
    Errored,
}

/// Counters for one invocation. Updated synchronously by the single thread
/// of control; errored files count as not-modified.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub modified: usize,
    pub skipped: usize,
    pub errored: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Modified => self.modified += 1,
            FileOutcome::Skipped(_) => self.skipped += 1,
            FileOutcome::Errored => self.errored += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.modified + self.skipped + self.errored
    }

    /// Print the closing summary block. The build reminder only appears when
    /// something actually changed.
    pub fn print(&self) {
        let rule = "=".repeat(60);
        println!("\n{rule}");
        println!("Modified: {} files", self.modified.to_string().green());
        println!("Skipped:  {} files", self.skipped);
        if self.errored > 0 {
            println!("Errored:  {} files", self.errored.to_string().red());
        }
        println!("Total:    {} files", self.total());
        println!("{rule}");

        if self.modified > 0 {
            println!(
                "\n{}",
                "Run 'npm run build' to verify changes!".yellow()
            );
        }
    }
}
