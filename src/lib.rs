// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod extractor;
pub mod inspector;
pub mod io;
pub mod report;
pub mod rewriter;
pub mod synthesizer;

// Re-export commonly used types
pub use crate::errors::ScanError;
pub use crate::extractor::{extract_port_names, port_sets, PortCategory};
pub use crate::inspector::{inspect, Declaration};
pub use crate::report::{FileOutcome, RunSummary, SkipReason};
pub use crate::rewriter::splice_annotation;
pub use crate::synthesizer::synthesize;
