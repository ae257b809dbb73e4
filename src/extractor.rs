//! Port-name extraction.
//!
//! Scans for `this.addInput({ name: '...' ...` / `this.addOutput({ ...`
//! calls and collects the quoted name of each, in source order. Only object
//! literals whose first field is `name` match; any other field ordering
//! yields no match for that call. That precision limitation is intentional
//! for a one-shot migration pass and is pinned by a test below.

use crate::config::{is_dynamic_ports_node, DYNAMIC_PORT_PLACEHOLDER};
use once_cell::sync::Lazy;
use regex::Regex;

static ADD_INPUT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"this\.addInput\(\{\s*name:\s*['"](\w+)['"]"#).unwrap());

static ADD_OUTPUT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"this\.addOutput\(\{\s*name:\s*['"](\w+)['"]"#).unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortCategory {
    Input,
    Output,
}

impl PortCategory {
    fn pattern(self) -> &'static Regex {
        match self {
            PortCategory::Input => &ADD_INPUT_RE,
            PortCategory::Output => &ADD_OUTPUT_RE,
        }
    }
}

/// All port names registered for one category, in first-seen order.
/// Duplicates are kept as they appear.
pub fn extract_port_names(content: &str, category: PortCategory) -> Vec<String> {
    category
        .pattern()
        .captures_iter(content)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Input and output port sets for a class, with the dynamic-port override
/// applied by class-name lookup. Dynamic-port nodes take the placeholder for
/// their inputs; `SplitNode` takes it for its outputs too, while `MergeNode`
/// outputs still come from the literal scan.
pub fn port_sets(content: &str, class_name: &str) -> (Vec<String>, Vec<String>) {
    if is_dynamic_ports_node(class_name) {
        let inputs = vec![DYNAMIC_PORT_PLACEHOLDER.to_string()];
        let outputs = if class_name == "SplitNode" {
            vec![DYNAMIC_PORT_PLACEHOLDER.to_string()]
        } else {
            extract_port_names(content, PortCategory::Output)
        };
        (inputs, outputs)
    } else {
        (
            extract_port_names(content, PortCategory::Input),
            extract_port_names(content, PortCategory::Output),
        )
    }
}
