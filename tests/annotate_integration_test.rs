use indoc::indoc;
use porttyper::commands::annotate;
use porttyper::report::RunSummary;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn read_file(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).unwrap()
}

#[test]
fn annotates_a_node_with_one_input_and_one_output() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "FooNode.ts",
        indoc! {"
            export class FooNode extends BaseThreeNode {
              constructor() {
                super();
                this.addInput({ name: 'value', type: 'number' });
                this.addOutput({ name: 'result', type: 'number' });
              }
            }
        "},
    );

    let summary = annotate::run(dir.path());

    assert_eq!(
        summary,
        RunSummary {
            modified: 1,
            skipped: 0,
            errored: 0
        }
    );
    let content = read_file(dir.path(), "FooNode.ts");
    assert!(content.contains("export class FooNode extends BaseThreeNode<\n  'value',\n  'result'\n> {"));
}

#[test]
fn node_without_port_calls_gets_never_for_both_parameters() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "IdleNode.ts",
        "export class IdleNode extends BaseThreeNode {\n}\n",
    );

    let summary = annotate::run(dir.path());

    assert_eq!(summary.modified, 1);
    let content = read_file(dir.path(), "IdleNode.ts");
    assert!(content.contains("extends BaseThreeNode<\n  never,\n  never\n> {"));
}

#[test]
fn input_union_preserves_source_order() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "TriNode.ts",
        indoc! {"
            export class TriNode extends BaseThreeNode {
              constructor() {
                this.addInput({ name: 'a' });
                this.addInput({ name: 'b' });
                this.addInput({ name: 'c' });
              }
            }
        "},
    );

    annotate::run(dir.path());

    let content = read_file(dir.path(), "TriNode.ts");
    assert!(content.contains("<\n  'a' | 'b' | 'c',\n  never\n>"));
}

#[test]
fn dynamic_port_node_uses_placeholder_over_literal_scan() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "MergeNode.ts",
        indoc! {"
            export class MergeNode extends BaseThreeNode {
              constructor() {
                this.addInput({ name: 'in0' });
                this.addOutput({ name: 'merged' });
              }
            }
        "},
    );

    annotate::run(dir.path());

    let content = read_file(dir.path(), "MergeNode.ts");
    assert!(content.contains("<\n  'string',\n  'merged'\n>"));
}

#[test]
fn unexpected_declaration_formatting_is_a_warning_skip() {
    let dir = TempDir::new().unwrap();
    // A candidate class, but the header carries an implements clause, so the
    // splice pattern cannot find the opening brace right after the base name.
    let original = indoc! {"
        export class FooNode extends BaseThreeNode implements Disposable {
          constructor() {
            this.addInput({ name: 'value' });
          }
        }
    "};
    write_file(dir.path(), "FooNode.ts", original);

    let summary = annotate::run(dir.path());

    assert_eq!(summary.modified, 0);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.errored, 0);
    assert_eq!(read_file(dir.path(), "FooNode.ts"), original);
}

#[test]
fn every_declaration_in_a_file_is_annotated() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "pair.ts",
        indoc! {"
            export class FirstNode extends BaseThreeNode {
              constructor() {
                this.addInput({ name: 'value' });
              }
            }

            export class SecondNode extends BaseThreeNode {
            }
        "},
    );

    let summary = annotate::run(dir.path());

    assert_eq!(summary.modified, 1);
    let content = read_file(dir.path(), "pair.ts");
    assert!(content.contains("export class FirstNode extends BaseThreeNode<\n  'value',\n  never\n> {"));
    assert!(content.contains("export class SecondNode extends BaseThreeNode<\n  'value',\n  never\n> {"));
}

#[test]
fn files_without_declarations_are_skipped_unchanged() {
    let dir = TempDir::new().unwrap();
    let original = "export const registry = {};\n";
    write_file(dir.path(), "registry.ts", original);

    let summary = annotate::run(dir.path());

    assert_eq!(summary.modified, 0);
    assert_eq!(summary.skipped, 1);
    // Round-trip: byte-identical when the declaration pattern is absent.
    assert_eq!(read_file(dir.path(), "registry.ts"), original);
}

#[test]
fn reserved_base_classes_are_never_rewritten() {
    let dir = TempDir::new().unwrap();
    let original = indoc! {"
        export class BaseThreeNode extends Node {
          constructor() {
            this.addInput({ name: 'scene' });
          }
        }
    "};
    write_file(dir.path(), "BaseThreeNode.ts", original);

    let summary = annotate::run(dir.path());

    assert_eq!(summary.modified, 0);
    assert_eq!(summary.skipped, 1);
    assert_eq!(read_file(dir.path(), "BaseThreeNode.ts"), original);
}

#[test]
fn second_run_is_idempotent() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "nested/BarNode.ts",
        indoc! {"
            export class BarNode extends TweakpaneNode {
              constructor() {
                this.addOutput({ name: 'out' });
              }
            }
        "},
    );

    let first = annotate::run(dir.path());
    assert_eq!(first.modified, 1);
    let after_first = read_file(dir.path(), "nested/BarNode.ts");

    let second = annotate::run(dir.path());
    assert_eq!(second.modified, 0);
    assert_eq!(second.skipped, 1);
    assert_eq!(read_file(dir.path(), "nested/BarNode.ts"), after_first);
}

#[test]
fn missing_root_aborts_with_empty_summary() {
    let dir = TempDir::new().unwrap();
    let summary = annotate::run(&dir.path().join("no-such-tree"));
    assert_eq!(summary, RunSummary::default());
}

#[test]
fn mixed_tree_reports_per_file_outcomes() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "a/AddNode.ts",
        indoc! {"
            export class AddNode extends BaseThreeNode {
              constructor() {
                this.addInput({ name: 'lhs' });
                this.addInput({ name: 'rhs' });
                this.addOutput({ name: 'sum' });
              }
            }
        "},
    );
    write_file(
        dir.path(),
        "b/typed.ts",
        "export class TypedNode extends BaseThreeNode<\n  'x',\n  never\n> {\n}\n",
    );
    write_file(dir.path(), "util.ts", "export function noop() {}\n");

    let summary = annotate::run(dir.path());

    assert_eq!(summary.modified, 1);
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.errored, 0);
    assert_eq!(summary.total(), 3);

    let content = read_file(dir.path(), "a/AddNode.ts");
    assert!(content.contains("<\n  'lhs' | 'rhs',\n  'sum'\n>"));
}
