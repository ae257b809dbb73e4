use clap::Parser;

/// Command-line surface. The tool takes no arguments: the nodes directory is
/// derived from the install location, so clap only contributes
/// `--help`/`--version` and rejection of stray arguments.
#[derive(Parser, Debug)]
#[command(name = "porttyper")]
#[command(about = "Adds port-name type parameters to node class declarations", long_about = None)]
#[command(version)]
pub struct Cli {}
