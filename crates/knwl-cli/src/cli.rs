//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use knwl_domain::CommentHydration;
use std::path::PathBuf;

/// Knwl CLI - Load and inspect an ontology stored in a quad store.
#[derive(Debug, Parser)]
#[command(name = "knwl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Namespace root the ontology lives under
    #[arg(
        short,
        long,
        global = true,
        env = "KNWL_NAMESPACE",
        default_value = "http://dbpedia.org/ontology/"
    )]
    pub namespace: String,

    /// SQLite database file
    #[arg(short, long, global = true, env = "KNWL_DATABASE", default_value = "knwl.db")]
    pub database: PathBuf,

    /// How rdfs:comment statements are read back
    #[arg(long, value_enum, global = true, default_value = "legacy")]
    pub comments: CommentsArg,

    /// Output format
    #[arg(short, long, value_enum, global = true, default_value = "table")]
    pub format: CliFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (identifiers only)
    Quiet,
}

/// Comment hydration options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CommentsArg {
    /// Never read comments back
    Legacy,
    /// Read rdfs:comment into the comment field
    Corrected,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load RDF files (Turtle, N-Triples, N-Quads) into the store
    Load(LoadArgs),

    /// Remove every statement from the store
    Clear(ClearArgs),

    /// Count the statements in the store
    Count,

    /// List class identifiers
    Classes(ClassesArgs),

    /// Show one class
    Class(ClassArgs),

    /// Show the simplified ontology graph
    Graph(GraphArgs),
}

/// Arguments for the load command.
#[derive(Debug, Parser)]
pub struct LoadArgs {
    /// Files to load, format chosen by extension
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Empty the store before loading
    #[arg(long)]
    pub clear: bool,
}

/// Arguments for the clear command.
#[derive(Debug, Parser)]
pub struct ClearArgs {
    /// Confirm the removal
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the classes command.
#[derive(Debug, Parser)]
pub struct ClassesArgs {
    /// Include classes outside the namespace
    #[arg(short, long)]
    pub all: bool,
}

/// Arguments for the class command.
#[derive(Debug, Parser)]
pub struct ClassArgs {
    /// Class name or identifier
    pub name: String,

    /// Attach data and object properties
    #[arg(short, long)]
    pub props: bool,
}

/// Arguments for the graph command.
#[derive(Debug, Parser)]
pub struct GraphArgs {
    /// Include classes and links outside the namespace
    #[arg(short, long)]
    pub all: bool,

    /// Include classes that take part in no link
    #[arg(long)]
    pub isolated: bool,
}

impl From<CliFormat> for crate::output::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::output::OutputFormat::Table,
            CliFormat::Json => crate::output::OutputFormat::Json,
            CliFormat::Quiet => crate::output::OutputFormat::Quiet,
        }
    }
}

impl From<CommentsArg> for CommentHydration {
    fn from(comments: CommentsArg) -> Self {
        match comments {
            CommentsArg::Legacy => CommentHydration::Legacy,
            CommentsArg::Corrected => CommentHydration::Corrected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["knwl", "count"]).unwrap();
        assert!(matches!(cli.command, Command::Count));
        assert!(matches!(cli.format, CliFormat::Table));
        assert!(matches!(cli.comments, CommentsArg::Legacy));
        assert!(!cli.no_color);
    }

    #[test]
    fn test_load_command() {
        let cli = Cli::try_parse_from(["knwl", "load", "a.ttl", "b.nt", "--clear"]).unwrap();
        match cli.command {
            Command::Load(args) => {
                assert_eq!(args.files.len(), 2);
                assert!(args.clear);
            }
            _ => panic!("Expected Load command"),
        }
    }

    #[test]
    fn test_load_requires_files() {
        assert!(Cli::try_parse_from(["knwl", "load"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "knwl",
            "class",
            "Person",
            "--props",
            "--namespace",
            "http://test.org/",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.namespace, "http://test.org/");
        assert!(matches!(cli.format, CliFormat::Json));
        match cli.command {
            Command::Class(args) => {
                assert_eq!(args.name, "Person");
                assert!(args.props);
            }
            _ => panic!("Expected Class command"),
        }
    }

    #[test]
    fn test_comment_conversion() {
        let comments: CommentHydration = CommentsArg::Corrected.into();
        assert_eq!(comments, CommentHydration::Corrected);
    }
}
