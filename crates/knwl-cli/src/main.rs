//! Knwl CLI - Load and inspect an ontology from the command line.

use clap::Parser;
use knwl_cli::commands;
use knwl_cli::{open_knowledge, Cli, Command, Formatter, OutputFormat};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize tracing (log to stderr)
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();

    // Parse CLI arguments
    let cli = Cli::parse();
    let formatter = Formatter::new(cli.format.into(), !cli.no_color);

    if let Err(e) = run(cli, &formatter).await {
        eprintln!("{}", formatter.error(&e.to_string()));
        std::process::exit(1);
    }
}

async fn run(cli: Cli, formatter: &Formatter) -> knwl_cli::Result<()> {
    let knowledge = open_knowledge(&cli)?;
    let format: OutputFormat = cli.format.into();

    match cli.command {
        Command::Load(args) => {
            commands::execute_load(args, &knowledge, formatter).await?;
        }
        Command::Clear(args) => {
            commands::execute_clear(args, &knowledge, formatter).await?;
        }
        Command::Count => {
            commands::execute_count(&knowledge, format).await?;
        }
        Command::Classes(args) => {
            commands::execute_classes(args, &knowledge, formatter).await?;
        }
        Command::Class(args) => {
            commands::execute_class(args, &knowledge, formatter).await?;
        }
        Command::Graph(args) => {
            commands::execute_graph(args, &knowledge, formatter).await?;
        }
    }

    Ok(())
}
