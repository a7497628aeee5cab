//! Knwl Server CLI
//!
//! Starts the HTTP server exposing the ontology API.

use knwl_server::{config::ServerConfig, start_server, ServerError};
use std::env;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        ServerConfig::from_file(&args[2])?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        eprintln!("Warning: No config file specified, using an in-memory test configuration");
        eprintln!("Usage: knwl-server --config <path-to-config.toml>");
        eprintln!();
        ServerConfig::default_test_config()
    };

    start_server(config).await?;

    Ok(())
}

fn print_help() {
    println!("Knwl Server - Ontology REST API");
    println!();
    println!("USAGE:");
    println!("    knwl-server --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file should contain:");
    println!("    - bind_address: IP address to bind (e.g., '127.0.0.1')");
    println!("    - bind_port: Port number (e.g., 3000)");
    println!("    - namespace: Namespace root (default: 'http://dbpedia.org/ontology/')");
    println!("    - database_path: SQLite file (omit for an in-memory store)");
    println!("    - comment_hydration: 'legacy' or 'corrected'");
    println!();
    println!("LOGGING:");
    println!("    Set RUST_LOG (e.g., RUST_LOG=debug) to adjust verbosity");
    println!();
}
