//! Load command implementation.

use crate::cli::LoadArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use knwl_sdk::Knowledge;
use knwl_store::SqliteQuadStore;
use tracing::info;

/// Execute the load command.
///
/// Every file is checked before anything is written, so a typo in the
/// last path does not leave a half-loaded store behind.
pub async fn execute_load(
    args: LoadArgs,
    knowledge: &Knowledge<SqliteQuadStore>,
    formatter: &Formatter,
) -> Result<usize> {
    if let Some(missing) = args.files.iter().find(|f| !f.is_file()) {
        return Err(CliError::InvalidInput(format!(
            "File not found: {}",
            missing.display()
        )));
    }

    if args.clear {
        let removed = knowledge.clear().await?;
        println!("{}", formatter.info(&format!("Removed {} statement(s)", removed)));
    }

    let mut total = 0;
    for file in &args.files {
        let inserted = knowledge.load_data(file).await?;
        info!(file = %file.display(), inserted, "Loaded file");
        println!(
            "{}",
            formatter.success(&format!("{}: {} new statement(s)", file.display(), inserted))
        );
        total += inserted;
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_turtle_file() {
        let mut file = tempfile::Builder::new().suffix(".ttl").tempfile().unwrap();
        writeln!(
            file,
            "<http://test.org/Dog> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://www.w3.org/2002/07/owl#Class> ."
        )
        .unwrap();
        file.flush().unwrap();

        let knowledge = Knowledge::in_memory("http://test.org/").unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let args = LoadArgs {
            files: vec![file.path().to_path_buf()],
            clear: false,
        };

        assert_eq!(execute_load(args, &knowledge, &formatter).await.unwrap(), 1);
        assert!(knowledge.class_exists("Dog").await.unwrap());
    }

    #[tokio::test]
    async fn test_missing_file_writes_nothing() {
        let knowledge = Knowledge::in_memory("http://test.org/").unwrap();
        knowledge.add_class("Dog").await.unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let args = LoadArgs {
            files: vec!["/nonexistent/file.ttl".into()],
            clear: true,
        };

        let result = execute_load(args, &knowledge, &formatter).await;
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(knowledge.count_triples().await.unwrap() > 0);
    }
}
