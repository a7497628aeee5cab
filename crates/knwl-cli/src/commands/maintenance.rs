//! Clear and count command implementations.

use crate::cli::ClearArgs;
use crate::error::{CliError, Result};
use crate::output::{Formatter, OutputFormat};
use knwl_sdk::Knowledge;
use knwl_store::SqliteQuadStore;

/// Execute the clear command.
pub async fn execute_clear(
    args: ClearArgs,
    knowledge: &Knowledge<SqliteQuadStore>,
    formatter: &Formatter,
) -> Result<usize> {
    if !args.yes {
        return Err(CliError::NotPermitted(
            "Clearing removes every statement; pass --yes to confirm".to_string(),
        ));
    }

    let removed = knowledge.clear().await?;
    println!("{}", formatter.success(&format!("Removed {} statement(s)", removed)));
    Ok(removed)
}

/// Execute the count command.
pub async fn execute_count(
    knowledge: &Knowledge<SqliteQuadStore>,
    format: OutputFormat,
) -> Result<usize> {
    let count = knowledge.count_triples().await?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "triples": count })),
        _ => println!("{}", count),
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clear_requires_confirmation() {
        let knowledge = Knowledge::in_memory("http://test.org/").unwrap();
        knowledge.add_class("Dog").await.unwrap();
        let formatter = Formatter::new(OutputFormat::Table, false);

        let result = execute_clear(ClearArgs { yes: false }, &knowledge, &formatter).await;
        assert!(matches!(result, Err(CliError::NotPermitted(_))));
        assert_eq!(execute_count(&knowledge, OutputFormat::Quiet).await.unwrap(), 4);

        let removed = execute_clear(ClearArgs { yes: true }, &knowledge, &formatter)
            .await
            .unwrap();
        assert_eq!(removed, 4);
        assert_eq!(execute_count(&knowledge, OutputFormat::Json).await.unwrap(), 0);
    }
}
