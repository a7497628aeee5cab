//! Class listing and inspection commands.

use crate::cli::{ClassArgs, ClassesArgs};
use crate::error::Result;
use crate::output::Formatter;
use knwl_sdk::Knowledge;
use knwl_store::SqliteQuadStore;

/// Execute the classes command.
pub async fn execute_classes(
    args: ClassesArgs,
    knowledge: &Knowledge<SqliteQuadStore>,
    formatter: &Formatter,
) -> Result<Vec<String>> {
    let uris = knowledge.get_all_class_uris(!args.all).await?;
    println!("{}", formatter.format_uris(knowledge.namespace(), &uris)?);
    Ok(uris)
}

/// Execute the class command.
///
/// A missing class is reported, not treated as a failure.
pub async fn execute_class(
    args: ClassArgs,
    knowledge: &Knowledge<SqliteQuadStore>,
    formatter: &Formatter,
) -> Result<bool> {
    match knowledge.get_class(&args.name, args.props).await? {
        Some(class) => {
            println!("{}", formatter.format_class(&class)?);
            Ok(true)
        }
        None => {
            println!(
                "{}",
                formatter.warning(&format!("No class named '{}'", args.name))
            );
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;

    #[tokio::test]
    async fn test_classes_only_own() {
        let knowledge = Knowledge::in_memory("http://test.org/").unwrap();
        knowledge.add_class("Dog").await.unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let own = execute_classes(ClassesArgs { all: false }, &knowledge, &formatter)
            .await
            .unwrap();
        assert_eq!(own, vec!["http://test.org/Dog"]);
    }

    #[tokio::test]
    async fn test_class_found_and_missing() {
        let knowledge = Knowledge::in_memory("http://test.org/").unwrap();
        knowledge.add_class("Dog").await.unwrap();
        let formatter = Formatter::new(OutputFormat::Table, false);

        let found = execute_class(
            ClassArgs {
                name: "Dog".into(),
                props: true,
            },
            &knowledge,
            &formatter,
        )
        .await
        .unwrap();
        assert!(found);

        let missing = execute_class(
            ClassArgs {
                name: "Cat".into(),
                props: false,
            },
            &knowledge,
            &formatter,
        )
        .await
        .unwrap();
        assert!(!missing);
    }
}
