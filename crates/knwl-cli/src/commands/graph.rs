//! Graph command implementation.

use crate::cli::GraphArgs;
use crate::error::Result;
use crate::output::Formatter;
use knwl_domain::SimplifiedGraph;
use knwl_sdk::Knowledge;
use knwl_store::SqliteQuadStore;

/// Execute the graph command.
pub async fn execute_graph(
    args: GraphArgs,
    knowledge: &Knowledge<SqliteQuadStore>,
    formatter: &Formatter,
) -> Result<SimplifiedGraph> {
    let graph = knowledge
        .get_simplified_ontology_graph(!args.all, !args.isolated)
        .await?;
    println!("{}", formatter.format_graph(knowledge.namespace(), &graph)?);
    Ok(graph)
}
