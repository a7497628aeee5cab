//! Output formatting for the CLI.

use crate::error::Result;
use colored::*;
use knwl_domain::{namespace::short_form, Namespace, OntologyClass, PropertyRef, SimplifiedGraph};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a list of identifiers with their short names.
    pub fn format_uris(&self, namespace: &Namespace, uris: &[String]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(uris)?),
            OutputFormat::Quiet => Ok(uris.join("\n")),
            OutputFormat::Table => {
                if uris.is_empty() {
                    return Ok(self.colorize("No classes found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Name", "URI"]);
                for uri in uris {
                    builder.push_record([short_form(namespace, uri), uri.clone()]);
                }
                Ok(self.render(builder))
            }
        }
    }

    /// Format a hydrated class.
    pub fn format_class(&self, class: &OntologyClass) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(class)?),
            OutputFormat::Quiet => Ok(class.id.clone()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                builder.push_record(["Name".to_string(), class.name.clone()]);
                builder.push_record(["URI".to_string(), class.id.clone()]);
                builder.push_record(["Label".to_string(), or_dash(&class.label)]);
                builder.push_record(["Comment".to_string(), or_dash(&class.comment)]);
                builder.push_record(["Parent".to_string(), or_dash(&class.parent_id)]);
                if !class.data_properties.is_empty() {
                    builder.push_record([
                        "Data properties".to_string(),
                        property_names(&class.data_properties),
                    ]);
                }
                if !class.object_properties.is_empty() {
                    builder.push_record([
                        "Object properties".to_string(),
                        property_names(&class.object_properties),
                    ]);
                }
                Ok(self.render(builder))
            }
        }
    }

    /// Format the simplified graph.
    pub fn format_graph(&self, namespace: &Namespace, graph: &SimplifiedGraph) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(graph)?),
            OutputFormat::Quiet => Ok(graph.nodes.join("\n")),
            OutputFormat::Table => {
                if graph.links.is_empty() {
                    let summary = format!("{} node(s), no links.", graph.nodes.len());
                    return Ok(self.colorize(&summary, "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["From", "Property", "To"]);
                for link in &graph.links {
                    builder.push_record([
                        short_form(namespace, &link.from),
                        short_form(namespace, &link.uri),
                        short_form(namespace, &link.to),
                    ]);
                }
                let summary = format!(
                    "{} node(s), {} link(s)",
                    graph.nodes.len(),
                    graph.links.len()
                );
                Ok(format!("{}\n{}", self.render(builder), self.info(&summary)))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn or_dash(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

fn property_names(properties: &[PropertyRef]) -> String {
    properties
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
