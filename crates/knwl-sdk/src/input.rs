//! Loosely-typed inputs accepted by the facade

use knwl_domain::{OntologyError, Result, Uri};
use serde::{Deserialize, Serialize};

/// Structured class definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDefinition {
    /// Class name under the namespace, or a full identifier
    pub name: String,
    /// Parent class name; `owl:Thing` when absent
    #[serde(default, alias = "parentName")]
    pub parent: Option<String>,
    /// Label; the short form of the name when absent
    #[serde(default)]
    pub label: Option<String>,
    /// Comment; empty when absent
    #[serde(default)]
    pub comment: Option<String>,
}

impl ClassDefinition {
    /// Definition with just a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the parent class
    pub fn parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the comment
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// The three ways a class can be added
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddClassInput {
    /// Bare name resolved under the namespace
    ByName(String),
    /// Identifier used as is, possibly outside the namespace
    ByForeignId(Uri),
    /// Name plus optional parent, label and comment
    ByDefinition(ClassDefinition),
}

impl From<&str> for AddClassInput {
    fn from(name: &str) -> Self {
        AddClassInput::ByName(name.to_string())
    }
}

impl From<String> for AddClassInput {
    fn from(name: String) -> Self {
        AddClassInput::ByName(name)
    }
}

impl From<Uri> for AddClassInput {
    fn from(uri: Uri) -> Self {
        AddClassInput::ByForeignId(uri)
    }
}

impl From<ClassDefinition> for AddClassInput {
    fn from(definition: ClassDefinition) -> Self {
        AddClassInput::ByDefinition(definition)
    }
}

/// Object property definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectPropertyDefinition {
    /// Property name
    pub name: String,
    /// Domain classes
    #[serde(default)]
    pub domain: Vec<String>,
    /// Range classes
    #[serde(default)]
    pub range: Vec<String>,
    /// Label; the name when absent
    #[serde(default)]
    pub label: Option<String>,
    /// Comment; empty when absent
    #[serde(default)]
    pub comment: Option<String>,
}

/// Datatype property definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPropertyDefinition {
    /// Property name
    pub name: String,
    /// Domain classes
    #[serde(default)]
    pub domain: Vec<String>,
    /// Label; the name when absent
    #[serde(default)]
    pub label: Option<String>,
    /// Comment; empty when absent
    #[serde(default)]
    pub comment: Option<String>,
}

pub(crate) fn require_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(OntologyError::MissingRequiredField("name".to_string()));
    }
    Ok(())
}

impl ObjectPropertyDefinition {
    pub(crate) fn validate(&self) -> Result<()> {
        require_name(&self.name)?;
        if self.domain.is_empty() {
            return Err(OntologyError::MissingRequiredField("domain".to_string()));
        }
        if self.range.is_empty() {
            return Err(OntologyError::MissingRequiredField("range".to_string()));
        }
        Ok(())
    }
}

impl DataPropertyDefinition {
    pub(crate) fn validate(&self) -> Result<()> {
        require_name(&self.name)?;
        if self.domain.is_empty() {
            return Err(OntologyError::MissingRequiredField("domain".to_string()));
        }
        Ok(())
    }
}
