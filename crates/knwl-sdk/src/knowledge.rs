//! The `Knowledge` facade

use crate::input::{require_name, AddClassInput, DataPropertyDefinition, ObjectPropertyDefinition};
use knwl_domain::codec::{self, CommentHydration};
use knwl_domain::traits::QuadStore;
use knwl_domain::{
    EntityRef, GraphLink, Namespace, OntologyClass, OntologyDataProperty, OntologyError,
    OntologyObjectProperty, PropertyRef, Result, SimplifiedGraph, Uri,
};
use knwl_ontology::OntologyStore;
use knwl_store::SqliteQuadStore;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Typed access to an ontology held in a quad store
pub struct Knowledge<S> {
    ontology: OntologyStore<S>,
}

impl<S> Clone for Knowledge<S> {
    fn clone(&self) -> Self {
        Self {
            ontology: self.ontology.clone(),
        }
    }
}

impl<S> std::fmt::Debug for Knowledge<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Knowledge")
            .field("ontology", &self.ontology)
            .finish()
    }
}

impl<S: QuadStore> Knowledge<S> {
    /// Create a facade over a shared backend
    ///
    /// # Errors
    /// `InvalidNamespace` when the root is not a valid namespace.
    pub fn new(store: Arc<S>, root: impl AsRef<str>) -> Result<Self> {
        let namespace = Namespace::new(root)?;
        Ok(Self {
            ontology: OntologyStore::new(store, namespace),
        })
    }

    /// Choose how comments are hydrated
    pub fn with_comment_hydration(self, comments: CommentHydration) -> Self {
        Self {
            ontology: self.ontology.with_comment_hydration(comments),
        }
    }

    /// A handle on the same backend scoped to another namespace
    pub fn with_namespace(&self, root: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            ontology: self.ontology.with_namespace(root)?,
        })
    }

    /// Current namespace
    pub fn namespace(&self) -> &Namespace {
        self.ontology.namespace()
    }

    /// The underlying entity-level store
    pub fn ontology(&self) -> &OntologyStore<S> {
        &self.ontology
    }

    fn comments(&self) -> CommentHydration {
        self.ontology.comment_hydration()
    }

    /// Add a class by name, by foreign identifier or from a definition
    ///
    /// Returns the class as stored, read back from the backend.
    pub async fn add_class(&self, input: impl Into<AddClassInput>) -> Result<OntologyClass> {
        let id = match input.into() {
            AddClassInput::ByName(name) => {
                require_name(&name)?;
                self.ontology.add_class(&name, None, None, None).await?
            }
            AddClassInput::ByForeignId(uri) => self.ontology.add_class(&uri, None, None, None).await?,
            AddClassInput::ByDefinition(def) => {
                require_name(&def.name)?;
                self.ontology
                    .add_class(
                        &def.name,
                        def.parent.as_deref().map(EntityRef::Name),
                        def.label.as_deref(),
                        def.comment.as_deref(),
                    )
                    .await?
            }
        };
        self.get_class(&id, false)
            .await?
            .ok_or(OntologyError::NotAnOntologyElement { type_statements: 0 })
    }

    /// Add an object property; name, domain and range are required
    pub async fn add_object_property(
        &self,
        definition: ObjectPropertyDefinition,
    ) -> Result<OntologyObjectProperty> {
        definition.validate()?;
        let id = self
            .ontology
            .add_object_property(
                &definition.name,
                &definition.domain,
                &definition.range,
                definition.label.as_deref(),
                definition.comment.as_deref(),
            )
            .await?;
        self.get_object_property(&id)
            .await?
            .ok_or(OntologyError::NotAnOntologyElement { type_statements: 0 })
    }

    /// Add a datatype property; name and domain are required
    pub async fn add_datatype_property(
        &self,
        definition: DataPropertyDefinition,
    ) -> Result<OntologyDataProperty> {
        definition.validate()?;
        let id = self
            .ontology
            .add_datatype_property(
                &definition.name,
                &definition.domain,
                definition.label.as_deref(),
                definition.comment.as_deref(),
            )
            .await?;
        self.get_data_property(&id)
            .await?
            .ok_or(OntologyError::NotAnOntologyElement { type_statements: 0 })
    }

    fn property_refs(&self, uris: Vec<String>) -> Vec<PropertyRef> {
        uris.into_iter()
            .map(|uri| PropertyRef {
                name: self.namespace().short_form(&uri),
                uri,
            })
            .collect()
    }

    /// Fetch a class, `None` when the identifier has no statements
    ///
    /// With `include_properties` the data and object properties whose domain
    /// includes the class are attached.
    pub async fn get_class<'a>(
        &self,
        name: impl Into<EntityRef<'a>>,
        include_properties: bool,
    ) -> Result<Option<OntologyClass>> {
        let id = self.namespace().uri(name)?;
        let Some(statements) = self.ontology.get_class_statements(&id, true).await? else {
            return Ok(None);
        };
        let mut class = codec::hydrate_class(self.namespace(), &statements, self.comments())
            .inspect_err(|e| debug!(class = %id, error = %e, "Class hydration failed"))?;

        if include_properties {
            let data = self.ontology.get_data_property_uris_of_class(&id).await?;
            let object = self.ontology.get_object_property_uris_of_class(&id).await?;
            class.data_properties = self.property_refs(data);
            class.object_properties = self.property_refs(object);
        }
        Ok(Some(class))
    }

    /// Fetch an object property, `None` when the identifier has no statements
    pub async fn get_object_property<'a>(
        &self,
        name: impl Into<EntityRef<'a>>,
    ) -> Result<Option<OntologyObjectProperty>> {
        let id = self.namespace().uri(name)?;
        match self.ontology.get_object_property_statements(&id, true).await? {
            Some(statements) => {
                codec::hydrate_object_property(self.namespace(), &statements, self.comments()).map(Some)
            }
            None => Ok(None),
        }
    }

    /// Fetch a datatype property, `None` when the identifier has no statements
    pub async fn get_data_property<'a>(
        &self,
        name: impl Into<EntityRef<'a>>,
    ) -> Result<Option<OntologyDataProperty>> {
        let id = self.namespace().uri(name)?;
        match self.ontology.get_data_property_statements(&id, true).await? {
            Some(statements) => {
                codec::hydrate_data_property(self.namespace(), &statements, self.comments()).map(Some)
            }
            None => Ok(None),
        }
    }

    /// Whether the class is declared
    pub async fn class_exists<'a>(&self, name: impl Into<EntityRef<'a>>) -> Result<bool> {
        self.ontology.class_exists(name).await
    }

    /// Whether the object property is declared
    pub async fn object_property_exists<'a>(&self, name: impl Into<EntityRef<'a>>) -> Result<bool> {
        self.ontology.object_property_exists(name).await
    }

    /// Whether the datatype property is declared
    pub async fn data_property_exists<'a>(&self, name: impl Into<EntityRef<'a>>) -> Result<bool> {
        self.ontology.data_property_exists(name).await
    }

    /// Every class identifier, optionally only those in the namespace
    pub async fn get_all_class_uris(&self, only_own: bool) -> Result<Vec<String>> {
        self.ontology.get_class_uris(only_own).await
    }

    /// Object properties as `{uri, from, to}` links
    pub async fn get_simplified_object_properties(&self, only_own: bool) -> Result<Vec<GraphLink>> {
        self.ontology.get_simplified_object_properties(only_own).await
    }

    /// Nodes and links for visualization
    pub async fn get_simplified_ontology_graph(
        &self,
        only_own: bool,
        only_connected: bool,
    ) -> Result<SimplifiedGraph> {
        self.ontology
            .get_simplified_ontology_graph(only_own, only_connected)
            .await
    }

    /// Datatype properties with the class in their domain
    pub async fn get_data_property_uris_of_class<'a>(
        &self,
        class: impl Into<EntityRef<'a>>,
    ) -> Result<Vec<String>> {
        self.ontology.get_data_property_uris_of_class(class).await
    }

    /// Object properties with the class in their domain
    pub async fn get_object_property_uris_of_class<'a>(
        &self,
        class: impl Into<EntityRef<'a>>,
    ) -> Result<Vec<String>> {
        self.ontology.get_object_property_uris_of_class(class).await
    }

    /// Total number of statements
    pub async fn count_triples(&self) -> Result<usize> {
        self.ontology.count_triples().await
    }

    /// Remove every statement in the backend
    pub async fn clear(&self) -> Result<usize> {
        self.ontology.clear().await
    }

    /// Resolve a name against the current namespace
    pub fn uri<'a>(&self, name: impl Into<EntityRef<'a>>) -> Result<Uri> {
        self.namespace().uri(name)
    }
}

impl Knowledge<SqliteQuadStore> {
    /// Open a SQLite-backed knowledge base
    pub fn open<P: AsRef<Path>>(path: P, root: impl AsRef<str>) -> Result<Self> {
        let store = SqliteQuadStore::open(path).map_err(OntologyError::store)?;
        Self::new(Arc::new(store), root)
    }

    /// In-memory knowledge base (useful for testing)
    pub fn in_memory(root: impl AsRef<str>) -> Result<Self> {
        let store = SqliteQuadStore::open_in_memory().map_err(OntologyError::store)?;
        Self::new(Arc::new(store), root)
    }

    /// Load an RDF file (Turtle, N-Triples, N-Quads) into the backend
    pub async fn load_data<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let inserted = self
            .ontology
            .backend()
            .load_file(path)
            .await
            .map_err(OntologyError::store)?;
        info!(path = %path.display(), inserted, "Loaded data");
        Ok(inserted)
    }
}
