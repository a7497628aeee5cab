//! Entity-level operations over a quad store

use crate::graph;
use knwl_domain::codec::{self, CommentHydration};
use knwl_domain::traits::QuadStore;
use knwl_domain::{
    vocabulary, EntityRef, GraphLink, Namespace, OntologyError, OntologyType, Quad, QuadPattern,
    Result, SimplifiedGraph, Uri,
};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

/// Ontology operations scoped to one namespace
///
/// The handle owns its [`Namespace`]; the backend is shared through an
/// `Arc`, so [`OntologyStore::with_namespace`] hands out a second handle on
/// the same data without touching this one.
pub struct OntologyStore<S> {
    store: Arc<S>,
    namespace: Namespace,
    comments: CommentHydration,
}

impl<S> Clone for OntologyStore<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            namespace: self.namespace.clone(),
            comments: self.comments,
        }
    }
}

impl<S> std::fmt::Debug for OntologyStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OntologyStore")
            .field("namespace", &self.namespace)
            .field("comments", &self.comments)
            .finish_non_exhaustive()
    }
}

impl<S: QuadStore> OntologyStore<S> {
    /// Create a handle on a shared backend
    pub fn new(store: Arc<S>, namespace: Namespace) -> Self {
        Self {
            store,
            namespace,
            comments: CommentHydration::default(),
        }
    }

    /// Choose how comments are hydrated
    pub fn with_comment_hydration(mut self, comments: CommentHydration) -> Self {
        self.comments = comments;
        self
    }

    /// Derive a handle for another namespace on the same backend
    pub fn with_namespace(&self, root: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            store: Arc::clone(&self.store),
            namespace: Namespace::new(root)?,
            comments: self.comments,
        })
    }

    /// The namespace names resolve against
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Comment hydration in effect
    pub fn comment_hydration(&self) -> CommentHydration {
        self.comments
    }

    /// The shared backend
    pub fn backend(&self) -> &Arc<S> {
        &self.store
    }

    fn resolve<'a>(&self, reference: impl Into<EntityRef<'a>>) -> Result<Uri> {
        self.namespace.uri(reference)
    }

    async fn fetch(&self, pattern: QuadPattern) -> Result<Vec<Quad>> {
        self.store.get(&pattern).await.map_err(OntologyError::store)
    }

    async fn has_match(&self, pattern: QuadPattern) -> Result<bool> {
        self.store
            .match_quads(pattern)
            .any()
            .await
            .map_err(OntologyError::store)
    }

    // Statement insertion

    /// Insert raw statements, returning how many were new
    pub async fn load_statements(&self, quads: Vec<Quad>) -> Result<usize> {
        self.store.put(quads).await.map_err(OntologyError::store)
    }

    /// Fail with `AlreadyExists` if the identifier carries any type statement
    pub async fn ensure_does_not_exist<'a>(&self, reference: impl Into<EntityRef<'a>>) -> Result<()> {
        let uri = self.resolve(reference)?;
        match self.ontology_type_of(&uri).await? {
            Some(found) => Err(OntologyError::AlreadyExists {
                uri: uri.into_string(),
                found,
            }),
            None => Ok(()),
        }
    }

    /// Add a class, creating a bare parent class when the parent is unknown
    ///
    /// Returns the identifier of the new class. The parent and the class are
    /// inserted in separate batches.
    pub async fn add_class<'a>(
        &self,
        name: impl Into<EntityRef<'a>>,
        parent: Option<EntityRef<'_>>,
        label: Option<&str>,
        comment: Option<&str>,
    ) -> Result<Uri> {
        let name = name.into();
        let id = self.resolve(name)?;
        self.ensure_does_not_exist(&id).await?;

        if let Some(parent) = parent {
            let parent_id = self.resolve(parent)?;
            if self.ontology_type_of(&parent_id).await?.is_none() {
                debug!(parent = %parent_id, "Creating missing parent class");
                let statements = codec::class_statements(&self.namespace, &parent_id, None, None, None)?;
                self.load_statements(statements).await?;
            }
        }

        let statements = codec::class_statements(&self.namespace, name, parent, label, comment)?;
        self.load_statements(statements).await?;
        info!(class = %id, "Added class");
        Ok(id)
    }

    /// Add an object property linking every domain class to every range class
    pub async fn add_object_property<'a, D: AsRef<str>, R: AsRef<str>>(
        &self,
        name: impl Into<EntityRef<'a>>,
        domain: &[D],
        range: &[R],
        label: Option<&str>,
        comment: Option<&str>,
    ) -> Result<Uri> {
        let name = name.into();
        let id = self.resolve(name)?;
        self.ensure_does_not_exist(&id).await?;
        if domain.is_empty() {
            return Err(OntologyError::MissingRequiredField("domain".to_string()));
        }
        if range.is_empty() {
            return Err(OntologyError::MissingRequiredField("range".to_string()));
        }

        let statements =
            codec::object_property_statements(&self.namespace, name, domain, range, label, comment)?;
        self.load_statements(statements).await?;
        info!(property = %id, "Added object property");
        Ok(id)
    }

    /// Add a datatype property on the given domain classes
    pub async fn add_datatype_property<'a, D: AsRef<str>>(
        &self,
        name: impl Into<EntityRef<'a>>,
        domain: &[D],
        label: Option<&str>,
        comment: Option<&str>,
    ) -> Result<Uri> {
        let name = name.into();
        let id = self.resolve(name)?;
        self.ensure_does_not_exist(&id).await?;
        if domain.is_empty() {
            return Err(OntologyError::MissingRequiredField("domain".to_string()));
        }

        let statements = codec::data_property_statements(&self.namespace, name, domain, label, comment)?;
        self.load_statements(statements).await?;
        info!(property = %id, "Added datatype property");
        Ok(id)
    }

    // Listings and existence

    async fn subjects_of_type(&self, marker: Uri) -> Result<Vec<String>> {
        let found = self
            .fetch(QuadPattern::any().predicate(vocabulary::rdf_type()).object(marker))
            .await?;
        let mut seen = HashSet::new();
        Ok(found
            .into_iter()
            .map(|q| q.subject.into_string())
            .filter(|s| seen.insert(s.clone()))
            .collect())
    }

    /// Identifiers of every class, optionally only those in the namespace
    pub async fn get_class_uris(&self, only_own: bool) -> Result<Vec<String>> {
        let mut uris = self.subjects_of_type(vocabulary::owl_class()).await?;
        if only_own {
            uris.retain(|uri| self.namespace.contains(uri));
        }
        Ok(uris)
    }

    /// Identifiers of every datatype property
    pub async fn get_data_property_uris(&self) -> Result<Vec<String>> {
        self.subjects_of_type(vocabulary::owl_datatype_property()).await
    }

    /// Identifiers of every object property
    pub async fn get_object_property_uris(&self) -> Result<Vec<String>> {
        self.subjects_of_type(vocabulary::owl_object_property()).await
    }

    async fn is_declared_as<'a>(&self, reference: impl Into<EntityRef<'a>>, marker: Uri) -> Result<bool> {
        let uri = self.resolve(reference)?;
        self.has_match(
            QuadPattern::any()
                .subject(uri)
                .predicate(vocabulary::rdf_type())
                .object(marker),
        )
        .await
    }

    /// Whether the identifier is declared as a class
    pub async fn class_exists<'a>(&self, reference: impl Into<EntityRef<'a>>) -> Result<bool> {
        self.is_declared_as(reference, vocabulary::owl_class()).await
    }

    /// Whether the identifier is declared as an object property
    pub async fn object_property_exists<'a>(&self, reference: impl Into<EntityRef<'a>>) -> Result<bool> {
        self.is_declared_as(reference, vocabulary::owl_object_property()).await
    }

    /// Whether the identifier is declared as a datatype property
    pub async fn data_property_exists<'a>(&self, reference: impl Into<EntityRef<'a>>) -> Result<bool> {
        self.is_declared_as(reference, vocabulary::owl_datatype_property()).await
    }

    async fn ontology_type_of(&self, uri: &Uri) -> Result<Option<OntologyType>> {
        let found = self
            .fetch(
                QuadPattern::any()
                    .subject(uri.clone())
                    .predicate(vocabulary::rdf_type()),
            )
            .await?;
        Ok(match found.as_slice() {
            [] => None,
            [single] => Some(OntologyType::from_type_short(
                &self.namespace,
                single.object.lexical(),
            )),
            several => Some(OntologyType::Ambiguous(several.len())),
        })
    }

    /// What the identifier is declared as, `None` when it has no type statement
    ///
    /// Several type statements give [`OntologyType::Ambiguous`], displayed as `Other`.
    pub async fn get_ontology_type<'a>(
        &self,
        reference: impl Into<EntityRef<'a>>,
    ) -> Result<Option<OntologyType>> {
        let uri = self.resolve(reference)?;
        self.ontology_type_of(&uri).await
    }

    // Statement sets

    async fn statements_restricted_to(
        &self,
        uri: Uri,
        predicates: &[&str],
        include_comment_and_label: bool,
    ) -> Result<Option<Vec<Quad>>> {
        let found = self.fetch(QuadPattern::any().subject(uri)).await?;
        if found.is_empty() {
            return Ok(None);
        }
        Ok(Some(
            found
                .into_iter()
                .filter(|q| {
                    let predicate = q.predicate.as_str();
                    predicates.contains(&predicate)
                        || (include_comment_and_label
                            && (predicate == vocabulary::LABEL || predicate == vocabulary::COMMENT))
                })
                .collect(),
        ))
    }

    /// Type and parent statements of a class, plus label and comment on request
    pub async fn get_class_statements<'a>(
        &self,
        reference: impl Into<EntityRef<'a>>,
        include_comment_and_label: bool,
    ) -> Result<Option<Vec<Quad>>> {
        let uri = self.resolve(reference)?;
        self.statements_restricted_to(
            uri,
            &[vocabulary::TYPE, vocabulary::SUB_CLASS_OF],
            include_comment_and_label,
        )
        .await
    }

    /// Type, domain and range statements of an object property
    pub async fn get_object_property_statements<'a>(
        &self,
        reference: impl Into<EntityRef<'a>>,
        include_comment_and_label: bool,
    ) -> Result<Option<Vec<Quad>>> {
        let uri = self.resolve(reference)?;
        self.statements_restricted_to(
            uri,
            &[vocabulary::TYPE, vocabulary::DOMAIN, vocabulary::RANGE],
            include_comment_and_label,
        )
        .await
    }

    /// Type and domain statements of a datatype property
    pub async fn get_data_property_statements<'a>(
        &self,
        reference: impl Into<EntityRef<'a>>,
        include_comment_and_label: bool,
    ) -> Result<Option<Vec<Quad>>> {
        let uri = self.resolve(reference)?;
        self.statements_restricted_to(
            uri,
            &[vocabulary::TYPE, vocabulary::DOMAIN],
            include_comment_and_label,
        )
        .await
    }

    async fn first_object_of(&self, uri: Uri, predicate: Uri) -> Result<Option<String>> {
        let found = self
            .fetch(QuadPattern::any().subject(uri).predicate(predicate))
            .await?;
        Ok(found.into_iter().next().map(|q| q.object.lexical().to_string()))
    }

    /// First `rdfs:label` value of the identifier
    pub async fn get_first_label<'a>(&self, reference: impl Into<EntityRef<'a>>) -> Result<Option<String>> {
        let uri = self.resolve(reference)?;
        self.first_object_of(uri, vocabulary::label()).await
    }

    /// First `rdfs:comment` value of the identifier
    pub async fn get_first_comment<'a>(&self, reference: impl Into<EntityRef<'a>>) -> Result<Option<String>> {
        let uri = self.resolve(reference)?;
        self.first_object_of(uri, vocabulary::comment()).await
    }

    // Derived projections

    /// Object properties as `{uri, from, to}` links
    ///
    /// With `only_own`, a link is kept only when both of its endpoints are
    /// inside the namespace.
    pub async fn get_simplified_object_properties(&self, only_own: bool) -> Result<Vec<GraphLink>> {
        let domain = self
            .fetch(QuadPattern::any().predicate(vocabulary::domain()))
            .await?;
        let range = self
            .fetch(QuadPattern::any().predicate(vocabulary::range()))
            .await?;

        let links = graph::simplify_object_properties(&domain, &range, |endpoint| {
            !only_own || self.namespace.contains(endpoint)
        });
        debug!(links = links.len(), only_own, "Computed simplified object properties");
        Ok(links)
    }

    /// Classes and object-property links
    ///
    /// With `only_connected` the nodes are the link endpoints; otherwise they
    /// are the class listing, isolated classes included.
    pub async fn get_simplified_ontology_graph(
        &self,
        only_own: bool,
        only_connected: bool,
    ) -> Result<SimplifiedGraph> {
        let links = self.get_simplified_object_properties(only_own).await?;
        let nodes = if only_connected {
            graph::link_endpoints(&links)
        } else {
            self.get_class_uris(only_own).await?
        };
        Ok(SimplifiedGraph { nodes, links })
    }

    async fn properties_with_domain(&self, properties: Vec<String>, class: &Uri) -> Result<Vec<String>> {
        let mut matching = Vec::new();
        for property in properties {
            let property_uri = Uri::new(property)?;
            let domain = self
                .fetch(
                    QuadPattern::any()
                        .subject(property_uri.clone())
                        .predicate(vocabulary::domain()),
                )
                .await?;
            if domain.iter().any(|q| q.object.as_uri() == Some(class)) {
                matching.push(property_uri.into_string());
            }
        }
        Ok(matching)
    }

    /// Datatype properties whose domain includes the class
    pub async fn get_data_property_uris_of_class<'a>(
        &self,
        class: impl Into<EntityRef<'a>>,
    ) -> Result<Vec<String>> {
        let class = self.resolve(class)?;
        let properties = self.get_data_property_uris().await?;
        self.properties_with_domain(properties, &class).await
    }

    /// Object properties whose domain includes the class
    pub async fn get_object_property_uris_of_class<'a>(
        &self,
        class: impl Into<EntityRef<'a>>,
    ) -> Result<Vec<String>> {
        let class = self.resolve(class)?;
        let properties = self.get_object_property_uris().await?;
        self.properties_with_domain(properties, &class).await
    }

    // Whole-store maintenance

    /// Total number of statements in the backend
    pub async fn count_triples(&self) -> Result<usize> {
        self.store.count().await.map_err(OntologyError::store)
    }

    /// Remove every statement, whatever its namespace
    pub async fn clear(&self) -> Result<usize> {
        let removed = self
            .store
            .remove_matches(&QuadPattern::any())
            .await
            .map_err(OntologyError::store)?;
        info!(removed, "The store has been emptied");
        Ok(removed)
    }
}
