//! Integration tests for the Knwl SDK
//!
//! Each test builds an in-memory knowledge base; nothing is shared between
//! tests.

use knwl_domain::{vocabulary, OntologyError, Uri};
use knwl_sdk::{
    ClassDefinition, CommentHydration, DataPropertyDefinition, Knowledge, ObjectPropertyDefinition,
};
use knwl_store::SqliteQuadStore;
use std::io::Write;
use uuid::Uuid;

const ROOT: &str = "http://test.org/";

fn knowledge() -> Knowledge<SqliteQuadStore> {
    Knowledge::in_memory(ROOT).unwrap()
}

fn random_name() -> String {
    format!("C{}", Uuid::now_v7().simple())
}

#[tokio::test]
async fn test_invalid_namespace_rejected() {
    let result = Knowledge::in_memory("test.org#");
    assert!(matches!(result, Err(OntologyError::InvalidNamespace { .. })));
}

#[tokio::test]
async fn test_add_class_by_name() {
    let knwl = knowledge();
    let name = random_name();

    let class = knwl.add_class(name.as_str()).await.unwrap();

    assert_eq!(class.name, name);
    assert_eq!(class.id, format!("{}{}", ROOT, name));
    assert_eq!(class.label.as_deref(), Some(name.as_str()));
    assert_eq!(class.parent_id.as_deref(), Some(vocabulary::THING));
    assert_eq!(class.parent_name.as_deref(), Some("Thing"));
    assert!(knwl.class_exists(&name).await.unwrap());
}

#[tokio::test]
async fn test_add_class_named_like_a_scheme() {
    let knwl = knowledge();

    let class = knwl.add_class("httpServer").await.unwrap();

    assert_eq!(class.id, "http://test.org/httpServer");
    assert_eq!(class.name, "httpServer");
    assert!(knwl.class_exists("httpServer").await.unwrap());
}

#[tokio::test]
async fn test_add_class_by_foreign_id() {
    let knwl = knowledge();
    let uri = Uri::new("http://whatever.com/Dog").unwrap();

    let class = knwl.add_class(uri.clone()).await.unwrap();

    assert_eq!(class.id, uri.as_str());
    assert_eq!(class.name, "Dog");
    assert_eq!(knwl.get_all_class_uris(true).await.unwrap().len(), 0);
    assert_eq!(knwl.get_all_class_uris(false).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_add_class_by_definition_round_trip() {
    let knwl = knowledge();

    knwl.add_class(
        ClassDefinition::named("Dog")
            .parent("Animal")
            .label("Doggo")
            .comment("Barks"),
    )
    .await
    .unwrap();

    let class = knwl.get_class("Dog", false).await.unwrap().unwrap();
    assert_eq!(class.id, "http://test.org/Dog");
    assert_eq!(class.parent_id.as_deref(), Some("http://test.org/Animal"));
    assert_eq!(class.parent_name.as_deref(), Some("Animal"));
    assert_eq!(class.label.as_deref(), Some("Doggo"));
    assert_eq!(class.comment, None);

    let parent = knwl.get_class("Animal", false).await.unwrap().unwrap();
    assert_eq!(parent.parent_name.as_deref(), Some("Thing"));
}

#[tokio::test]
async fn test_corrected_comment_hydration() {
    let knwl = knowledge().with_comment_hydration(CommentHydration::Corrected);
    knwl.add_class(ClassDefinition::named("Dog").comment("Barks"))
        .await
        .unwrap();

    let class = knwl.get_class("Dog", false).await.unwrap().unwrap();
    assert_eq!(class.comment.as_deref(), Some("Barks"));
    assert_eq!(class.label.as_deref(), Some("Dog"));
}

#[tokio::test]
async fn test_duplicate_class_rejected() {
    let knwl = knowledge();
    knwl.add_class("Dog").await.unwrap();

    let err = knwl.add_class("Dog").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "An ontology object with Uri 'http://test.org/Dog' already exists with type 'Class'"
    );
}

#[tokio::test]
async fn test_missing_class_is_none() {
    let knwl = knowledge();
    assert!(knwl.get_class("Nope", true).await.unwrap().is_none());
    assert!(knwl.get_object_property("nope").await.unwrap().is_none());
    assert!(knwl.get_data_property("nope").await.unwrap().is_none());
}

#[tokio::test]
async fn test_empty_class_name_rejected() {
    let knwl = knowledge();
    let err = knwl.add_class(ClassDefinition::named("")).await.unwrap_err();
    assert!(matches!(err, OntologyError::MissingRequiredField(ref f) if f == "name"));
}

#[tokio::test]
async fn test_object_property_round_trip() {
    let knwl = knowledge();

    let property = knwl
        .add_object_property(ObjectPropertyDefinition {
            name: "owns".into(),
            domain: vec!["Person".into(), "Company".into()],
            range: vec!["Car".into()],
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(property.id, "http://test.org/owns");
    assert_eq!(property.label.as_deref(), Some("owns"));
    assert_eq!(
        property.domain_ids,
        vec!["http://test.org/Person", "http://test.org/Company"]
    );
    assert_eq!(property.range_ids, vec!["http://test.org/Car"]);
    assert!(knwl.object_property_exists("owns").await.unwrap());
}

#[tokio::test]
async fn test_object_property_requires_range() {
    let knwl = knowledge();
    let err = knwl
        .add_object_property(ObjectPropertyDefinition {
            name: "owns".into(),
            domain: vec!["Person".into()],
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, OntologyError::MissingRequiredField(ref f) if f == "range"));
    assert_eq!(knwl.count_triples().await.unwrap(), 0);
}

#[tokio::test]
async fn test_get_class_with_properties() {
    let knwl = knowledge();
    knwl.add_class("Person").await.unwrap();
    knwl.add_datatype_property(DataPropertyDefinition {
        name: "age".into(),
        domain: vec!["Person".into()],
        ..Default::default()
    })
    .await
    .unwrap();
    knwl.add_object_property(ObjectPropertyDefinition {
        name: "drives".into(),
        domain: vec!["Person".into()],
        range: vec!["Car".into()],
        ..Default::default()
    })
    .await
    .unwrap();

    let class = knwl.get_class("Person", true).await.unwrap().unwrap();
    assert_eq!(class.data_properties.len(), 1);
    assert_eq!(class.data_properties[0].name, "age");
    assert_eq!(class.data_properties[0].uri, "http://test.org/age");
    assert_eq!(class.object_properties[0].name, "drives");

    let bare = knwl.get_class("Person", false).await.unwrap().unwrap();
    assert!(bare.data_properties.is_empty());
}

#[tokio::test]
async fn test_get_class_of_property_fails() {
    let knwl = knowledge();
    knwl.add_datatype_property(DataPropertyDefinition {
        name: "age".into(),
        domain: vec!["Person".into()],
        ..Default::default()
    })
    .await
    .unwrap();

    let err = knwl.get_class("age", false).await.unwrap_err();
    assert!(matches!(err, OntologyError::WrongOntologyType { .. }));
}

#[tokio::test]
async fn test_with_namespace() {
    let knwl = knowledge();
    let other = knwl.with_namespace("https://other.org").unwrap();
    other.add_class("Dog").await.unwrap();

    assert_eq!(knwl.namespace().as_str(), ROOT);
    assert!(knwl.get_class("Dog", false).await.unwrap().is_none());
    assert!(other.get_class("Dog", false).await.unwrap().is_some());
    assert_eq!(knwl.count_triples().await.unwrap(), 4);
}

#[tokio::test]
async fn test_simplified_graph_serialization() {
    let knwl = knowledge();
    knwl.add_object_property(ObjectPropertyDefinition {
        name: "drives".into(),
        domain: vec!["Person".into()],
        range: vec!["Car".into()],
        ..Default::default()
    })
    .await
    .unwrap();

    let graph = knwl.get_simplified_ontology_graph(true, true).await.unwrap();
    let json = serde_json::to_value(&graph).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "nodes": ["http://test.org/Person", "http://test.org/Car"],
            "links": [{
                "uri": "http://test.org/drives",
                "from": "http://test.org/Person",
                "to": "http://test.org/Car"
            }]
        })
    );
}

#[tokio::test]
async fn test_load_turtle_data() {
    let mut file = tempfile::Builder::new().suffix(".ttl").tempfile().unwrap();
    write!(
        file,
        r#"
        @prefix owl: <http://www.w3.org/2002/07/owl#> .
        @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
        @prefix : <http://test.org/> .

        :Animal a owl:Class ; rdfs:label "Animal" .
        :Dog a owl:Class ; rdfs:subClassOf :Animal ; rdfs:label "Dog" .
        "#
    )
    .unwrap();
    file.flush().unwrap();

    let knwl = knowledge();
    assert_eq!(knwl.load_data(file.path()).await.unwrap(), 5);

    let dog = knwl.get_class("Dog", false).await.unwrap().unwrap();
    assert_eq!(dog.parent_name.as_deref(), Some("Animal"));

    assert_eq!(knwl.clear().await.unwrap(), 5);
    assert_eq!(knwl.count_triples().await.unwrap(), 0);
}
