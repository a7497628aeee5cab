//! Reserved RDF, RDFS and OWL identifiers

use crate::namespace::Uri;

/// RDF namespace
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// RDFS namespace
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
/// OWL namespace
pub const OWL: &str = "http://www.w3.org/2002/07/owl#";

/// `rdf:type`
pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
/// `rdfs:subClassOf`
pub const SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
/// `rdfs:label`
pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
/// `rdfs:comment`
pub const COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
/// `rdfs:domain`
pub const DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
/// `rdfs:range`
pub const RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";

/// `owl:Class`
pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
/// `owl:DatatypeProperty`
pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
/// `owl:ObjectProperty`
pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
/// `owl:Thing`, the implicit parent of every class
pub const THING: &str = "http://www.w3.org/2002/07/owl#Thing";

/// Display name of [`THING`]
pub const THING_NAME: &str = "Thing";

/// Namespaces stripped by short-forming, in stripping order
pub const WELL_KNOWN_NAMESPACES: [&str; 3] = [RDF, RDFS, OWL];

/// `rdf:type` as a [`Uri`]
pub fn rdf_type() -> Uri {
    Uri::reserved(TYPE)
}

/// `rdfs:subClassOf` as a [`Uri`]
pub fn sub_class_of() -> Uri {
    Uri::reserved(SUB_CLASS_OF)
}

/// `rdfs:label` as a [`Uri`]
pub fn label() -> Uri {
    Uri::reserved(LABEL)
}

/// `rdfs:comment` as a [`Uri`]
pub fn comment() -> Uri {
    Uri::reserved(COMMENT)
}

/// `rdfs:domain` as a [`Uri`]
pub fn domain() -> Uri {
    Uri::reserved(DOMAIN)
}

/// `rdfs:range` as a [`Uri`]
pub fn range() -> Uri {
    Uri::reserved(RANGE)
}

/// `owl:Class` as a [`Uri`]
pub fn owl_class() -> Uri {
    Uri::reserved(OWL_CLASS)
}

/// `owl:DatatypeProperty` as a [`Uri`]
pub fn owl_datatype_property() -> Uri {
    Uri::reserved(OWL_DATATYPE_PROPERTY)
}

/// `owl:ObjectProperty` as a [`Uri`]
pub fn owl_object_property() -> Uri {
    Uri::reserved(OWL_OBJECT_PROPERTY)
}

/// `owl:Thing` as a [`Uri`]
pub fn thing() -> Uri {
    Uri::reserved(THING)
}
