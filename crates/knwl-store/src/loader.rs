//! RDF file loading
//!
//! Documents are parsed with sophia and converted into domain statements.
//! Statements that mention blank nodes in subject or object position have no
//! identifier in the ontology model and are skipped.

use crate::StoreError;
use knwl_domain::{Quad as Statement, Term, Uri};
use sophia::api::prelude::*;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Supported serializations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    /// Turtle (`.ttl`)
    Turtle,
    /// N-Triples (`.nt`)
    NTriples,
    /// N-Quads (`.nq`)
    NQuads,
}

impl RdfFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, StoreError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("ttl") | Some("turtle") => Ok(RdfFormat::Turtle),
            Some("nt") => Ok(RdfFormat::NTriples),
            Some("nq") => Ok(RdfFormat::NQuads),
            _ => Err(StoreError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RdfFormat::Turtle => f.write_str("Turtle"),
            RdfFormat::NTriples => f.write_str("N-Triples"),
            RdfFormat::NQuads => f.write_str("N-Quads"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct SinkError(String);

#[derive(Debug, PartialEq)]
enum ParsedTerm {
    Iri(String),
    Blank,
    Literal(String),
}

/// Parse a file, choosing the format from its extension
pub fn load_file(path: &Path) -> Result<Vec<Statement>, StoreError> {
    let format = RdfFormat::from_path(path)?;
    let reader = BufReader::new(File::open(path)?);
    parse_reader(reader, format)
}

/// Parse a document from any buffered reader
pub fn parse_reader<R: BufRead>(reader: R, format: RdfFormat) -> Result<Vec<Statement>, StoreError> {
    let mut out = Vec::new();
    let mut skipped = 0usize;

    match format {
        RdfFormat::Turtle => {
            let mut parser = sophia::turtle::parser::turtle::parse_bufread(reader);
            parser
                .try_for_each_triple(|t| -> Result<(), SinkError> {
                    push(&mut out, &mut skipped, &t.s().to_string(), &t.p().to_string(), &t.o().to_string(), None)
                })
                .map_err(|e| parse_error(format, e))?;
        }
        RdfFormat::NTriples => {
            let mut parser = sophia::turtle::parser::nt::parse_bufread(reader);
            parser
                .try_for_each_triple(|t| -> Result<(), SinkError> {
                    push(&mut out, &mut skipped, &t.s().to_string(), &t.p().to_string(), &t.o().to_string(), None)
                })
                .map_err(|e| parse_error(format, e))?;
        }
        RdfFormat::NQuads => {
            let mut parser = sophia::turtle::parser::nq::parse_bufread(reader);
            parser
                .try_for_each_quad(|q| -> Result<(), SinkError> {
                    let graph = q.g().map(|g| g.to_string());
                    push(
                        &mut out,
                        &mut skipped,
                        &q.s().to_string(),
                        &q.p().to_string(),
                        &q.o().to_string(),
                        graph.as_deref(),
                    )
                })
                .map_err(|e| parse_error(format, e))?;
        }
    }

    if skipped > 0 {
        debug!(skipped, "Skipped statements with blank nodes");
    }
    Ok(out)
}

fn parse_error(format: RdfFormat, error: impl fmt::Display) -> StoreError {
    StoreError::Parse {
        format,
        message: error.to_string(),
    }
}

fn push(
    out: &mut Vec<Statement>,
    skipped: &mut usize,
    subject: &str,
    predicate: &str,
    object: &str,
    graph: Option<&str>,
) -> Result<(), SinkError> {
    let (ParsedTerm::Iri(subject), ParsedTerm::Iri(predicate)) =
        (parse_term(subject)?, parse_term(predicate)?)
    else {
        *skipped += 1;
        return Ok(());
    };
    let object = match parse_term(object)? {
        ParsedTerm::Iri(iri) => Term::Iri(to_uri(iri)?),
        ParsedTerm::Literal(value) => Term::Literal(value),
        ParsedTerm::Blank => {
            *skipped += 1;
            return Ok(());
        }
    };
    let graph = match graph.map(parse_term).transpose()? {
        Some(ParsedTerm::Iri(iri)) => Some(iri),
        Some(_) => {
            *skipped += 1;
            return Ok(());
        }
        None => None,
    };

    out.push(Statement {
        subject: to_uri(subject)?,
        predicate: to_uri(predicate)?,
        object,
        graph,
    });
    Ok(())
}

fn to_uri(value: String) -> Result<Uri, SinkError> {
    Uri::new(value).map_err(|e| SinkError(e.to_string()))
}

/// Read a term back from its N-Triples display form
fn parse_term(display: &str) -> Result<ParsedTerm, SinkError> {
    let s = display.trim();

    if let Some(iri) = s.strip_prefix('<').and_then(|t| t.strip_suffix('>')) {
        return Ok(ParsedTerm::Iri(iri.to_string()));
    }
    if s.starts_with("_:") {
        return Ok(ParsedTerm::Blank);
    }
    if let Some(body) = s.strip_prefix('"') {
        let mut lexical = String::with_capacity(body.len());
        let mut chars = body.chars();
        while let Some(c) = chars.next() {
            match c {
                '"' => return Ok(ParsedTerm::Literal(lexical)),
                '\\' => match chars.next() {
                    Some('n') => lexical.push('\n'),
                    Some('r') => lexical.push('\r'),
                    Some('t') => lexical.push('\t'),
                    Some('"') => lexical.push('"'),
                    Some('\\') => lexical.push('\\'),
                    Some(other) => {
                        lexical.push('\\');
                        lexical.push(other);
                    }
                    None => lexical.push('\\'),
                },
                other => lexical.push(other),
            }
        }
        return Err(SinkError(format!("unterminated literal: {}", s)));
    }

    Err(SinkError(format!("unsupported term: {}", s)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_format_from_path() {
        assert_eq!(RdfFormat::from_path(Path::new("a/b.ttl")).unwrap(), RdfFormat::Turtle);
        assert_eq!(RdfFormat::from_path(Path::new("b.NT")).unwrap(), RdfFormat::NTriples);
        assert!(matches!(
            RdfFormat::from_path(Path::new("b.json")),
            Err(StoreError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_parse_term_forms() {
        assert_eq!(parse_term("<http://a/b>").unwrap(), ParsedTerm::Iri("http://a/b".into()));
        assert_eq!(parse_term("_:b0").unwrap(), ParsedTerm::Blank);
        assert_eq!(parse_term("\"a \\\"dog\\\"\"@en").unwrap(), ParsedTerm::Literal("a \"dog\"".into()));
        assert_eq!(
            parse_term("\"42\"^^<http://www.w3.org/2001/XMLSchema#integer>").unwrap(),
            ParsedTerm::Literal("42".into())
        );
    }

    #[test]
    fn test_parse_turtle() {
        let doc = r#"
            @prefix owl: <http://www.w3.org/2002/07/owl#> .
            @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
            <http://example.org/Dog> a owl:Class ;
                rdfs:label "Dog" ;
                rdfs:subClassOf [ a owl:Restriction ] .
        "#;
        let statements = parse_reader(Cursor::new(doc), RdfFormat::Turtle).unwrap();

        assert_eq!(statements.len(), 2);
        assert!(statements
            .iter()
            .any(|q| q.object == Term::literal("Dog")));
        assert!(statements.iter().all(|q| q.subject.as_str() == "http://example.org/Dog"));
    }

    #[test]
    fn test_parse_ntriples_error() {
        let result = parse_reader(Cursor::new("<http://a> <http://b> ."), RdfFormat::NTriples);
        assert!(matches!(result, Err(StoreError::Parse { format: RdfFormat::NTriples, .. })));
    }
}
