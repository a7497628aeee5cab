//! Simplified class graph
//!
//! Object properties collapse into `{uri, from, to}` links: one per pair of
//! domain and range classes. Grouping works on the raw `domain` and `range`
//! statements of the whole store, so no entity is hydrated on the way.

use knwl_domain::{GraphLink, Quad};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, warn};

#[derive(Debug, Default)]
struct Endpoints {
    from: Vec<String>,
    to: Vec<String>,
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

/// Cross-join domain and range statements into links
///
/// Properties missing either side are dropped. `keep_endpoint` is applied to
/// both ends of every emitted link.
pub fn simplify_object_properties(
    domain: &[Quad],
    range: &[Quad],
    keep_endpoint: impl Fn(&str) -> bool,
) -> Vec<GraphLink> {
    let mut grouped: BTreeMap<&str, Endpoints> = BTreeMap::new();

    for quad in domain {
        if let Some(class) = quad.object.as_uri() {
            let entry = grouped.entry(quad.subject.as_str()).or_default();
            push_unique(&mut entry.from, class.as_str());
        }
    }
    for quad in range {
        if let Some(class) = quad.object.as_uri() {
            let entry = grouped.entry(quad.subject.as_str()).or_default();
            push_unique(&mut entry.to, class.as_str());
        }
    }

    let mut links = Vec::new();
    for (uri, endpoints) in grouped {
        if endpoints.from.is_empty() || endpoints.to.is_empty() {
            if endpoints.to.is_empty() {
                // Datatype properties land here as well
                debug!(property = uri, "Skipping property without range");
            } else {
                warn!(property = uri, "Skipping object property without domain");
            }
            continue;
        }
        for from in &endpoints.from {
            for to in &endpoints.to {
                if keep_endpoint(from) && keep_endpoint(to) {
                    links.push(GraphLink {
                        uri: uri.to_string(),
                        from: from.clone(),
                        to: to.clone(),
                    });
                }
            }
        }
    }
    links
}

/// Endpoints of the links, deduplicated in first-seen order
pub fn link_endpoints(links: &[GraphLink]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut nodes = Vec::new();
    for link in links {
        for node in [&link.from, &link.to] {
            if seen.insert(node.as_str()) {
                nodes.push(node.clone());
            }
        }
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use knwl_domain::{vocabulary, Term, Uri};

    fn link(property: &str, predicate: Uri, class: &str) -> Quad {
        Quad::new(Uri::new(property).unwrap(), predicate, Uri::new(class).unwrap())
    }

    #[test]
    fn test_cross_product() {
        let domain = vec![
            link("http://x/owns", vocabulary::domain(), "http://x/A"),
            link("http://x/owns", vocabulary::domain(), "http://x/B"),
        ];
        let range = vec![link("http://x/owns", vocabulary::range(), "http://x/C")];

        let links = simplify_object_properties(&domain, &range, |_| true);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].from, "http://x/A");
        assert_eq!(links[1].from, "http://x/B");
        assert!(links.iter().all(|l| l.to == "http://x/C" && l.uri == "http://x/owns"));
    }

    #[test]
    fn test_incomplete_properties_dropped() {
        let domain = vec![link("http://x/age", vocabulary::domain(), "http://x/A")];
        let range = vec![link("http://x/orphan", vocabulary::range(), "http://x/B")];

        assert!(simplify_object_properties(&domain, &range, |_| true).is_empty());
    }

    #[test]
    fn test_endpoint_filter_applies_to_both_ends() {
        let domain = vec![link("http://x/p", vocabulary::domain(), "http://x/A")];
        let range = vec![
            link("http://x/p", vocabulary::range(), "http://x/B"),
            link("http://x/p", vocabulary::range(), "http://other/C"),
        ];

        let links = simplify_object_properties(&domain, &range, |e| e.starts_with("http://x/"));
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].to, "http://x/B");
    }

    #[test]
    fn test_literal_objects_ignored() {
        let domain = vec![Quad::new(
            Uri::new("http://x/p").unwrap(),
            vocabulary::domain(),
            Term::literal("http://x/A"),
        )];
        let range = vec![link("http://x/p", vocabulary::range(), "http://x/B")];

        assert!(simplify_object_properties(&domain, &range, |_| true).is_empty());
    }

    #[test]
    fn test_link_endpoints_first_seen_order() {
        let links = vec![
            GraphLink { uri: "p".into(), from: "B".into(), to: "A".into() },
            GraphLink { uri: "q".into(), from: "A".into(), to: "C".into() },
        ];
        assert_eq!(link_endpoints(&links), vec!["B", "A", "C"]);
    }
}
