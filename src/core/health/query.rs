//! Query mode selection
//!
//! Node, service, tags and `all` are not mutually exclusive on the command
//! line, so the query is picked from an ordered rule table. The first rule
//! that matches wins; reordering `SELECTION_RULES` changes behaviour.

use std::collections::BTreeSet;
use std::fmt;

use crate::config::TargetSpec;

/// The single registry query issued for an invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode<'a> {
    /// Checks of service instances carrying every one of `tags`
    ServiceWithTags {
        service: &'a str,
        tags: &'a BTreeSet<String>,
    },
    /// Every check reported by a node
    Node(&'a str),
    /// Every check in the fleet, any state
    All,
    /// Checks of a service, no tag filter
    Service(&'a str),
    /// Nothing selected; the record set is empty
    NoQuery,
}

type SelectionRule = fn(&TargetSpec) -> Option<QueryMode<'_>>;

const SELECTION_RULES: [SelectionRule; 4] = [
    select_service_with_tags,
    select_node,
    select_all,
    select_service,
];

fn select_service_with_tags(spec: &TargetSpec) -> Option<QueryMode<'_>> {
    let service = spec.service()?;
    spec.has_tags().then_some(QueryMode::ServiceWithTags {
        service,
        tags: &spec.tags,
    })
}

fn select_node(spec: &TargetSpec) -> Option<QueryMode<'_>> {
    spec.node().map(QueryMode::Node)
}

fn select_all(spec: &TargetSpec) -> Option<QueryMode<'_>> {
    spec.all.then_some(QueryMode::All)
}

fn select_service(spec: &TargetSpec) -> Option<QueryMode<'_>> {
    spec.service().map(QueryMode::Service)
}

impl<'a> QueryMode<'a> {
    /// Pick the query for `spec`. Depends only on which fields are set.
    pub fn select(spec: &'a TargetSpec) -> Self {
        SELECTION_RULES
            .iter()
            .find_map(|rule| rule(spec))
            .unwrap_or(QueryMode::NoQuery)
    }
}

impl fmt::Display for QueryMode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryMode::ServiceWithTags { service, tags } => {
                let tags: Vec<&str> = tags.iter().map(String::as_str).collect();
                write!(
                    f,
                    "service health for {:?} with tags [{}]",
                    service,
                    tags.join(", ")
                )
            }
            QueryMode::Node(node) => write!(f, "health checks for node {:?}", node),
            QueryMode::All => f.write_str("health checks for \"any\""),
            QueryMode::Service(service) => write!(f, "service health for {:?}", service),
            QueryMode::NoQuery => f.write_str("no query"),
        }
    }
}
