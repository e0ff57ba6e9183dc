//! Query target configuration

use std::collections::{BTreeSet, HashSet};

/// What to query and how to reduce the result
///
/// Built once before evaluation and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetSpec {
    /// Node whose checks should be evaluated
    pub node: Option<String>,
    /// Service whose checks should be evaluated
    pub service: Option<String>,
    /// Tags every matching service instance must carry
    pub tags: BTreeSet<String>,
    /// Evaluate every check in the fleet
    pub all: bool,
    /// Services whose checks are ignored
    pub exclude_services: HashSet<String>,
    /// Report CRITICAL when the query returns no checks at all
    pub fail_if_not_found: bool,
}

impl TargetSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node<S: Into<String>>(mut self, node: S) -> Self {
        self.node = non_empty(node.into());
        self
    }

    pub fn with_service<S: Into<String>>(mut self, service: S) -> Self {
        self.service = non_empty(service.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags
            .into_iter()
            .map(Into::into)
            .filter(|tag: &String| !tag.is_empty())
            .collect();
        self
    }

    pub fn with_all(mut self, all: bool) -> Self {
        self.all = all;
        self
    }

    pub fn excluding<I, S>(mut self, services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_services
            .extend(services.into_iter().map(Into::into));
        self
    }

    pub fn with_fail_if_not_found(mut self, fail: bool) -> Self {
        self.fail_if_not_found = fail;
        self
    }

    /// Node name, if set and non-empty
    pub fn node(&self) -> Option<&str> {
        self.node.as_deref().filter(|node| !node.is_empty())
    }

    /// Service name, if set and non-empty
    pub fn service(&self) -> Option<&str> {
        self.service.as_deref().filter(|service| !service.is_empty())
    }

    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }

    #[inline]
    pub fn is_excluded(&self, service_name: &str) -> bool {
        self.exclude_services.contains(service_name)
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
