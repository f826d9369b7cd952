use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::bucket::MatchBucket;
use crate::error::ResolverError;

/// How a [`Resolution`] was produced.
///
/// The first three short-circuit the name scan; `Scan` carries the tier the
/// returned entities came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "bucket", rename_all = "snake_case")]
pub enum Strategy {
    /// The whole query was an identifier that resolved.
    Direct,
    /// A mention (`<@ID>`, `<#ID>`, `<@&ID>`, `<:NAME:ID>`) that resolved.
    Mention,
    /// A `Name#0000` reference with at least one hit.
    Reference,
    /// Generic name scan.
    Scan(MatchBucket),
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Direct => f.write_str("direct"),
            Strategy::Mention => f.write_str("mention"),
            Strategy::Reference => f.write_str("reference"),
            Strategy::Scan(bucket) => write!(f, "scan:{bucket}"),
        }
    }
}

/// Outcome of one resolve call: borrowed entities in snapshot order, plus
/// the strategy that found them.
///
/// The entities are shared borrows of the snapshot, so callers can read but
/// never modify what the client library cached.
#[derive(Debug)]
pub struct Resolution<'a, E> {
    strategy: Strategy,
    hits: Vec<&'a E>,
}

impl<'a, E> Clone for Resolution<'a, E> {
    fn clone(&self) -> Self {
        Self {
            strategy: self.strategy,
            hits: self.hits.clone(),
        }
    }
}

impl<'a, E> Resolution<'a, E> {
    pub(crate) fn new(strategy: Strategy, hits: Vec<&'a E>) -> Self {
        Self { strategy, hits }
    }

    pub(crate) fn single(strategy: Strategy, hit: &'a E) -> Self {
        Self {
            strategy,
            hits: vec![hit],
        }
    }

    pub(crate) fn truncate(&mut self, max: usize) {
        self.hits.truncate(max);
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Tier of a scan result; `None` for short-circuited lookups.
    pub fn bucket(&self) -> Option<MatchBucket> {
        match self.strategy {
            Strategy::Scan(bucket) => Some(bucket),
            _ => None,
        }
    }

    pub fn hits(&self) -> &[&'a E] {
        &self.hits
    }

    /// The entity when exactly one was found.
    pub fn unique(&self) -> Option<&'a E> {
        match self.hits.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    pub fn into_vec(self) -> Vec<&'a E> {
        self.hits
    }
}

impl<'a, E> Deref for Resolution<'a, E> {
    type Target = [&'a E];

    fn deref(&self) -> &Self::Target {
        &self.hits
    }
}

impl<'a, E> IntoIterator for Resolution<'a, E> {
    type Item = &'a E;
    type IntoIter = std::vec::IntoIter<&'a E>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.into_iter()
    }
}

/// Resolver-wide tuning.
///
/// The defaults reproduce the plain algorithm: cluster-wide scopes when a
/// shard manager is present and every entity of the winning tier returned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Route global lookups through the shard manager when one is attached.
    #[serde(default = "ResolverConfig::default_prefer_cluster")]
    pub prefer_cluster: bool,
    /// Cap applied after tier selection; `None` returns the whole tier.
    #[serde(default)]
    pub max_results: Option<usize>,
}

impl ResolverConfig {
    pub(crate) fn default_prefer_cluster() -> bool {
        true
    }

    pub fn validate(&self) -> Result<(), ResolverError> {
        if self.max_results == Some(0) {
            return Err(ResolverError::InvalidConfig(
                "max_results must be greater than zero when set".into(),
            ));
        }
        Ok(())
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            prefer_cluster: Self::default_prefer_cluster(),
            max_results: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = ResolverConfig::default();
        assert!(cfg.validate().is_ok());
        assert!(cfg.prefer_cluster);
        assert_eq!(cfg.max_results, None);
    }

    #[test]
    fn zero_max_results_rejected() {
        let cfg = ResolverConfig {
            max_results: Some(0),
            ..ResolverConfig::default()
        };
        let err = cfg.validate().expect_err("config should be invalid");
        match err {
            ResolverError::InvalidConfig(msg) => assert!(msg.contains("max_results")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn config_fields_default_when_missing() {
        let cfg: ResolverConfig = serde_json::from_str("{}").expect("empty object");
        assert_eq!(cfg, ResolverConfig::default());
    }

    #[test]
    fn strategy_display() {
        assert_eq!(Strategy::Direct.to_string(), "direct");
        assert_eq!(
            Strategy::Scan(MatchBucket::PrefixMatch).to_string(),
            "scan:prefix_match"
        );
    }

    #[test]
    fn resolution_accessors() {
        let items = ["a", "b"];
        let res = Resolution::new(Strategy::Scan(MatchBucket::Exact), items.iter().collect());
        assert_eq!(res.len(), 2);
        assert_eq!(res.bucket(), Some(MatchBucket::Exact));
        assert!(res.unique().is_none());

        let one = Resolution::single(Strategy::Direct, &items[1]);
        assert_eq!(one.unique(), Some(&"b"));
        assert_eq!(one.bucket(), None);
    }
}
