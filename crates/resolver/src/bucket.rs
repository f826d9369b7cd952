//! Single-pass tiered name matching.
//!
//! Every entity is offered once, in snapshot order, and lands in at most one
//! tier. A tier only accepts new entries while the tier above it is still
//! empty at that moment; entries already accepted are never evicted. Because
//! only the best non-empty tier is returned, the gating is unobservable for a
//! stable snapshot, and it keeps the scan to one forward pass with no sort.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Match-quality tiers, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchBucket {
    /// Field equals the query byte-for-byte.
    Exact,
    /// Field equals the query ignoring case.
    CaseInsensitive,
    /// Lower-cased field starts with the lower-cased query.
    PrefixMatch,
    /// Lower-cased field contains the lower-cased query.
    SubstringMatch,
}

impl MatchBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchBucket::Exact => "exact",
            MatchBucket::CaseInsensitive => "case_insensitive",
            MatchBucket::PrefixMatch => "prefix_match",
            MatchBucket::SubstringMatch => "substring_match",
        }
    }
}

impl fmt::Display for MatchBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query text prepared for comparison.
pub(crate) struct Query<'q> {
    raw: &'q str,
    lower: String,
}

impl<'q> Query<'q> {
    pub(crate) fn new(raw: &'q str) -> Self {
        Self {
            raw,
            lower: raw.to_lowercase(),
        }
    }
}

/// The four tier accumulators of one scan.
pub(crate) struct Buckets<'a, E> {
    exact: Vec<&'a E>,
    wrong_case: Vec<&'a E>,
    starts_with: Vec<&'a E>,
    contains: Vec<&'a E>,
}

impl<'a, E> Buckets<'a, E> {
    pub(crate) fn new() -> Self {
        Self {
            exact: Vec::new(),
            wrong_case: Vec::new(),
            starts_with: Vec::new(),
            contains: Vec::new(),
        }
    }

    /// Classify one entity by its compared fields.
    ///
    /// With two fields, each tier's predicate holds when either field
    /// satisfies it; the first tier that both holds and is open wins.
    pub(crate) fn offer(
        &mut self,
        entity: &'a E,
        name: &str,
        alt: Option<&str>,
        query: &Query<'_>,
    ) {
        if name == query.raw || alt == Some(query.raw) {
            self.exact.push(entity);
            return;
        }

        let lower_name = name.to_lowercase();
        let lower_alt = alt.map(str::to_lowercase);
        let any = |pred: &dyn Fn(&str) -> bool| {
            pred(&lower_name) || lower_alt.as_deref().is_some_and(|f| pred(f))
        };

        let lower_query = query.lower.as_str();
        if self.exact.is_empty() && any(&|f: &str| f == lower_query) {
            self.wrong_case.push(entity);
        } else if self.wrong_case.is_empty() && any(&|f: &str| f.starts_with(lower_query)) {
            self.starts_with.push(entity);
        } else if self.starts_with.is_empty() && any(&|f: &str| f.contains(lower_query)) {
            self.contains.push(entity);
        }
    }

    /// Best non-empty tier, or the empty substring tier when nothing matched.
    pub(crate) fn into_best(self) -> (MatchBucket, Vec<&'a E>) {
        if !self.exact.is_empty() {
            (MatchBucket::Exact, self.exact)
        } else if !self.wrong_case.is_empty() {
            (MatchBucket::CaseInsensitive, self.wrong_case)
        } else if !self.starts_with.is_empty() {
            (MatchBucket::PrefixMatch, self.starts_with)
        } else {
            (MatchBucket::SubstringMatch, self.contains)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan<'a>(names: &'a [&'a str], query: &str) -> (MatchBucket, Vec<&'a str>) {
        let query = Query::new(query);
        let mut buckets = Buckets::new();
        for name in names {
            buckets.offer(name, name, None, &query);
        }
        let (bucket, hits) = buckets.into_best();
        (bucket, hits.into_iter().copied().collect())
    }

    #[test]
    fn exact_beats_everything() {
        let names = ["general", "General", "general-chat", "off-general"];
        assert_eq!(scan(&names, "general"), (MatchBucket::Exact, vec!["general"]));
    }

    #[test]
    fn wrong_case_when_no_exact() {
        let names = ["GENERAL", "General", "general-chat"];
        assert_eq!(
            scan(&names, "general"),
            (MatchBucket::CaseInsensitive, vec!["GENERAL", "General"])
        );
    }

    #[test]
    fn prefix_then_substring() {
        let names = ["off-topic", "Offline", "kickoff"];
        assert_eq!(
            scan(&names, "OFF"),
            (MatchBucket::PrefixMatch, vec!["off-topic", "Offline"])
        );
        assert_eq!(
            scan(&["kickoff", "payoff", "on"], "off"),
            (MatchBucket::SubstringMatch, vec!["kickoff", "payoff"])
        );
    }

    #[test]
    fn no_match_is_empty_substring_tier() {
        let (bucket, hits) = scan(&["alpha", "beta"], "zeta");
        assert_eq!(bucket, MatchBucket::SubstringMatch);
        assert!(hits.is_empty());
    }

    #[test]
    fn lower_tier_entries_before_first_better_hit_are_kept_but_unreturned() {
        // "abc-x" lands in the prefix tier before the exact hit arrives and
        // "abc-y" after it, since the case-insensitive tier stays empty. The
        // exact tier is still the one returned.
        let names = ["abc-x", "abc", "abc-y"];
        let query = Query::new("abc");
        let mut buckets = Buckets::new();
        for name in &names {
            buckets.offer(name, name, None, &query);
        }
        assert_eq!(buckets.starts_with.len(), 2);
        assert_eq!(buckets.exact.len(), 1);
        let (bucket, hits) = buckets.into_best();
        assert_eq!(bucket, MatchBucket::Exact);
        assert_eq!(hits, vec![&"abc"]);
    }

    #[test]
    fn gated_wrong_case_falls_to_prefix_tier() {
        // Once an exact hit exists, a case-insensitive hit is gated out of its
        // own tier and is tested against the prefix tier instead.
        let names = ["abc", "ABC"];
        let query = Query::new("abc");
        let mut buckets = Buckets::new();
        for name in &names {
            buckets.offer(name, name, None, &query);
        }
        assert!(buckets.wrong_case.is_empty());
        assert_eq!(buckets.starts_with, vec![&"ABC"]);
    }

    #[test]
    fn either_field_qualifies_at_each_tier() {
        let query = Query::new("Nick");
        let mut buckets: Buckets<'_, &str> = Buckets::new();
        let member = "member";
        // account name only contains the query; nickname is exact.
        buckets.offer(&member, "xxnickxx", Some("Nick"), &query);
        let (bucket, hits) = buckets.into_best();
        assert_eq!(bucket, MatchBucket::Exact);
        assert_eq!(hits.len(), 1);
    }
}
