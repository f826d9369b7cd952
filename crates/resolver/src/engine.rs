use std::time::Instant;

use tracing::{debug, trace, Level};

use crate::bucket::{Buckets, Query};
use crate::cache::SnowflakeView;
use crate::kind::KindSpec;
use crate::metrics::metrics_recorder;
use crate::pattern::parse_user_reference;
use crate::snowflake::{has_id_shape, Snowflake};
use crate::types::{Resolution, ResolverConfig, Strategy};


/// Resolve `query` against `view` with the default [`ResolverConfig`].
///
/// Never fails: a query that matches nothing yields an empty resolution in
/// the substring bucket.
pub fn resolve<'a, E, V>(query: &str, view: V, spec: &KindSpec<E>) -> Resolution<'a, E>
where
    E: 'a,
    V: SnowflakeView<'a, E>,
{
    resolve_with(query, view, spec, &ResolverConfig::default())
}

/// Resolve `query` against `view`.
///
/// Special cases are tried first, in order: a bare id, the kind's mention
/// syntax, then a `Name#0000` reference for kinds with a discriminator. A
/// special case that recognises the query but finds nothing falls through to
/// the name scan with the full query as the literal text.
///
/// `config.max_results` truncates the winning set after it is chosen. A cap
/// of zero fails [`ResolverConfig::validate`] and is ignored here, so a live
/// id or mention always yields its entity.
/// `config.prefer_cluster` has no effect here; it only steers scope
/// selection in [`Session`](crate::Session).
pub fn resolve_with<'a, E, V>(
    query: &str,
    view: V,
    spec: &KindSpec<E>,
    config: &ResolverConfig,
) -> Resolution<'a, E>
where
    E: 'a,
    V: SnowflakeView<'a, E>,
{
    let start = Instant::now();
    let span = tracing::span!(Level::DEBUG, "resolver.resolve", kind = %spec.kind);
    let _guard = span.enter();

    let mut resolution = match short_circuit(query, &view, spec) {
        Some(found) => {
            debug!(
                kind = %spec.kind,
                strategy = %found.strategy(),
                hits = found.len(),
                "resolve_short_circuit"
            );
            found
        }
        None => scan(query, &view, spec),
    };

    if let Some(max) = config.max_results.filter(|&max| max > 0) {
        resolution.truncate(max);
    }

    let latency = start.elapsed();
    debug!(
        kind = %spec.kind,
        outcome = %resolution.strategy(),
        hits = resolution.len(),
        elapsed_micros = latency.as_micros(),
        "resolve_complete"
    );

    if let Some(recorder) = metrics_recorder() {
        recorder.record_resolve(spec.kind, resolution.strategy(), latency, resolution.len());
    }

    resolution
}

fn short_circuit<'a, E, V>(query: &str, view: &V, spec: &KindSpec<E>) -> Option<Resolution<'a, E>>
where
    E: 'a,
    V: SnowflakeView<'a, E> + ?Sized,
{
    if has_id_shape(query) {
        match Snowflake::parse_id(query).and_then(|id| view.get_by_id(id)) {
            Some(hit) => return Some(Resolution::single(Strategy::Direct, hit)),
            None => trace!(kind = %spec.kind, query = ?query, "id_lookup_miss"),
        }
    }

    if let Some(mention) = spec.mention.and_then(|syntax| syntax.parse(query)) {
        let hit = mention
            .id
            .and_then(|id| view.get_by_id(id))
            .filter(|&entity| match mention.name {
                Some(name) => (spec.name)(entity) == name,
                None => true,
            });
        match hit {
            Some(hit) => return Some(Resolution::single(Strategy::Mention, hit)),
            None => trace!(kind = %spec.kind, query = ?query, "mention_lookup_miss"),
        }
    }

    if let Some(discriminator) = spec.discriminator {
        if let Some(reference) = parse_user_reference(query) {
            let wanted = reference.name.to_lowercase();
            let hits: Vec<&'a E> = view
                .iter()
                .filter(|&entity| {
                    discriminator(entity) == reference.discriminator
                        && (spec.name)(entity).to_lowercase() == wanted
                })
                .collect();
            if !hits.is_empty() {
                return Some(Resolution::new(Strategy::Reference, hits));
            }
            trace!(kind = %spec.kind, query = ?query, "reference_miss");
        }
    }

    None
}

fn scan<'a, E, V>(query: &str, view: &V, spec: &KindSpec<E>) -> Resolution<'a, E>
where
    E: 'a,
    V: SnowflakeView<'a, E> + ?Sized,
{
    let prepared = Query::new(query);
    let mut buckets = Buckets::new();
    for entity in view.iter() {
        let alt = spec.alt_name.map(|field| field(entity));
        buckets.offer(entity, (spec.name)(entity), alt, &prepared);
    }
    let (bucket, hits) = buckets.into_best();
    Resolution::new(Strategy::Scan(bucket), hits)
}
