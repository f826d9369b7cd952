//! Resolution counters for bots that want to see how lookups land.
//!
//! A bot answering `!ban spike` cares whether "spike" hit a mention, an id or
//! only a substring, and how often queries come back ambiguous. The resolver
//! reports one event per finished lookup to whatever [`ResolveMetrics`] is
//! installed; with none installed the hook costs one read lock.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

use crate::kind::EntityKind;
use crate::types::Strategy;

/// Metrics observer for resolve calls.
pub trait ResolveMetrics: Send + Sync {
    /// Record one finished resolution.
    ///
    /// `outcome` is the strategy that produced the result (for scans it
    /// carries the winning bucket) and `hits` is the number of entities
    /// returned after `max_results` truncation.
    fn record_resolve(&self, kind: EntityKind, outcome: Strategy, latency: Duration, hits: usize);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn ResolveMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn ResolveMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn ResolveMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Swap the process-wide recorder; `None` turns reporting off.
pub fn set_resolve_metrics(recorder: Option<Arc<dyn ResolveMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
