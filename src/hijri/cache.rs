//! Memoization of merged Um Al-Qura tables.

use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;
use tracing::{debug, trace};

use super::adjustment::{Adjustments, MonthStarts};

/// Keeps the most recently merged [`MonthStarts`] together with the
/// [`Adjustments`] that produced it.
///
/// A lookup with equal adjustments (compared by value) returns the cached
/// table; any other lookup rebuilds and replaces it. The check and the
/// rebuild happen under one lock, so concurrent callers never observe a
/// table that does not match their own adjustments. Calendars alternating
/// between different adjustments therefore keep evicting each other.
#[derive(Debug, Default)]
pub struct TableCache {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    entry: Option<(Adjustments, Arc<MonthStarts>)>,
    rebuilds: usize,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache used by [`Calendar::new`](super::Calendar::new).
    pub fn shared() -> Arc<TableCache> {
        static SHARED: OnceLock<Arc<TableCache>> = OnceLock::new();
        SHARED.get_or_init(|| Arc::new(TableCache::new())).clone()
    }

    /// Returns the month starts with `adjustments` applied, merging them
    /// only if the cached table came from different adjustments.
    pub fn month_starts(&self, adjustments: &Adjustments) -> Arc<MonthStarts> {
        let mut inner = self.inner.lock();
        if let Some((cached_adj, table)) = &inner.entry {
            if cached_adj == adjustments {
                trace!(adjustments = adjustments.len(), "Um Al-Qura table cache hit");
                return table.clone();
            }
        }

        let table = Arc::new(MonthStarts::merged(adjustments));
        inner.entry = Some((adjustments.clone(), table.clone()));
        inner.rebuilds += 1;
        debug!(
            adjustments = adjustments.len(),
            months = table.len(),
            "Rebuilt Um Al-Qura table"
        );
        table
    }

    /// Number of times a table has been merged by this cache.
    pub fn rebuilds(&self) -> usize {
        self.inner.lock().rebuilds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_adjustments_share_table() {
        let cache = TableCache::new();
        let a = cache.month_starts(&Adjustments::new());
        let b = cache.month_starts(&Adjustments::new());
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(1, cache.rebuilds());

        let adj: Adjustments = [(3, 15229)].into_iter().collect();
        let c = cache.month_starts(&adj);
        let d = cache.month_starts(&adj.clone());
        assert!(Arc::ptr_eq(&c, &d));
        assert_eq!(2, cache.rebuilds());
    }

    #[test]
    fn different_adjustments_rebuild() {
        let cache = TableCache::new();
        let adj: Adjustments = [(3, 15229)].into_iter().collect();
        let plain = cache.month_starts(&Adjustments::new());
        let adjusted = cache.month_starts(&adj);
        assert_eq!(Some(15228), plain.get(3));
        assert_eq!(Some(15229), adjusted.get(3));

        // evicted by the adjusted table
        let again = cache.month_starts(&Adjustments::new());
        assert!(!Arc::ptr_eq(&plain, &again));
        assert_eq!(*plain, *again);
        assert_eq!(3, cache.rebuilds());
    }

    #[test]
    fn shared_is_singleton() {
        assert!(Arc::ptr_eq(&TableCache::shared(), &TableCache::shared()));
    }
}
