//! Cached coin and pair sets per exchange.
//!
//! Each exchange's sets live behind an `Arc` that is replaced whole on a
//! successful refresh, so readers never see a half-built snapshot. A failed
//! refresh keeps the previous snapshot and reports itself as stale.

use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};

use dashmap::DashMap;
use tracing::{error, info};

use crate::constants::events;
use crate::error::PriceResult;
use crate::exchange::http::{fetch_required, HttpTransport};
use crate::exchange::traits::PriceSource;
use crate::exchange::types::{Exchange, Instrument};

/// Immutable coin/pair snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolSet {
    pub coins: BTreeSet<String>,
    pub pairs: BTreeSet<String>,
}

impl SymbolSet {
    pub fn from_instruments(instruments: &[Instrument]) -> Self {
        let mut set = SymbolSet::default();
        for instrument in instruments {
            set.coins.insert(instrument.base.clone());
            set.pairs.insert(instrument.pair());
        }
        set
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty() && self.coins.is_empty()
    }
}

/// Result of one refresh attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum RefreshOutcome {
    Refreshed {
        exchange: Exchange,
        coins: usize,
        pairs: usize,
    },
    /// The fetch or parse failed; the previous snapshot is still served.
    Stale { exchange: Exchange, reason: String },
}

impl RefreshOutcome {
    pub fn exchange(&self) -> Exchange {
        match self {
            RefreshOutcome::Refreshed { exchange, .. } | RefreshOutcome::Stale { exchange, .. } => {
                *exchange
            }
        }
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, RefreshOutcome::Stale { .. })
    }
}

#[derive(Debug, Default)]
pub struct SymbolRegistry {
    books: DashMap<Exchange, Arc<SymbolSet>>,
    union: RwLock<Arc<SymbolSet>>,
}

impl SymbolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches `source`'s instrument list and swaps in the new snapshot.
    ///
    /// Never fails: errors are logged and reported as `RefreshOutcome::Stale`.
    pub async fn refresh(&self, source: &dyn PriceSource, http: &dyn HttpTransport) -> RefreshOutcome {
        let exchange = source.exchange();

        match Self::load(source, http).await {
            Ok(set) => {
                let (coins, pairs) = (set.coins.len(), set.pairs.len());
                self.replace(exchange, set);
                info!(
                    event = events::REGISTRY_REFRESHED,
                    "[REGISTRY] {} symbols updated: {} coins, {} pairs", exchange, coins, pairs
                );
                RefreshOutcome::Refreshed { exchange, coins, pairs }
            }
            Err(e) => {
                error!(
                    event = events::REGISTRY_STALE,
                    "[REGISTRY] Failed to update {} symbols: {}", exchange, e
                );
                RefreshOutcome::Stale {
                    exchange,
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Refreshes every source in order, then rebuilds the union sets.
    pub async fn refresh_all(
        &self,
        sources: &[&dyn PriceSource],
        http: &dyn HttpTransport,
    ) -> Vec<RefreshOutcome> {
        let mut outcomes = Vec::with_capacity(sources.len());
        for source in sources {
            outcomes.push(self.refresh(*source, http).await);
        }
        self.rebuild_union();
        outcomes
    }

    async fn load(source: &dyn PriceSource, http: &dyn HttpTransport) -> PriceResult<SymbolSet> {
        let body = fetch_required(http, &source.instruments_url()).await?;
        let instruments = source.parse_instruments(body)?;
        Ok(SymbolSet::from_instruments(&instruments))
    }

    /// Installs a snapshot for `exchange` and rebuilds the union.
    pub fn replace(&self, exchange: Exchange, set: SymbolSet) {
        self.books.insert(exchange, Arc::new(set));
        self.rebuild_union();
    }

    /// Holds the union write lock across the rebuild so concurrent
    /// refreshes cannot install an older union over a newer one.
    fn rebuild_union(&self) {
        let mut guard = self.union.write().unwrap_or_else(|p| p.into_inner());
        let mut union = SymbolSet::default();
        for entry in self.books.iter() {
            union.coins.extend(entry.value().coins.iter().cloned());
            union.pairs.extend(entry.value().pairs.iter().cloned());
        }
        *guard = Arc::new(union);
    }

    /// Current snapshot for `exchange` (empty until the first successful refresh).
    pub fn snapshot(&self, exchange: Exchange) -> Arc<SymbolSet> {
        self.books
            .get(&exchange)
            .map(|entry| Arc::clone(entry.value()))
            .unwrap_or_default()
    }

    pub fn union_snapshot(&self) -> Arc<SymbolSet> {
        let guard = self.union.read().unwrap_or_else(|p| p.into_inner());
        Arc::clone(&*guard)
    }

    pub fn coins(&self, exchange: Exchange) -> Vec<String> {
        self.snapshot(exchange).coins.iter().cloned().collect()
    }

    pub fn pairs(&self, exchange: Exchange) -> Vec<String> {
        self.snapshot(exchange).pairs.iter().cloned().collect()
    }

    pub fn all_coins(&self) -> Vec<String> {
        self.union_snapshot().coins.iter().cloned().collect()
    }

    pub fn all_pairs(&self) -> Vec<String> {
        self.union_snapshot().pairs.iter().cloned().collect()
    }
}
