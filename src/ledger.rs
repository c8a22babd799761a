use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::asset::{Asset, Symbol};
use crate::errors::ErrorCode;
use crate::state::{FeeConfig, PoolEmissionState, ReservePair};

/// Read interface over the externally published ledger state. Implementors
/// hand out point-in-time records; nothing here mutates or blocks.
pub trait Ledger {
    fn get_pair(&self, pool_id: u64) -> Option<ReservePair>;
    /// Fee configuration, falling back to the defaults when the ledger has
    /// none published.
    fn get_fee_config(&self) -> FeeConfig;
    fn get_pool_emission_state(&self, pool_id: u64) -> Option<PoolEmissionState>;
    /// Current time in seconds since the epoch, as of the snapshot.
    fn get_current_time(&self) -> u64;
    /// Outstanding supply of a token, keyed by its full symbol.
    fn get_supply(&self, symbol: &Symbol) -> Option<Asset>;
}

/// In-memory ledger snapshot. Callers populate it from whatever transport
/// they read the tables over; tests build it directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub pairs: HashMap<u64, ReservePair>,
    pub fee_config: Option<FeeConfig>,
    pub pools: HashMap<u64, PoolEmissionState>,
    /// Token supplies keyed by symbol code.
    pub supplies: HashMap<String, Asset>,
    pub now: u64,
}

impl Ledger for LedgerSnapshot {
    fn get_pair(&self, pool_id: u64) -> Option<ReservePair> {
        self.pairs.get(&pool_id).cloned()
    }

    fn get_fee_config(&self) -> FeeConfig {
        self.fee_config.unwrap_or_default()
    }

    fn get_pool_emission_state(&self, pool_id: u64) -> Option<PoolEmissionState> {
        self.pools.get(&pool_id).cloned()
    }

    fn get_current_time(&self) -> u64 {
        self.now
    }

    fn get_supply(&self, symbol: &Symbol) -> Option<Asset> {
        self.supplies
            .get(&symbol.code)
            .filter(|supply| supply.symbol == *symbol)
            .cloned()
    }
}

/// Get the reserves of a pair, ordered so the reserve denominated in `sort`
/// comes first. Swap callers depend on this ordering to line an input amount
/// up with its reserve.
pub fn get_reserves<L: Ledger>(
    ledger: &L,
    pool_id: u64,
    sort: &Symbol,
) -> Result<(Asset, Asset), ErrorCode> {
    let pair = ledger.get_pair(pool_id).ok_or(ErrorCode::NotFound(pool_id))?;

    if pair.reserve0.symbol == *sort {
        Ok((pair.reserve0, pair.reserve1))
    } else if pair.reserve1.symbol == *sort {
        Ok((pair.reserve1, pair.reserve0))
    } else {
        Err(ErrorCode::CurrencyMismatch)
    }
}

/// Effective swap fee in basis points: trade fee plus protocol fee.
pub fn get_fee<L: Ledger>(ledger: &L) -> u16 {
    ledger.get_fee_config().total()
}
