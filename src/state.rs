use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::asset::{Asset, Symbol};
use crate::constants::{
    base_symbol, reward_symbol, REWARD_DECAY_BASE, REWARD_RATE_PER_WEIGHT_SEC, REWARD_VOLUME_UNIT,
};

/// Point-in-time snapshots of the ledger tables the pricing functions read.
/// The core never caches or invalidates these; freshness is the caller's
/// concern.

/// A pair row as published by the swap contract. Both reserves are
/// non-negative and denominated in distinct currencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservePair {
    pub id: u64,
    pub token0: Symbol,
    pub token1: Symbol,
    pub reserve0: Asset,
    pub reserve1: Asset,
    /// Numeric id of the pair's liquidity token.
    pub liquidity_token: u64,
}

/// Fee rates in basis points out of 10,000. The effective swap fee is the
/// sum of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeConfig {
    pub trade_fee_bps: u16,
    pub protocol_fee_bps: u16,
}

impl FeeConfig {
    pub fn total(&self) -> u16 {
        self.trade_fee_bps + self.protocol_fee_bps
    }
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            trade_fee_bps: 20,
            protocol_fee_bps: 10,
        }
    }
}

/// A mining-pool row: the undistributed reward balance plus the emission
/// schedule. Timestamps are seconds since the epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolEmissionState {
    pub pair_id: u64,
    pub weight: f64,
    pub balance: Asset,
    pub last_issue_time: u64,
    pub start_time: u64,
    pub end_time: u64,
}

/// Deployment constants of the reward model. These are tied to a specific
/// ledger deployment, not to the algorithm; `Default` carries the values
/// published by the reference deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardConfig {
    /// Trade side used to measure volume.
    pub base: Symbol,
    /// Token the reward is paid in.
    pub reward: Symbol,
    /// Issuance per weight-second, in reward minor units.
    pub rate_per_weight_sec: Decimal,
    /// Fractional share of the remaining pool kept per volume unit.
    pub decay_base: Decimal,
    /// Volume unit in base-currency minor units.
    pub volume_unit: i64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            base: base_symbol(),
            reward: reward_symbol(),
            rate_per_weight_sec: REWARD_RATE_PER_WEIGHT_SEC,
            decay_base: REWARD_DECAY_BASE,
            volume_unit: REWARD_VOLUME_UNIT,
        }
    }
}
