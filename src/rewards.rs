use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, MathematicalOps};

use crate::asset::Asset;
use crate::ledger::Ledger;
use crate::state::{PoolEmissionState, RewardConfig};

/// Mining-reward estimation
///
/// A trade earns a share of a pool's undistributed reward balance. The pool
/// total grows linearly with time since the last issuance; the trade's share
/// follows a diminishing-marginal-reward curve over its base-currency
/// volume, so each additional volume unit peels off a smaller slice of what
/// remains:
///
///   total  = balance + weight * rate * elapsed
///   reward = total - total * decay_base ^ (volume / volume_unit)
///
/// Volume units are whole (integer division); trades below one unit earn
/// nothing. Everything is an estimate against a snapshot; the ledger settles
/// actual rewards on issuance.

/// Estimate the reward earned by a trade at time `now`. Returns a zero
/// reward asset when neither trade side is the base currency or when the
/// emission window has closed.
pub fn estimate_reward(
    input: &Asset,
    output: &Asset,
    pool: &PoolEmissionState,
    now: u64,
    config: &RewardConfig,
) -> Asset {
    let zero = Asset::zero(config.reward.clone());

    // Volume is measured on whichever side is the base currency.
    let volume = if input.symbol == config.base { input } else { output };
    if volume.symbol != config.base {
        return zero;
    }
    if now > pool.end_time {
        return zero;
    }

    let elapsed = now.saturating_sub(pool.last_issue_time);
    let weight = Decimal::from_f64(pool.weight).unwrap_or_default();
    let total = Decimal::from(pool.balance.amount)
        + weight * config.rate_per_weight_sec * Decimal::from(elapsed);

    let units = volume.amount / config.volume_unit;
    if units <= 0 {
        return zero;
    }
    let reward = (total - total * config.decay_base.powi(units)).trunc();

    Asset::new(reward.to_i64().unwrap_or(0), config.reward.clone())
}

/// Ledger-level reward quote for a trade on a pair. Pools with no emission
/// record simply pay nothing.
pub fn get_rewards<L: Ledger>(
    ledger: &L,
    pool_id: u64,
    input: &Asset,
    output: &Asset,
    config: &RewardConfig,
) -> Asset {
    match ledger.get_pool_emission_state(pool_id) {
        Some(pool) => estimate_reward(input, output, &pool, ledger.get_current_time(), config),
        None => Asset::zero(config.reward.clone()),
    }
}
