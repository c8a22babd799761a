use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::asset::Symbol;

/// Fee denominator. Fee rates are expressed in basis points out of 10,000.
pub const MAX_BPS: u16 = 10_000;

/// Prefix of liquidity-token symbol codes ("BOXGL" belongs to pair 194).
/// The base-26 codec itself never adds or expects it; callers strip it.
pub const LP_TOKEN_PREFIX: &str = "BOX";

/// One volume unit of the reward decay curve: 1.0000 EOS in minor units.
pub const REWARD_VOLUME_UNIT: i64 = 10_000;

/// Decay base of the diminishing-marginal-reward curve.
pub const REWARD_DECAY_BASE: Decimal = dec!(0.9999);

/// Issuance per weight-second in reward minor units: 0.002 * 0.7 * 10^6.
pub const REWARD_RATE_PER_WEIGHT_SEC: Decimal = dec!(1400);

/// Symbol trade volume is measured in for reward purposes.
pub fn base_symbol() -> Symbol {
    Symbol::new("EOS", 4)
}

/// Symbol the mining reward is denominated in.
pub fn reward_symbol() -> Symbol {
    Symbol::new("BOX", 6)
}
