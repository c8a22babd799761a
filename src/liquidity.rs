use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::asset::Asset;
use crate::codec::decode_pool_id;
use crate::errors::ErrorCode;
use crate::ledger::Ledger;
use crate::state::ReservePair;

/// Liquidity-withdrawal math
///
/// Burning liquidity tokens entitles the holder to a proportional share of
/// each pooled reserve. Shares are truncated toward zero, never rounded up,
/// so the pool can always cover them.

/// Split a pair's reserves for a liquidity-token amount against its
/// outstanding supply. The token's symbol code must decode (under `prefix`)
/// to the pair it claims a share of.
pub fn split_reserves(
    lp_amount: &Asset,
    lp_supply: &Asset,
    pair: &ReservePair,
    prefix: &str,
) -> Result<(Asset, Asset), ErrorCode> {
    if lp_supply.amount <= 0 || lp_amount.symbol != lp_supply.symbol {
        return Err(ErrorCode::InvalidLpToken);
    }
    let pool_id = decode_pool_id(&lp_amount.symbol.code, prefix);
    if pool_id == 0 || pool_id != pair.id {
        return Err(ErrorCode::InvalidLpToken);
    }

    let share = Decimal::from(lp_amount.amount) / Decimal::from(lp_supply.amount);
    let amount0 = (Decimal::from(pair.reserve0.amount) * share).trunc();
    let amount1 = (Decimal::from(pair.reserve1.amount) * share).trunc();

    Ok((
        Asset::new(amount0.to_i64().unwrap_or(0), pair.reserve0.symbol.clone()),
        Asset::new(amount1.to_i64().unwrap_or(0), pair.reserve1.symbol.clone()),
    ))
}

/// Ledger-level withdrawal quote: decode the pair id from the token symbol,
/// read the pair and outstanding supply, then split the reserves.
pub fn get_withdraw_out<L: Ledger>(
    ledger: &L,
    lp_amount: &Asset,
    prefix: &str,
) -> Result<(Asset, Asset), ErrorCode> {
    let pool_id = decode_pool_id(&lp_amount.symbol.code, prefix);
    if pool_id == 0 {
        return Err(ErrorCode::InvalidLpToken);
    }
    let pair = ledger.get_pair(pool_id).ok_or(ErrorCode::NotFound(pool_id))?;
    let supply = ledger
        .get_supply(&lp_amount.symbol)
        .ok_or(ErrorCode::InvalidLpToken)?;

    split_reserves(lp_amount, &supply, &pair, prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::Symbol;
    use crate::constants::LP_TOKEN_PREFIX;
    use crate::ledger::LedgerSnapshot;

    fn lp(amount: i64) -> Asset {
        Asset::new(amount, Symbol::new("BOXGL", 0))
    }

    fn pair() -> ReservePair {
        ReservePair {
            id: 194,
            token0: Symbol::new("EOS", 4),
            token1: Symbol::new("USDT", 4),
            reserve0: Asset::new(10_000_000, Symbol::new("EOS", 4)),
            reserve1: Asset::new(20_000_000, Symbol::new("USDT", 4)),
            liquidity_token: 194,
        }
    }

    #[test]
    fn test_split_reserves_proportional() {
        let (share0, share1) = split_reserves(&lp(100), &lp(1_000), &pair(), LP_TOKEN_PREFIX).unwrap();
        assert_eq!(share0.to_string(), "100.0000 EOS");
        assert_eq!(share1.to_string(), "200.0000 USDT");
    }

    #[test]
    fn test_split_reserves_truncates_toward_zero() {
        let mut pair = pair();
        pair.reserve0.amount = 10;
        pair.reserve1.amount = 11;
        let (share0, share1) = split_reserves(&lp(1), &lp(3), &pair, LP_TOKEN_PREFIX).unwrap();
        assert_eq!(share0.amount, 3); // 10 / 3 = 3.33..
        assert_eq!(share1.amount, 3); // 11 / 3 = 3.66..
    }

    #[test]
    fn test_split_reserves_rejects_zero_supply() {
        assert_eq!(
            split_reserves(&lp(100), &lp(0), &pair(), LP_TOKEN_PREFIX).unwrap_err(),
            ErrorCode::InvalidLpToken
        );
    }

    #[test]
    fn test_split_reserves_rejects_foreign_token() {
        // "BOXGM" decodes to 195, not this pair.
        let foreign = Asset::new(100, Symbol::new("BOXGM", 0));
        let supply = Asset::new(1_000, Symbol::new("BOXGM", 0));
        assert_eq!(
            split_reserves(&foreign, &supply, &pair(), LP_TOKEN_PREFIX).unwrap_err(),
            ErrorCode::InvalidLpToken
        );
    }

    #[test]
    fn test_split_reserves_rejects_undecodable_token() {
        let bogus = Asset::new(100, Symbol::new("GL", 0));
        let supply = Asset::new(1_000, Symbol::new("GL", 0));
        assert_eq!(
            split_reserves(&bogus, &supply, &pair(), LP_TOKEN_PREFIX).unwrap_err(),
            ErrorCode::InvalidLpToken
        );
    }

    #[test]
    fn test_get_withdraw_out_reads_pair_and_supply() {
        let mut snapshot = LedgerSnapshot::default();
        snapshot.pairs.insert(194, pair());
        snapshot.supplies.insert("BOXGL".to_string(), lp(1_000));

        let (share0, share1) = get_withdraw_out(&snapshot, &lp(250), LP_TOKEN_PREFIX).unwrap();
        assert_eq!(share0.to_string(), "250.0000 EOS");
        assert_eq!(share1.to_string(), "500.0000 USDT");
    }

    #[test]
    fn test_get_withdraw_out_unknown_pair() {
        let snapshot = LedgerSnapshot::default();
        assert_eq!(
            get_withdraw_out(&snapshot, &lp(100), LP_TOKEN_PREFIX).unwrap_err(),
            ErrorCode::NotFound(194)
        );
    }

    #[test]
    fn test_get_withdraw_out_missing_supply() {
        let mut snapshot = LedgerSnapshot::default();
        snapshot.pairs.insert(194, pair());
        assert_eq!(
            get_withdraw_out(&snapshot, &lp(100), LP_TOKEN_PREFIX).unwrap_err(),
            ErrorCode::InvalidLpToken
        );
    }
}
