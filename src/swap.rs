use rust_decimal::Decimal;

use crate::asset::Asset;
use crate::constants::MAX_BPS;
use crate::errors::ErrorCode;

/// Swap pricing for constant-product pools
///
/// All three quotes take same-direction reserves (input-side reserve first,
/// as returned by `get_reserves`), run the formula in decimal space and
/// convert back to minor units rounding half away from zero. Fee rates are
/// basis points out of 10,000; a full 10,000 bps fee leaves nothing to
/// trade and the inverse quote rejects it as degenerate.

fn bps(rate: u16) -> Decimal {
    Decimal::from(rate)
}

/// Proportional quote with no fee applied:
/// `amount_b = amount_a * reserve_b / reserve_a`.
pub fn quote(amount_a: &Asset, reserve_a: &Asset, reserve_b: &Asset) -> Result<Asset, ErrorCode> {
    if amount_a.symbol != reserve_a.symbol {
        return Err(ErrorCode::CurrencyMismatch);
    }
    if amount_a.amount <= 0 {
        return Err(ErrorCode::InsufficientAmount);
    }
    if reserve_a.amount <= 0 || reserve_b.amount <= 0 {
        return Err(ErrorCode::InsufficientLiquidity);
    }

    let amount_b = amount_a.to_real() * reserve_b.to_real() / reserve_a.to_real();
    Ok(Asset::from_real(amount_b, reserve_b.symbol.clone()))
}

/// Forward quote: output amount for a given input, with the fee deducted
/// from the input side before the constant-product formula.
pub fn get_amount_out(
    amount_in: &Asset,
    reserve_in: &Asset,
    reserve_out: &Asset,
    fee_bps: u16,
) -> Result<Asset, ErrorCode> {
    if amount_in.symbol != reserve_in.symbol {
        return Err(ErrorCode::CurrencyMismatch);
    }
    if amount_in.amount <= 0 {
        return Err(ErrorCode::InsufficientInputAmount);
    }
    if reserve_in.amount <= 0 || reserve_out.amount <= 0 {
        return Err(ErrorCode::InsufficientLiquidity);
    }

    let amount_in_with_fee = amount_in.to_real() * (bps(MAX_BPS) - bps(fee_bps));
    let numerator = amount_in_with_fee * reserve_out.to_real();
    let denominator = reserve_in.to_real() * bps(MAX_BPS) + amount_in_with_fee;
    Ok(Asset::from_real(numerator / denominator, reserve_out.symbol.clone()))
}

/// Inverse quote: input amount required for a given output. The requested
/// output must stay strictly below the output reserve, and the fee strictly
/// below 10,000 bps; at either boundary the denominator degenerates and the
/// pool cannot fill the trade at any price.
pub fn get_amount_in(
    amount_out: &Asset,
    reserve_in: &Asset,
    reserve_out: &Asset,
    fee_bps: u16,
) -> Result<Asset, ErrorCode> {
    if amount_out.symbol != reserve_out.symbol {
        return Err(ErrorCode::CurrencyMismatch);
    }
    if amount_out.amount <= 0 {
        return Err(ErrorCode::InsufficientOutputAmount);
    }
    if reserve_in.amount <= 0 || reserve_out.amount <= 0 {
        return Err(ErrorCode::InsufficientLiquidity);
    }
    if amount_out.amount >= reserve_out.amount || fee_bps >= MAX_BPS {
        return Err(ErrorCode::DegenerateQuote);
    }

    let numerator = reserve_in.to_real() * amount_out.to_real() * bps(MAX_BPS);
    let denominator =
        (reserve_out.to_real() - amount_out.to_real()) * (bps(MAX_BPS) - bps(fee_bps));
    Ok(Asset::from_real(numerator / denominator, reserve_in.symbol.clone()))
}
