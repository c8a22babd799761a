use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Asset and symbol value types
///
/// A fixed-precision quantity in the EOS style: an integer amount of minor
/// units plus a symbol carrying the currency code and decimal precision.
/// Two assets are comparable only if their symbols (code and precision)
/// match; the operations that combine assets reject mismatches.

/// Currency code plus decimal precision. Precision is a digit count,
/// bounded by the ledger's maximum of 18; `new` clamps it, and the
/// conversions clamp again so a record built around the constructor cannot
/// overflow the scale arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    pub code: String,
    pub precision: u8,
}

impl Symbol {
    pub const MAX_PRECISION: u8 = 18;

    pub fn new(code: impl Into<String>, precision: u8) -> Self {
        Self {
            code: code.into(),
            precision: precision.min(Self::MAX_PRECISION),
        }
    }

    fn scale(&self) -> u32 {
        u32::from(self.precision.min(Self::MAX_PRECISION))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.precision, self.code)
    }
}

/// An immutable fixed-point quantity: `amount` is the value scaled by
/// `10^precision`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub amount: i64,
    pub symbol: Symbol,
}

impl Asset {
    pub fn new(amount: i64, symbol: Symbol) -> Self {
        Self { amount, symbol }
    }

    pub fn zero(symbol: Symbol) -> Self {
        Self { amount: 0, symbol }
    }

    /// The real-valued quantity, `amount / 10^precision`. Zero amounts map
    /// straight to zero without touching the scale divisor.
    pub fn to_real(&self) -> Decimal {
        if self.amount == 0 {
            return Decimal::ZERO;
        }
        Decimal::new(self.amount, self.symbol.scale())
    }

    /// Convert a real-valued quantity back to minor units at the symbol's
    /// precision, rounding half away from zero. Values outside the 64-bit
    /// minor-unit range are not validated and collapse to zero.
    pub fn from_real(value: Decimal, symbol: Symbol) -> Self {
        let scale = Decimal::from(10i64.pow(symbol.scale()));
        let scaled = (value * scale).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        Self {
            amount: scaled.to_i64().unwrap_or(0),
            symbol,
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = self.symbol.scale();
        if precision == 0 {
            return write!(f, "{} {}", self.amount, self.symbol.code);
        }
        let scale = 10i64.pow(precision);
        let integral = self.amount / scale;
        let fractional = (self.amount % scale).abs();
        let sign = if self.amount < 0 && integral == 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:0width$} {}",
            sign,
            integral,
            fractional,
            self.symbol.code,
            width = precision as usize
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn usdt() -> Symbol {
        Symbol::new("USDT", 4)
    }

    #[test]
    fn test_to_real() {
        let asset = Asset::new(27328, usdt());
        assert_eq!(asset.to_real(), dec!(2.7328));
    }

    #[test]
    fn test_to_real_zero() {
        assert_eq!(Asset::zero(usdt()).to_real(), Decimal::ZERO);
    }

    #[test]
    fn test_from_real_rounds_half_away_from_zero() {
        assert_eq!(Asset::from_real(dec!(2.73275), usdt()).amount, 27328);
        assert_eq!(Asset::from_real(dec!(-2.73275), usdt()).amount, -27328);
        assert_eq!(Asset::from_real(dec!(2.73274), usdt()).amount, 27327);
    }

    #[test]
    fn test_round_trip() {
        let asset = Asset::new(12345, Symbol::new("EOS", 4));
        assert_eq!(Asset::from_real(asset.to_real(), asset.symbol.clone()), asset);
    }

    #[test]
    fn test_oversized_precision_is_clamped() {
        assert_eq!(Symbol::new("EOS", 200).precision, Symbol::MAX_PRECISION);

        // Records built by hand (or deserialized) can still carry a bad
        // precision; the conversions clamp instead of overflowing.
        let malformed = Symbol {
            code: "EOS".to_string(),
            precision: 200,
        };
        let asset = Asset::new(10_000, malformed.clone());
        assert_eq!(asset.to_real(), Decimal::new(10_000, 18));
        assert_eq!(asset.to_string(), "0.000000000000010000 EOS");
        assert_eq!(
            Asset::from_real(Decimal::ONE, malformed).amount,
            1_000_000_000_000_000_000
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Asset::new(10000, Symbol::new("EOS", 4)).to_string(), "1.0000 EOS");
        assert_eq!(Asset::new(123456, Symbol::new("BOX", 6)).to_string(), "0.123456 BOX");
        assert_eq!(Asset::new(-5, usdt()).to_string(), "-0.0005 USDT");
        assert_eq!(Asset::new(7, Symbol::new("BOXGL", 0)).to_string(), "7 BOXGL");
    }
}
