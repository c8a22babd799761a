use thiserror::Error;

/// Error codes surfaced by the pricing functions. All of them are terminal
/// for the call; callers either validate preconditions up front or treat the
/// error as a rejected operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorCode {
    #[error("no pair or pool record for id {0}")]
    NotFound(u64),
    #[error("symbol does not match either side of the pair")]
    CurrencyMismatch,
    #[error("amount must be positive")]
    InsufficientAmount,
    #[error("input amount must be positive")]
    InsufficientInputAmount,
    #[error("output amount must be positive")]
    InsufficientOutputAmount,
    #[error("one or both reserves are empty")]
    InsufficientLiquidity,
    #[error("invalid liquidity token")]
    InvalidLpToken,
    #[error("requested output meets or exceeds the available reserve")]
    DegenerateQuote,
}
