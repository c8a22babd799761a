/// Defibox Math Library
///
/// Read-only calculation functions for Defibox-style constant-product pools:
/// swap quoting (forward, inverse and fee-free proportional), liquidity
/// withdrawal shares, the base-26 liquidity-token symbol codec and the
/// time-decayed mining-reward estimator. Everything operates on
/// caller-supplied ledger snapshots; nothing here mutates state.

pub mod asset;
pub mod codec;
pub mod constants;
pub mod errors;
pub mod ledger;
pub mod liquidity;
pub mod rewards;
pub mod state;
pub mod swap;

// Re-export the surface for convenience
pub use asset::{Asset, Symbol};
pub use codec::{decode_pool_id, encode_pool_id};
pub use constants::{LP_TOKEN_PREFIX, MAX_BPS};
pub use errors::ErrorCode;
pub use ledger::{get_fee, get_reserves, Ledger, LedgerSnapshot};
pub use liquidity::{get_withdraw_out, split_reserves};
pub use rewards::{estimate_reward, get_rewards};
pub use state::{FeeConfig, PoolEmissionState, ReservePair, RewardConfig};
pub use swap::{get_amount_in, get_amount_out, quote};
