#![no_std]

pub const USD_TICKER: &[u8] = b"USD";

pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;
pub const RAY_PRECISION: usize = 27;

/// Fixed-point unit for prices, USD values and every admin supplied fraction
pub const WAD: u128 = 1_000_000_000_000_000_000; // 1 USD or 100%
pub const WAD_PRECISION: usize = 18;

/// Upper bound for the loan-to-value of any market (95%)
pub const MAX_LOAN_TO_VALUE: u128 = 950_000_000_000_000_000;

/// Upper bound for the liquidation incentive (50%)
pub const MAX_LIQUIDATION_INCENTIVE: u128 = 500_000_000_000_000_000;

/// Upper bound for the reserve factor of a market (100%)
pub const MAX_RESERVE_FACTOR: u128 = WAD;

/// Raw units by which a repayment may exceed a market's total borrows
pub const MAX_BORROWED_DUST: u64 = 1_000;

/// Returned as risk ratio when an account has debt but no usable collateral
pub const MAX_RISK_RATIO: u128 = u128::MAX;

/// Default tolerated age of an oracle round (15 minutes)
pub const DEFAULT_MAX_PRICE_STALE_SECONDS: u64 = 900;
