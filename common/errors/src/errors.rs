#![no_std]

// Configuration
pub static ERROR_INVALID_LOAN_TO_VALUE: &[u8] = b"Invalid loan-to-value.";

pub static ERROR_INVALID_LIQUIDATION_INCENTIVE: &[u8] = b"Invalid liquidation incentive.";

pub static ERROR_INVALID_RISK_THRESHOLD: &[u8] = b"Invalid liquidation risk threshold.";

pub static ERROR_INVALID_MAX_LIQUIDATE_RATE: &[u8] = b"Invalid max liquidate rate.";

pub static ERROR_INVALID_RESERVE_FACTOR: &[u8] = b"Invalid reserve factor.";

pub static ERROR_INVALID_KINK: &[u8] = b"Invalid kink, must be at most 100%.";

pub static ERROR_INVALID_BLOCKS_PER_YEAR: &[u8] = b"Blocks per year must be positive.";

pub static ERROR_INVALID_ORACLE_BINDING: &[u8] = b"Invalid oracle binding.";

pub static ERROR_INVALID_AGGREGATOR: &[u8] = b"Invalid price aggregator address.";

pub static ERROR_INVALID_LIQUIDITY_POOL_TEMPLATE: &[u8] = b"Invalid liquidity pool template.";

pub static ERROR_TEMPLATE_EMPTY: &[u8] = b"Liquidity pool contract template is empty.";

pub static ERROR_ARRAY_LENGTH_MISMATCH: &[u8] = b"Array lengths do not match.";

// Market state
pub static ERROR_ASSET_NOT_SUPPORTED: &[u8] = b"Asset not supported.";

pub static ERROR_ASSET_ALREADY_SUPPORTED: &[u8] = b"Asset already supported.";

pub static ERROR_MARKET_NOT_ACTIVE: &[u8] = b"Market is not active.";

pub static ERROR_MARKET_FROZEN: &[u8] = b"Market is frozen.";

pub static ERROR_MARKET_ALREADY_FROZEN: &[u8] = b"Market is already frozen.";

pub static ERROR_MARKET_NOT_FROZEN: &[u8] = b"Market is not frozen.";

pub static ERROR_SUPPLY_PAUSED: &[u8] = b"Supply is paused for this market.";

pub static ERROR_BORROW_PAUSED: &[u8] = b"Borrow is paused for this market.";

pub static ERROR_SUPPLY_CAP: &[u8] = b"Supply cap reached.";

pub static ERROR_BORROW_CAP: &[u8] = b"Borrow cap reached.";

pub static ERROR_MARKET_NOT_ENTERED: &[u8] = b"Account has not entered this market.";

pub static ERROR_MARKET_BALANCE_NOT_ZERO: &[u8] =
    b"Market can not be exited while the account has a balance in it.";

// Solvency
pub static ERROR_INSUFFICIENT_COLLATERAL: &[u8] = b"Not enough collateral available for this loan.";

pub static ERROR_REDEEM_UNDER_COLLATERALIZED: &[u8] =
    b"Redeem would leave the account under-collateralized.";

pub static ERROR_INSUFFICIENT_POOL: &[u8] = b"Insufficient liquidity in the pool.";

pub static ERROR_INSUFFICIENT_SHARES: &[u8] = b"Not enough supply shares for this account.";

pub static ERROR_INSUFFICIENT_RESERVES: &[u8] = b"Reserves insufficient to cover the loss.";

pub static ERROR_NO_DEBT: &[u8] = b"Account has no debt in this market.";

pub static ERROR_BORROWED_UNDERFLOW: &[u8] = b"Repayment exceeds the market's total borrows.";

pub static ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_ZERO_SHARES: &[u8] = b"Amount too small to mint any share.";

pub static ERROR_INVALID_ASSET: &[u8] = b"Invalid asset.";

// Liquidation
pub static ERROR_CANNOT_LIQUIDATE_SELF: &[u8] = b"Cannot liquidate own position.";

pub static ERROR_POSITION_NOT_LIQUIDATABLE: &[u8] = b"Position is not liquidatable.";

pub static ERROR_POSITION_HAS_NO_BAD_DEBT: &[u8] = b"Position does not have bad debt.";

pub static ERROR_NO_COLLATERAL: &[u8] = b"Borrower has no collateral to seize.";

// Oracle
pub static ERROR_PRICE_UNAVAILABLE: &[u8] = b"Price feed is stale or unavailable.";

pub static ERROR_PRICE_AGGREGATOR_NOT_SET: &[u8] = b"Price aggregator not set.";

// Concurrency
pub static ERROR_REENTRANT_CALL: &[u8] = b"Reentrant call.";
