pub mod account;
pub mod borrow;
pub mod liquidation;
pub mod redeem;
pub mod repay;
pub mod supply;
