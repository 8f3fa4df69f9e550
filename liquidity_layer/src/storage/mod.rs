multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::MarketParams;

/// On-chain totals of the market. The controller reads these keys directly
/// from its own context, so they double as the ledger's public layout.
#[multiversx_sc::module]
pub trait Storage {
    /// Curve, reserve factor and asset identity of the market.
    #[view(getParams)]
    #[storage_mapper("params")]
    fn params(&self) -> SingleValueMapper<MarketParams<Self::Api>>;

    /// Underlying held by the market and not lent out.
    #[view(getCash)]
    #[storage_mapper("cash")]
    fn cash(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Outstanding borrows including accrued interest.
    #[view(getTotalBorrows)]
    #[storage_mapper("borrowed")]
    fn borrowed(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Portion of `cash + borrowed` owned by the protocol.
    #[view(getReserves)]
    #[storage_mapper("reserves")]
    fn reserves(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[view(getTotalSupplyShares)]
    #[storage_mapper("supply_shares")]
    fn supply_shares(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Underlying per share, RAY.
    #[view(getExchangeRate)]
    #[storage_mapper("exchange_rate")]
    fn exchange_rate(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Cumulative borrow interest multiplier, RAY.
    #[view(getBorrowIndex)]
    #[storage_mapper("borrow_index")]
    fn borrow_index(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[view(getLastAccrualBlock)]
    #[storage_mapper("last_accrual_block")]
    fn last_accrual_block(&self) -> SingleValueMapper<u64>;

    /// Cumulative borrower debt forgiven against reserves.
    #[view(getBadDebt)]
    #[storage_mapper("bad_debt")]
    fn bad_debt(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;
}
