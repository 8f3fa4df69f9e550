multiversx_sc::imports!();

use common_structs::*;

#[multiversx_sc::module]
pub trait Storage {
    /// Retrieves the address of the ledger template every market is deployed from.
    #[view(getLiqPoolTemplateAddress)]
    #[storage_mapper("liq_pool_template_address")]
    fn liq_pool_template_address(&self) -> SingleValueMapper<ManagedAddress>;

    /// Retrieves the price aggregator the oracle adapter reads rounds from.
    #[view(getPriceAggregatorAddress)]
    #[storage_mapper("price_aggregator_address")]
    fn price_aggregator_address(&self) -> SingleValueMapper<ManagedAddress>;

    /// Listed markets, in listing order.
    #[view(getMarkets)]
    #[storage_mapper("markets")]
    fn markets(&self) -> SetMapper<EgldOrEsdtTokenIdentifier>;

    /// Retrieves the ledger contract of a listed asset.
    ///
    /// # Arguments
    /// - `asset`: Token identifier (EGLD or ESDT) of the market.
    ///
    /// # Returns
    /// - `ManagedAddress`: Address of the market's ledger.
    #[view(getPoolAddress)]
    #[storage_mapper("pools_map")]
    fn pools_map(&self, asset: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<ManagedAddress>;

    /// Retrieves the risk configuration of a listed asset.
    #[view(getMarketConfig)]
    #[storage_mapper("asset_config")]
    fn asset_config(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<AssetConfig<Self::Api>>;

    /// Per-market balances of an account. An entry is removed once both its
    /// share balance and its borrow principal are zero.
    #[storage_mapper("positions")]
    fn positions(
        &self,
        account: &ManagedAddress,
    ) -> MapMapper<EgldOrEsdtTokenIdentifier, AccountPosition<Self::Api>>;

    /// Markets an account has entered, in enrollment order.
    #[view(getEnteredMarkets)]
    #[storage_mapper("entered_markets")]
    fn entered_markets(&self, account: &ManagedAddress) -> SetMapper<EgldOrEsdtTokenIdentifier>;

    /// Accounts left with unrecovered debt by a liquidation.
    #[view(getBadDebtAccounts)]
    #[storage_mapper("bad_debt_accounts")]
    fn bad_debt_accounts(&self) -> UnorderedSetMapper<ManagedAddress>;

    /// Bonus fraction added to the repaid value when pricing seized collateral, WAD.
    #[view(getLiquidationIncentive)]
    #[storage_mapper("liquidation_incentive")]
    fn liquidation_incentive(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Risk ratio above which an account can be liquidated, WAD.
    #[view(getLiquidationRiskThreshold)]
    #[storage_mapper("liquidation_risk_threshold")]
    fn liquidation_risk_threshold(
        &self,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Largest fraction of one debt a single liquidation may close, WAD.
    #[view(getMaxLiquidateRate)]
    #[storage_mapper("max_liquidate_rate")]
    fn max_liquidate_rate(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Staleness tolerance given to the oracle binding of newly listed markets.
    #[view(getDefaultMaxStaleSeconds)]
    #[storage_mapper("default_max_stale_seconds")]
    fn default_max_stale_seconds(&self) -> SingleValueMapper<u64>;

    /// Set while a mutating account operation is in progress.
    #[view(isOperationOngoing)]
    #[storage_mapper("operation_ongoing")]
    fn operation_ongoing(&self) -> SingleValueMapper<bool>;

    // Ledger storage, read in place so views can replay accrual without a call.

    #[storage_mapper_from_address("params")]
    fn pool_params(
        &self,
        pool_address: ManagedAddress,
    ) -> SingleValueMapper<MarketParams<Self::Api>, ManagedAddress>;

    #[storage_mapper_from_address("cash")]
    fn pool_cash(
        &self,
        pool_address: ManagedAddress,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>, ManagedAddress>;

    #[storage_mapper_from_address("borrowed")]
    fn pool_borrowed(
        &self,
        pool_address: ManagedAddress,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>, ManagedAddress>;

    #[storage_mapper_from_address("reserves")]
    fn pool_reserves(
        &self,
        pool_address: ManagedAddress,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>, ManagedAddress>;

    #[storage_mapper_from_address("supply_shares")]
    fn pool_supply_shares(
        &self,
        pool_address: ManagedAddress,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>, ManagedAddress>;

    #[storage_mapper_from_address("exchange_rate")]
    fn pool_exchange_rate(
        &self,
        pool_address: ManagedAddress,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>, ManagedAddress>;

    #[storage_mapper_from_address("borrow_index")]
    fn pool_borrow_index(
        &self,
        pool_address: ManagedAddress,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>, ManagedAddress>;

    #[storage_mapper_from_address("last_accrual_block")]
    fn pool_last_accrual_block(
        &self,
        pool_address: ManagedAddress,
    ) -> SingleValueMapper<u64, ManagedAddress>;

    /// Latest completed round of a pair in the price aggregator.
    #[storage_mapper_from_address("rounds")]
    fn rounds(
        &self,
        price_aggregator_address: ManagedAddress,
        from: ManagedBuffer,
        to: ManagedBuffer,
    ) -> SingleValueMapper<TimestampedPrice<Self::Api>, ManagedAddress>;
}
