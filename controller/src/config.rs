multiversx_sc::imports!();

use common_constants::{MAX_LIQUIDATION_INCENTIVE, MAX_LOAN_TO_VALUE, WAD};
use common_errors::*;
use common_structs::{AssetConfig, OracleBinding};

use crate::{helpers, oracle, storage, utils, validation};

/// Governance surface of the risk engine.
///
/// Every setter is restricted to the owner and validated before it is
/// persisted, so an invalid value never reaches a market. Per-market changes
/// emit the full updated configuration.
#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage
    + oracle::OracleModule
    + utils::LendingUtilsModule
    + validation::ValidationModule
    + helpers::MathsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
{
    /// Sets the price aggregator contract address.
    ///
    /// # Errors
    /// - `ERROR_INVALID_AGGREGATOR`: If address is zero or not a smart contract.
    #[only_owner]
    #[endpoint(setAggregator)]
    fn set_aggregator(&self, aggregator: ManagedAddress) {
        self.store_aggregator(&aggregator);
    }

    /// Sets the template address new market ledgers are deployed from.
    ///
    /// # Errors
    /// - `ERROR_INVALID_LIQUIDITY_POOL_TEMPLATE`: If address is zero or not a smart contract.
    #[only_owner]
    #[endpoint(setLiquidityPoolTemplate)]
    fn set_liquidity_pool_template(&self, address: ManagedAddress) {
        self.store_pool_template(&address);
    }

    /// Staleness tolerance given to markets listed from now on.
    #[only_owner]
    #[endpoint(setDefaultMaxStaleSeconds)]
    fn set_default_max_stale_seconds(&self, seconds: u64) {
        self.store_default_max_stale_seconds(seconds);
    }

    /// Freezes a market: supply and borrow are rejected, while redeem, repay
    /// and liquidation keep working so positions can still be unwound.
    ///
    /// # Errors
    /// - `ERROR_MARKET_ALREADY_FROZEN`: The market is frozen already.
    #[only_owner]
    #[endpoint(freezeTokenMarket)]
    fn freeze_token_market(&self, asset: EgldOrEsdtTokenIdentifier) {
        let mut config = self.get_listed_config(&asset);
        require!(!config.is_frozen, ERROR_MARKET_ALREADY_FROZEN);

        config.is_frozen = true;
        self.save_asset_config(&asset, &config);
    }

    #[only_owner]
    #[endpoint(unfreezeTokenMarket)]
    fn unfreeze_token_market(&self, asset: EgldOrEsdtTokenIdentifier) {
        let mut config = self.get_listed_config(&asset);
        require!(config.is_frozen, ERROR_MARKET_NOT_FROZEN);

        config.is_frozen = false;
        self.save_asset_config(&asset, &config);
    }

    #[only_owner]
    #[endpoint(setSupplyPaused)]
    fn set_supply_paused(&self, asset: EgldOrEsdtTokenIdentifier, paused: bool) {
        let mut config = self.get_listed_config(&asset);
        config.supply_paused = paused;
        self.save_asset_config(&asset, &config);
    }

    #[only_owner]
    #[endpoint(setBorrowPaused)]
    fn set_borrow_paused(&self, asset: EgldOrEsdtTokenIdentifier, paused: bool) {
        let mut config = self.get_listed_config(&asset);
        config.borrow_paused = paused;
        self.save_asset_config(&asset, &config);
    }

    /// Activates or deactivates a market. An inactive market rejects supply
    /// and borrow.
    #[only_owner]
    #[endpoint(setMarketActive)]
    fn set_market_active(&self, asset: EgldOrEsdtTokenIdentifier, is_active: bool) {
        let mut config = self.get_listed_config(&asset);
        config.is_active = is_active;
        self.save_asset_config(&asset, &config);
    }

    /// Sets how much of a market's USD value counts as borrowing power, WAD.
    /// Zero removes the market from collateral entirely.
    ///
    /// # Errors
    /// - `ERROR_INVALID_LOAN_TO_VALUE`: Above `MAX_LOAN_TO_VALUE`.
    #[only_owner]
    #[endpoint(setLoanToValue)]
    fn set_loan_to_value(&self, asset: EgldOrEsdtTokenIdentifier, loan_to_value: BigUint) {
        self.update_loan_to_value(&asset, loan_to_value);
    }

    /// Batch form of `setLoanToValue`; entries pair up by position.
    ///
    /// # Errors
    /// - `ERROR_ARRAY_LENGTH_MISMATCH`: The two lists differ in length.
    #[only_owner]
    #[endpoint(setLoanToValues)]
    fn set_loan_to_values(
        &self,
        assets: ManagedVec<EgldOrEsdtTokenIdentifier>,
        loan_to_values: ManagedVec<BigUint>,
    ) {
        require!(
            assets.len() == loan_to_values.len(),
            ERROR_ARRAY_LENGTH_MISMATCH
        );

        for index in 0..assets.len() {
            let asset = assets.get(index).clone();
            let loan_to_value = loan_to_values.get(index).clone();
            self.update_loan_to_value(&asset, loan_to_value);
        }
    }

    /// Rebinds a market to other aggregator feeds.
    ///
    /// # Errors
    /// - `ERROR_INVALID_ORACLE_BINDING`: Empty feed, missing USD pair on a
    ///   cross binding or zero staleness.
    #[only_owner]
    #[endpoint(setOracleBinding)]
    fn set_oracle_binding(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        feed_id: ManagedBuffer,
        usd_pair_id: ManagedBuffer,
        is_usd: bool,
        max_stale_seconds: u64,
    ) {
        let mut config = self.get_listed_config(&asset);
        let binding = OracleBinding {
            feed_id,
            usd_pair_id,
            is_usd,
            max_stale_seconds,
        };
        self.require_valid_oracle_binding(&binding);

        config.oracle = binding;
        self.save_asset_config(&asset, &config);
    }

    /// Sets the supply and borrow caps in asset units. Zero removes a cap.
    #[only_owner]
    #[endpoint(setCaps)]
    fn set_caps(&self, asset: EgldOrEsdtTokenIdentifier, supply_cap: BigUint, borrow_cap: BigUint) {
        let mut config = self.get_listed_config(&asset);
        config.supply_cap = if supply_cap == 0u64 { None } else { Some(supply_cap) };
        config.borrow_cap = if borrow_cap == 0u64 { None } else { Some(borrow_cap) };
        self.save_asset_config(&asset, &config);
    }

    #[only_owner]
    #[endpoint(setLiquidationIncentive)]
    fn set_liquidation_incentive(&self, incentive: BigUint) {
        self.require_valid_liquidation_incentive(&incentive);

        self.liquidation_incentive()
            .set(self.to_decimal_wad(incentive));
        self.emit_risk_params();
    }

    #[only_owner]
    #[endpoint(setLiquidationRiskThreshold)]
    fn set_liquidation_risk_threshold(&self, threshold: BigUint) {
        self.require_valid_risk_threshold(&threshold);

        self.liquidation_risk_threshold()
            .set(self.to_decimal_wad(threshold));
        self.emit_risk_params();
    }

    #[only_owner]
    #[endpoint(setMaxLiquidateRate)]
    fn set_max_liquidate_rate(&self, rate: BigUint) {
        self.require_valid_max_liquidate_rate(&rate);

        self.max_liquidate_rate().set(self.to_decimal_wad(rate));
        self.emit_risk_params();
    }

    fn store_aggregator(&self, aggregator: &ManagedAddress) {
        require!(!aggregator.is_zero(), ERROR_INVALID_AGGREGATOR);
        require!(
            self.blockchain().is_smart_contract(aggregator),
            ERROR_INVALID_AGGREGATOR
        );

        self.price_aggregator_address().set(aggregator);
    }

    fn store_pool_template(&self, address: &ManagedAddress) {
        require!(!address.is_zero(), ERROR_INVALID_LIQUIDITY_POOL_TEMPLATE);
        require!(
            self.blockchain().is_smart_contract(address),
            ERROR_INVALID_LIQUIDITY_POOL_TEMPLATE
        );

        self.liq_pool_template_address().set(address);
    }

    fn store_default_max_stale_seconds(&self, seconds: u64) {
        require!(seconds > 0, ERROR_INVALID_ORACLE_BINDING);

        self.default_max_stale_seconds().set(seconds);
    }

    fn update_loan_to_value(&self, asset: &EgldOrEsdtTokenIdentifier, loan_to_value: BigUint) {
        self.require_valid_loan_to_value(&loan_to_value);

        let mut config = self.get_listed_config(asset);
        config.loan_to_value = self.to_decimal_wad(loan_to_value);
        self.save_asset_config(asset, &config);
    }

    fn get_listed_config(&self, asset: &EgldOrEsdtTokenIdentifier) -> AssetConfig<Self::Api> {
        self.require_asset_supported(asset);

        self.asset_config(asset).get()
    }

    fn save_asset_config(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        config: &AssetConfig<Self::Api>,
    ) {
        self.asset_config(asset).set(config);
        self.update_asset_config_event(asset, config);
    }

    fn emit_risk_params(&self) {
        self.update_risk_params_event(
            &self.liquidation_incentive().get(),
            &self.liquidation_risk_threshold().get(),
            &self.max_liquidate_rate().get(),
        );
    }

    fn require_valid_loan_to_value(&self, loan_to_value: &BigUint) {
        require!(
            loan_to_value <= &BigUint::from(MAX_LOAN_TO_VALUE),
            ERROR_INVALID_LOAN_TO_VALUE
        );
    }

    fn require_valid_liquidation_incentive(&self, incentive: &BigUint) {
        require!(
            incentive <= &BigUint::from(MAX_LIQUIDATION_INCENTIVE),
            ERROR_INVALID_LIQUIDATION_INCENTIVE
        );
    }

    /// The threshold is a WAD risk ratio of at least 1.0.
    fn require_valid_risk_threshold(&self, threshold: &BigUint) {
        require!(threshold >= &BigUint::from(WAD), ERROR_INVALID_RISK_THRESHOLD);
    }

    fn require_valid_max_liquidate_rate(&self, rate: &BigUint) {
        require!(
            rate > &BigUint::zero() && rate <= &BigUint::from(WAD),
            ERROR_INVALID_MAX_LIQUIDATE_RATE
        );
    }
}
