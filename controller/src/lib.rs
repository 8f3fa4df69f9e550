#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod cache;
pub mod config;
pub mod factory;
pub mod helpers;
pub mod oracle;
pub mod positions;
pub mod router;
pub mod storage;
pub mod utils;
pub mod validation;
pub mod views;

use cache::Cache;
use common_constants::DEFAULT_MAX_PRICE_STALE_SECONDS;
pub use common_errors::*;
pub use common_proxies::*;
pub use common_structs::*;

#[multiversx_sc::contract]
pub trait Controller:
    positions::account::PositionAccountModule
    + positions::supply::PositionSupplyModule
    + positions::borrow::PositionBorrowModule
    + positions::redeem::PositionRedeemModule
    + positions::repay::PositionRepayModule
    + positions::liquidation::PositionLiquidationModule
    + router::RouterModule
    + factory::FactoryModule
    + config::ConfigModule
    + common_events::EventsModule
    + storage::Storage
    + oracle::OracleModule
    + validation::ValidationModule
    + utils::LendingUtilsModule
    + views::ViewsModule
    + helpers::MathsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Initializes the risk engine.
    ///
    /// # Arguments
    /// - `lp_template_address`: Ledger template every market is deployed from.
    /// - `price_aggregator_address`: Aggregator the oracle adapter reads rounds from.
    /// - `liquidation_risk_threshold`: Risk ratio above which accounts can be liquidated, WAD.
    /// - `max_liquidate_rate`: Largest fraction of one debt a liquidation may close, WAD.
    /// - `liquidation_incentive`: Bonus on the repaid value paid in collateral, WAD.
    /// - `opt_default_max_stale_seconds`: Staleness tolerance of new oracle bindings.
    #[init]
    fn init(
        &self,
        lp_template_address: ManagedAddress,
        price_aggregator_address: ManagedAddress,
        liquidation_risk_threshold: BigUint,
        max_liquidate_rate: BigUint,
        liquidation_incentive: BigUint,
        opt_default_max_stale_seconds: OptionalValue<u64>,
    ) {
        self.store_pool_template(&lp_template_address);
        self.store_aggregator(&price_aggregator_address);

        self.require_valid_risk_threshold(&liquidation_risk_threshold);
        self.require_valid_max_liquidate_rate(&max_liquidate_rate);
        self.require_valid_liquidation_incentive(&liquidation_incentive);

        self.liquidation_risk_threshold()
            .set(self.to_decimal_wad(liquidation_risk_threshold));
        self.max_liquidate_rate()
            .set(self.to_decimal_wad(max_liquidate_rate));
        self.liquidation_incentive()
            .set(self.to_decimal_wad(liquidation_incentive));

        let default_max_stale_seconds = opt_default_max_stale_seconds
            .into_option()
            .unwrap_or(DEFAULT_MAX_PRICE_STALE_SECONDS);
        self.store_default_max_stale_seconds(default_max_stale_seconds);

        self.emit_risk_params();
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Supplies the attached payment to its market and enters it.
    #[payable]
    #[endpoint(supply)]
    fn supply(&self) {
        let mut cache = Cache::new(self);
        self.reentrancy_guard(cache.operation_ongoing);
        self.operation_ongoing().set(true);

        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();
        let caller = self.blockchain().get_caller();

        self.process_supply(&caller, &asset, &amount, &mut cache);

        self.operation_ongoing().set(false);
    }

    /// Borrows `amount` of `asset` against the caller's collateral.
    ///
    /// # Errors
    /// - `ERROR_INSUFFICIENT_COLLATERAL`: The loan would exceed borrowing power.
    /// - `ERROR_PRICE_UNAVAILABLE`: The asset or an indebted market has no usable price.
    #[endpoint(borrow)]
    fn borrow(&self, asset: EgldOrEsdtTokenIdentifier, amount: BigUint) {
        let mut cache = Cache::new(self);
        self.reentrancy_guard(cache.operation_ongoing);
        self.operation_ongoing().set(true);
        let caller = self.blockchain().get_caller();

        self.process_borrow(&caller, &asset, &amount, &mut cache);

        self.operation_ongoing().set(false);
    }

    /// Redeems up to `amount` of `asset` from the caller's supply.
    ///
    /// # Errors
    /// - `ERROR_REDEEM_UNDER_COLLATERALIZED`: The remaining collateral would not cover debt.
    /// - `ERROR_INSUFFICIENT_POOL`: The ledger lacks the cash.
    #[endpoint(redeem)]
    fn redeem(&self, asset: EgldOrEsdtTokenIdentifier, amount: BigUint) {
        let mut cache = Cache::new(self);
        self.reentrancy_guard(cache.operation_ongoing);
        self.operation_ongoing().set(true);
        let caller = self.blockchain().get_caller();

        self.process_redeem(&caller, &asset, &amount, &mut cache);

        self.operation_ongoing().set(false);
    }

    /// Repays debt with the attached payment, for the caller or `opt_account`.
    ///
    /// Anything above the outstanding balance is refunded to the caller.
    #[payable]
    #[endpoint(repay)]
    fn repay(&self, opt_account: OptionalValue<ManagedAddress>) {
        let mut cache = Cache::new(self);
        self.reentrancy_guard(cache.operation_ongoing);
        self.operation_ongoing().set(true);

        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();
        let caller = self.blockchain().get_caller();
        let borrower = opt_account.into_option().unwrap_or_else(|| caller.clone());

        self.process_repay(&caller, &borrower, &asset, &amount, &mut cache);

        self.operation_ongoing().set(false);
    }

    /// Liquidates `borrower` with the attached payment in one of its debt assets.
    ///
    /// The payment is bounded to the liquidatable amount and the rest refunded.
    /// Seized collateral arrives as supply shares in the caller's positions.
    ///
    /// # Errors
    /// - `ERROR_CANNOT_LIQUIDATE_SELF`: Caller and borrower are the same account.
    /// - `ERROR_POSITION_NOT_LIQUIDATABLE`: Risk ratio at or below the threshold.
    #[payable]
    #[endpoint(liquidate)]
    fn liquidate(&self, borrower: ManagedAddress) -> LiquidationDetail<Self::Api> {
        let mut cache = Cache::new(self);
        self.reentrancy_guard(cache.operation_ongoing);
        self.operation_ongoing().set(true);

        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();
        let caller = self.blockchain().get_caller();

        let detail = self.process_liquidation(&caller, &borrower, &asset, &amount, &mut cache);

        self.operation_ongoing().set(false);
        detail
    }

    /// Writes off the remaining debt of flagged borrowers against reserves.
    ///
    /// # Errors
    /// - `ERROR_POSITION_HAS_NO_BAD_DEBT`: A borrower is not flagged or its debt
    ///   is still covered by its remaining collateral.
    #[only_owner]
    #[endpoint(liquidateBadDebts)]
    fn liquidate_bad_debts(&self, borrowers: MultiValueEncoded<ManagedAddress>) {
        let mut cache = Cache::new(self);
        self.reentrancy_guard(cache.operation_ongoing);
        self.operation_ongoing().set(true);

        for borrower in borrowers {
            self.process_bad_debt(&borrower, &mut cache);
        }

        self.operation_ongoing().set(false);
    }
}
