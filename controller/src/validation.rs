multiversx_sc::imports!();

use common_errors::*;

use crate::{cache::Cache, helpers, oracle, storage, utils};

#[multiversx_sc::module]
pub trait ValidationModule:
    storage::Storage
    + oracle::OracleModule
    + utils::LendingUtilsModule
    + helpers::MathsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
{
    /// Ensures the asset is listed.
    ///
    /// # Returns
    /// - `ManagedAddress`: Address of the market's ledger.
    fn require_asset_supported(&self, asset: &EgldOrEsdtTokenIdentifier) -> ManagedAddress {
        let map = self.pools_map(asset);
        require!(!map.is_empty(), ERROR_ASSET_NOT_SUPPORTED);

        map.get()
    }

    /// Rejects a mutating account operation while another one is in flight.
    fn reentrancy_guard(&self, ongoing: bool) {
        require!(!ongoing, ERROR_REENTRANT_CALL);
    }

    fn require_amount_greater_than_zero(&self, amount: &BigUint) {
        require!(amount > &BigUint::zero(), ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
    }

    /// Gate for every deposit.
    ///
    /// Fails on an inactive, frozen or supply-paused market before anything is
    /// accrued, then checks that the post-supply underlying
    /// `cash + borrowed - reserves` stays within the supply cap.
    fn validate_supply(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        cache: &mut Cache<Self>,
    ) {
        let config = cache.get_cached_asset_info(asset);
        require!(config.is_active, ERROR_MARKET_NOT_ACTIVE);
        require!(!config.is_frozen, ERROR_MARKET_FROZEN);
        require!(!config.supply_paused, ERROR_SUPPLY_PAUSED);

        if let Some(supply_cap) = &config.supply_cap {
            let state = cache.get_cached_market_state(asset);
            let total_after = state.total_underlying() + amount.clone();
            require!(total_after.into_raw_units() <= supply_cap, ERROR_SUPPLY_CAP);
        }
    }

    /// Gate for every new loan.
    ///
    /// **Process**:
    /// 1. Market must be active, not frozen and not borrow-paused.
    /// 2. The borrowed market is accrued and its cap headroom checked.
    /// 3. Its price must be usable, as must the price of every market holding debt.
    /// 4. `borrow_value + amount * price <= collateral_value` on fresh balances.
    /// 5. The market joins the borrower's entered set.
    fn validate_borrow(
        &self,
        borrower: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        cache: &mut Cache<Self>,
    ) {
        let config = cache.get_cached_asset_info(asset);
        require!(config.is_active, ERROR_MARKET_NOT_ACTIVE);
        require!(!config.is_frozen, ERROR_MARKET_FROZEN);
        require!(!config.borrow_paused, ERROR_BORROW_PAUSED);

        let state = cache.get_cached_market_state(asset);
        if let Some(borrow_cap) = &config.borrow_cap {
            let borrowed_after = state.borrowed + amount.clone();
            require!(borrowed_after.into_raw_units() <= borrow_cap, ERROR_BORROW_CAP);
        }

        let price = cache.get_cached_price(asset);
        require!(price.is_usable, ERROR_PRICE_UNAVAILABLE);

        let totals = self.calculate_account_totals(borrower, cache);
        require!(!totals.has_unpriced_debt, ERROR_PRICE_UNAVAILABLE);

        let borrow_after = totals.borrow_value_usd + self.get_usd_value(amount, &price.price);
        require!(
            borrow_after <= totals.collateral_value_usd,
            ERROR_INSUFFICIENT_COLLATERAL
        );

        self.enter_market(borrower, asset);
    }

    /// Gate for every withdrawal.
    ///
    /// The effective amount is capped at the position's value. It must be
    /// covered by the ledger's cash and, for an indebted account, removing its
    /// weighted value from collateral must keep `collateral >= borrow`.
    ///
    /// # Returns
    /// - `ManagedDecimal`: The amount that will actually be paid out.
    fn validate_redeem(
        &self,
        redeemer: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        cache: &mut Cache<Self>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let position = self.get_position(redeemer, asset, cache);
        require!(position.has_supply(), ERROR_INSUFFICIENT_SHARES);

        let state = cache.get_cached_market_state(asset);
        let supplied = self.get_supply_underlying(&position, cache);
        let redeem_amount = self.get_min(amount.clone(), supplied);
        require!(redeem_amount <= state.cash, ERROR_INSUFFICIENT_POOL);

        let totals = self.calculate_account_totals(redeemer, cache);
        if self.is_zero(&totals.borrow_value_usd) && !totals.has_unpriced_debt {
            return redeem_amount;
        }
        require!(!totals.has_unpriced_debt, ERROR_PRICE_UNAVAILABLE);

        let config = cache.get_cached_asset_info(asset);
        let price = cache.get_cached_price(asset);
        let removed = if price.is_usable && config.is_collateral() {
            let value = self.get_usd_value(&redeem_amount, &price.price);
            self.get_weighted_value(&value, &config.loan_to_value)
        } else {
            self.wad_zero()
        };
        let collateral_after = self
            .checked_sub(&totals.collateral_value_usd, &removed)
            .unwrap_or_else(|| self.wad_zero());
        require!(
            collateral_after >= totals.borrow_value_usd,
            ERROR_REDEEM_UNDER_COLLATERALIZED
        );

        redeem_amount
    }

    /// Gate for every liquidation.
    ///
    /// **Process**:
    /// 1. The liquidator cannot be the borrower, whatever the risk ratio.
    /// 2. The requested amount must be positive and the repay market priced.
    /// 3. The borrower's risk ratio must exceed the liquidation threshold.
    /// 4. The repay is bounded to `min(requested, outstanding, outstanding * max_liquidate_rate)`.
    ///
    /// # Returns
    /// - `ManagedDecimal`: The bounded repay amount, in the repay asset's decimals.
    fn validate_liquidate(
        &self,
        liquidator: &ManagedAddress,
        borrower: &ManagedAddress,
        repay_asset: &EgldOrEsdtTokenIdentifier,
        requested: &BigUint,
        cache: &mut Cache<Self>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        require!(liquidator != borrower, ERROR_CANNOT_LIQUIDATE_SELF);
        self.require_amount_greater_than_zero(requested);
        self.require_asset_supported(repay_asset);

        let price = cache.get_cached_price(repay_asset);
        require!(price.is_usable, ERROR_PRICE_UNAVAILABLE);

        let totals = self.calculate_account_totals(borrower, cache);
        require!(!totals.has_unpriced_debt, ERROR_PRICE_UNAVAILABLE);

        let risk_ratio =
            self.compute_risk_ratio(&totals.borrow_value_usd, &totals.collateral_value_usd);
        require!(
            risk_ratio > self.liquidation_risk_threshold().get(),
            ERROR_POSITION_NOT_LIQUIDATABLE
        );

        let position = self.get_position(borrower, repay_asset, cache);
        let outstanding = self.get_borrow_underlying(&position, cache);
        require!(!self.is_zero(&outstanding), ERROR_NO_DEBT);

        let requested = self.to_decimal(requested.clone(), outstanding.scale());
        let max_repay = self.compute_max_repay(&outstanding, &self.max_liquidate_rate().get());
        let bounded = self.get_min(self.get_min(requested, outstanding), max_repay);
        require!(!self.is_zero(&bounded), ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        bounded
    }
}
