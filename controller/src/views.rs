use common_constants::WAD_PRECISION;
use common_structs::{
    AccountPosition, AssetPrice, BadBorrowerDetail, LiquidationDetail, MarketState, RiskSnapshot,
};

use crate::{cache::Cache, helpers, oracle, positions, storage, utils, validation};

multiversx_sc::imports!();

/// Read-only risk surface.
///
/// Every view accrues the markets it touches locally, up to the current
/// block, without writing. An unusable price never reverts a view: collateral
/// in that market is worth zero and amounts depending on it come back as zero.
#[multiversx_sc::module]
pub trait ViewsModule:
    storage::Storage
    + oracle::OracleModule
    + utils::LendingUtilsModule
    + validation::ValidationModule
    + positions::liquidation::PositionLiquidationModule
    + helpers::MathsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
{
    /// Aggregate risk of an account.
    ///
    /// # Returns
    /// - `RiskSnapshot`: Risk ratio with the weighted collateral and borrow
    ///   values it was computed from, all WAD.
    #[view(checkLiquidationRisk)]
    fn check_liquidation_risk(&self, account: ManagedAddress) -> RiskSnapshot<Self::Api> {
        let mut cache = Cache::new_view(self);

        self.calculate_risk_snapshot(&account, &mut cache)
    }

    /// Whether the account's risk ratio is above the liquidation threshold.
    #[view(isLiquidatable)]
    fn is_liquidatable(&self, account: ManagedAddress) -> bool {
        let mut cache = Cache::new_view(self);
        let snapshot = self.calculate_risk_snapshot(&account, &mut cache);

        snapshot.risk_ratio > self.liquidation_risk_threshold().get()
    }

    /// Largest amount of `asset` the account could borrow right now.
    ///
    /// The collateral headroom is converted at the asset's price, rounding
    /// down, then capped by the ledger's cash and the borrow-cap headroom.
    #[view(getBorrowableAmount)]
    fn get_borrowable_amount(
        &self,
        account: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_asset_supported(&asset);
        let mut cache = Cache::new_view(self);

        let config = cache.get_cached_asset_info(&asset);
        let zero = self.to_decimal(BigUint::zero(), config.asset_decimals);
        let price = cache.get_cached_price(&asset);
        if !config.can_borrow() || !price.is_usable {
            return zero;
        }

        let totals = self.calculate_account_totals(&account, &mut cache);
        if totals.has_unpriced_debt {
            return zero;
        }

        let headroom =
            match self.checked_sub(&totals.collateral_value_usd, &totals.borrow_value_usd) {
                Some(headroom) => headroom,
                None => return zero,
            };

        let state = cache.get_cached_market_state(&asset);
        let mut amount = self.get_min(
            self.usd_to_asset_amount(&headroom, &price.price, config.asset_decimals),
            state.cash.clone(),
        );

        if let Some(borrow_cap) = &config.borrow_cap {
            let cap = self.to_decimal(borrow_cap.clone(), config.asset_decimals);
            let cap_headroom = self
                .checked_sub(&cap, &state.borrowed)
                .unwrap_or_else(|| zero.clone());
            amount = self.get_min(amount, cap_headroom);
        }

        amount
    }

    /// Largest amount of `asset` the account could redeem right now.
    ///
    /// Capped by the position's value, the ledger's cash and, for an indebted
    /// account, by the collateral headroom divided by the market's weight.
    #[view(getRedeemableAmount)]
    fn get_redeemable_amount(
        &self,
        account: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_asset_supported(&asset);
        let mut cache = Cache::new_view(self);

        let config = cache.get_cached_asset_info(&asset);
        let zero = self.to_decimal(BigUint::zero(), config.asset_decimals);
        let position = match self.positions(&account).get(&asset) {
            Some(position) if position.has_supply() => position,
            _ => return zero,
        };

        let state = cache.get_cached_market_state(&asset);
        let supplied = self.get_supply_underlying(&position, &mut cache);
        let mut amount = self.get_min(supplied, state.cash.clone());

        let totals = self.calculate_account_totals(&account, &mut cache);
        if totals.has_unpriced_debt {
            return zero;
        }
        if self.is_zero(&totals.borrow_value_usd) {
            return amount;
        }

        let headroom =
            match self.checked_sub(&totals.collateral_value_usd, &totals.borrow_value_usd) {
                Some(headroom) => headroom,
                None => return zero,
            };

        let price = cache.get_cached_price(&asset);
        if price.is_usable && config.is_collateral() {
            let value_limit = self.div_down(&headroom, &config.loan_to_value, WAD_PRECISION);
            amount = self.get_min(
                amount,
                self.usd_to_asset_amount(&value_limit, &price.price, config.asset_decimals),
            );
        }

        amount
    }

    /// Simulates `liquidate` for `amount` of `repay_asset` paid by `liquidator`.
    ///
    /// Fails exactly where the liquidation itself would fail.
    #[view(calcLiquidationDetail)]
    fn calc_liquidation_detail(
        &self,
        liquidator: ManagedAddress,
        borrower: ManagedAddress,
        repay_asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
    ) -> LiquidationDetail<Self::Api> {
        let mut cache = Cache::new_view(self);

        self.calculate_liquidation(&liquidator, &borrower, &repay_asset, &amount, &mut cache)
    }

    /// Bad-debt standing of each borrower, in input order.
    #[view(calcBadBorrowerDetails)]
    fn calc_bad_borrower_details(
        &self,
        borrowers: MultiValueEncoded<ManagedAddress>,
    ) -> MultiValueEncoded<BadBorrowerDetail<Self::Api>> {
        let mut cache = Cache::new_view(self);
        let mut details = MultiValueEncoded::new();
        for borrower in borrowers {
            details.push(self.calculate_bad_borrower_detail(&borrower, &mut cache));
        }

        details
    }

    #[view(getAccountPosition)]
    fn get_account_position(
        &self,
        account: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
    ) -> AccountPosition<Self::Api> {
        self.require_asset_supported(&asset);
        let mut cache = Cache::new_view(self);

        self.get_position(&account, &asset, &mut cache)
    }

    #[view(getAccountPositions)]
    fn get_account_positions(
        &self,
        account: ManagedAddress,
    ) -> MultiValueEncoded<AccountPosition<Self::Api>> {
        let mut positions = MultiValueEncoded::new();
        for position in self.positions(&account).values() {
            positions.push(position);
        }

        positions
    }

    /// Current debt of the account in `asset`, rounded up.
    #[view(getBorrowBalance)]
    fn get_borrow_balance(
        &self,
        account: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_asset_supported(&asset);
        let mut cache = Cache::new_view(self);
        let position = self.get_position(&account, &asset, &mut cache);

        self.get_borrow_underlying(&position, &mut cache)
    }

    /// Underlying value of the account's shares in `asset`, rounded down.
    #[view(getSupplyBalance)]
    fn get_supply_balance(
        &self,
        account: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_asset_supported(&asset);
        let mut cache = Cache::new_view(self);
        let position = self.get_position(&account, &asset, &mut cache);

        self.get_supply_underlying(&position, &mut cache)
    }

    #[view(hasBadDebt)]
    fn has_bad_debt(&self, account: ManagedAddress) -> bool {
        self.bad_debt_accounts().contains(&account)
    }

    /// USD price of a market as the risk engine sees it.
    #[view(getAssetPrice)]
    fn get_asset_price(&self, asset: EgldOrEsdtTokenIdentifier) -> AssetPrice<Self::Api> {
        self.require_asset_supported(&asset);
        let mut cache = Cache::new_view(self);

        cache.get_cached_price(&asset)
    }

    /// Market totals accrued to the current block.
    #[view(getMarketState)]
    fn get_market_state(&self, asset: EgldOrEsdtTokenIdentifier) -> MarketState<Self::Api> {
        self.require_asset_supported(&asset);
        let mut cache = Cache::new_view(self);

        cache.get_cached_market_state(&asset)
    }
}
