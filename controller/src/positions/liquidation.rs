multiversx_sc::imports!();

use common_errors::{
    ERROR_INSUFFICIENT_SHARES, ERROR_NO_COLLATERAL, ERROR_POSITION_HAS_NO_BAD_DEBT,
    ERROR_PRICE_UNAVAILABLE,
};
use common_proxies::proxy_pool;
use common_structs::{BadBorrowerDetail, LiquidationDetail, SeizeAllocation};

use crate::{cache::Cache, helpers, oracle, storage, utils, validation};

/// # Liquidation Engine
///
/// Closes part of an unhealthy account's debt and pays the liquidator in the
/// account's supply shares.
///
/// ## Seizure
/// The repaid value, grossed up by the liquidation incentive, is taken from the
/// borrower's priced supply positions in descending USD value. Ties keep the
/// enrollment order. A market is taken whole while it fits the remaining value;
/// the first one that does not is taken partially and ends the walk.
///
/// Shares move between accounts inside the controller, so the ledgers' share
/// totals never change during a seizure.
///
/// ## Bad Debt
/// When every collateral market is exhausted before the seize value is met the
/// borrower is flagged. Its remaining debt can then be written off against
/// reserves by the owner through `liquidateBadDebts`.
///
/// Neither step runs while any supply of the borrower is unpriced, and a
/// liquidation that would seize nothing is refused.
#[multiversx_sc::module]
pub trait PositionLiquidationModule:
    storage::Storage
    + oracle::OracleModule
    + utils::LendingUtilsModule
    + validation::ValidationModule
    + helpers::MathsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
{
    /// Works out a liquidation without touching any balance.
    ///
    /// Used as is by the `calcLiquidationDetail` view and as the first step of
    /// `liquidate`.
    fn calculate_liquidation(
        &self,
        liquidator: &ManagedAddress,
        borrower: &ManagedAddress,
        repay_asset: &EgldOrEsdtTokenIdentifier,
        requested: &BigUint,
        cache: &mut Cache<Self>,
    ) -> LiquidationDetail<Self::Api> {
        let repay_amount =
            self.validate_liquidate(liquidator, borrower, repay_asset, requested, cache);

        let repay_price = cache.get_cached_price(repay_asset);
        let repay_value = self.get_usd_value(&repay_amount, &repay_price.price);
        let seize_value =
            self.compute_seize_value(&repay_value, &self.liquidation_incentive().get());

        let mut candidates = self.collect_seizable_collateral(borrower, cache);
        let mut seized = ManagedVec::new();
        let mut seized_value = self.wad_zero();
        let mut remaining = seize_value.clone();
        let mut is_bad_debt = false;

        loop {
            if self.is_zero(&remaining) {
                break;
            }
            if candidates.is_empty() {
                let totals = self.calculate_account_totals(borrower, cache);
                require!(!totals.has_unpriced_collateral, ERROR_PRICE_UNAVAILABLE);
                is_bad_debt = true;
                break;
            }

            let index = self.find_largest_collateral(&candidates);
            let (asset, value) = candidates.get(index).clone().into_tuple();
            let _ = candidates.remove(index);

            let position = self.get_position(borrower, &asset, cache);
            if value <= remaining {
                let underlying = self.get_supply_underlying(&position, cache);
                remaining -= &value;
                seized_value += &value;
                seized.push(SeizeAllocation {
                    asset_id: asset,
                    shares: position.supply_shares.into_raw_units().clone(),
                    underlying: underlying.into_raw_units().clone(),
                    value_usd: value.into_raw_units().clone(),
                });

                continue;
            }

            let allocation =
                self.partial_seizure(&asset, &position.supply_shares, &remaining, cache);
            seized_value += &self.to_decimal_wad(allocation.value_usd.clone());
            if allocation.shares > 0u64 {
                seized.push(allocation);
            }

            break;
        }

        require!(!self.is_zero(&seized_value), ERROR_NO_COLLATERAL);

        let unrecovered = if is_bad_debt {
            self.checked_sub(&seize_value, &seized_value)
                .unwrap_or_else(|| self.wad_zero())
        } else {
            self.wad_zero()
        };

        LiquidationDetail {
            liquidator: liquidator.clone(),
            borrower: borrower.clone(),
            repay_asset: repay_asset.clone(),
            repay_amount: repay_amount.into_raw_units().clone(),
            repay_value_usd: repay_value.into_raw_units().clone(),
            seize_value_usd: seize_value.into_raw_units().clone(),
            seized,
            seized_value_usd: seized_value.into_raw_units().clone(),
            is_bad_debt,
            unrecovered_value_usd: unrecovered.into_raw_units().clone(),
        }
    }

    /// Supply positions of `borrower` that can be seized, with their USD value.
    ///
    /// Every entered market with shares and a usable price qualifies, zero
    /// loan-to-value ones included. The vector keeps enrollment order.
    fn collect_seizable_collateral(
        &self,
        borrower: &ManagedAddress,
        cache: &mut Cache<Self>,
    ) -> ManagedVec<MultiValue2<EgldOrEsdtTokenIdentifier, ManagedDecimal<Self::Api, NumDecimals>>>
    {
        let mut candidates = ManagedVec::new();
        let positions = self.positions(borrower);

        for asset in self.entered_markets(borrower).iter() {
            let position = match positions.get(&asset) {
                Some(position) if position.has_supply() => position,
                _ => continue,
            };

            let price = cache.get_cached_price(&asset);
            if !price.is_usable {
                continue;
            }

            let underlying = self.get_supply_underlying(&position, cache);
            let value = self.get_usd_value(&underlying, &price.price);
            if self.is_zero(&value) {
                continue;
            }

            candidates.push(MultiValue2::from((asset, value)));
        }

        candidates
    }

    /// Index of the most valuable candidate, the earliest one on ties.
    fn find_largest_collateral(
        &self,
        candidates: &ManagedVec<
            MultiValue2<EgldOrEsdtTokenIdentifier, ManagedDecimal<Self::Api, NumDecimals>>,
        >,
    ) -> usize {
        let mut largest_index = 0;
        let mut largest_value = self.wad_zero();

        for (index, candidate) in candidates.iter().enumerate() {
            let (_, value) = candidate.clone().into_tuple();
            if index == 0 || value > largest_value {
                largest_index = index;
                largest_value = value;
            }
        }

        largest_index
    }

    /// Shares of one market worth at most `value_usd`.
    ///
    /// The underlying is truncated to the asset's decimals, converted to shares
    /// rounding down and valued again from those shares, so the allocation
    /// never exceeds what it is worth.
    fn partial_seizure(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        available_shares: &ManagedDecimal<Self::Api, NumDecimals>,
        value_usd: &ManagedDecimal<Self::Api, NumDecimals>,
        cache: &mut Cache<Self>,
    ) -> SeizeAllocation<Self::Api> {
        let config = cache.get_cached_asset_info(asset);
        let price = cache.get_cached_price(asset);
        let state = cache.get_cached_market_state(asset);

        let target = self.usd_to_asset_amount(value_usd, &price.price, config.asset_decimals);
        let shares = self.get_min(
            self.underlying_to_shares_down(&target, &state.exchange_rate),
            available_shares.clone(),
        );
        let underlying = self.shares_to_underlying(&shares, &state.exchange_rate);
        let value = self.get_usd_value(&underlying, &price.price);

        SeizeAllocation {
            asset_id: asset.clone(),
            shares: shares.into_raw_units().clone(),
            underlying: underlying.into_raw_units().clone(),
            value_usd: value.into_raw_units().clone(),
        }
    }

    /// Applies a liquidation paid with `payment_amount` of `repay_asset`.
    ///
    /// **Process**:
    /// 1. Calculates the detail on freshly accrued markets.
    /// 2. Repays the bounded amount into the repay market on the borrower's behalf.
    /// 3. Refunds the unused part of the payment to the liquidator.
    /// 4. Moves every seized share balance from the borrower to the liquidator.
    /// 5. Flags the borrower when collateral ran out before the seize value.
    fn process_liquidation(
        &self,
        liquidator: &ManagedAddress,
        borrower: &ManagedAddress,
        repay_asset: &EgldOrEsdtTokenIdentifier,
        payment_amount: &BigUint,
        cache: &mut Cache<Self>,
    ) -> LiquidationDetail<Self::Api> {
        let detail =
            self.calculate_liquidation(liquidator, borrower, repay_asset, payment_amount, cache);

        let pool_address = cache.get_cached_pool_address(repay_asset);
        let position = self.get_position(borrower, repay_asset, cache);
        let repaid = self.to_decimal(detail.repay_amount.clone(), position.supply_shares.scale());
        let position = self
            .tx()
            .to(pool_address)
            .typed(proxy_pool::LiquidityPoolProxy)
            .repay(liquidator, position)
            .egld_or_single_esdt(repay_asset, 0, &detail.repay_amount)
            .returns(ReturnsResult)
            .sync_call();
        cache.refresh_market_state(repay_asset);

        self.store_position(borrower, &position);
        self.update_position_event(
            &ManagedBuffer::from("liquidation_repay"),
            borrower,
            &repaid,
            &position,
        );

        let refund = EgldOrEsdtTokenPayment::new(
            repay_asset.clone(),
            0,
            payment_amount - &detail.repay_amount,
        );
        self.tx().to(liquidator).payment(&refund).transfer_if_not_empty();

        for allocation in detail.seized.iter() {
            self.transfer_seized_shares(liquidator, borrower, &allocation, cache);
        }

        if detail.is_bad_debt {
            self.bad_debt_accounts().insert(borrower.clone());
            self.bad_debt_flagged_event(borrower, &detail.unrecovered_value_usd);
        }

        self.liquidation_event(liquidator, borrower, &detail);

        detail
    }

    fn transfer_seized_shares(
        &self,
        liquidator: &ManagedAddress,
        borrower: &ManagedAddress,
        allocation: &SeizeAllocation<Self::Api>,
        cache: &mut Cache<Self>,
    ) {
        let asset = &allocation.asset_id;
        let config = cache.get_cached_asset_info(asset);
        let shares = self.to_decimal(allocation.shares.clone(), config.asset_decimals);
        let underlying = self.to_decimal(allocation.underlying.clone(), config.asset_decimals);

        let mut borrower_position = self.get_position(borrower, asset, cache);
        borrower_position.supply_shares =
            match self.checked_sub(&borrower_position.supply_shares, &shares) {
                Some(left) => left,
                None => sc_panic!(ERROR_INSUFFICIENT_SHARES),
            };
        self.store_position(borrower, &borrower_position);

        let mut liquidator_position = self.get_position(liquidator, asset, cache);
        liquidator_position.supply_shares += &shares;
        self.store_position(liquidator, &liquidator_position);
        self.enter_market(liquidator, asset);

        self.update_position_event(
            &ManagedBuffer::from("liquidation_seize"),
            borrower,
            &underlying,
            &borrower_position,
        );
        self.update_position_event(
            &ManagedBuffer::from("liquidation_receive"),
            liquidator,
            &underlying,
            &liquidator_position,
        );
    }

    /// Whether a flagged borrower's debt now exceeds its remaining collateral.
    ///
    /// Collateral is counted at full market value here, not weighted, and
    /// supply in zero loan-to-value markets counts too.
    fn calculate_bad_borrower_detail(
        &self,
        borrower: &ManagedAddress,
        cache: &mut Cache<Self>,
    ) -> BadBorrowerDetail<Self::Api> {
        let totals = self.calculate_account_totals(borrower, cache);
        let is_flagged = self.bad_debt_accounts().contains(borrower);
        let has_bad_debt = is_flagged
            && !totals.has_unpriced_debt
            && !totals.has_unpriced_collateral
            && totals.borrow_value_usd > totals.raw_collateral_value_usd;

        BadBorrowerDetail {
            borrower: borrower.clone(),
            is_flagged,
            has_bad_debt,
            borrow_value_usd: totals.borrow_value_usd.into_raw_units().clone(),
            collateral_value_usd: totals.raw_collateral_value_usd.into_raw_units().clone(),
        }
    }

    /// Writes off every remaining debt of a flagged borrower against reserves.
    ///
    /// Collateral still held by the borrower stays with it. The flag is
    /// cleared once all debts are forgiven.
    fn process_bad_debt(&self, borrower: &ManagedAddress, cache: &mut Cache<Self>) {
        require!(
            self.bad_debt_accounts().contains(borrower),
            ERROR_POSITION_HAS_NO_BAD_DEBT
        );
        let totals = self.calculate_account_totals(borrower, cache);
        require!(
            !totals.has_unpriced_debt && !totals.has_unpriced_collateral,
            ERROR_PRICE_UNAVAILABLE
        );
        require!(
            totals.borrow_value_usd > totals.raw_collateral_value_usd,
            ERROR_POSITION_HAS_NO_BAD_DEBT
        );

        for asset in self.entered_markets(borrower).iter() {
            let position = match self.positions(borrower).get(&asset) {
                Some(position) if position.has_borrow() => position,
                _ => continue,
            };

            let debt = self.get_borrow_underlying(&position, cache);
            let pool_address = cache.get_cached_pool_address(&asset);
            let position = self
                .tx()
                .to(pool_address)
                .typed(proxy_pool::LiquidityPoolProxy)
                .absorb_bad_debt(position)
                .returns(ReturnsResult)
                .sync_call();
            cache.refresh_market_state(&asset);

            self.store_position(borrower, &position);
            self.bad_debt_socialized_event(borrower, &asset, &debt);
        }

        self.bad_debt_accounts().swap_remove(borrower);
    }
}
