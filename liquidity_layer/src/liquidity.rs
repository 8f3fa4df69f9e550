multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_BORROWED_UNDERFLOW, ERROR_INSUFFICIENT_POOL,
    ERROR_INSUFFICIENT_RESERVES, ERROR_INSUFFICIENT_SHARES, ERROR_NO_DEBT, ERROR_ZERO_SHARES,
};
use common_structs::*;

use super::{cache::Cache, storage, utils, view};

#[multiversx_sc::module]
pub trait LiquidityModule:
    storage::Storage
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + view::ViewModule
{
    /// Accrues the market up to the current block and returns the new totals.
    ///
    /// Idempotent within a block: the second call in the same block changes nothing.
    #[only_owner]
    #[endpoint(accrueInterest)]
    fn accrue_interest(&self) -> MarketState<Self::Api> {
        let mut cache = Cache::new(self);

        self.ensure_fresh(&mut cache);

        self.emit_market_update(&cache);

        cache.state.clone()
    }

    /// Deposits the attached payment and mints supply shares to `position`.
    ///
    /// **Process**:
    /// 1. Accrues the market so the post-accrual exchange rate is used.
    /// 2. Mints `floor(amount / exchange_rate)` shares; a deposit too small to mint a share is rejected.
    /// 3. Adds the deposit to cash and the shares to the total supply.
    ///
    /// # Returns
    /// - `AccountPosition<Self::Api>`: The position with its new share balance.
    #[only_owner]
    #[payable]
    #[endpoint(supply)]
    fn supply(&self, mut position: AccountPosition<Self::Api>) -> AccountPosition<Self::Api> {
        let mut cache = Cache::new(self);
        let amount = self.get_payment_amount(&cache);

        self.ensure_fresh(&mut cache);

        let shares = self.underlying_to_shares_down(&amount, &cache.state.exchange_rate);
        require!(!self.is_zero(&shares), ERROR_ZERO_SHARES);

        position.supply_shares += &shares;
        cache.state.supply_shares += &shares;
        cache.state.cash += &amount;
        cache.sync_exchange_rate();

        self.emit_market_update(&cache);

        position
    }

    /// Lends `amount` to `initial_caller`.
    ///
    /// The outstanding balance is rolled into a fresh principal snapshot at the
    /// current borrow index before the new amount is added.
    #[only_owner]
    #[endpoint(borrow)]
    fn borrow(
        &self,
        initial_caller: &ManagedAddress,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        mut position: AccountPosition<Self::Api>,
    ) -> AccountPosition<Self::Api> {
        let mut cache = Cache::new(self);

        self.ensure_fresh(&mut cache);

        require!(!self.is_zero(amount), ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
        require!(cache.has_cash(amount), ERROR_INSUFFICIENT_POOL);

        let balance = self.calc_borrow_balance(
            &position.borrow_principal,
            &position.borrow_index,
            &cache.state.borrow_index,
        );
        position.borrow_principal = balance + amount.clone();
        position.borrow_index = cache.state.borrow_index.clone();

        cache.state.borrowed += amount;
        cache.state.cash -= amount;
        cache.sync_exchange_rate();

        self.send_asset(&cache, amount, initial_caller);

        self.emit_market_update(&cache);

        position
    }

    /// Pays out underlying against the position's shares.
    ///
    /// **Process**:
    /// 1. Accrues, then values the position at the post-accrual exchange rate.
    /// 2. A request at or above that value closes the position: every share is
    ///    burned and `floor(shares * exchange_rate)` is paid.
    /// 3. Otherwise `ceil(amount / exchange_rate)` shares are burned for exactly `amount`.
    /// 4. Fails when cash cannot cover the payout or the shares do not suffice.
    #[only_owner]
    #[endpoint(redeem)]
    fn redeem(
        &self,
        initial_caller: &ManagedAddress,
        amount: ManagedDecimal<Self::Api, NumDecimals>,
        mut position: AccountPosition<Self::Api>,
    ) -> AccountPosition<Self::Api> {
        let mut cache = Cache::new(self);

        self.ensure_fresh(&mut cache);

        require!(!self.is_zero(&amount), ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
        require!(position.has_supply(), ERROR_INSUFFICIENT_SHARES);

        let exchange_rate = cache.state.exchange_rate.clone();
        let position_value = self.shares_to_underlying(&position.supply_shares, &exchange_rate);
        let (shares, payout) = if amount >= position_value {
            (position.supply_shares.clone(), position_value)
        } else {
            (
                self.underlying_to_shares_up(&amount, &exchange_rate),
                amount,
            )
        };

        require!(cache.has_cash(&payout), ERROR_INSUFFICIENT_POOL);

        position.supply_shares = self
            .checked_sub(&position.supply_shares, &shares)
            .unwrap_or_else(|| sc_panic!(ERROR_INSUFFICIENT_SHARES));
        cache.state.supply_shares = self
            .checked_sub(&cache.state.supply_shares, &shares)
            .unwrap_or_else(|| sc_panic!(ERROR_INSUFFICIENT_SHARES));
        cache.state.cash -= &payout;
        cache.sync_exchange_rate();

        self.send_asset(&cache, &payout, initial_caller);

        self.emit_market_update(&cache);

        position
    }

    /// Applies the attached payment to the position's debt.
    ///
    /// Any amount above the current balance is refunded to `initial_caller`.
    #[only_owner]
    #[payable]
    #[endpoint(repay)]
    fn repay(
        &self,
        initial_caller: ManagedAddress,
        mut position: AccountPosition<Self::Api>,
    ) -> AccountPosition<Self::Api> {
        let mut cache = Cache::new(self);
        let amount = self.get_payment_amount(&cache);

        self.ensure_fresh(&mut cache);

        let debt = self.calc_borrow_balance(
            &position.borrow_principal,
            &position.borrow_index,
            &cache.state.borrow_index,
        );
        require!(!self.is_zero(&debt), ERROR_NO_DEBT);

        let repaid = self.get_min(amount.clone(), debt.clone());
        let overpaid = amount - repaid.clone();

        position.borrow_principal = debt - repaid.clone();
        position.borrow_index = cache.state.borrow_index.clone();

        require!(cache.reduce_borrowed(&repaid), ERROR_BORROWED_UNDERFLOW);
        cache.state.cash += &repaid;
        cache.sync_exchange_rate();

        self.send_asset(&cache, &overpaid, &initial_caller);

        self.emit_market_update(&cache);

        position
    }

    /// Forgives the position's whole debt and writes it off against reserves.
    ///
    /// Borrows and reserves drop by the same amount, so the exchange rate is
    /// untouched and suppliers do not bear the loss.
    #[only_owner]
    #[endpoint(absorbBadDebt)]
    fn absorb_bad_debt(
        &self,
        mut position: AccountPosition<Self::Api>,
    ) -> AccountPosition<Self::Api> {
        let mut cache = Cache::new(self);

        self.ensure_fresh(&mut cache);

        let debt = self.calc_borrow_balance(
            &position.borrow_principal,
            &position.borrow_index,
            &cache.state.borrow_index,
        );
        require!(!self.is_zero(&debt), ERROR_NO_DEBT);
        require!(cache.has_reserves(&debt), ERROR_INSUFFICIENT_RESERVES);

        require!(cache.reduce_borrowed(&debt), ERROR_BORROWED_UNDERFLOW);
        cache.state.reserves -= &debt;
        cache.bad_debt += &debt;
        cache.sync_exchange_rate();

        position.borrow_principal = position.zero_decimal();
        position.borrow_index = cache.state.borrow_index.clone();

        self.emit_market_update(&cache);

        position
    }

    /// Funds reserves with the attached payment.
    #[only_owner]
    #[payable]
    #[endpoint(addReserves)]
    fn add_reserves(&self) {
        let mut cache = Cache::new(self);
        let amount = self.get_payment_amount(&cache);

        self.ensure_fresh(&mut cache);

        cache.state.cash += &amount;
        cache.state.reserves += &amount;
        cache.sync_exchange_rate();

        self.update_reserves_event(&cache.params.asset_id, true, &amount);
        self.emit_market_update(&cache);
    }

    /// Withdraws `amount` of reserves to `to`.
    #[only_owner]
    #[endpoint(reduceReserves)]
    fn reduce_reserves(&self, to: &ManagedAddress, amount: ManagedDecimal<Self::Api, NumDecimals>) {
        let mut cache = Cache::new(self);

        self.ensure_fresh(&mut cache);

        require!(cache.has_reserves(&amount), ERROR_INSUFFICIENT_RESERVES);
        require!(cache.has_cash(&amount), ERROR_INSUFFICIENT_POOL);

        cache.state.cash -= &amount;
        cache.state.reserves -= &amount;
        cache.sync_exchange_rate();

        self.send_asset(&cache, &amount, to);

        self.update_reserves_event(&cache.params.asset_id, false, &amount);
        self.emit_market_update(&cache);
    }

    /// Replaces the rate curve.
    ///
    /// Interest up to the current block is accrued with the old curve first,
    /// so the change only applies from here on.
    #[only_owner]
    #[endpoint(updateRateModel)]
    fn update_rate_model(
        &self,
        base_rate: BigUint,
        multiplier: BigUint,
        jump_multiplier: BigUint,
        kink: BigUint,
        reserve_factor: BigUint,
        blocks_per_year: u64,
    ) -> MarketParams<Self::Api> {
        let mut cache = Cache::new(self);

        self.ensure_fresh(&mut cache);

        cache.params = self.build_market_params(
            cache.params.asset_id.clone(),
            cache.params.asset_decimals,
            base_rate,
            multiplier,
            jump_multiplier,
            kink,
            reserve_factor,
            blocks_per_year,
        );
        self.params().set(&cache.params);

        self.market_params_event(&cache.params.asset_id, &cache.params);
        self.emit_market_update(&cache);

        cache.params.clone()
    }
}
