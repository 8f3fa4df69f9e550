use common_constants::MAX_BORROWED_DUST;
use common_structs::{MarketParams, MarketState};

multiversx_sc::imports!();

/// In-memory snapshot of the market, committed back to storage on drop.
///
/// Every endpoint builds one `Cache`, accrues it, applies its deltas and lets
/// it go out of scope, so the storage writes happen exactly once per call.
pub struct Cache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,
    pub params: MarketParams<C::Api>,
    pub state: MarketState<C::Api>,
    pub bad_debt: ManagedDecimal<C::Api, NumDecimals>,
    /// Block nonce the market is accrued up to by `ensure_fresh`.
    pub current_block: u64,
    pub zero: ManagedDecimal<C::Api, NumDecimals>,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage + common_math::SharedMathModule,
{
    pub fn new(sc_ref: &'a C) -> Self {
        let params = sc_ref.params().get();
        Cache {
            zero: sc_ref.to_decimal(BigUint::zero(), params.asset_decimals),
            state: MarketState {
                cash: sc_ref.cash().get(),
                borrowed: sc_ref.borrowed().get(),
                reserves: sc_ref.reserves().get(),
                supply_shares: sc_ref.supply_shares().get(),
                exchange_rate: sc_ref.exchange_rate().get(),
                borrow_index: sc_ref.borrow_index().get(),
                last_accrual_block: sc_ref.last_accrual_block().get(),
            },
            bad_debt: sc_ref.bad_debt().get(),
            current_block: sc_ref.blockchain().get_block_nonce(),
            params,
            sc_ref,
        }
    }
}

impl<C> Drop for Cache<'_, C>
where
    C: crate::storage::Storage,
{
    fn drop(&mut self) {
        // commit changes to storage for the mutable fields
        self.sc_ref.cash().set(&self.state.cash);
        self.sc_ref.borrowed().set(&self.state.borrowed);
        self.sc_ref.reserves().set(&self.state.reserves);
        self.sc_ref.supply_shares().set(&self.state.supply_shares);
        self.sc_ref.exchange_rate().set(&self.state.exchange_rate);
        self.sc_ref.borrow_index().set(&self.state.borrow_index);
        self.sc_ref
            .last_accrual_block()
            .set(self.state.last_accrual_block);
        self.sc_ref.bad_debt().set(&self.bad_debt);
    }
}

impl<C> Cache<'_, C>
where
    C: crate::storage::Storage + common_math::SharedMathModule + common_rates::InterestRates,
{
    pub fn get_decimal_value(
        &self,
        value: &BigUint<C::Api>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref
            .to_decimal(value.clone(), self.params.asset_decimals)
    }

    pub fn is_same_asset(&self, asset: &EgldOrEsdtTokenIdentifier<C::Api>) -> bool {
        self.params.asset_id == *asset
    }

    pub fn has_cash(&self, amount: &ManagedDecimal<C::Api, NumDecimals>) -> bool {
        self.state.cash >= *amount
    }

    pub fn has_reserves(&self, amount: &ManagedDecimal<C::Api, NumDecimals>) -> bool {
        self.state.reserves >= *amount
    }

    /// Re-derives the exchange rate from the current totals.
    pub fn sync_exchange_rate(&mut self) {
        self.state.exchange_rate = self.sc_ref.calc_exchange_rate(&self.state);
    }

    /// Decreases total borrows, returning `false` when `amount` is too large.
    ///
    /// Per-account balances round up while the aggregate accrues half-up, so
    /// the last repayer can owe a few units more than the aggregate holds.
    /// Up to `MAX_BORROWED_DUST` of excess floors the total at zero.
    pub fn reduce_borrowed(&mut self, amount: &ManagedDecimal<C::Api, NumDecimals>) -> bool {
        if let Some(left) = self.sc_ref.checked_sub(&self.state.borrowed, amount) {
            self.state.borrowed = left;
            return true;
        }

        let excess = amount.clone() - self.state.borrowed.clone();
        if excess > self.get_decimal_value(&BigUint::from(MAX_BORROWED_DUST)) {
            return false;
        }

        self.state.borrowed = self.zero.clone();
        true
    }
}
