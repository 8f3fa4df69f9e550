multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::MarketState;

use crate::storage;

/// Read-only market metrics. Every view reports the market as if it had
/// accrued up to the current block, without writing anything.
#[multiversx_sc::module]
pub trait ViewModule:
    common_rates::InterestRates + storage::Storage + common_math::SharedMathModule
{
    /// Market totals simulated to the current block.
    #[view(getMarketState)]
    fn get_market_state(&self) -> MarketState<Self::Api> {
        let params = self.params().get();
        let mut state = self.stored_market_state();
        self.accrue_market(&mut state, &params, self.blockchain().get_block_nonce());

        state
    }

    /// Current utilization, RAY.
    #[view(getUtilization)]
    fn get_utilization(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        let state = self.get_market_state();
        self.calc_utilization(&state.cash, &state.borrowed, &state.reserves)
    }

    /// Current borrow rate per block, RAY.
    #[view(getBorrowRate)]
    fn get_borrow_rate(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        let params = self.params().get();
        self.calc_borrow_rate(&self.get_utilization(), &params)
    }

    /// Current supply rate per block, RAY.
    #[view(getSupplyRate)]
    fn get_supply_rate(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        let params = self.params().get();
        let utilization = self.get_utilization();
        let borrow_rate = self.calc_borrow_rate(&utilization, &params);
        self.calc_supply_rate(&utilization, &borrow_rate, &params.reserve_factor)
    }

    fn stored_market_state(&self) -> MarketState<Self::Api> {
        MarketState {
            cash: self.cash().get(),
            borrowed: self.borrowed().get(),
            reserves: self.reserves().get(),
            supply_shares: self.supply_shares().get(),
            exchange_rate: self.exchange_rate().get(),
            borrow_index: self.borrow_index().get(),
            last_accrual_block: self.last_accrual_block().get(),
        }
    }
}
