multiversx_sc::imports!();

use common_errors::{ERROR_MARKET_BALANCE_NOT_ZERO, ERROR_MARKET_NOT_ENTERED};

use crate::{cache::Cache, helpers, oracle, storage, utils, validation};

#[multiversx_sc::module]
pub trait PositionAccountModule:
    storage::Storage
    + oracle::OracleModule
    + utils::LendingUtilsModule
    + validation::ValidationModule
    + helpers::MathsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
{
    /// Enters a listed market so its balances count towards the caller's risk.
    ///
    /// Entering is membership only: no balance is created. Supply, borrow and
    /// collateral received through a liquidation enter markets on their own.
    #[endpoint(addToMarket)]
    fn add_to_market(&self, asset: EgldOrEsdtTokenIdentifier) {
        self.reentrancy_guard(self.operation_ongoing().get());
        self.require_asset_supported(&asset);

        let caller = self.blockchain().get_caller();
        self.enter_market(&caller, &asset);
    }

    /// Leaves a market.
    ///
    /// # Errors
    /// - `ERROR_MARKET_NOT_ENTERED`: The caller is not in the market.
    /// - `ERROR_MARKET_BALANCE_NOT_ZERO`: Shares or debt are left in it.
    #[endpoint(removeFromMarket)]
    fn remove_from_market(&self, asset: EgldOrEsdtTokenIdentifier) {
        let mut cache = Cache::new(self);
        self.reentrancy_guard(cache.operation_ongoing);
        let caller = self.blockchain().get_caller();

        let mut entered_markets = self.entered_markets(&caller);
        require!(entered_markets.contains(&asset), ERROR_MARKET_NOT_ENTERED);

        let position = self.get_position(&caller, &asset, &mut cache);
        let debt = self.get_borrow_underlying(&position, &mut cache);
        require!(
            !position.has_supply() && self.is_zero(&debt),
            ERROR_MARKET_BALANCE_NOT_ZERO
        );

        entered_markets.remove(&asset);
        self.positions(&caller).remove(&asset);

        self.exit_market_event(&caller, &asset);
    }
}
