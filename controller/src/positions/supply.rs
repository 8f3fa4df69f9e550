multiversx_sc::imports!();

use common_proxies::proxy_pool;
use common_structs::AccountPosition;

use crate::{cache::Cache, helpers, oracle, storage, utils, validation};

#[multiversx_sc::module]
pub trait PositionSupplyModule:
    storage::Storage
    + oracle::OracleModule
    + utils::LendingUtilsModule
    + validation::ValidationModule
    + helpers::MathsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
{
    /// Deposits `amount` of `asset` for `supplier` and enters the market.
    ///
    /// The ledger mints shares at its post-accrual exchange rate.
    fn process_supply(
        &self,
        supplier: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        cache: &mut Cache<Self>,
    ) -> AccountPosition<Self::Api> {
        let pool_address = self.require_asset_supported(asset);
        self.require_amount_greater_than_zero(amount);

        let params = cache.get_cached_market_params(asset);
        let amount_dec = self.to_decimal(amount.clone(), params.asset_decimals);
        self.validate_supply(asset, &amount_dec, cache);

        let position = self.get_position(supplier, asset, cache);
        let position = self
            .tx()
            .to(pool_address)
            .typed(proxy_pool::LiquidityPoolProxy)
            .supply(position)
            .egld_or_single_esdt(asset, 0, amount)
            .returns(ReturnsResult)
            .sync_call();
        cache.refresh_market_state(asset);

        self.store_position(supplier, &position);
        self.enter_market(supplier, asset);

        self.update_position_event(
            &ManagedBuffer::from("supply"),
            supplier,
            &amount_dec,
            &position,
        );

        position
    }
}
