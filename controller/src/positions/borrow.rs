multiversx_sc::imports!();

use common_proxies::proxy_pool;
use common_structs::AccountPosition;

use crate::{cache::Cache, helpers, oracle, storage, utils, validation};

#[multiversx_sc::module]
pub trait PositionBorrowModule:
    storage::Storage
    + oracle::OracleModule
    + utils::LendingUtilsModule
    + validation::ValidationModule
    + helpers::MathsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
{
    /// Lends `amount` of `asset` to `borrower` once the solvency gate passes.
    ///
    /// The ledger sends the asset straight to the borrower and rolls the
    /// previous balance into a fresh principal snapshot.
    fn process_borrow(
        &self,
        borrower: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        cache: &mut Cache<Self>,
    ) -> AccountPosition<Self::Api> {
        let pool_address = self.require_asset_supported(asset);
        self.require_amount_greater_than_zero(amount);

        let params = cache.get_cached_market_params(asset);
        let amount_dec = self.to_decimal(amount.clone(), params.asset_decimals);
        self.validate_borrow(borrower, asset, &amount_dec, cache);

        let position = self.get_position(borrower, asset, cache);
        let position = self
            .tx()
            .to(pool_address)
            .typed(proxy_pool::LiquidityPoolProxy)
            .borrow(borrower, amount_dec.clone(), position)
            .returns(ReturnsResult)
            .sync_call();
        cache.refresh_market_state(asset);

        self.store_position(borrower, &position);

        self.update_position_event(
            &ManagedBuffer::from("borrow"),
            borrower,
            &amount_dec,
            &position,
        );

        position
    }
}
