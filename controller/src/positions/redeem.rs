multiversx_sc::imports!();

use common_proxies::proxy_pool;
use common_structs::AccountPosition;

use crate::{cache::Cache, helpers, oracle, storage, utils, validation};

#[multiversx_sc::module]
pub trait PositionRedeemModule:
    storage::Storage
    + oracle::OracleModule
    + utils::LendingUtilsModule
    + validation::ValidationModule
    + helpers::MathsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
{
    /// Withdraws up to `amount` of underlying from the redeemer's shares.
    ///
    /// An amount at or above the position's value closes it. The market stays
    /// entered until the account leaves it explicitly.
    fn process_redeem(
        &self,
        redeemer: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        cache: &mut Cache<Self>,
    ) -> AccountPosition<Self::Api> {
        let pool_address = self.require_asset_supported(asset);
        self.require_amount_greater_than_zero(amount);

        let params = cache.get_cached_market_params(asset);
        let amount_dec = self.to_decimal(amount.clone(), params.asset_decimals);
        let redeem_amount = self.validate_redeem(redeemer, asset, &amount_dec, cache);

        let position = self.get_position(redeemer, asset, cache);
        let position = self
            .tx()
            .to(pool_address)
            .typed(proxy_pool::LiquidityPoolProxy)
            .redeem(redeemer, redeem_amount.clone(), position)
            .returns(ReturnsResult)
            .sync_call();
        cache.refresh_market_state(asset);

        self.store_position(redeemer, &position);

        self.update_position_event(
            &ManagedBuffer::from("redeem"),
            redeemer,
            &redeem_amount,
            &position,
        );

        position
    }
}
