multiversx_sc::imports!();

use common_constants::{USD_TICKER, WAD_PRECISION};
use common_errors::ERROR_INVALID_ORACLE_BINDING;
use common_proxies::proxy_pool;
use common_structs::{AssetPrice, MarketState, OracleBinding};

use crate::{cache::Cache, storage};

/// Price and market-state adapter.
///
/// Prices come from the aggregator's latest completed rounds, read from its
/// storage on every operation. A missing, expired or zero round never reverts
/// a read; it yields an unusable price that callers must handle.
#[multiversx_sc::module]
pub trait OracleModule:
    storage::Storage + common_math::SharedMathModule + common_rates::InterestRates
{
    /// Brings a market's totals to the current block.
    ///
    /// On mutating paths the ledger commits the accrual itself; reads replay the
    /// same accrual on the ledger's stored totals without writing anything.
    fn update_market_state(
        &self,
        asset_id: &EgldOrEsdtTokenIdentifier<Self::Api>,
        cache: &mut Cache<Self>,
    ) -> MarketState<Self::Api> {
        let pool_address = cache.get_cached_pool_address(asset_id);
        if cache.simulate {
            let params = cache.get_cached_market_params(asset_id);
            let mut state = self.read_market_state(&pool_address);
            self.accrue_market(&mut state, &params, cache.current_block);

            state
        } else {
            self.tx()
                .to(pool_address)
                .typed(proxy_pool::LiquidityPoolProxy)
                .accrue_interest()
                .returns(ReturnsResult)
                .sync_call()
        }
    }

    fn read_market_state(&self, pool_address: &ManagedAddress) -> MarketState<Self::Api> {
        MarketState {
            cash: self.pool_cash(pool_address.clone()).get(),
            borrowed: self.pool_borrowed(pool_address.clone()).get(),
            reserves: self.pool_reserves(pool_address.clone()).get(),
            supply_shares: self.pool_supply_shares(pool_address.clone()).get(),
            exchange_rate: self.pool_exchange_rate(pool_address.clone()).get(),
            borrow_index: self.pool_borrow_index(pool_address.clone()).get(),
            last_accrual_block: self.pool_last_accrual_block(pool_address.clone()).get(),
        }
    }

    /// USD price of a market from its binding.
    ///
    /// **Resolution**:
    /// - `is_usd`: the `feed_id/USD` round.
    /// - otherwise: `feed_id/usd_pair_id` multiplied by `usd_pair_id/USD`.
    ///
    /// # Returns
    /// - `AssetPrice`: WAD price, or zero with `is_usable == false` when any
    ///   round involved is missing, expired or zero.
    fn fetch_asset_price(
        &self,
        binding: &OracleBinding<Self::Api>,
        price_aggregator: &ManagedAddress,
        now: u64,
    ) -> AssetPrice<Self::Api> {
        let usd = ManagedBuffer::new_from_bytes(USD_TICKER);
        if binding.is_usd {
            let direct =
                self.read_round_price(price_aggregator, &binding.feed_id, &usd, binding, now);

            return match direct {
                Some(price) => self.usable_price(price),
                None => self.unusable_price(),
            };
        }

        let cross = self.read_round_price(
            price_aggregator,
            &binding.feed_id,
            &binding.usd_pair_id,
            binding,
            now,
        );
        let pair_usd =
            self.read_round_price(price_aggregator, &binding.usd_pair_id, &usd, binding, now);

        match (cross, pair_usd) {
            (Some(cross), Some(pair_usd)) => {
                self.usable_price(self.mul_half_up(&cross, &pair_usd, WAD_PRECISION))
            },
            _ => self.unusable_price(),
        }
    }

    /// Latest round of `from/to`, `None` when it cannot be trusted.
    fn read_round_price(
        &self,
        price_aggregator: &ManagedAddress,
        from: &ManagedBuffer,
        to: &ManagedBuffer,
        binding: &OracleBinding<Self::Api>,
        now: u64,
    ) -> Option<ManagedDecimal<Self::Api, NumDecimals>> {
        let mapper = self.rounds(price_aggregator.clone(), from.clone(), to.clone());
        if mapper.is_empty() {
            return None;
        }

        let round = mapper.get();
        let age = now.saturating_sub(round.timestamp);
        if age > binding.max_stale_seconds || round.price == 0u64 {
            return None;
        }

        Some(self.to_decimal_wad(round.price))
    }

    fn usable_price(&self, price: ManagedDecimal<Self::Api, NumDecimals>) -> AssetPrice<Self::Api> {
        AssetPrice {
            is_usable: !self.is_zero(&price),
            price,
        }
    }

    fn unusable_price(&self) -> AssetPrice<Self::Api> {
        AssetPrice {
            price: self.wad_zero(),
            is_usable: false,
        }
    }

    /// Rejects bindings that could never resolve to a price.
    fn require_valid_oracle_binding(&self, binding: &OracleBinding<Self::Api>) {
        require!(!binding.feed_id.is_empty(), ERROR_INVALID_ORACLE_BINDING);
        require!(
            binding.is_usd || !binding.usd_pair_id.is_empty(),
            ERROR_INVALID_ORACLE_BINDING
        );
        require!(binding.max_stale_seconds > 0, ERROR_INVALID_ORACLE_BINDING);
    }
}
