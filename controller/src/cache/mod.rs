use common_structs::{AssetConfig, AssetPrice, MarketParams, MarketState};

multiversx_sc::imports!();

/// Per-call snapshot of configs, ledger states and prices.
///
/// Nothing here outlives the call: prices and market states are fetched again
/// by the next operation.
pub struct Cache<'a, C>
where
    C: crate::oracle::OracleModule + crate::storage::Storage,
{
    sc_ref: &'a C,

    pub prices_cache:
        ManagedMapEncoded<C::Api, EgldOrEsdtTokenIdentifier<C::Api>, AssetPrice<C::Api>>,
    pub asset_configs:
        ManagedMapEncoded<C::Api, EgldOrEsdtTokenIdentifier<C::Api>, AssetConfig<C::Api>>,
    pub asset_pools:
        ManagedMapEncoded<C::Api, EgldOrEsdtTokenIdentifier<C::Api>, ManagedAddress<C::Api>>,
    pub market_params:
        ManagedMapEncoded<C::Api, EgldOrEsdtTokenIdentifier<C::Api>, MarketParams<C::Api>>,
    pub market_states:
        ManagedMapEncoded<C::Api, EgldOrEsdtTokenIdentifier<C::Api>, MarketState<C::Api>>,
    pub price_aggregator_sc: ManagedAddress<C::Api>,
    pub current_timestamp: u64,
    pub current_block: u64,
    pub operation_ongoing: bool,
    /// Replay accrual locally instead of asking the ledgers to commit it
    pub simulate: bool,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::oracle::OracleModule + crate::storage::Storage,
{
    pub fn new(sc_ref: &'a C) -> Self {
        Cache {
            sc_ref,
            prices_cache: ManagedMapEncoded::new(),
            asset_configs: ManagedMapEncoded::new(),
            asset_pools: ManagedMapEncoded::new(),
            market_params: ManagedMapEncoded::new(),
            market_states: ManagedMapEncoded::new(),
            price_aggregator_sc: sc_ref.price_aggregator_address().get(),
            current_timestamp: sc_ref.blockchain().get_block_timestamp(),
            current_block: sc_ref.blockchain().get_block_nonce(),
            operation_ongoing: sc_ref.operation_ongoing().get(),
            simulate: false,
        }
    }

    /// Cache for read-only endpoints, which cannot call into the ledgers.
    pub fn new_view(sc_ref: &'a C) -> Self {
        let mut cache = Self::new(sc_ref);
        cache.simulate = true;

        cache
    }

    /// Retrieves or caches asset configuration data.
    ///
    /// # Arguments
    /// - `token_id`: Token identifier.
    ///
    /// # Returns
    /// - `AssetConfig` for the specified token.
    pub fn get_cached_asset_info(
        &mut self,
        token_id: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> AssetConfig<C::Api> {
        let existing = self.asset_configs.contains(token_id);
        if existing {
            return self.asset_configs.get(token_id);
        }

        let new = self.sc_ref.asset_config(token_id).get();
        self.asset_configs.put(token_id, &new);

        new
    }

    /// Retrieves or caches the ledger address for a token.
    pub fn get_cached_pool_address(
        &mut self,
        token_id: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> ManagedAddress<C::Api> {
        let existing = self.asset_pools.contains(token_id);
        if existing {
            return self.asset_pools.get(token_id);
        }

        let address = self.sc_ref.pools_map(token_id).get();
        self.asset_pools.put(token_id, &address);

        address
    }

    pub fn get_cached_market_params(
        &mut self,
        token_id: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> MarketParams<C::Api> {
        let existing = self.market_params.contains(token_id);
        if existing {
            return self.market_params.get(token_id);
        }

        let pool_address = self.get_cached_pool_address(token_id);
        let new = self.sc_ref.pool_params(pool_address).get();
        self.market_params.put(token_id, &new);

        new
    }

    /// Market totals accrued to the current block.
    ///
    /// The first lookup of a market in a call performs the accrual, through the
    /// ledger on mutating paths and by local replay on reads.
    pub fn get_cached_market_state(
        &mut self,
        token_id: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> MarketState<C::Api> {
        let existing = self.market_states.contains(token_id);
        if existing {
            return self.market_states.get(token_id);
        }

        let new = self.sc_ref.update_market_state(token_id, self);
        self.market_states.put(token_id, &new);

        new
    }

    /// Re-reads a market after the ledger changed its balances in this call.
    pub fn refresh_market_state(&mut self, token_id: &EgldOrEsdtTokenIdentifier<C::Api>) {
        let pool_address = self.get_cached_pool_address(token_id);
        let state = self.sc_ref.read_market_state(&pool_address);
        self.market_states.put(token_id, &state);
    }

    pub fn get_cached_price(
        &mut self,
        token_id: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> AssetPrice<C::Api> {
        let existing = self.prices_cache.contains(token_id);
        if existing {
            return self.prices_cache.get(token_id);
        }

        let config = self.get_cached_asset_info(token_id);
        let new = self.sc_ref.fetch_asset_price(
            &config.oracle,
            &self.price_aggregator_sc,
            self.current_timestamp,
        );
        self.prices_cache.put(token_id, &new);

        new
    }
}
