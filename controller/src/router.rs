#![allow(clippy::too_many_arguments)]

multiversx_sc::imports!();

use common_errors::{ERROR_ASSET_ALREADY_SUPPORTED, ERROR_INVALID_ASSET};
use common_proxies::proxy_pool;
use common_structs::{AssetConfig, MarketParams, OracleBinding};

use crate::{config, factory, helpers, oracle, storage, utils, validation};

#[multiversx_sc::module]
pub trait RouterModule:
    storage::Storage
    + oracle::OracleModule
    + utils::LendingUtilsModule
    + validation::ValidationModule
    + config::ConfigModule
    + factory::FactoryModule
    + helpers::MathsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
{
    /// Lists a new asset: deploys its ledger and registers its risk configuration.
    ///
    /// The market starts active, unfrozen and unpaused, with the oracle
    /// binding's staleness set to the controller default.
    ///
    /// # Arguments
    /// - `asset`: Token identifier (EGLD or ESDT) of the market.
    /// - `asset_decimals`: Decimals of the asset.
    /// - `base_rate`, `multiplier`, `jump_multiplier`: Annual rate curve, WAD.
    /// - `kink`: Utilization where the jump multiplier starts, WAD.
    /// - `reserve_factor`: Share of interest kept as reserves, WAD.
    /// - `blocks_per_year`: Used to derive per-block rates.
    /// - `loan_to_value`: Collateral weight, WAD. Zero lists a borrow-only market.
    /// - `feed_id`, `usd_pair_id`, `is_usd`: Oracle binding.
    /// - `supply_cap`, `borrow_cap`: Optional caps in asset units.
    ///
    /// # Returns
    /// - `ManagedAddress`: Address of the new ledger.
    ///
    /// # Errors
    /// - `ERROR_ASSET_ALREADY_SUPPORTED`: The asset is listed already.
    /// - `ERROR_INVALID_LOAN_TO_VALUE`, `ERROR_INVALID_ORACLE_BINDING`: Invalid configuration.
    #[allow_multiple_var_args]
    #[only_owner]
    #[endpoint(createMarket)]
    fn create_market(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        asset_decimals: usize,
        base_rate: BigUint,
        multiplier: BigUint,
        jump_multiplier: BigUint,
        kink: BigUint,
        reserve_factor: BigUint,
        blocks_per_year: u64,
        loan_to_value: BigUint,
        feed_id: ManagedBuffer,
        usd_pair_id: ManagedBuffer,
        is_usd: bool,
        supply_cap: OptionalValue<BigUint>,
        borrow_cap: OptionalValue<BigUint>,
    ) -> ManagedAddress {
        require!(
            self.pools_map(&asset).is_empty(),
            ERROR_ASSET_ALREADY_SUPPORTED
        );
        require!(asset.is_valid(), ERROR_INVALID_ASSET);
        self.require_valid_loan_to_value(&loan_to_value);

        let oracle = OracleBinding {
            feed_id,
            usd_pair_id,
            is_usd,
            max_stale_seconds: self.default_max_stale_seconds().get(),
        };
        self.require_valid_oracle_binding(&oracle);

        let address = self.create_pool(
            &asset,
            asset_decimals,
            &base_rate,
            &multiplier,
            &jump_multiplier,
            &kink,
            &reserve_factor,
            blocks_per_year,
        );

        self.pools_map(&asset).set(&address);
        self.markets().insert(asset.clone());

        let config = AssetConfig {
            asset_decimals,
            loan_to_value: self.to_decimal_wad(loan_to_value),
            is_active: true,
            is_frozen: false,
            supply_paused: false,
            borrow_paused: false,
            supply_cap: supply_cap.into_option(),
            borrow_cap: borrow_cap.into_option(),
            oracle,
        };
        self.asset_config(&asset).set(&config);

        let params = self.pool_params(address.clone()).get();
        self.create_market_event(&asset, &address, &params, &config);

        address
    }

    /// Replaces a market's rate curve. Interest up to this block accrues on the
    /// old curve.
    #[only_owner]
    #[endpoint(updateMarketRateModel)]
    fn update_market_rate_model(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        base_rate: BigUint,
        multiplier: BigUint,
        jump_multiplier: BigUint,
        kink: BigUint,
        reserve_factor: BigUint,
        blocks_per_year: u64,
    ) -> MarketParams<Self::Api> {
        let pool_address = self.require_asset_supported(&asset);

        self.tx()
            .to(pool_address)
            .typed(proxy_pool::LiquidityPoolProxy)
            .update_rate_model(
                base_rate,
                multiplier,
                jump_multiplier,
                kink,
                reserve_factor,
                blocks_per_year,
            )
            .returns(ReturnsResult)
            .sync_call()
    }

    /// Upgrades a market's ledger to the current template code.
    #[only_owner]
    #[endpoint(upgradeLiquidityPool)]
    fn upgrade_liquidity_pool(&self, asset: EgldOrEsdtTokenIdentifier) {
        let pool_address = self.require_asset_supported(&asset);

        self.upgrade_pool(pool_address);
    }

    /// Funds a market's reserves with the attached payment.
    #[only_owner]
    #[payable]
    #[endpoint(addReserves)]
    fn add_reserves(&self) {
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();
        let pool_address = self.require_asset_supported(&asset);
        self.require_amount_greater_than_zero(&amount);

        self.tx()
            .to(pool_address)
            .typed(proxy_pool::LiquidityPoolProxy)
            .add_reserves()
            .egld_or_single_esdt(&asset, 0, &amount)
            .returns(ReturnsResult)
            .sync_call();
    }

    /// Withdraws `amount` of a market's reserves to the owner.
    ///
    /// # Errors
    /// - `ERROR_INSUFFICIENT_RESERVES`: More than the accrued reserves.
    /// - `ERROR_INSUFFICIENT_POOL`: Reserves exist but cash is lent out.
    #[only_owner]
    #[endpoint(claimReserves)]
    fn claim_reserves(&self, asset: EgldOrEsdtTokenIdentifier, amount: BigUint) {
        let pool_address = self.require_asset_supported(&asset);
        self.require_amount_greater_than_zero(&amount);

        let config = self.asset_config(&asset).get();
        let caller = self.blockchain().get_caller();
        self.tx()
            .to(pool_address)
            .typed(proxy_pool::LiquidityPoolProxy)
            .reduce_reserves(&caller, self.to_decimal(amount, config.asset_decimals))
            .returns(ReturnsResult)
            .sync_call();
    }
}
