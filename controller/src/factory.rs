use common_errors::ERROR_TEMPLATE_EMPTY;
use common_proxies::proxy_pool;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait FactoryModule: crate::storage::Storage {
    /// Deploys a market ledger from the template and returns its address.
    ///
    /// The controller becomes the owner of the new ledger, which is the only
    /// account allowed to move its balances.
    #[allow(clippy::too_many_arguments)]
    fn create_pool(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        asset_decimals: usize,
        base_rate: &BigUint,
        multiplier: &BigUint,
        jump_multiplier: &BigUint,
        kink: &BigUint,
        reserve_factor: &BigUint,
        blocks_per_year: u64,
    ) -> ManagedAddress {
        require!(
            !self.liq_pool_template_address().is_empty(),
            ERROR_TEMPLATE_EMPTY
        );

        self.tx()
            .typed(proxy_pool::LiquidityPoolProxy)
            .init(
                asset,
                asset_decimals,
                base_rate,
                multiplier,
                jump_multiplier,
                kink,
                reserve_factor,
                blocks_per_year,
            )
            .from_source(self.liq_pool_template_address().get())
            .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::READABLE)
            .returns(ReturnsNewManagedAddress)
            .sync_call()
    }

    /// Moves an existing ledger to the current template code.
    fn upgrade_pool(&self, pool_address: ManagedAddress) {
        require!(
            !self.liq_pool_template_address().is_empty(),
            ERROR_TEMPLATE_EMPTY
        );

        self.tx()
            .to(pool_address)
            .typed(proxy_pool::LiquidityPoolProxy)
            .upgrade()
            .from_source(self.liq_pool_template_address().get())
            .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::READABLE)
            .upgrade_async_call_and_exit();
    }
}
