multiversx_sc::imports!();

use common_errors::ERROR_NO_DEBT;
use common_proxies::proxy_pool;
use common_structs::AccountPosition;

use crate::{cache::Cache, helpers, oracle, storage, utils, validation};

#[multiversx_sc::module]
pub trait PositionRepayModule:
    storage::Storage
    + oracle::OracleModule
    + utils::LendingUtilsModule
    + validation::ValidationModule
    + helpers::MathsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
{
    /// Applies `amount` of `asset` paid by `payer` to `borrower`'s debt.
    ///
    /// The ledger refunds anything above the outstanding balance to `payer`.
    /// An account whose last debt is cleared loses its bad-debt flag.
    fn process_repay(
        &self,
        payer: &ManagedAddress,
        borrower: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        cache: &mut Cache<Self>,
    ) -> AccountPosition<Self::Api> {
        let pool_address = self.require_asset_supported(asset);
        self.require_amount_greater_than_zero(amount);

        let position = self.get_position(borrower, asset, cache);
        require!(position.has_borrow(), ERROR_NO_DEBT);

        let debt = self.get_borrow_underlying(&position, cache);
        let repaid = self.get_min(self.to_decimal(amount.clone(), debt.scale()), debt);

        let position = self
            .tx()
            .to(pool_address)
            .typed(proxy_pool::LiquidityPoolProxy)
            .repay(payer, position)
            .egld_or_single_esdt(asset, 0, amount)
            .returns(ReturnsResult)
            .sync_call();
        cache.refresh_market_state(asset);

        self.store_position(borrower, &position);

        if !self.has_any_debt(borrower) {
            self.bad_debt_accounts().swap_remove(borrower);
        }

        self.update_position_event(&ManagedBuffer::from("repay"), borrower, &repaid, &position);

        position
    }
}
