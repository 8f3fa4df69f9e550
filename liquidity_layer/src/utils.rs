multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_constants::{MAX_RESERVE_FACTOR, RAY_PRECISION, WAD};
use common_errors::{
    ERROR_INVALID_ASSET, ERROR_INVALID_BLOCKS_PER_YEAR, ERROR_INVALID_KINK,
    ERROR_INVALID_RESERVE_FACTOR,
};
use common_structs::MarketParams;

use crate::{cache::Cache, storage};

/// Helpers shared by the ledger endpoints: accrual, events, transfers and
/// payment intake.
#[multiversx_sc::module]
pub trait UtilsModule:
    storage::Storage
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Brings the cached market up to the current block.
    ///
    /// Called explicitly at the top of every endpoint, before any balance is
    /// read for conversion, so that shares and debt are always priced at the
    /// post-accrual exchange rate and index.
    fn ensure_fresh(&self, cache: &mut Cache<Self>) {
        let current_block = cache.current_block;
        self.accrue_market(&mut cache.state, &cache.params, current_block);
    }

    #[inline(always)]
    fn emit_market_update(&self, cache: &Cache<Self>) {
        self.update_market_state_event(
            cache.current_block,
            &cache.params.asset_id,
            &cache.state,
        );
    }

    /// Transfers `amount` of the market asset to `to`, skipping empty transfers.
    #[inline]
    fn send_asset(
        &self,
        cache: &Cache<Self>,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        to: &ManagedAddress,
    ) -> EgldOrEsdtTokenPayment<Self::Api> {
        let payment = EgldOrEsdtTokenPayment::new(
            cache.params.asset_id.clone(),
            0,
            amount.into_raw_units().clone(),
        );

        self.tx().to(to).payment(&payment).transfer_if_not_empty();

        payment
    }

    /// Reads the attached payment and checks it is the market asset.
    fn get_payment_amount(&self, cache: &Cache<Self>) -> ManagedDecimal<Self::Api, NumDecimals> {
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();

        require!(cache.is_same_asset(&asset), ERROR_INVALID_ASSET);

        cache.get_decimal_value(&amount)
    }

    /// Validates the administrator's curve and converts it to stored form.
    ///
    /// Annual rates arrive as WAD fractions and are stored per block in RAY.
    /// The kink becomes a RAY utilization, the reserve factor stays WAD.
    #[allow(clippy::too_many_arguments)]
    fn build_market_params(
        &self,
        asset_id: EgldOrEsdtTokenIdentifier,
        asset_decimals: usize,
        base_rate: BigUint,
        multiplier: BigUint,
        jump_multiplier: BigUint,
        kink: BigUint,
        reserve_factor: BigUint,
        blocks_per_year: u64,
    ) -> MarketParams<Self::Api> {
        require!(blocks_per_year > 0, ERROR_INVALID_BLOCKS_PER_YEAR);
        require!(kink <= BigUint::from(WAD), ERROR_INVALID_KINK);
        require!(
            reserve_factor <= BigUint::from(MAX_RESERVE_FACTOR),
            ERROR_INVALID_RESERVE_FACTOR
        );

        MarketParams {
            asset_id,
            asset_decimals,
            base_rate: self.per_block_rate(&self.to_decimal_wad(base_rate), blocks_per_year),
            multiplier: self.per_block_rate(&self.to_decimal_wad(multiplier), blocks_per_year),
            jump_multiplier: self
                .per_block_rate(&self.to_decimal_wad(jump_multiplier), blocks_per_year),
            kink: self.to_decimal_wad(kink).rescale(RAY_PRECISION),
            reserve_factor: self.to_decimal_wad(reserve_factor),
            blocks_per_year,
        }
    }
}
