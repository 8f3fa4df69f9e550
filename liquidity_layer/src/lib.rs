#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod cache;
pub mod liquidity;
pub mod storage;
pub mod utils;
pub mod view;
pub use common_events::*;

#[multiversx_sc::contract]
pub trait LiquidityPool:
    storage::Storage
    + common_events::EventsModule
    + common_rates::InterestRates
    + common_math::SharedMathModule
    + liquidity::LiquidityModule
    + utils::UtilsModule
    + view::ViewModule
{
    /// Initializes the ledger of a single market.
    ///
    /// **Process**:
    /// 1. Converts the per-year WAD curve into per-block RAY rates and stores the parameters.
    /// 2. Starts the exchange rate and the borrow index at 1.0.
    /// 3. Zeroes every total at the asset's decimals and stamps the current block.
    ///
    /// ### Parameters
    /// - `asset`: Token handled by this market.
    /// - `asset_decimals`: Decimals of `asset`.
    /// - `base_rate`, `multiplier`, `jump_multiplier`: Annual curve values, WAD.
    /// - `kink`: Utilization at which the jump multiplier applies, WAD.
    /// - `reserve_factor`: Share of interest kept as reserves, WAD.
    /// - `blocks_per_year`: Used to derive per-block rates.
    #[init]
    fn init(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        asset_decimals: usize,
        base_rate: BigUint,
        multiplier: BigUint,
        jump_multiplier: BigUint,
        kink: BigUint,
        reserve_factor: BigUint,
        blocks_per_year: u64,
    ) {
        let params = self.build_market_params(
            asset,
            asset_decimals,
            base_rate,
            multiplier,
            jump_multiplier,
            kink,
            reserve_factor,
            blocks_per_year,
        );

        let zero = self.to_decimal(BigUint::zero(), asset_decimals);
        self.cash().set(&zero);
        self.borrowed().set(&zero);
        self.reserves().set(&zero);
        self.supply_shares().set(&zero);
        self.bad_debt().set(&zero);
        self.exchange_rate().set(self.ray());
        self.borrow_index().set(self.ray());
        self.last_accrual_block()
            .set(self.blockchain().get_block_nonce());

        self.market_params_event(&params.asset_id, &params);
        self.params().set(params);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
