#![no_std]

use common_constants::{RAY_PRECISION, WAD_PRECISION};
use common_structs::{MarketParams, MarketState};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait InterestRates: common_math::SharedMathModule {
    /// Converts a per-year WAD rate into a per-block RAY rate.
    ///
    /// # Arguments
    /// - `per_year`: Annual rate as a WAD fraction.
    /// - `blocks_per_year`: Expected number of blocks produced in a year.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: Rate per block, RAY-scaled.
    fn per_block_rate(
        &self,
        per_year: &ManagedDecimal<Self::Api, NumDecimals>,
        blocks_per_year: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.div_half_up(
            per_year,
            &self.to_decimal(BigUint::from(blocks_per_year), 0),
            RAY_PRECISION,
        )
    }

    /// Computes the share of lendable funds currently borrowed.
    ///
    /// **Formula**: `u = borrowed / (cash + borrowed - reserves)`, 0 when the
    /// denominator is 0.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: Utilization, RAY-scaled.
    fn calc_utilization(
        &self,
        cash: &ManagedDecimal<Self::Api, NumDecimals>,
        borrowed: &ManagedDecimal<Self::Api, NumDecimals>,
        reserves: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let gross = cash.clone() + borrowed.clone();
        match self.checked_sub(&gross, reserves) {
            Some(lendable) if !self.is_zero(&lendable) => {
                self.div_half_up(borrowed, &lendable, RAY_PRECISION)
            },
            _ => self.ray_zero(),
        }
    }

    /// Jump-rate borrow curve.
    ///
    /// **Formula**:
    /// - `u <= kink`: `base + multiplier * u`
    /// - `u > kink`: `base + multiplier * kink + jump_multiplier * (u - kink)`
    ///
    /// # Arguments
    /// - `utilization`: Current utilization, RAY-scaled.
    /// - `params`: Market parameters holding the per-block curve.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: Borrow rate per block, RAY-scaled.
    fn calc_borrow_rate(
        &self,
        utilization: &ManagedDecimal<Self::Api, NumDecimals>,
        params: &MarketParams<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if utilization <= &params.kink {
            let variable = self.mul_half_up(&params.multiplier, utilization, RAY_PRECISION);
            return params.base_rate.clone() + variable;
        }

        let normal = self.mul_half_up(&params.multiplier, &params.kink, RAY_PRECISION);
        let excess = utilization.clone() - params.kink.clone();
        let jump = self.mul_half_up(&params.jump_multiplier, &excess, RAY_PRECISION);

        params.base_rate.clone() + normal + jump
    }

    /// Rate earned by suppliers per block.
    ///
    /// **Formula**: `borrow_rate * u * (1 - reserve_factor)`
    fn calc_supply_rate(
        &self,
        utilization: &ManagedDecimal<Self::Api, NumDecimals>,
        borrow_rate: &ManagedDecimal<Self::Api, NumDecimals>,
        reserve_factor: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if self.is_zero(utilization) {
            return self.ray_zero();
        }

        let suppliers_share = self.wad() - reserve_factor.clone();
        let gross = self.mul_half_up(borrow_rate, utilization, RAY_PRECISION);

        self.mul_half_up(&gross, &suppliers_share, RAY_PRECISION)
    }

    /// Underlying units redeemable per share.
    ///
    /// Rounded down so that shares are never valued above what the market holds.
    fn calc_exchange_rate(
        &self,
        state: &MarketState<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if self.is_zero(&state.supply_shares) {
            return self.ray();
        }

        self.div_down(
            &state.total_underlying(),
            &state.supply_shares,
            RAY_PRECISION,
        )
    }

    /// Brings a market's totals up to `current_block`.
    ///
    /// **Process**:
    /// 1. No-op when the market already accrued in this block.
    /// 2. Prices the elapsed blocks at the borrow rate of the current utilization.
    /// 3. Adds the interest to borrows, the reserve factor share of it to reserves.
    /// 4. Grows the borrow index by `1 + rate * elapsed`.
    /// 5. Recomputes the exchange rate and stamps the block.
    ///
    /// # Arguments
    /// - `state`: Market totals, updated in place.
    /// - `params`: Curve and reserve factor in force for the elapsed period.
    /// - `current_block`: Block nonce to accrue up to.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: Interest accumulated, in asset decimals.
    fn accrue_market(
        &self,
        state: &mut MarketState<Self::Api>,
        params: &MarketParams<Self::Api>,
        current_block: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let asset_decimals = params.asset_decimals;
        if current_block <= state.last_accrual_block {
            return self.to_decimal(BigUint::zero(), asset_decimals);
        }

        let elapsed = current_block - state.last_accrual_block;
        let utilization = self.calc_utilization(&state.cash, &state.borrowed, &state.reserves);
        let borrow_rate = self.calc_borrow_rate(&utilization, params);
        let simple_factor = self.mul_half_up(
            &borrow_rate,
            &self.to_decimal(BigUint::from(elapsed), 0),
            RAY_PRECISION,
        );

        let interest = self.rescale_half_up(
            &self.mul_half_up(&state.borrowed, &simple_factor, RAY_PRECISION),
            asset_decimals,
        );
        let reserves_increase = self.rescale_half_up(
            &self.mul_half_up(
                &interest,
                &params.reserve_factor,
                asset_decimals.max(WAD_PRECISION),
            ),
            asset_decimals,
        );

        state.borrowed += &interest;
        state.reserves += &reserves_increase;
        state.borrow_index = self.mul_half_up(
            &state.borrow_index,
            &(self.ray() + simple_factor),
            RAY_PRECISION,
        );
        state.exchange_rate = self.calc_exchange_rate(state);
        state.last_accrual_block = current_block;

        interest
    }

    /// Current debt of a principal snapshot, rounded up in favour of the market.
    ///
    /// **Formula**: `principal * current_index / snapshot_index`
    fn calc_borrow_balance(
        &self,
        principal: &ManagedDecimal<Self::Api, NumDecimals>,
        snapshot_index: &ManagedDecimal<Self::Api, NumDecimals>,
        current_index: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if self.is_zero(principal) {
            return principal.clone();
        }

        let growth = self.div_up(current_index, snapshot_index, RAY_PRECISION);
        let balance = self.mul_half_up(principal, &growth, RAY_PRECISION);

        self.rescale_up(&balance, principal.scale())
    }

    /// Underlying value of a share balance, rounded down.
    fn shares_to_underlying(
        &self,
        shares: &ManagedDecimal<Self::Api, NumDecimals>,
        exchange_rate: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.mul_down(shares, exchange_rate, RAY_PRECISION)
            .rescale(shares.scale())
    }

    /// Shares minted for an underlying deposit, rounded down.
    fn underlying_to_shares_down(
        &self,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        exchange_rate: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.div_down(amount, exchange_rate, RAY_PRECISION)
            .rescale(amount.scale())
    }

    /// Shares burned for an underlying withdrawal, rounded up.
    fn underlying_to_shares_up(
        &self,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        exchange_rate: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let shares = self.div_up(amount, exchange_rate, RAY_PRECISION);

        self.rescale_up(&shares, amount.scale())
    }
}
