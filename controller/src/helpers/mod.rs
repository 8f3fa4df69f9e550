use common_constants::{MAX_RISK_RATIO, WAD_PRECISION};

multiversx_sc::imports!();

/// # Risk Math Helpers
///
/// Valuation primitives of the risk engine. Every USD figure is WAD-scaled
/// (10^18 per dollar) and rounded half-up; conversions back to asset units
/// round down so the protocol never hands out more than a value covers.
///
/// ## Formulas
/// - **USD value**: `amount * price`
/// - **Weighted collateral**: `usd_value * loan_to_value`
/// - **Risk ratio**: `borrowed / weighted_collateral`, zero without debt and
///   `MAX_RISK_RATIO` for debt backed by nothing
/// - **Seize value**: `repaid_value * (1 + incentive)`
#[multiversx_sc::module]
pub trait MathsModule: common_math::SharedMathModule {
    fn get_usd_value(
        &self,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        price: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.mul_half_up(amount, price, WAD_PRECISION)
    }

    fn get_weighted_value(
        &self,
        usd_value: &ManagedDecimal<Self::Api, NumDecimals>,
        loan_to_value: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.mul_half_up(usd_value, loan_to_value, WAD_PRECISION)
    }

    /// Asset units worth `usd_value`, truncated at the asset's decimals.
    fn usd_to_asset_amount(
        &self,
        usd_value: &ManagedDecimal<Self::Api, NumDecimals>,
        price: &ManagedDecimal<Self::Api, NumDecimals>,
        asset_decimals: usize,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.div_down(usd_value, price, WAD_PRECISION)
            .rescale(asset_decimals)
    }

    fn compute_risk_ratio(
        &self,
        borrow_value_usd: &ManagedDecimal<Self::Api, NumDecimals>,
        collateral_value_usd: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if self.is_zero(borrow_value_usd) {
            return self.wad_zero();
        }

        if self.is_zero(collateral_value_usd) {
            return self.to_decimal_wad(BigUint::from(MAX_RISK_RATIO));
        }

        self.div_half_up(borrow_value_usd, collateral_value_usd, WAD_PRECISION)
    }

    fn compute_seize_value(
        &self,
        repay_value_usd: &ManagedDecimal<Self::Api, NumDecimals>,
        liquidation_incentive: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let factor = self.wad() + liquidation_incentive.clone();

        self.mul_half_up(repay_value_usd, &factor, WAD_PRECISION)
    }

    /// Largest share of `outstanding` one liquidation may repay, truncated.
    fn compute_max_repay(
        &self,
        outstanding: &ManagedDecimal<Self::Api, NumDecimals>,
        max_liquidate_rate: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.mul_down(outstanding, max_liquidate_rate, WAD_PRECISION)
            .rescale(outstanding.scale())
    }
}
