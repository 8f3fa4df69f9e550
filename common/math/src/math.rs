#![no_std]

use core::cmp::Ordering;

use common_constants::{RAY, RAY_PRECISION, WAD, WAD_PRECISION};

multiversx_sc::imports!();

/// Scaled-integer arithmetic shared by every contract of the protocol.
///
/// All operands are rescaled to the target precision before the operation, so
/// callers choose the precision of the result explicitly. The underlying
/// `BigUint` never wraps: an underflow aborts the transaction.
#[multiversx_sc::module]
pub trait SharedMathModule {
    fn mul_half_up(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled_a = a.rescale(precision);
        let scaled_b = b.rescale(precision);

        let product = scaled_a.into_raw_units() * scaled_b.into_raw_units();

        let scaled = BigUint::from(10u64).pow(precision as u32);
        let half_scaled = &scaled / &BigUint::from(2u64);

        let rounded_product = (product + half_scaled) / scaled;

        self.to_decimal(rounded_product, precision)
    }

    fn div_half_up(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled_a = a.rescale(precision);
        let scaled_b = b.rescale(precision);

        let scaled = BigUint::from(10u64).pow(precision as u32);
        let numerator = scaled_a.into_raw_units() * &scaled;
        let denominator = scaled_b.into_raw_units();

        let half_denominator = denominator / &BigUint::from(2u64);
        let rounded_quotient = (numerator + half_denominator) / denominator;

        self.to_decimal(rounded_quotient, precision)
    }

    /// `a * b` truncated at `precision`.
    fn mul_down(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let product = a.rescale(precision).into_raw_units() * b.rescale(precision).into_raw_units();
        let scaled = BigUint::from(10u64).pow(precision as u32);

        self.to_decimal(product / scaled, precision)
    }

    /// `a / b` truncated at `precision`.
    fn div_down(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled = BigUint::from(10u64).pow(precision as u32);
        let numerator = a.rescale(precision).into_raw_units() * &scaled;
        let denominator = b.rescale(precision);

        self.to_decimal(numerator / denominator.into_raw_units(), precision)
    }

    /// `a / b` rounded away from zero at `precision`.
    fn div_up(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled = BigUint::from(10u64).pow(precision as u32);
        let numerator = a.rescale(precision).into_raw_units() * &scaled;
        let denominator = b.rescale(precision);
        let denominator = denominator.into_raw_units();

        let quotient = (numerator + denominator - BigUint::from(1u64)) / denominator;

        self.to_decimal(quotient, precision)
    }

    /// Downscales rounding away from zero, upscales exactly.
    fn rescale_up(
        &self,
        value: &ManagedDecimal<Self::Api, NumDecimals>,
        new_precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let old_precision = value.scale();
        match new_precision.cmp(&old_precision) {
            Ordering::Less => {
                let factor = BigUint::from(10u64).pow((old_precision - new_precision) as u32);
                let raw = (value.into_raw_units() + &factor - BigUint::from(1u64)) / factor;
                self.to_decimal(raw, new_precision)
            },
            _ => value.rescale(new_precision),
        }
    }

    fn rescale_half_up(
        &self,
        value: &ManagedDecimal<Self::Api, NumDecimals>,
        new_precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let old_precision = value.scale();
        let raw_value = value.into_raw_units();

        match new_precision.cmp(&old_precision) {
            Ordering::Equal => value.clone(),
            Ordering::Less => {
                let precision_diff = old_precision - new_precision;
                let factor = BigUint::from(10u64).pow(precision_diff as u32);
                let half_factor = &factor / 2u64;

                let rounded_downscaled_value = (raw_value + &half_factor) / factor;
                ManagedDecimal::from_raw_units(rounded_downscaled_value, new_precision)
            },
            Ordering::Greater => value.rescale(new_precision),
        }
    }

    /// Checked subtraction, `None` when `b > a`.
    fn checked_sub(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> Option<ManagedDecimal<Self::Api, NumDecimals>> {
        let scale = a.scale();
        let b_scaled = b.rescale(scale);
        if b_scaled.into_raw_units() > a.into_raw_units() {
            return None;
        }

        Some(self.to_decimal(a.into_raw_units() - b_scaled.into_raw_units(), scale))
    }

    fn to_decimal_wad(&self, value: BigUint) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(value, WAD_PRECISION)
    }

    fn to_decimal_ray(&self, value: BigUint) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(value, RAY_PRECISION)
    }

    fn wad_zero(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal_wad(BigUint::zero())
    }

    fn ray_zero(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal_ray(BigUint::zero())
    }

    fn ray(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(BigUint::from(RAY), RAY_PRECISION)
    }

    fn wad(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(BigUint::from(WAD), WAD_PRECISION)
    }

    fn to_decimal(
        &self,
        value: BigUint,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        ManagedDecimal::from_raw_units(value, precision)
    }

    fn is_zero(&self, value: &ManagedDecimal<Self::Api, NumDecimals>) -> bool {
        value.into_raw_units() == &BigUint::zero()
    }

    fn get_min(
        &self,
        a: ManagedDecimal<Self::Api, NumDecimals>,
        b: ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if a < b {
            a
        } else {
            b
        }
    }

    fn get_max(
        &self,
        a: ManagedDecimal<Self::Api, NumDecimals>,
        b: ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if a > b {
            a
        } else {
            b
        }
    }
}
