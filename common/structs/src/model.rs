#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Interest-rate curve and accounting parameters of a single market.
///
/// Rates are stored per block in RAY precision, converted once from the
/// per-year WAD values supplied at configuration time.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone)]
pub struct MarketParams<M: ManagedTypeApi> {
    pub asset_id: EgldOrEsdtTokenIdentifier<M>,
    pub asset_decimals: usize,
    pub base_rate: ManagedDecimal<M, NumDecimals>,
    pub multiplier: ManagedDecimal<M, NumDecimals>,
    pub jump_multiplier: ManagedDecimal<M, NumDecimals>,
    pub kink: ManagedDecimal<M, NumDecimals>,
    pub reserve_factor: ManagedDecimal<M, NumDecimals>,
    pub blocks_per_year: u64,
}

/// Accounting totals of a market at `last_accrual_block`.
///
/// `exchange_rate` always equals `(cash + borrowed - reserves) / supply_shares`
/// when shares exist, and the initial rate of 1 otherwise.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone)]
pub struct MarketState<M: ManagedTypeApi> {
    pub cash: ManagedDecimal<M, NumDecimals>,
    pub borrowed: ManagedDecimal<M, NumDecimals>,
    pub reserves: ManagedDecimal<M, NumDecimals>,
    pub supply_shares: ManagedDecimal<M, NumDecimals>,
    pub exchange_rate: ManagedDecimal<M, NumDecimals>,
    pub borrow_index: ManagedDecimal<M, NumDecimals>,
    pub last_accrual_block: u64,
}

impl<M: ManagedTypeApi> MarketState<M> {
    pub fn total_underlying(&self) -> ManagedDecimal<M, NumDecimals> {
        self.cash.clone() + self.borrowed.clone() - self.reserves.clone()
    }
}

/// Balance of one account inside one market.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone)]
pub struct AccountPosition<M: ManagedTypeApi> {
    pub asset_id: EgldOrEsdtTokenIdentifier<M>,
    pub supply_shares: ManagedDecimal<M, NumDecimals>,
    pub borrow_principal: ManagedDecimal<M, NumDecimals>,
    /// Market borrow index at the last interaction with the borrow side
    pub borrow_index: ManagedDecimal<M, NumDecimals>,
}

impl<M: ManagedTypeApi> AccountPosition<M> {
    pub fn new(
        asset_id: EgldOrEsdtTokenIdentifier<M>,
        asset_decimals: usize,
        borrow_index: ManagedDecimal<M, NumDecimals>,
    ) -> Self {
        let zero = ManagedDecimal::from_raw_units(BigUint::zero(), asset_decimals);
        AccountPosition {
            asset_id,
            supply_shares: zero.clone(),
            borrow_principal: zero,
            borrow_index,
        }
    }

    pub fn zero_decimal(&self) -> ManagedDecimal<M, NumDecimals> {
        ManagedDecimal::from_raw_units(BigUint::zero(), self.supply_shares.scale())
    }

    pub fn has_supply(&self) -> bool {
        self.supply_shares.into_raw_units() > &BigUint::zero()
    }

    pub fn has_borrow(&self) -> bool {
        self.borrow_principal.into_raw_units() > &BigUint::zero()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_supply() && !self.has_borrow()
    }
}

/// Where a market's USD price comes from.
///
/// With `is_usd` the feed `feed_id/USD` is used directly, otherwise the price is
/// `feed_id/usd_pair_id` multiplied by `usd_pair_id/USD`.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone)]
pub struct OracleBinding<M: ManagedTypeApi> {
    pub feed_id: ManagedBuffer<M>,
    pub usd_pair_id: ManagedBuffer<M>,
    pub is_usd: bool,
    pub max_stale_seconds: u64,
}

/// Risk configuration of a listed market, owned by the controller registry.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone)]
pub struct AssetConfig<M: ManagedTypeApi> {
    pub asset_decimals: usize,
    pub loan_to_value: ManagedDecimal<M, NumDecimals>,
    pub is_active: bool,
    pub is_frozen: bool,
    pub supply_paused: bool,
    pub borrow_paused: bool,
    pub supply_cap: Option<BigUint<M>>,
    pub borrow_cap: Option<BigUint<M>>,
    pub oracle: OracleBinding<M>,
}

impl<M: ManagedTypeApi> AssetConfig<M> {
    pub fn can_supply(&self) -> bool {
        self.is_active && !self.is_frozen && !self.supply_paused
    }

    pub fn can_borrow(&self) -> bool {
        self.is_active && !self.is_frozen && !self.borrow_paused
    }

    pub fn is_collateral(&self) -> bool {
        self.loan_to_value.into_raw_units() > &BigUint::zero()
    }
}

/// Latest completed oracle round for a token pair.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug, PartialEq, Eq)]
pub struct TimestampedPrice<M: ManagedTypeApi> {
    pub price: BigUint<M>,
    pub timestamp: u64,
    pub round: u32,
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone)]
pub struct PriceFeed<M: ManagedTypeApi> {
    pub round_id: u32,
    pub from: ManagedBuffer<M>,
    pub to: ManagedBuffer<M>,
    pub timestamp: u64,
    pub price: BigUint<M>,
}

/// USD price of a market as seen by the risk engine.
///
/// An unusable price is reported as zero with `is_usable == false`, which keeps
/// it distinguishable from an asset legitimately priced at zero.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone)]
pub struct AssetPrice<M: ManagedTypeApi> {
    pub price: ManagedDecimal<M, NumDecimals>,
    pub is_usable: bool,
}

#[type_abi]
#[derive(ManagedVecItem, NestedEncode, NestedDecode, TopEncode, TopDecode, Clone)]
pub struct SeizeAllocation<M: ManagedTypeApi> {
    pub asset_id: EgldOrEsdtTokenIdentifier<M>,
    pub shares: BigUint<M>,
    pub underlying: BigUint<M>,
    pub value_usd: BigUint<M>,
}

/// Outcome of a liquidation, either simulated by a view or applied.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone)]
pub struct LiquidationDetail<M: ManagedTypeApi> {
    pub liquidator: ManagedAddress<M>,
    pub borrower: ManagedAddress<M>,
    pub repay_asset: EgldOrEsdtTokenIdentifier<M>,
    pub repay_amount: BigUint<M>,
    pub repay_value_usd: BigUint<M>,
    pub seize_value_usd: BigUint<M>,
    pub seized: ManagedVec<M, SeizeAllocation<M>>,
    pub seized_value_usd: BigUint<M>,
    pub is_bad_debt: bool,
    pub unrecovered_value_usd: BigUint<M>,
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone)]
pub struct BadBorrowerDetail<M: ManagedTypeApi> {
    pub borrower: ManagedAddress<M>,
    pub is_flagged: bool,
    pub has_bad_debt: bool,
    pub borrow_value_usd: BigUint<M>,
    pub collateral_value_usd: BigUint<M>,
}

/// Aggregate risk of an account, computed on demand and never persisted.
///
/// `risk_ratio = borrow_value_usd / collateral_value_usd`, WAD-scaled; zero
/// without debt and `MAX_RISK_RATIO` when debt is backed by no collateral.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone)]
pub struct RiskSnapshot<M: ManagedTypeApi> {
    pub risk_ratio: ManagedDecimal<M, NumDecimals>,
    pub collateral_value_usd: ManagedDecimal<M, NumDecimals>,
    pub borrow_value_usd: ManagedDecimal<M, NumDecimals>,
}
