multiversx_sc::imports!();

use common_structs::{AccountPosition, RiskSnapshot};

use crate::{cache::Cache, helpers, oracle, storage};

/// Valuation of an account across every market it entered.
pub struct AccountTotals<M: ManagedTypeApi> {
    /// Collateral weighted by each market's loan-to-value
    pub collateral_value_usd: ManagedDecimal<M, NumDecimals>,
    /// Every priced supply position at full value, zero loan-to-value included
    pub raw_collateral_value_usd: ManagedDecimal<M, NumDecimals>,
    pub borrow_value_usd: ManagedDecimal<M, NumDecimals>,
    /// Debt in a market whose price is unusable, valued at zero above
    pub has_unpriced_debt: bool,
    /// Supply in a market whose price is unusable, valued at zero above
    pub has_unpriced_collateral: bool,
}

#[multiversx_sc::module]
pub trait LendingUtilsModule:
    storage::Storage
    + oracle::OracleModule
    + helpers::MathsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
{
    /// Stored position of `account` in `asset`, or an empty one.
    fn get_position(
        &self,
        account: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        cache: &mut Cache<Self>,
    ) -> AccountPosition<Self::Api> {
        match self.positions(account).get(asset) {
            Some(position) => position,
            None => {
                let params = cache.get_cached_market_params(asset);
                let state = cache.get_cached_market_state(asset);
                AccountPosition::new(asset.clone(), params.asset_decimals, state.borrow_index)
            },
        }
    }

    /// Persists a position, dropping it once both balances are zero.
    fn store_position(&self, account: &ManagedAddress, position: &AccountPosition<Self::Api>) {
        let mut positions = self.positions(account);
        if position.is_empty() {
            positions.remove(&position.asset_id);
        } else {
            positions.insert(position.asset_id.clone(), position.clone());
        }
    }

    /// Adds `asset` to the account's entered markets if absent.
    fn enter_market(&self, account: &ManagedAddress, asset: &EgldOrEsdtTokenIdentifier) {
        if self.entered_markets(account).insert(asset.clone()) {
            self.enter_market_event(account, asset);
        }
    }

    /// Underlying redeemable for the position's shares, rounded down.
    fn get_supply_underlying(
        &self,
        position: &AccountPosition<Self::Api>,
        cache: &mut Cache<Self>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if !position.has_supply() {
            return position.zero_decimal();
        }

        let state = cache.get_cached_market_state(&position.asset_id);
        self.shares_to_underlying(&position.supply_shares, &state.exchange_rate)
    }

    /// Debt of the position at the current borrow index, rounded up.
    fn get_borrow_underlying(
        &self,
        position: &AccountPosition<Self::Api>,
        cache: &mut Cache<Self>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if !position.has_borrow() {
            return position.zero_decimal();
        }

        let state = cache.get_cached_market_state(&position.asset_id);
        self.calc_borrow_balance(
            &position.borrow_principal,
            &position.borrow_index,
            &state.borrow_index,
        )
    }

    /// Sums collateral and debt over the account's entered markets.
    ///
    /// Each market is accrued on first use through the cache. Weighted
    /// collateral skips markets with an unusable price or a zero loan-to-value,
    /// while the raw value keeps zero loan-to-value supply. Anything held in an
    /// unpriced market is reported through the `has_unpriced_*` flags.
    fn calculate_account_totals(
        &self,
        account: &ManagedAddress,
        cache: &mut Cache<Self>,
    ) -> AccountTotals<Self::Api> {
        let mut totals = AccountTotals {
            collateral_value_usd: self.wad_zero(),
            raw_collateral_value_usd: self.wad_zero(),
            borrow_value_usd: self.wad_zero(),
            has_unpriced_debt: false,
            has_unpriced_collateral: false,
        };
        let positions = self.positions(account);

        for asset in self.entered_markets(account).iter() {
            let position = match positions.get(&asset) {
                Some(position) => position,
                None => continue,
            };
            let price = cache.get_cached_price(&asset);

            if position.has_supply() {
                let config = cache.get_cached_asset_info(&asset);
                if price.is_usable {
                    let underlying = self.get_supply_underlying(&position, cache);
                    let value = self.get_usd_value(&underlying, &price.price);

                    if config.is_collateral() {
                        totals.collateral_value_usd +=
                            self.get_weighted_value(&value, &config.loan_to_value);
                    }
                    totals.raw_collateral_value_usd += value;
                } else {
                    totals.has_unpriced_collateral = true;
                }
            }

            if position.has_borrow() {
                if !price.is_usable {
                    totals.has_unpriced_debt = true;
                    continue;
                }

                let debt = self.get_borrow_underlying(&position, cache);
                totals.borrow_value_usd += self.get_usd_value(&debt, &price.price);
            }
        }

        totals
    }

    fn calculate_risk_snapshot(
        &self,
        account: &ManagedAddress,
        cache: &mut Cache<Self>,
    ) -> RiskSnapshot<Self::Api> {
        let totals = self.calculate_account_totals(account, cache);

        RiskSnapshot {
            risk_ratio: self
                .compute_risk_ratio(&totals.borrow_value_usd, &totals.collateral_value_usd),
            collateral_value_usd: totals.collateral_value_usd,
            borrow_value_usd: totals.borrow_value_usd,
        }
    }

    fn has_any_debt(&self, account: &ManagedAddress) -> bool {
        self.positions(account)
            .values()
            .any(|position| position.has_borrow())
    }
}
