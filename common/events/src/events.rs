#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("create_market")]
    fn create_market_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] market_address: &ManagedAddress,
        #[indexed] params: &MarketParams<Self::Api>,
        config: &AssetConfig<Self::Api>,
    );

    #[event("update_market_params")]
    fn market_params_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        params: &MarketParams<Self::Api>,
    );

    #[event("update_asset_config")]
    fn update_asset_config_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        config: &AssetConfig<Self::Api>,
    );

    #[event("update_risk_params")]
    fn update_risk_params_event(
        &self,
        #[indexed] liquidation_incentive: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] liquidation_risk_threshold: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] max_liquidate_rate: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    /// Emitted by a market after every accrual or balance change.
    #[event("update_market_state")]
    fn update_market_state_event(
        &self,
        #[indexed] block: u64,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        state: &MarketState<Self::Api>,
    );

    // Emitted for supply, redeem, borrow, repay and for both sides of a seizure.
    // `amount` is the underlying moved by the action.
    #[event("update_position")]
    fn update_position_event(
        &self,
        #[indexed] action: &ManagedBuffer,
        #[indexed] account: &ManagedAddress,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
        position: &AccountPosition<Self::Api>,
    );

    #[event("enter_market")]
    fn enter_market_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
    );

    #[event("exit_market")]
    fn exit_market_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
    );

    #[event("liquidation")]
    fn liquidation_event(
        &self,
        #[indexed] liquidator: &ManagedAddress,
        #[indexed] borrower: &ManagedAddress,
        detail: &LiquidationDetail<Self::Api>,
    );

    #[event("bad_debt_flagged")]
    fn bad_debt_flagged_event(
        &self,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] unrecovered_value_usd: &BigUint,
    );

    #[event("bad_debt_socialized")]
    fn bad_debt_socialized_event(
        &self,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("update_reserves")]
    fn update_reserves_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] added: bool,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
    );
}
