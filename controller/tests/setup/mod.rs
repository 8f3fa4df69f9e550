use crate::{constants::*, proxys::*};

use common_proxies::proxy_aggregator;
use common_structs::{
    AccountPosition, AssetPrice, BadBorrowerDetail, LiquidationDetail, MarketState, RiskSnapshot,
};
use multiversx_sc::types::{
    BigUint, EgldOrEsdtTokenIdentifier, EsdtTokenPayment, ManagedAddress, ManagedBuffer,
    ManagedDecimal, MultiValueEncoded, NumDecimals, ReturnsNewManagedAddress,
    ReturnsResult, TestAddress, TestTokenIdentifier,
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, OptionalValue},
    ScenarioTxRun, ScenarioTxWhitebox, ScenarioWorld,
};

use controller::storage::Storage;

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(CONTROLLER_PATH, controller::ContractBuilder);
    blockchain.register_contract(LIQUIDITY_POOL_PATH, liquidity_layer::ContractBuilder);
    blockchain.register_contract(PRICE_AGGREGATOR_PATH, price_aggregator::ContractBuilder);

    blockchain
}

pub fn asset(token: TestTokenIdentifier) -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(token.to_token_identifier())
}

/// `amount` whole tokens in raw units.
pub fn units(amount: u64, decimals: usize) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(decimals as u32)
}

pub fn wad(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(WAD)
}

fn expect(error_message: &[u8]) -> ExpectMessage<'_> {
    ExpectMessage(core::str::from_utf8(error_message).unwrap())
}

pub struct LendingPoolTestState {
    pub world: ScenarioWorld,
    pub lending_sc: ManagedAddress<StaticApi>,
    pub template_address_liquidity_pool: ManagedAddress<StaticApi>,
    pub price_aggregator_sc: ManagedAddress<StaticApi>,
    pub usdc_market: ManagedAddress<StaticApi>,
    pub wegld_market: ManagedAddress<StaticApi>,
    pub xegld_market: ManagedAddress<StaticApi>,
    pub timestamp: u64,
    pub block: u64,
}

impl LendingPoolTestState {
    pub fn new() -> Self {
        let mut world = world();
        setup_accounts(&mut world);
        world
            .current_block()
            .block_nonce(START_BLOCK)
            .block_timestamp(START_TIMESTAMP);

        let template_address_liquidity_pool = setup_template_liquidity_pool(&mut world);
        let price_aggregator_sc = setup_price_aggregator(&mut world);
        let lending_sc = setup_controller(
            &mut world,
            &template_address_liquidity_pool,
            &price_aggregator_sc,
        );

        let usdc_market = setup_market(
            &mut world,
            &lending_sc,
            USDC_TOKEN,
            USDC_DECIMALS,
            USDC_TICKER,
            b"",
            true,
        );
        let wegld_market = setup_market(
            &mut world,
            &lending_sc,
            WEGLD_TOKEN,
            WEGLD_DECIMALS,
            EGLD_TICKER,
            b"",
            true,
        );
        let xegld_market = setup_market(
            &mut world,
            &lending_sc,
            XEGLD_TOKEN,
            XEGLD_DECIMALS,
            XEGLD_TICKER,
            EGLD_TICKER,
            false,
        );

        let mut state = Self {
            world,
            lending_sc,
            template_address_liquidity_pool,
            price_aggregator_sc,
            usdc_market,
            wegld_market,
            xegld_market,
            timestamp: START_TIMESTAMP,
            block: START_BLOCK,
        };
        state.submit_all_prices();

        state
    }

    // Time

    pub fn advance_blocks(&mut self, blocks: u64) {
        self.block += blocks;
        self.world.current_block().block_nonce(self.block);
    }

    pub fn advance_time(&mut self, seconds: u64) {
        self.timestamp += seconds;
        self.world.current_block().block_timestamp(self.timestamp);
    }

    // Price aggregator operations

    /// Completes a round of `from/to` with every oracle submitting `price` (WAD).
    pub fn submit_price(&mut self, from: &[u8], to: &[u8], price: BigUint<StaticApi>) {
        let oracles = [
            ORACLE_ADDRESS_1,
            ORACLE_ADDRESS_2,
            ORACLE_ADDRESS_3,
            ORACLE_ADDRESS_4,
        ];
        for oracle in oracles {
            self.world
                .tx()
                .from(oracle)
                .to(&self.price_aggregator_sc)
                .typed(proxy_aggregator::PriceAggregatorProxy)
                .submit(
                    ManagedBuffer::from(from),
                    ManagedBuffer::from(to),
                    self.timestamp,
                    &price,
                )
                .run();
        }
    }

    pub fn set_egld_price(&mut self, price_in_dollars: u64) {
        self.submit_price(EGLD_TICKER, DOLLAR_TICKER, wad(price_in_dollars));
    }

    /// Refreshes every round the three markets depend on.
    pub fn submit_all_prices(&mut self) {
        self.submit_price(USDC_TICKER, DOLLAR_TICKER, wad(USDC_PRICE_IN_DOLLARS));
        self.submit_price(EGLD_TICKER, DOLLAR_TICKER, wad(EGLD_PRICE_IN_DOLLARS));
        self.submit_price(XEGLD_TICKER, EGLD_TICKER, wad(XEGLD_PRICE_IN_EGLD));
    }

    // Core lending operations

    pub fn supply_asset(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        asset_decimals: usize,
    ) {
        let amount_to_transfer = amount * BigUint::from(10u64).pow(asset_decimals as u32);
        self.supply_asset_den(from, token_id, amount_to_transfer);
    }

    pub fn supply_asset_den(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .supply()
            .esdt(EsdtTokenPayment::new(token_id.to_token_identifier(), 0, amount))
            .run();
    }

    pub fn supply_asset_error(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        asset_decimals: usize,
        error_message: &[u8],
    ) {
        let amount_to_transfer = amount * BigUint::from(10u64).pow(asset_decimals as u32);
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .supply()
            .esdt(EsdtTokenPayment::new(
                token_id.to_token_identifier(),
                0,
                amount_to_transfer,
            ))
            .returns(expect(error_message))
            .run();
    }

    pub fn borrow_asset(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        asset_decimals: usize,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .borrow(
                asset(token_id),
                amount * BigUint::from(10u64).pow(asset_decimals as u32),
            )
            .run();
    }

    pub fn borrow_asset_error(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        asset_decimals: usize,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .borrow(
                asset(token_id),
                amount * BigUint::from(10u64).pow(asset_decimals as u32),
            )
            .returns(expect(error_message))
            .run();
    }

    pub fn redeem_asset_den(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .redeem(asset(token_id), amount)
            .run();
    }

    pub fn redeem_asset(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        asset_decimals: usize,
    ) {
        let amount = amount * BigUint::from(10u64).pow(asset_decimals as u32);
        self.redeem_asset_den(from, token_id, amount);
    }

    pub fn redeem_asset_error(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        asset_decimals: usize,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .redeem(
                asset(token_id),
                amount * BigUint::from(10u64).pow(asset_decimals as u32),
            )
            .returns(expect(error_message))
            .run();
    }

    /// Repays `amount` raw units of `token_id`, for `on_behalf_of` when given.
    pub fn repay_asset_den(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        on_behalf_of: Option<&TestAddress>,
    ) {
        let account = match on_behalf_of {
            Some(borrower) => OptionalValue::Some(borrower.to_managed_address()),
            None => OptionalValue::None,
        };
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .repay(account)
            .esdt(EsdtTokenPayment::new(token_id.to_token_identifier(), 0, amount))
            .run();
    }

    pub fn repay_asset(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        asset_decimals: usize,
    ) {
        let amount = amount * BigUint::from(10u64).pow(asset_decimals as u32);
        self.repay_asset_den(from, token_id, amount, None);
    }

    pub fn repay_asset_error(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .repay(OptionalValue::<ManagedAddress<StaticApi>>::None)
            .esdt(EsdtTokenPayment::new(token_id.to_token_identifier(), 0, amount))
            .returns(expect(error_message))
            .run();
    }

    /// Liquidates `borrower` paying `amount` raw units of `token_id`.
    pub fn liquidate_account_den(
        &mut self,
        from: &TestAddress,
        borrower: &TestAddress,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) -> LiquidationDetail<StaticApi> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .liquidate(borrower.to_managed_address())
            .esdt(EsdtTokenPayment::new(token_id.to_token_identifier(), 0, amount))
            .returns(ReturnsResult)
            .run()
    }

    pub fn liquidate_account(
        &mut self,
        from: &TestAddress,
        borrower: &TestAddress,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        asset_decimals: usize,
    ) -> LiquidationDetail<StaticApi> {
        let amount = amount * BigUint::from(10u64).pow(asset_decimals as u32);
        self.liquidate_account_den(from, borrower, token_id, amount)
    }

    pub fn liquidate_account_error(
        &mut self,
        from: &TestAddress,
        borrower: &TestAddress,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        asset_decimals: usize,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .liquidate(borrower.to_managed_address())
            .esdt(EsdtTokenPayment::new(
                token_id.to_token_identifier(),
                0,
                amount * BigUint::from(10u64).pow(asset_decimals as u32),
            ))
            .returns(expect(error_message))
            .run();
    }

    pub fn add_to_market(&mut self, from: &TestAddress, token_id: TestTokenIdentifier) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .add_to_market(asset(token_id))
            .run();
    }

    pub fn remove_from_market(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .remove_from_market(asset(token_id));
        match error_message {
            Some(error_message) => call.returns(expect(error_message)).run(),
            None => call.run(),
        }
    }

    // Owner operations

    pub fn liquidate_bad_debts(&mut self, borrowers: &[TestAddress], error_message: Option<&[u8]>) {
        let mut accounts = MultiValueEncoded::new();
        for borrower in borrowers {
            accounts.push(borrower.to_managed_address());
        }

        let call = self
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .liquidate_bad_debts(accounts);
        match error_message {
            Some(error_message) => call.returns(expect(error_message)).run(),
            None => call.run(),
        }
    }

    pub fn add_reserves(&mut self, token_id: TestTokenIdentifier, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .add_reserves()
            .esdt(EsdtTokenPayment::new(token_id.to_token_identifier(), 0, amount))
            .run();
    }

    pub fn claim_reserves(
        &mut self,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .claim_reserves(asset(token_id), amount);
        match error_message {
            Some(error_message) => call.returns(expect(error_message)).run(),
            None => call.run(),
        }
    }

    pub fn freeze_market(&mut self, token_id: TestTokenIdentifier, error_message: Option<&[u8]>) {
        let call = self
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .freeze_token_market(asset(token_id));
        match error_message {
            Some(error_message) => call.returns(expect(error_message)).run(),
            None => call.run(),
        }
    }

    pub fn unfreeze_market(&mut self, token_id: TestTokenIdentifier, error_message: Option<&[u8]>) {
        let call = self
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .unfreeze_token_market(asset(token_id));
        match error_message {
            Some(error_message) => call.returns(expect(error_message)).run(),
            None => call.run(),
        }
    }

    pub fn set_supply_paused(&mut self, token_id: TestTokenIdentifier, paused: bool) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .set_supply_paused(asset(token_id), paused)
            .run();
    }

    pub fn set_borrow_paused(&mut self, token_id: TestTokenIdentifier, paused: bool) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .set_borrow_paused(asset(token_id), paused)
            .run();
    }

    pub fn set_market_active(&mut self, token_id: TestTokenIdentifier, is_active: bool) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .set_market_active(asset(token_id), is_active)
            .run();
    }

    pub fn set_caps(
        &mut self,
        token_id: TestTokenIdentifier,
        supply_cap: BigUint<StaticApi>,
        borrow_cap: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .set_caps(asset(token_id), supply_cap, borrow_cap)
            .run();
    }

    pub fn set_loan_to_value(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        loan_to_value: BigUint<StaticApi>,
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .set_loan_to_value(asset(token_id), loan_to_value);
        match error_message {
            Some(error_message) => call.returns(expect(error_message)).run(),
            None => call.run(),
        }
    }

    /// Marks the reentrancy lock as held, as if an operation were in flight.
    pub fn hold_operation_lock(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.lending_sc.clone())
            .whitebox(controller::contract_obj, |sc| {
                sc.operation_ongoing().set(true);
            });
    }

    // Views

    pub fn get_borrowable_amount(
        &mut self,
        account: &TestAddress,
        token_id: TestTokenIdentifier,
    ) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .query()
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .get_borrowable_amount(account.to_managed_address(), asset(token_id))
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_redeemable_amount(
        &mut self,
        account: &TestAddress,
        token_id: TestTokenIdentifier,
    ) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .query()
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .get_redeemable_amount(account.to_managed_address(), asset(token_id))
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_borrow_balance(
        &mut self,
        account: &TestAddress,
        token_id: TestTokenIdentifier,
    ) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .query()
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .get_borrow_balance(account.to_managed_address(), asset(token_id))
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_supply_balance(
        &mut self,
        account: &TestAddress,
        token_id: TestTokenIdentifier,
    ) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .query()
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .get_supply_balance(account.to_managed_address(), asset(token_id))
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_account_position(
        &mut self,
        account: &TestAddress,
        token_id: TestTokenIdentifier,
    ) -> AccountPosition<StaticApi> {
        self.world
            .query()
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .get_account_position(account.to_managed_address(), asset(token_id))
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_entered_markets(
        &mut self,
        account: &TestAddress,
    ) -> Vec<EgldOrEsdtTokenIdentifier<StaticApi>> {
        self.world
            .query()
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .entered_markets(account.to_managed_address())
            .returns(ReturnsResult)
            .run()
            .into_iter()
            .collect()
    }

    pub fn get_market_state(&mut self, token_id: TestTokenIdentifier) -> MarketState<StaticApi> {
        self.world
            .query()
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .get_market_state(asset(token_id))
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_asset_price(&mut self, token_id: TestTokenIdentifier) -> AssetPrice<StaticApi> {
        self.world
            .query()
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .get_asset_price(asset(token_id))
            .returns(ReturnsResult)
            .run()
    }

    pub fn check_liquidation_risk(&mut self, account: &TestAddress) -> RiskSnapshot<StaticApi> {
        self.world
            .query()
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .check_liquidation_risk(account.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_liquidatable(&mut self, account: &TestAddress) -> bool {
        self.world
            .query()
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .is_liquidatable(account.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn has_bad_debt(&mut self, account: &TestAddress) -> bool {
        self.world
            .query()
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .has_bad_debt(account.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn calc_liquidation_detail(
        &mut self,
        liquidator: &TestAddress,
        borrower: &TestAddress,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) -> LiquidationDetail<StaticApi> {
        self.world
            .query()
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .calc_liquidation_detail(
                liquidator.to_managed_address(),
                borrower.to_managed_address(),
                asset(token_id),
                amount,
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn calc_bad_borrower_details(
        &mut self,
        borrowers: &[TestAddress],
    ) -> Vec<BadBorrowerDetail<StaticApi>> {
        let mut accounts = MultiValueEncoded::new();
        for borrower in borrowers {
            accounts.push(borrower.to_managed_address());
        }

        self.world
            .query()
            .to(self.lending_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .calc_bad_borrower_details(accounts)
            .returns(ReturnsResult)
            .run()
            .into_iter()
            .collect()
    }
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    let accounts = [
        OWNER_ADDRESS,
        SUPPLIER_ADDRESS,
        BORROWER_ADDRESS,
        LIQUIDATOR_ADDRESS,
    ];
    for account in accounts {
        world
            .account(account)
            .nonce(1)
            .esdt_balance(USDC_TOKEN, units(INITIAL_BALANCE, USDC_DECIMALS))
            .esdt_balance(WEGLD_TOKEN, units(INITIAL_BALANCE, WEGLD_DECIMALS))
            .esdt_balance(XEGLD_TOKEN, units(INITIAL_BALANCE, XEGLD_DECIMALS));
    }

    world.account(ORACLE_ADDRESS_1).nonce(1);
    world.account(ORACLE_ADDRESS_2).nonce(1);
    world.account(ORACLE_ADDRESS_3).nonce(1);
    world.account(ORACLE_ADDRESS_4).nonce(1);
}

pub fn setup_template_liquidity_pool(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(common_proxies::proxy_pool::LiquidityPoolProxy)
        .init(
            asset(USDC_TOKEN),
            USDC_DECIMALS,
            BigUint::from(BASE_RATE),
            BigUint::from(MULTIPLIER),
            BigUint::from(JUMP_MULTIPLIER),
            BigUint::from(KINK),
            BigUint::from(RESERVE_FACTOR),
            BLOCKS_PER_YEAR,
        )
        .code(LIQUIDITY_POOL_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn setup_price_aggregator(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    let mut oracles = MultiValueEncoded::new();
    oracles.push(ORACLE_ADDRESS_1.to_managed_address());
    oracles.push(ORACLE_ADDRESS_2.to_managed_address());
    oracles.push(ORACLE_ADDRESS_3.to_managed_address());
    oracles.push(ORACLE_ADDRESS_4.to_managed_address());

    let price_aggregator_sc = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_aggregator::PriceAggregatorProxy)
        .init(4usize, oracles)
        .code(PRICE_AGGREGATOR_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&price_aggregator_sc)
        .typed(proxy_aggregator::PriceAggregatorProxy)
        .unpause_endpoint()
        .run();

    price_aggregator_sc
}

pub fn setup_controller(
    world: &mut ScenarioWorld,
    template_address_liquidity_pool: &ManagedAddress<StaticApi>,
    price_aggregator_sc: &ManagedAddress<StaticApi>,
) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_controller::ControllerProxy)
        .init(
            template_address_liquidity_pool,
            price_aggregator_sc,
            BigUint::from(LIQUIDATION_RISK_THRESHOLD),
            BigUint::from(MAX_LIQUIDATE_RATE),
            BigUint::from(LIQUIDATION_INCENTIVE),
            OptionalValue::Some(MAX_STALE_SECONDS),
        )
        .code(CONTROLLER_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn setup_market(
    world: &mut ScenarioWorld,
    lending_sc: &ManagedAddress<StaticApi>,
    token_id: TestTokenIdentifier,
    asset_decimals: usize,
    feed_id: &[u8],
    usd_pair_id: &[u8],
    is_usd: bool,
) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(lending_sc)
        .typed(proxy_controller::ControllerProxy)
        .create_market(
            asset(token_id),
            asset_decimals,
            BigUint::from(BASE_RATE),
            BigUint::from(MULTIPLIER),
            BigUint::from(JUMP_MULTIPLIER),
            BigUint::from(KINK),
            BigUint::from(RESERVE_FACTOR),
            BLOCKS_PER_YEAR,
            BigUint::from(LOAN_TO_VALUE),
            ManagedBuffer::from(feed_id),
            ManagedBuffer::from(usd_pair_id),
            is_usd,
            OptionalValue::<BigUint<StaticApi>>::None,
            OptionalValue::<BigUint<StaticApi>>::None,
        )
        .returns(ReturnsResult)
        .run()
}
