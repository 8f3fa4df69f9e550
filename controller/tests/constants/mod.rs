use multiversx_sc::types::{TestAddress, TestTokenIdentifier};
use multiversx_sc_scenario::imports::MxscPath;

pub const CONTROLLER_PATH: MxscPath = MxscPath::new("output/controller.mxsc.json");
pub const LIQUIDITY_POOL_PATH: MxscPath =
    MxscPath::new("../liquidity_layer/output/liquidity_layer.mxsc.json");
pub const PRICE_AGGREGATOR_PATH: MxscPath =
    MxscPath::new("../price_aggregator/output/price_aggregator.mxsc.json");

pub const WAD: u128 = 1_000_000_000_000_000_000;

pub const DOLLAR_TICKER: &[u8] = b"USD";

pub const START_TIMESTAMP: u64 = 1_000;
pub const START_BLOCK: u64 = 1;
pub const MAX_STALE_SECONDS: u64 = 900;

// Rate curve shared by every market
pub const BASE_RATE: u128 = WAD / 50; // 2%
pub const MULTIPLIER: u128 = WAD / 10; // 10%
pub const JUMP_MULTIPLIER: u128 = WAD; // 100%
pub const KINK: u128 = WAD / 10 * 8; // 80%
pub const RESERVE_FACTOR: u128 = WAD / 10; // 10%
pub const BLOCKS_PER_YEAR: u64 = 5_256_000; // 6s blocks

pub const LOAN_TO_VALUE: u128 = 770_000_000_000_000_000; // 77%
pub const LIQUIDATION_INCENTIVE: u128 = WAD / 10; // 10%
pub const LIQUIDATION_RISK_THRESHOLD: u128 = WAD; // 1.0
pub const MAX_LIQUIDATE_RATE: u128 = WAD / 10 * 8; // 80%

pub const USDC_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("USDC-123456");
pub const USDC_TICKER: &[u8] = b"USDC";
pub const USDC_PRICE_IN_DOLLARS: u64 = 1;
pub const USDC_DECIMALS: usize = 6;

pub const WEGLD_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("WEGLD-123456");
pub const EGLD_TICKER: &[u8] = b"EGLD";
pub const EGLD_PRICE_IN_DOLLARS: u64 = 10;
pub const WEGLD_DECIMALS: usize = 18;

// Priced through XEGLD/EGLD times EGLD/USD
pub const XEGLD_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("XEGLD-123456");
pub const XEGLD_TICKER: &[u8] = b"XEGLD";
pub const XEGLD_PRICE_IN_EGLD: u64 = 1;
pub const XEGLD_DECIMALS: usize = 18;

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const ORACLE_ADDRESS_1: TestAddress = TestAddress::new("oracle1");
pub const ORACLE_ADDRESS_2: TestAddress = TestAddress::new("oracle2");
pub const ORACLE_ADDRESS_3: TestAddress = TestAddress::new("oracle3");
pub const ORACLE_ADDRESS_4: TestAddress = TestAddress::new("oracle4");

pub const SUPPLIER_ADDRESS: TestAddress = TestAddress::new("supplier");
pub const BORROWER_ADDRESS: TestAddress = TestAddress::new("borrower");
pub const LIQUIDATOR_ADDRESS: TestAddress = TestAddress::new("liquidator");

pub const INITIAL_BALANCE: u64 = 1_000_000;
