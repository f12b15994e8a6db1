//! Deploy the USDC rewards contracts to Casper livenet/testnet using the Odra
//! livenet environment.
//!
//! Usage:
//!   cargo run --bin deploy_livenet --release
//!
//! Requires .env file with:
//!   ODRA_CASPER_LIVENET_SECRET_KEY_PATH=/path/to/secret_key.pem
//!   ODRA_CASPER_LIVENET_NODE_ADDRESS=https://node.testnet.casper.network
//!   ODRA_CASPER_LIVENET_CHAIN_NAME=casper-test
//!   ODRA_CASPER_LIVENET_PAYMENT_AMOUNT=200000000000

use odra::casper_types::U256;
use odra::host::Deployer;
use odra::prelude::*;

use usdc_rewards_contracts::reward_ledger::{UsdcRewards, UsdcRewardsInitArgs};
use usdc_rewards_contracts::usdc_token::{MockUsdc, MockUsdcInitArgs};

fn main() {
    // Load environment from .env file
    dotenv::dotenv().ok();

    println!("=== USDC Rewards Livenet Deployment ===");
    println!();

    // Initialize Odra livenet environment
    let env = odra_casper_livenet_env::env();

    // Configure payment amount for deployments/calls (required for Casper 2.0 txs)
    let payment_amount: u64 = std::env::var("ODRA_CASPER_LIVENET_PAYMENT_AMOUNT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(200_000_000_000);
    env.set_gas(payment_amount);

    // Get deployer address
    let deployer = env.caller();
    println!("Deployer: {:?}", deployer);
    println!();

    // Setup parameters
    let initial_supply = U256::from(1_000_000_000_000u64); // 1M USDC at 6 decimals
    let exchange_rate = U256::from(1_000_000u64); // 1 point = 1 USDC
    let pool_funding = U256::from(1_000_000_000u64); // 1000 USDC

    // 1. MockUsdc (testnet stand-in for the USDC token)
    println!("Deploying MockUsdc...");
    let mut usdc = MockUsdc::deploy(
        &env,
        MockUsdcInitArgs {
            name: String::from("Mock USDC"),
            symbol: String::from("USDC"),
            decimals: 6,
            initial_supply,
        },
    );
    let usdc_addr = usdc.address().clone();
    println!("MockUsdc deployed at: {:?}", usdc_addr);

    // 2. UsdcRewards
    println!("Deploying UsdcRewards...");
    let mut rewards = UsdcRewards::deploy(
        &env,
        UsdcRewardsInitArgs {
            usdc_token: usdc_addr,
        },
    );
    let rewards_addr = rewards.address().clone();
    println!("UsdcRewards deployed at: {:?}", rewards_addr);

    println!();
    println!("=== Post-deployment Setup ===");
    println!();

    println!("Setting exchange rate...");
    rewards.set_exchange_rate(exchange_rate);
    println!("Done.");

    println!("Approving pool funding...");
    usdc.approve(rewards_addr, pool_funding);
    println!("Done.");

    println!("Depositing pool funding...");
    rewards.deposit_usdc(pool_funding);
    println!("Done.");

    println!();
    println!("=== Deployment Complete ===");
    println!();
    println!("Contract Addresses:");
    println!("  MockUsdc:    {:?}", usdc_addr);
    println!("  UsdcRewards: {:?}", rewards_addr);
}
