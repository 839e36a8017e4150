//! Deploy the DSC engine to Casper livenet/testnet using Odra livenet environment.
//!
//! Usage:
//!   cargo run --bin deploy_livenet --release
//!
//! Requires .env file with:
//!   ODRA_CASPER_LIVENET_SECRET_KEY_PATH=/path/to/secret_key.pem
//!   ODRA_CASPER_LIVENET_NODE_ADDRESS=https://node.testnet.casper.network
//!   ODRA_CASPER_LIVENET_CHAIN_NAME=casper-test
//!   ODRA_CASPER_LIVENET_PAYMENT_AMOUNT=200000000000
//!
//! Collateral configuration, one of:
//!   DSC_DEPLOY_MOCKS=true                      (deploy WETH/WBTC tokens and feeds)
//!   DSC_COLLATERAL_TOKENS=hash-...,hash-...    (existing CEP-18 tokens)
//!   DSC_PRICE_FEEDS=hash-...,hash-...          (matching feeds, same order)
//!
//! Optional:
//!   DSC_DEPLOYMENTS_PATH=deployments.json

use std::fs;
use std::path::PathBuf;

use odra::casper_types::U256;
use odra::host::{Deployer, HostEnv, HostRef, NoArgs};
use odra::prelude::*;
use serde::Serialize;
use thiserror::Error;

use dsc_engine_contracts::collateral_token::{CollateralToken, CollateralTokenInitArgs};
use dsc_engine_contracts::engine::{DscEngine, DscEngineInitArgs};
use dsc_engine_contracts::price_feed::{
    MockPriceFeed, MockPriceFeedInitArgs, BTC_USD_PRICE, ETH_USD_PRICE,
};
use dsc_engine_contracts::stablecoin::Stablecoin;

const DEFAULT_DEPLOYMENTS_PATH: &str = "deployments.json";
const DEFAULT_PAYMENT_AMOUNT: u64 = 200_000_000_000;
const MOCK_FEED_DECIMALS: u8 = 8;
const MOCK_INITIAL_BALANCE: u64 = 1000;

#[derive(Debug, Error)]
enum DeployConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("invalid address in {var}: {value}")]
    InvalidAddress { var: &'static str, value: String },
    #[error("{tokens} collateral tokens but {feeds} price feeds")]
    LengthMismatch { tokens: usize, feeds: usize },
    #[error("failed to write deployments file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode deployments: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where collateral comes from
enum CollateralSource {
    Mocks,
    Existing {
        tokens: Vec<Address>,
        price_feeds: Vec<Address>,
    },
}

struct DeployConfig {
    payment_amount: u64,
    collateral: CollateralSource,
    deployments_path: PathBuf,
}

impl DeployConfig {
    fn from_env() -> Result<Self, DeployConfigError> {
        let payment_amount = std::env::var("ODRA_CASPER_LIVENET_PAYMENT_AMOUNT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PAYMENT_AMOUNT);

        let deploy_mocks = std::env::var("DSC_DEPLOY_MOCKS")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let collateral = if deploy_mocks {
            CollateralSource::Mocks
        } else {
            let tokens = parse_addresses("DSC_COLLATERAL_TOKENS")?;
            let price_feeds = parse_addresses("DSC_PRICE_FEEDS")?;
            // Fail before any deploy is paid for
            if tokens.len() != price_feeds.len() {
                return Err(DeployConfigError::LengthMismatch {
                    tokens: tokens.len(),
                    feeds: price_feeds.len(),
                });
            }
            CollateralSource::Existing { tokens, price_feeds }
        };

        let deployments_path = std::env::var("DSC_DEPLOYMENTS_PATH")
            .unwrap_or_else(|_| String::from(DEFAULT_DEPLOYMENTS_PATH))
            .into();

        Ok(Self {
            payment_amount,
            collateral,
            deployments_path,
        })
    }
}

fn parse_addresses(var: &'static str) -> Result<Vec<Address>, DeployConfigError> {
    let raw = std::env::var(var).map_err(|_| DeployConfigError::Missing(var))?;
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<Address>()
                .map_err(|_| DeployConfigError::InvalidAddress {
                    var,
                    value: s.to_string(),
                })
        })
        .collect()
}

#[derive(Serialize)]
struct CollateralRecord {
    token: String,
    price_feed: String,
}

#[derive(Serialize)]
struct DeploymentRecord {
    deployer: String,
    engine: String,
    stablecoin: String,
    collateral: Vec<CollateralRecord>,
}

/// WETH/WBTC stand-ins with their feeds
fn deploy_mocks(env: &HostEnv, deployer: Address) -> (Vec<Address>, Vec<Address>) {
    let mocks = [
        ("Wrapped Ether", "WETH", ETH_USD_PRICE),
        ("Wrapped Bitcoin", "WBTC", BTC_USD_PRICE),
    ];

    let mut tokens = Vec::new();
    let mut price_feeds = Vec::new();
    for (name, symbol, price) in mocks {
        println!("Deploying {} price feed...", symbol);
        let feed = MockPriceFeed::deploy(
            env,
            MockPriceFeedInitArgs {
                decimals: MOCK_FEED_DECIMALS,
                initial_answer: price,
            },
        );
        println!("{} feed deployed at: {:?}", symbol, feed.address().clone());

        println!("Deploying {} token...", symbol);
        let token = CollateralToken::deploy(
            env,
            CollateralTokenInitArgs {
                name: String::from(name),
                symbol: String::from(symbol),
                decimals: 18,
                initial_account: deployer,
                initial_balance: U256::from(MOCK_INITIAL_BALANCE)
                    * U256::from(10u64).pow(U256::from(18u64)),
            },
        );
        println!("{} deployed at: {:?}", symbol, token.address().clone());

        tokens.push(token.address().clone());
        price_feeds.push(feed.address().clone());
    }
    (tokens, price_feeds)
}

fn run() -> Result<(), DeployConfigError> {
    let config = DeployConfig::from_env()?;

    // Initialize Odra livenet environment
    let env = odra_casper_livenet_env::env();
    env.set_gas(config.payment_amount);

    let deployer = env.caller();
    println!("Deployer: {:?}", deployer);
    println!();

    // ==================== Phase 1: Collateral ====================
    println!("=== Phase 1: Collateral ===");
    println!();

    let (tokens, price_feeds) = match config.collateral {
        CollateralSource::Mocks => deploy_mocks(&env, deployer),
        CollateralSource::Existing { tokens, price_feeds } => {
            println!("Using {} existing collateral tokens", tokens.len());
            (tokens, price_feeds)
        }
    };
    println!();

    // ==================== Phase 2: Stablecoin and Engine ====================
    println!("=== Phase 2: Stablecoin and Engine ===");
    println!();

    println!("Deploying Stablecoin...");
    let mut stablecoin = Stablecoin::deploy(&env, NoArgs);
    let stablecoin_addr = stablecoin.address().clone();
    println!("Stablecoin deployed at: {:?}", stablecoin_addr);

    println!("Deploying DscEngine...");
    let engine = DscEngine::deploy(
        &env,
        DscEngineInitArgs {
            token_addresses: tokens.clone(),
            price_feed_addresses: price_feeds.clone(),
            dsc_address: stablecoin_addr,
        },
    );
    let engine_addr = engine.address().clone();
    println!("DscEngine deployed at: {:?}", engine_addr);
    println!();

    // ==================== Phase 3: Ownership ====================
    println!("=== Phase 3: Ownership ===");
    println!();

    println!("Transferring Stablecoin ownership to DscEngine...");
    stablecoin.transfer_ownership(engine_addr);
    println!("Done.");
    println!();

    let record = DeploymentRecord {
        deployer: deployer.to_formatted_string(),
        engine: engine_addr.to_formatted_string(),
        stablecoin: stablecoin_addr.to_formatted_string(),
        collateral: tokens
            .iter()
            .zip(price_feeds.iter())
            .map(|(token, feed)| CollateralRecord {
                token: token.to_formatted_string(),
                price_feed: feed.to_formatted_string(),
            })
            .collect(),
    };
    fs::write(&config.deployments_path, serde_json::to_string_pretty(&record)?)?;

    println!("=== Deployment Complete ===");
    println!();
    println!("Contract Addresses:");
    println!("  DscEngine:   {:?}", engine_addr);
    println!("  Stablecoin:  {:?}", stablecoin_addr);
    for (token, feed) in tokens.iter().zip(price_feeds.iter()) {
        println!("  Collateral:  {:?} (feed {:?})", token, feed);
    }
    println!();
    println!("Written to {}", config.deployments_path.display());
    Ok(())
}

fn main() {
    // Load environment from .env file
    dotenv::dotenv().ok();

    println!("=== DSC Engine Livenet Deployment ===");
    println!();

    if let Err(err) = run() {
        eprintln!("Deployment failed: {}", err);
        std::process::exit(1);
    }
}
