//! # Few Wrapped Tokens Runtime
//!
//! Deploys the platform and walks one underlying token through the full
//! lifecycle, then prints the deployment report as JSON.
//!
//! ## Sequence
//!
//! 1. Load configuration (env, with defaults)
//! 2. Install logging
//! 3. Deploy registry and factory
//! 4. Register a demo underlying and create its wrapper
//! 5. Wrap, permit, spend the permit, unwrap
//! 6. Print the report

use anyhow::{Context, Result};
use fw_02_wrapped_token::adapters::InMemoryErc20;
use fw_02_wrapped_token::domain::{PermitMessage, PermitRequest, PermitSigner};
use fw_runtime::{init_tracing, Platform, PlatformConfig};
use shared_types::{Address, U256};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

/// Secret key of the demo wallet. Never holds real funds.
const DEMO_WALLET_SECRET: [u8; 32] = [0x42; 32];

/// Address of the demo underlying token.
const DEMO_UNDERLYING: Address = Address::repeat_byte(0x11);

/// Receives the permit and spends part of it.
const DEMO_SPENDER: Address = Address::repeat_byte(0x5e);

fn main() -> Result<()> {
    let config = PlatformConfig::from_env().context("loading configuration")?;
    init_tracing(&config).context("installing tracing subscriber")?;

    let mut platform = Platform::deploy(config).context("deploying platform")?;

    let wallet = PermitSigner::from_slice(&DEMO_WALLET_SECRET).context("loading demo wallet")?;
    let one = U256::exp10(18);

    let underlying = Arc::new(InMemoryErc20::new(DEMO_UNDERLYING, "Test Token", "TT"));
    underlying
        .mint(wallet.address(), one * U256::from(10_000u64))
        .context("funding demo wallet")?;
    platform.register_underlying(underlying.clone());

    let wrapped = platform
        .create_token(DEMO_UNDERLYING)
        .context("creating wrapped token")?;
    underlying.approve(wallet.address(), wrapped, U256::MAX);

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("reading system clock")?
        .as_secs();

    let token = platform.token_mut(wrapped)?;
    token
        .wrap(wallet.address(), one * U256::from(5u64))
        .context("wrapping")?;

    let message = PermitMessage {
        owner: wallet.address(),
        spender: DEMO_SPENDER,
        value: one * U256::from(2u64),
        nonce: token.nonces(wallet.address()),
        deadline: U256::from(now + 3_600),
    };
    let signature = wallet
        .sign_permit(&token.domain_separator(), &message)
        .context("signing permit")?;
    token
        .permit(
            &PermitRequest {
                owner: message.owner,
                spender: message.spender,
                value: message.value,
                deadline: message.deadline,
                signature,
            },
            now,
        )
        .context("applying permit")?;

    token
        .transfer_from(DEMO_SPENDER, wallet.address(), DEMO_SPENDER, one)
        .context("spending permit")?;
    token
        .unwrap(DEMO_SPENDER, one)
        .context("unwrapping")?;

    info!(
        wrapped = %wrapped,
        supply = %token.total_supply(),
        fully_backed = token.is_fully_backed(),
        "Demo lifecycle complete"
    );

    let report = serde_json::to_string_pretty(&platform.report()).context("encoding report")?;
    println!("{report}");
    Ok(())
}
