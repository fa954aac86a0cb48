//! Test utilities

use std::time::Duration;

use alloy::{
    contract::{CallBuilder, CallDecoder, Error as ContractError},
    network::{Ethereum, TransactionBuilder},
    primitives::{Address, TxHash, U256},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::{TransactionReceipt, TransactionRequest},
    signers::local::PrivateKeySigner,
    transports::{http::reqwest::Url, TransportError},
};
use eyre::{ensure, Result};

use crate::{
    abis::IMyToken::IMyTokenInstance,
    constants::{FUNDING_AMOUNT, RECEIPT_FETCH_ATTEMPTS, RECEIPT_FETCH_DELAY_MS},
    test_inventory::{TestArgs, Token},
};

/// The call builder type for the tests
pub type TestCallBuilder<'a, C> = CallBuilder<&'a DynProvider<Ethereum>, C, Ethereum>;

// ---------------
// | Error Utils |
// ---------------

/// A trait with auto-implementation that makes it easier to convert errors to `eyre::Result`
pub trait WrapEyre {
    /// The type of the value being wrapped
    type Value;

    /// Convert the error to an eyre::Result
    fn to_eyre(self) -> Result<Self::Value>;
}

impl<R, E: ToString> WrapEyre for core::result::Result<R, E> {
    type Value = R;

    fn to_eyre(self) -> Result<R> {
        match self {
            Ok(r) => Ok(r),
            Err(e) => Err(eyre::eyre!(e.to_string())),
        }
    }
}

// ----------------
// | Transactions |
// ----------------

/// Send a transaction and ensure it was successful
pub async fn wait_for_tx_success<C: CallDecoder>(
    tx: TestCallBuilder<'_, C>,
) -> Result<TransactionReceipt> {
    let receipt = send_tx(tx).await?;
    ensure!(receipt.status(), "transaction {:#x} reverted", receipt.transaction_hash);
    Ok(receipt)
}

/// Send a transaction and ensure it reverted, either when estimating gas or on chain.
///
/// Failures other than an error response from the node are propagated.
pub async fn assert_reverts<C: CallDecoder>(tx: TestCallBuilder<'_, C>) -> Result<()> {
    let pending_tx = match tx.send().await {
        Ok(pending_tx) => pending_tx,
        Err(ContractError::TransportError(TransportError::ErrorResp(_))) => return Ok(()),
        Err(err) => eyre::bail!("pending tx error: {err:?}"),
    };

    let receipt = wait_for_receipt(tx.provider, *pending_tx.tx_hash()).await?;
    ensure!(!receipt.status(), "expected transaction {:#x} to revert", receipt.transaction_hash);
    Ok(())
}

/// Send a transaction and wait for it to succeed or fail
pub async fn send_tx<C: CallDecoder>(tx: TestCallBuilder<'_, C>) -> Result<TransactionReceipt> {
    let pending_tx = match tx.send().await {
        Ok(pending_tx) => pending_tx,
        Err(ContractError::TransportError(TransportError::ErrorResp(err_payload))) => {
            let reason = err_payload
                .as_revert_data()
                .map(|data| String::from_utf8_lossy(&data).into_owned())
                .unwrap_or_else(|| err_payload.message.to_string());
            eyre::bail!("pending tx error: {reason}");
        },
        Err(err) => eyre::bail!("pending tx error: {err:?}"),
    };

    wait_for_receipt(tx.provider, *pending_tx.tx_hash()).await
}

/// Poll for a transaction receipt rather than watching the pending transaction
async fn wait_for_receipt(
    provider: &DynProvider<Ethereum>,
    tx_hash: TxHash,
) -> Result<TransactionReceipt> {
    for _ in 0..RECEIPT_FETCH_ATTEMPTS {
        match provider.get_transaction_receipt(tx_hash).await? {
            Some(receipt) => return Ok(receipt),
            None => tokio::time::sleep(Duration::from_millis(RECEIPT_FETCH_DELAY_MS)).await,
        }
    }

    eyre::bail!("no tx receipt found for {tx_hash:#x} after retries");
}

// ------------
// | Accounts |
// ------------

/// Generates a fresh account, funds it with ETH from the owner, and binds the token to it
pub async fn funded_account(args: &TestArgs) -> Result<(Address, Token)> {
    let signer = PrivateKeySigner::random();
    let address = signer.address();

    let funding = TransactionRequest::default()
        .with_to(address)
        .with_value(U256::from(FUNDING_AMOUNT));
    let receipt = args.provider.send_transaction(funding).await?.get_receipt().await?;
    ensure!(receipt.status(), "funding {address:#x} failed");

    let url = Url::parse(&args.rpc_url)?;
    let provider = DynProvider::new(ProviderBuilder::new().wallet(signer).connect_http(url));
    Ok((address, IMyTokenInstance::new(args.proxy_address, provider)))
}

/// A fresh address with no keys, for receiving tokens
pub fn random_address() -> Address {
    PrivateKeySigner::random().address()
}
