//! Seam towards the ledger RPC endpoint.
//!
//! The flow only ever needs four operations, so they are captured in a
//! trait; the integration tests drive the whole flow against an in-memory
//! implementation instead of a running cluster.

use eyre::Result;
use solana_client::{rpc_client::RpcClient, rpc_config::RpcSendTransactionConfig};
use solana_sdk::{
    commitment_config::CommitmentConfig, hash::Hash, pubkey::Pubkey, signature::Signature,
    transaction::Transaction,
};

pub trait Ledger {
    fn latest_blockhash(&self) -> Result<Hash>;

    /// Minimum lamport balance that makes a `space`-byte account rent-exempt.
    fn minimum_balance(&self, space: usize) -> Result<u64>;

    /// Submits a signed transaction and blocks until the ledger has
    /// finalized it. Single attempt; a failure is fatal to the caller's
    /// step.
    fn submit_and_confirm(&self, transaction: &Transaction) -> Result<Signature>;

    /// Raw account bytes, or `None` when the account does not exist.
    fn account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>>;
}

/// [`Ledger`] over a JSON-RPC cluster endpoint, pinned to `finalized`
/// commitment.
pub struct RpcLedger {
    rpc: RpcClient,
}

impl RpcLedger {
    pub fn new(url: impl ToString) -> Self {
        Self {
            rpc: RpcClient::new_with_commitment(url.to_string(), CommitmentConfig::finalized()),
        }
    }
}

impl Ledger for RpcLedger {
    fn latest_blockhash(&self) -> Result<Hash> {
        Ok(self.rpc.get_latest_blockhash()?)
    }

    fn minimum_balance(&self, space: usize) -> Result<u64> {
        Ok(self.rpc.get_minimum_balance_for_rent_exemption(space)?)
    }

    fn submit_and_confirm(&self, transaction: &Transaction) -> Result<Signature> {
        // NOTE: preflight simulation is skipped on purpose: the program's
        //       state-dependent checks only hold at execution time and
        //       simulating against a stale bank produces false negatives
        let signature = self.rpc.send_and_confirm_transaction_with_spinner_and_config(
            transaction,
            CommitmentConfig::finalized(),
            RpcSendTransactionConfig {
                skip_preflight: true,
                ..Default::default()
            },
        )?;

        Ok(signature)
    }

    fn account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>> {
        let response = self
            .rpc
            .get_account_with_commitment(address, CommitmentConfig::finalized())?;

        Ok(response.value.map(|account| account.data))
    }
}
