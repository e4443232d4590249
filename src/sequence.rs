//! Builds and submits single transactions, in order, waiting for finality.

use eyre::{Context, Result};
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    transaction::Transaction,
};

use crate::ledger::Ledger;

/// Wraps `instructions` (executed atomically, in the given order) into one
/// signed transaction and blocks until the ledger has finalized it.
///
/// The current flows always pass a single instruction; batching several
/// into one transaction is possible but not something callers rely on yet.
pub fn submit(
    ledger: &impl Ledger,
    instructions: &[Instruction],
    payer: &Pubkey,
    signers: &[&Keypair],
) -> Result<Signature> {
    let blockhash = ledger
        .latest_blockhash()
        .context("Error fetching a recent blockhash")?;

    let transaction =
        Transaction::new_signed_with_payer(instructions, Some(payer), &signers.to_vec(), blockhash);

    ledger.submit_and_confirm(&transaction)
}
