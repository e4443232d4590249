//! Decides where the counter lives: reuse a supplied address or create a
//! fresh program-owned account on the ledger.

use eyre::{Context, Result};
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
    system_instruction,
};

use crate::{ledger::Ledger, sequence, wire};

/// The two lifecycle paths for the counter account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAccount {
    /// No address supplied; create and initialize a new account.
    Fresh,
    /// Reuse this address as-is. No validation that it exists or is owned
    /// by the right program; that is the caller's contract.
    Existing(Pubkey),
}

/// Returns the counter's address, plus the creation signature when a fresh
/// account was made.
///
/// Creating an account means: generate a keypair for it, fund it with the
/// rent-exempt minimum for [`wire::ACCOUNT_SIZE`] bytes, and hand ownership
/// to the counter program, all in one finalized transaction. There is no
/// partial retry; a rejected creation aborts the whole flow.
pub fn provision(
    ledger: &impl Ledger,
    source: CounterAccount,
    payer: &Keypair,
    program_id: &Pubkey,
) -> Result<(Pubkey, Option<Signature>)> {
    match source {
        CounterAccount::Existing(address) => Ok((address, None)),
        CounterAccount::Fresh => {
            let account = Keypair::new();

            let lamports = ledger
                .minimum_balance(wire::ACCOUNT_SIZE)
                .context("Error querying the rent-exempt minimum balance")?;

            let create = system_instruction::create_account(
                &payer.pubkey(),
                &account.pubkey(),
                lamports,
                wire::ACCOUNT_SIZE as u64,
                program_id,
            );

            let signature =
                sequence::submit(ledger, &[create], &payer.pubkey(), &[payer, &account])
                    .context("Error creating the counter account")?;

            Ok((account.pubkey(), Some(signature)))
        }
    }
}
