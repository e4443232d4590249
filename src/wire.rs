//! Wire schema shared with the on-chain counter program.
//!
//! Instruction payloads are exactly [`PAYLOAD_SIZE`] bytes: one opcode tag
//! followed by a little-endian value field that only `Initialize` reads.
//! Counter accounts are exactly [`ACCOUNT_SIZE`] bytes: a little-endian
//! unsigned value in the first [`VALUE_WIDTH`] bytes, the rest reserved.

use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

/// On-chain allocation of a counter account, in bytes.
pub const ACCOUNT_SIZE: usize = 8;

/// How many of those bytes actually carry the counter value.
pub const VALUE_WIDTH: usize = 6;

/// Instruction payload length: 1 opcode byte + 8 value bytes.
pub const PAYLOAD_SIZE: usize = 9;

/// Operations of the counter program.
///
/// The program's opcode table is authoritative; tags are stable and any
/// future operation takes the next unused integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Initialize = 0,
    Increment = 1,
}

impl Opcode {
    pub fn tag(self) -> u8 {
        self as u8
    }
}

/// Initialize a freshly created counter account to zero.
///
/// Accounts expected:
///
/// 0. `[writable]` The counter account, already created and owned by the
///                 program.
/// 1. `[signer]`   The fee payer.
pub fn initialize(program_id: &Pubkey, counter: &Pubkey, payer: &Pubkey) -> Instruction {
    Instruction::new_with_bytes(
        *program_id,
        // NOTE: seed value is always 0 for now; non-zero seeding is
        //       reserved in the payload layout
        &payload(Opcode::Initialize, 0),
        vec![
            AccountMeta::new(*counter, false),
            AccountMeta::new_readonly(*payer, true),
        ],
    )
}

/// Increment the counter by one.
///
/// Accounts expected:
///
/// 0. `[writable]` The counter account.
pub fn increment(program_id: &Pubkey, counter: &Pubkey) -> Instruction {
    Instruction::new_with_bytes(
        *program_id,
        &payload(Opcode::Increment, 0),
        vec![AccountMeta::new(*counter, false)],
    )
}

fn payload(opcode: Opcode, value: u64) -> [u8; PAYLOAD_SIZE] {
    debug_assert!(value < 1 << (VALUE_WIDTH * 8));

    let mut data = [0u8; PAYLOAD_SIZE];
    data[0] = opcode.tag();
    data[1..].copy_from_slice(&value.to_le_bytes());
    data
}
