use std::{path::Path, str::FromStr};

use eyre::{eyre, Context, Result};
use solana_sdk::{
    pubkey::Pubkey,
    signature::{read_keypair_file, Keypair},
};

/// Parses a base58 address, naming the offending input on failure.
pub fn parse_address(name: &str, value: &str) -> Result<Pubkey> {
    Pubkey::from_str(value).with_context(|| format!("Invalid {name} address `{value}`"))
}

/// Loads a keypair from the standard JSON byte-array file format.
pub fn load_keypair(path: impl AsRef<Path>) -> Result<Keypair> {
    let path = path.as_ref();

    read_keypair_file(path)
        .map_err(|err| eyre!("Error reading keypair file {}: {err}", path.display()))
}
