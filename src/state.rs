//! Reads the counter value back out of its account bytes.

use std::{
    thread,
    time::{Duration, Instant},
};

use eyre::{bail, Result};
use solana_sdk::pubkey::Pubkey;

use crate::{ledger::Ledger, wire};

const POLL_INTERVAL: Duration = Duration::from_millis(400);

/// Fetches and decodes the counter.
///
/// `None` means the account does not exist on the ledger; callers must not
/// conflate that with a stored value of zero.
pub fn read(ledger: &impl Ledger, counter: &Pubkey) -> Result<Option<u64>> {
    let Some(data) = ledger.account_data(counter)? else {
        return Ok(None);
    };

    if data.len() < wire::ACCOUNT_SIZE {
        bail!(
            "counter account {counter} holds {} bytes, expected {}",
            data.len(),
            wire::ACCOUNT_SIZE,
        );
    }

    Ok(Some(decode(&data)))
}

/// Decodes the little-endian value from the first [`wire::VALUE_WIDTH`]
/// bytes; the reserved tail is ignored.
///
/// `data` must hold at least [`wire::VALUE_WIDTH`] bytes.
pub fn decode(data: &[u8]) -> u64 {
    let mut raw = [0u8; 8];
    raw[..wire::VALUE_WIDTH].copy_from_slice(&data[..wire::VALUE_WIDTH]);
    u64::from_le_bytes(raw)
}

/// Re-reads the counter until it shows `expected`, or `timeout` elapses.
///
/// A read straight after a finalized write may still hit a node that has
/// not converged on that write, so the flow polls for the value it knows
/// must appear instead of sleeping a fixed delay and hoping.
pub fn poll_until(
    ledger: &impl Ledger,
    counter: &Pubkey,
    expected: u64,
    timeout: Duration,
) -> Result<u64> {
    let deadline = Instant::now() + timeout;
    let mut last;

    loop {
        last = read(ledger, counter)?;
        if last == Some(expected) {
            return Ok(expected);
        }
        if Instant::now() >= deadline {
            break;
        }
        thread::sleep(POLL_INTERVAL);
    }

    match last {
        Some(value) => bail!(
            "counter {counter} still reads {value} after {timeout:?}, expected {expected}"
        ),
        None => bail!("counter account {counter} not visible after {timeout:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_ignores_reserved_tail() {
        assert_eq!(decode(&[42, 0, 0, 0, 0, 0, 0xde, 0xad]), 42);
        assert_eq!(decode(&[42, 0, 0, 0, 0, 0, 0, 0]), 42);
    }

    #[test]
    fn decode_reads_a_six_byte_window() {
        let data = [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff];
        assert_eq!(decode(&data), (1 << 48) - 1);
    }

    #[test]
    fn decode_zero_is_zero() {
        assert_eq!(decode(&[0u8; 8]), 0);
    }
}
