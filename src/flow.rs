//! The end-to-end counter flow: provision, initialize, increment, read.

use std::{path::PathBuf, time::Duration};

use clap_serde_derive::{clap, ClapSerde};
use eyre::{Context, OptionExt, Result};
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
};

use crate::{
    config_parsing::ConfigName,
    ledger::{Ledger, RpcLedger},
    provision::{self, CounterAccount},
    sequence, state, util, wire,
};

#[derive(ClapSerde, Debug, Clone)]
pub struct Config {
    #[arg(long, help = "JSON keypair file that funds and signs everything")]
    #[default("payer.json".into())]
    pub keypair: PathBuf,

    #[arg(long, help = "Address of the deployed counter program")]
    #[default(None)]
    pub program_id: Option<String>,

    #[arg(
        long,
        help = "Existing counter account to reuse (a fresh one is created and initialized when omitted)"
    )]
    #[default(None)]
    pub counter: Option<String>,

    #[arg(long, help = "RPC endpoint of the cluster")]
    #[default("http://127.0.0.1:8899".to_string())]
    pub url: String,

    #[arg(
        long,
        help = "Seconds to wait for the final read to observe the incremented value"
    )]
    #[default(30)]
    pub settle_timeout: u64,
}

impl ConfigName for Config {
    const NAME: &'static str = "run";
}

/// What one invocation did, for reporting.
#[derive(Debug)]
pub struct Outcome {
    pub counter: Pubkey,
    pub created: Option<Signature>,
    pub initialized: Option<Signature>,
    pub incremented: Signature,
    pub value: u64,
}

pub fn run(config: Config) -> Result<()> {
    let Config {
        keypair,
        program_id,
        counter,
        url,
        settle_timeout,
    } = config;

    let Some(program_id) = program_id else {
        eprintln!("Error: `program_id` is required (as a flag or in the config file)");
        std::process::exit(1);
    };
    let program_id = util::parse_address("program", &program_id)?;

    let payer = util::load_keypair(&keypair)?;

    let source = match counter {
        Some(address) => CounterAccount::Existing(util::parse_address("counter", &address)?),
        None => CounterAccount::Fresh,
    };

    let ledger = RpcLedger::new(url);
    let outcome = drive(
        &ledger,
        &payer,
        &program_id,
        source,
        Duration::from_secs(settle_timeout),
    )?;

    if let Some(signature) = outcome.created {
        eprintln!("✅ Created counter account {} ({signature})", outcome.counter);
    }
    if let Some(signature) = outcome.initialized {
        eprintln!("✅ Initialized the counter ({signature})");
    }
    eprintln!("✅ Incremented the counter ({})", outcome.incremented);
    println!("Counter {} now holds {}", outcome.counter, outcome.value);

    Ok(())
}

/// Runs the lifecycle state machine against `ledger`.
///
/// Strictly sequential: every transaction is finalized before the next one
/// is built, so each instruction observes the state its predecessor left.
/// Any stage failure aborts the rest; effects already finalized stay on the
/// ledger.
pub fn drive(
    ledger: &impl Ledger,
    payer: &Keypair,
    program_id: &Pubkey,
    source: CounterAccount,
    settle_timeout: Duration,
) -> Result<Outcome> {
    let fresh = matches!(source, CounterAccount::Fresh);

    let (counter, created) = provision::provision(ledger, source, payer, program_id)?;

    // A fresh account gets initialized exactly once; a reused address is
    // trusted to have been initialized already.
    let initialized = if fresh {
        let instruction = wire::initialize(program_id, &counter, &payer.pubkey());
        let signature = sequence::submit(ledger, &[instruction], &payer.pubkey(), &[payer])
            .context("Error submitting the initialize instruction")?;
        Some(signature)
    } else {
        None
    };

    let expected = if fresh {
        1
    } else {
        let current = state::read(ledger, &counter)
            .context("Error reading the counter before incrementing")?
            .ok_or_eyre(format!("counter account {counter} does not exist"))?;
        current.wrapping_add(1)
    };

    let instruction = wire::increment(program_id, &counter);
    let incremented = sequence::submit(ledger, &[instruction], &payer.pubkey(), &[payer])
        .context("Error submitting the increment instruction")?;

    let value = state::poll_until(ledger, &counter, expected, settle_timeout)
        .context("Error reading the counter back")?;

    Ok(Outcome {
        counter,
        created,
        initialized,
        incremented,
        value,
    })
}
