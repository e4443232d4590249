//! Read-only subcommand: print the current counter value.

use clap_serde_derive::{clap, ClapSerde};
use eyre::Result;
use spinners::{Spinner, Spinners};

use crate::{config_parsing::ConfigName, ledger::RpcLedger, state, util};

#[derive(ClapSerde, Debug, Clone)]
pub struct Config {
    #[arg(long, help = "Counter account to read")]
    #[default(None)]
    pub counter: Option<String>,

    #[arg(long, help = "RPC endpoint of the cluster")]
    #[default("http://127.0.0.1:8899".to_string())]
    pub url: String,
}

impl ConfigName for Config {
    const NAME: &'static str = "show";
}

pub fn run(config: Config) -> Result<()> {
    let Some(counter) = config.counter else {
        eprintln!("Error: `counter` is required (as a flag or in the config file)");
        std::process::exit(1);
    };
    let counter = util::parse_address("counter", &counter)?;

    let ledger = RpcLedger::new(config.url);

    let mut spinner = Spinner::new(Spinners::Dots, "Fetching the counter account...".to_string());
    match state::read(&ledger, &counter) {
        Ok(Some(value)) => {
            spinner.stop_and_persist("✅", format!("Counter {counter} holds {value}"));
            Ok(())
        }
        Ok(None) => {
            // Absent is not the same as zero
            spinner.stop_and_persist("❌", format!("Counter account {counter} does not exist"));
            std::process::exit(1);
        }
        Err(err) => {
            spinner.stop_and_persist("❌", "Fetch failed!".to_string());
            Err(err)
        }
    }
}
