use clap::Parser;
use clap_serde_derive::clap;

use crate::{config_parsing::WithConfigFile, flow, show};

#[derive(Parser)]
#[command(version, about)]
pub struct Config {
    #[command(subcommand)]
    pub command: Option<Subcommands>,
}

#[derive(Parser)]
pub enum Subcommands {
    /// Drive the counter end to end: create, initialize, increment, read
    #[command(alias = "r")]
    Run(WithConfigFile<flow::Config>),

    /// Print the current counter value without submitting anything
    #[command(alias = "s")]
    Show(WithConfigFile<show::Config>),
}
