use clap::Parser;
use eyre::Result;

use tick::{
    config::{Config, Subcommands},
    config_parsing::ParseWithConfigFile,
    flow, show,
};

fn main() -> Result<()> {
    let Config { command } = Config::try_parse()?;

    match command {
        Some(Subcommands::Run(args)) => flow::run(flow::Config::parse_with_config_file(Some(args))?),
        Some(Subcommands::Show(args)) => {
            show::run(show::Config::parse_with_config_file(Some(args))?)
        }
        // A bare `tick` runs the full flow with config-file/default values
        None => flow::run(flow::Config::parse_with_config_file(None)?),
    }
}
