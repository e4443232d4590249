use std::{fs, path::PathBuf};

use clap_serde_derive::{
    clap::{self, Parser},
    ClapSerde,
};

/// Wraps a subcommand `Config` with an optional config file; flags given on
/// the command line win over values from the file.
#[derive(Parser)]
#[command(version, about)]
pub struct WithConfigFile<Config>
where
    Config: ClapSerde + ConfigName + 'static,
{
    /// Config file
    #[arg(short, long = "config", default_value_os_t = PathBuf::from(format!("tick-{}.toml", <Config as ConfigName>::NAME)))]
    pub config_path: PathBuf,

    /// Rest of arguments
    #[command(flatten)]
    pub config: <Config as ClapSerde>::Opt,
}

/// Names the subcommand for the default `tick-<name>.toml` lookup.
pub trait ConfigName {
    const NAME: &'static str;
}

pub trait ParseWithConfigFile
where
    Self: ClapSerde + ConfigName,
{
    fn parse_with_config_file(args: Option<WithConfigFile<Self>>) -> eyre::Result<Self>;
}

impl<Config> ParseWithConfigFile for Config
where
    Config: ClapSerde + ConfigName,
{
    fn parse_with_config_file(args: Option<WithConfigFile<Self>>) -> eyre::Result<Self> {
        let mut args = args.unwrap_or_else(<WithConfigFile<Self> as Parser>::parse);

        // A missing config file is fine; the CLI flags stand alone then
        let config = match fs::read_to_string(&args.config_path) {
            Ok(contents) => {
                let from_file: <Config as ClapSerde>::Opt = toml::from_str(&contents)?;
                Self::from(from_file).merge(&mut args.config)
            }
            Err(_) => Self::from(&mut args.config),
        };

        Ok(config)
    }
}
