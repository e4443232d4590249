pub mod config;
pub mod config_parsing;
pub mod flow;
pub mod ledger;
pub mod provision;
pub mod sequence;
pub mod show;
pub mod state;
pub mod util;
pub mod wire;
