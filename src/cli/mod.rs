// CLI module for calculator-api
// Author: kelexine (https://github.com/kelexine)

use clap::Parser;
use std::path::PathBuf;

/// calculator-api - Stateless HTTP calculator, greeting and echo service
#[derive(Parser, Debug)]
#[command(name = "calculator-api", version, about, long_about = None)]
pub struct Args {
    /// Config file to load (default: ~/.calculator-api/config.toml)
    #[arg(short, long, env = "CALCULATOR_API_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind, overrides server.host
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on, overrides server.port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Log level filter, overrides logging.level
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (pretty, json, compact), overrides logging.format
    #[arg(long)]
    pub log_format: Option<String>,
}
