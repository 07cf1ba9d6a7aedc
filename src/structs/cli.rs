use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "securescan")]
#[clap(about = "AI-powered security analysis for code snippets", long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[clap(long, global = true, env = "SECURESCAN_CONFIG")]
    pub config: Option<PathBuf>,

    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
