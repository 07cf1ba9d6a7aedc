use std::path::PathBuf;
use clap::Subcommand;
use crate::enums::preset_code::PresetCode;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a sample configuration file
    Init {
        #[clap(short, long)]
        force: bool,
    },
    /// Analyze a snippet or issue description
    Analyze {
        #[clap(short, long, conflicts_with_all = ["file", "preset"])]
        code: Option<String>,
        /// Read input from a file, or `-` for stdin
        #[clap(short, long, conflicts_with = "preset")]
        file: Option<PathBuf>,
        #[clap(short, long, value_enum)]
        preset: Option<PresetCode>,
        #[clap(long)]
        json: bool,
    },
    /// List the built-in example snippets
    Presets,
    /// Check that the analysis backend is reachable
    Health,
    /// Load and validate the configuration file
    Validate,
}
