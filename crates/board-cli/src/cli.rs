//! CLI argument definitions for board-import.

use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};

#[derive(Parser)]
#[command(
    name = "board-import",
    version,
    about = "Convert a Notion CSV export into a board archive",
    long_about = "Convert a Notion CSV export folder into a board archive.\n\n\
                  The folder must contain the exported .csv table; a sibling\n\
                  folder of per-card markdown files is picked up automatically\n\
                  and attached as card content."
)]
pub struct Cli {
    /// Path to the Notion export folder containing the CSV file.
    #[arg(value_name = "EXPORT_FOLDER")]
    pub export_folder: PathBuf,

    /// Output archive file.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        default_value = "archive.focalboard"
    )]
    pub output: PathBuf,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,
}
