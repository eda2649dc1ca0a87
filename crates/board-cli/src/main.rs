//! board-import: Notion CSV export to board archive.

use clap::Parser;

use board_cli::cli::Cli;
use board_cli::logging::init_logging;
use board_cli::pipeline::run;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbosity.tracing_level_filter());

    match run(&cli.export_folder, &cli.output) {
        Ok(summary) => {
            println!(
                "Exported board \"{}\": {} row(s), {} block(s) -> {}",
                summary.title,
                summary.rows,
                summary.blocks,
                cli.output.display()
            );
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(1);
        }
    }
}
