//! The conversion pipeline: discover, read, assemble, write.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use board_archive::write_archive;
use board_convert::assemble;
use board_ingest::{MarkdownFolder, find_export, read_table};
use board_model::UuidIds;

/// Outcome of one conversion run.
#[derive(Debug)]
pub struct ConversionSummary {
    pub title: String,
    pub rows: usize,
    pub blocks: usize,
}

/// Converts the export at `export_folder` into an archive at `output`.
pub fn run(export_folder: &Path, output: &Path) -> Result<ConversionSummary> {
    let layout = find_export(export_folder)?;
    info!(csv = %layout.csv_path.display(), title = %layout.title, "found export");

    let table = read_table(&layout.csv_path, layout.title.clone())?;
    let content = MarkdownFolder::new(&layout.markdown_dir);
    let mut ids = UuidIds;
    let blocks = assemble(&table, &content, &mut ids);

    let file = File::create(output)
        .with_context(|| format!("create output file: {}", output.display()))?;
    write_archive(BufWriter::new(file), &blocks)
        .with_context(|| format!("write archive: {}", output.display()))?;

    Ok(ConversionSummary {
        title: layout.title,
        rows: table.rows.len(),
        blocks: blocks.len(),
    })
}
