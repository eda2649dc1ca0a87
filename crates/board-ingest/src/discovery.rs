//! Locates the CSV table and markdown folder inside a Notion export.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IngestError, Result};

/// The resolved shape of one export folder.
#[derive(Debug, Clone)]
pub struct ExportLayout {
    /// The CSV table to convert.
    pub csv_path: PathBuf,
    /// Sibling folder holding per-card markdown files. May not exist.
    pub markdown_dir: PathBuf,
    /// Display title derived from the CSV file name.
    pub title: String,
}

/// Finds the CSV export inside `dir` and derives its layout.
///
/// The first `.csv` file (case-insensitive extension, sorted by name) is
/// taken as the table. Notion names both the file and the markdown folder
/// `<Title> <hex id>`, so the title drops the trailing id component and
/// the markdown folder keeps the full stem.
pub fn find_export(dir: &Path) -> Result<ExportLayout> {
    if !dir.is_dir() {
        return Err(IngestError::FolderNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    let entries = std::fs::read_dir(dir).map_err(|source| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    })?;
    for entry_result in entries {
        let entry = entry_result.map_err(|source| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if is_csv {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let csv_path = files.into_iter().next().ok_or(IngestError::CsvNotFound {
        path: dir.to_path_buf(),
    })?;

    let stem = csv_path
        .file_stem()
        .and_then(|v| v.to_str())
        .unwrap_or("")
        .to_string();
    let title = export_title(&stem);
    let markdown_dir = dir.join(&stem);
    debug!(csv = %csv_path.display(), title = %title, "resolved export layout");

    Ok(ExportLayout {
        csv_path,
        markdown_dir,
        title,
    })
}

/// Derives the display title from a Notion export file stem.
///
/// Notion appends a hex id as the final space-separated component
/// ("Tasks 0a1b2c..." -> "Tasks"); the last component is always dropped.
pub fn export_title(stem: &str) -> String {
    let mut components: Vec<&str> = stem.split(' ').collect();
    components.pop();
    components.join(" ")
}
