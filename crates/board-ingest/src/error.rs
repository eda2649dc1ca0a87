use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("folder not found: {path}")]
    FolderNotFound { path: PathBuf },

    #[error("no .csv file found in folder: {path}")]
    CsvNotFound { path: PathBuf },

    #[error("read folder: {path}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read csv: {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
