//! Markdown folder content source.

use std::path::PathBuf;

use tracing::{debug, warn};

use board_convert::ContentSource;

/// Looks up per-card markdown files in a Notion export's content folder.
///
/// Notion names each file `<Card title> <hex id>.md`; a file matches a
/// card when its name, minus the trailing id component, equals the card
/// title. A missing folder or an unmatched title yields no content.
#[derive(Debug, Clone)]
pub struct MarkdownFolder {
    dir: PathBuf,
}

impl MarkdownFolder {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn matching_file(&self, title: &str) -> Option<PathBuf> {
        let entries = std::fs::read_dir(&self.dir).ok()?;
        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        files.into_iter().find(|path| {
            let name = path.file_name().and_then(|v| v.to_str()).unwrap_or("");
            file_card_title(name) == title
        })
    }
}

impl ContentSource for MarkdownFolder {
    fn content_for(&self, title: &str) -> Option<String> {
        let path = self.matching_file(title)?;
        match std::fs::read_to_string(&path) {
            Ok(markdown) => {
                debug!(card = %title, file = %path.display(), "found card content");
                Some(markdown)
            }
            Err(error) => {
                warn!(file = %path.display(), %error, "failed to read card content");
                None
            }
        }
    }
}

/// Card title encoded in a content file name: everything before the final
/// space-separated component (the Notion id plus extension).
fn file_card_title(file_name: &str) -> String {
    let mut components: Vec<&str> = file_name.split(' ').collect();
    components.pop();
    components.join(" ")
}
