//! Block archive serialization.
//!
//! An archive is line-delimited JSON: a header line followed by one
//! `{"type":"block","data":{...}}` line per block, in block order.

use std::io::Write;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use board_model::Block;

/// Current archive format version.
pub const ARCHIVE_VERSION: u32 = 1;

/// First line of every archive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ArchiveHeader {
    pub version: u32,
    /// Creation time, epoch milliseconds.
    pub date: i64,
}

#[derive(Serialize)]
struct ArchiveLine<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    data: &'a Block,
}

/// Writes `blocks` as a complete archive to `writer`.
pub fn write_archive<W: Write>(mut writer: W, blocks: &[Block]) -> serde_json::Result<()> {
    let header = ArchiveHeader {
        version: ARCHIVE_VERSION,
        date: Utc::now().timestamp_millis(),
    };
    serde_json::to_writer(&mut writer, &header)?;
    newline(&mut writer)?;
    for block in blocks {
        let line = ArchiveLine {
            kind: "block",
            data: block,
        };
        serde_json::to_writer(&mut writer, &line)?;
        newline(&mut writer)?;
    }
    Ok(())
}

fn newline<W: Write>(writer: &mut W) -> serde_json::Result<()> {
    writer.write_all(b"\n").map_err(serde_json::Error::io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn sample_blocks() -> Vec<Block> {
        let board = Block::board("b1".to_string(), "Tasks".to_string(), Vec::new());
        let card = Block::card(
            "c1".to_string(),
            "b1",
            "Alpha".to_string(),
            BTreeMap::new(),
            Vec::new(),
        );
        vec![board, card]
    }

    #[test]
    fn writes_header_then_one_line_per_block() {
        let mut buffer = Vec::new();
        write_archive(&mut buffer, &sample_blocks()).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);

        let header: ArchiveHeader = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(header.version, ARCHIVE_VERSION);
        assert!(header.date > 0);

        for line in &lines[1..] {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(value["type"], "block");
            assert!(value["data"]["id"].is_string());
        }
    }

    #[test]
    fn block_lines_round_trip() {
        let blocks = sample_blocks();
        let mut buffer = Vec::new();
        write_archive(&mut buffer, &blocks).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let line = text.lines().nth(2).unwrap();
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        let round: Block = serde_json::from_value(value["data"].clone()).unwrap();
        assert_eq!(round, blocks[1]);
    }

    #[test]
    fn empty_block_list_still_writes_a_header() {
        let mut buffer = Vec::new();
        write_archive(&mut buffer, &[]).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
