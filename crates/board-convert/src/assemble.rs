//! Assembles the full block graph for one source table.

use tracing::{debug, info, warn};

use board_infer::{OptionRegistry, build_schema};
use board_model::{Block, IdGenerator, SourceTable};

use crate::content::ContentSource;
use crate::row::convert_row;

/// Title of the default view created for every board.
pub const GALLERY_VIEW_TITLE: &str = "Gallery View";

/// Converts a table into its block graph: board, view, cards, content.
///
/// The schema is built completely before any row is converted, so option
/// identities are final when cards reference them. Output order is board,
/// view, then cards in row order, each immediately followed by its text
/// block when `content` yields something for the card title. Rows with no
/// cells at all are skipped with a warning.
pub fn assemble(
    table: &SourceTable,
    content: &dyn ContentSource,
    ids: &mut dyn IdGenerator,
) -> Vec<Block> {
    let board_id = ids.mint();
    let mut registry = OptionRegistry::new();
    let schema = build_schema(table, &mut registry, ids);
    info!(
        board = %table.title,
        columns = schema.len(),
        rows = table.rows.len(),
        "assembling board"
    );

    let mut blocks = Vec::with_capacity(table.rows.len() + 2);
    let board = Block::board(board_id.clone(), table.title.clone(), schema.clone());
    blocks.push(board);
    blocks.push(Block::view(
        ids.mint(),
        &board_id,
        GALLERY_VIEW_TITLE.to_string(),
        "gallery".to_string(),
    ));

    let mut cards = 0usize;
    for (index, row) in table.rows.iter().enumerate() {
        if row.is_empty() {
            warn!(row = index, "row has no columns, skipping");
            continue;
        }
        // The title cell is taken as-is, even when empty.
        let title = row[0].clone();
        let properties = convert_row(&schema, &table.columns, row);
        let card_id = ids.mint();

        let (content_order, text_block) = match content.content_for(&title) {
            Some(markdown) => {
                debug!(card = %title, bytes = markdown.len(), "attaching card content");
                let text = Block::text(ids.mint(), &board_id, &card_id, markdown);
                (vec![text.id.clone()], Some(text))
            }
            None => (Vec::new(), None),
        };

        blocks.push(Block::card(
            card_id,
            &board_id,
            title,
            properties,
            content_order,
        ));
        if let Some(text) = text_block {
            blocks.push(text);
        }
        cards += 1;
    }

    info!(cards, blocks = blocks.len(), "assembled board");
    blocks
}
