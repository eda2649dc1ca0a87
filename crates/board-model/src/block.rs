//! The universal output unit: a block in the board graph.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::property::{PropertyTemplate, PropertyValue};

/// Archive schema version stamped on every block.
pub const BLOCK_SCHEMA: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Board,
    View,
    Card,
    Text,
}

/// One node of the output graph.
///
/// `root_id` points at the owning board (a board is its own root) and
/// `parent_id` at the immediate structural parent. Ids are unique across
/// the whole output set; see [`crate::IdGenerator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub id: String,
    pub parent_id: String,
    pub root_id: String,
    pub schema: u32,
    #[serde(rename = "type")]
    pub kind: BlockKind,
    pub title: String,
    pub fields: BlockFields,
    pub create_at: i64,
    pub update_at: i64,
    pub delete_at: i64,
}

/// Kind-specific block payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockFields {
    Board(BoardFields),
    View(ViewFields),
    Card(CardFields),
    Text(TextFields),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardFields {
    pub card_properties: Vec<PropertyTemplate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewFields {
    pub view_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardFields {
    pub properties: BTreeMap<String, PropertyValue>,
    pub content_order: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextFields {}

impl Block {
    fn new(
        id: String,
        parent_id: String,
        root_id: String,
        kind: BlockKind,
        title: String,
        fields: BlockFields,
    ) -> Self {
        let now = Utc::now().timestamp_millis();
        Self {
            id,
            parent_id,
            root_id,
            schema: BLOCK_SCHEMA,
            kind,
            title,
            fields,
            create_at: now,
            update_at: now,
            delete_at: 0,
        }
    }

    /// A board block; its own root and parent.
    pub fn board(id: String, title: String, card_properties: Vec<PropertyTemplate>) -> Self {
        Self::new(
            id.clone(),
            id.clone(),
            id,
            BlockKind::Board,
            title,
            BlockFields::Board(BoardFields { card_properties }),
        )
    }

    /// A view block parented to its board.
    pub fn view(id: String, board_id: &str, title: String, view_type: String) -> Self {
        Self::new(
            id,
            board_id.to_string(),
            board_id.to_string(),
            BlockKind::View,
            title,
            BlockFields::View(ViewFields { view_type }),
        )
    }

    /// A card block parented to its board.
    pub fn card(
        id: String,
        board_id: &str,
        title: String,
        properties: BTreeMap<String, PropertyValue>,
        content_order: Vec<String>,
    ) -> Self {
        Self::new(
            id,
            board_id.to_string(),
            board_id.to_string(),
            BlockKind::Card,
            title,
            BlockFields::Card(CardFields {
                properties,
                content_order,
            }),
        )
    }

    /// A text block parented to a card, rooted at the board.
    pub fn text(id: String, board_id: &str, card_id: &str, content: String) -> Self {
        Self::new(
            id,
            card_id.to_string(),
            board_id.to_string(),
            BlockKind::Text,
            content,
            BlockFields::Text(TextFields {}),
        )
    }

    pub fn card_fields(&self) -> Option<&CardFields> {
        match &self.fields {
            BlockFields::Card(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn board_fields(&self) -> Option<&BoardFields> {
        match &self.fields {
            BlockFields::Board(fields) => Some(fields),
            _ => None,
        }
    }
}
