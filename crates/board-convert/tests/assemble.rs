//! End-to-end assembly tests over in-memory tables.

use std::collections::BTreeMap;

use board_convert::{ContentSource, GALLERY_VIEW_TITLE, NoContent, assemble};
use board_model::{
    Block, BlockKind, PropertyType, PropertyValue, SequentialIds, SourceTable,
};

struct MapContent(BTreeMap<String, String>);

impl ContentSource for MapContent {
    fn content_for(&self, title: &str) -> Option<String> {
        self.0.get(title).cloned()
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn tasks_table() -> SourceTable {
    let mut table = SourceTable::new("Tasks", strings(&["Name", "Status", "Tags"]));
    table.push_row(strings(&["Alpha", "Yes", "x, y"]));
    table.push_row(strings(&["Beta", "No", "x"]));
    table
}

fn card_properties(block: &Block) -> &BTreeMap<String, PropertyValue> {
    &block.card_fields().expect("card block").properties
}

#[test]
fn builds_board_view_and_cards_in_order() {
    let table = tasks_table();
    let mut ids = SequentialIds::new();
    let blocks = assemble(&table, &NoContent, &mut ids);

    assert_eq!(blocks.len(), 4);
    assert_eq!(blocks[0].kind, BlockKind::Board);
    assert_eq!(blocks[0].title, "Tasks");
    assert_eq!(blocks[1].kind, BlockKind::View);
    assert_eq!(blocks[1].title, GALLERY_VIEW_TITLE);
    assert_eq!(blocks[2].kind, BlockKind::Card);
    assert_eq!(blocks[2].title, "Alpha");
    assert_eq!(blocks[3].title, "Beta");

    let board_id = &blocks[0].id;
    assert_eq!(&blocks[0].root_id, board_id);
    assert_eq!(&blocks[0].parent_id, board_id);
    for block in &blocks[1..] {
        assert_eq!(&block.root_id, board_id);
        assert_eq!(&block.parent_id, board_id);
    }
}

#[test]
fn infers_checkbox_and_multi_select_end_to_end() {
    let table = tasks_table();
    let mut ids = SequentialIds::new();
    let blocks = assemble(&table, &NoContent, &mut ids);

    let schema = &blocks[0].board_fields().expect("board block").card_properties;
    assert_eq!(schema[0].name, "Status");
    assert_eq!(schema[0].property_type, PropertyType::Checkbox);
    // Tags tokens x,y,x: U=2, T=3, T/N=1.5.
    assert_eq!(schema[1].name, "Tags");
    assert_eq!(schema[1].property_type, PropertyType::MultiSelect);

    let id_of = |value: &str| {
        schema[1]
            .option_id(value)
            .expect("registered option")
            .to_string()
    };

    let alpha = card_properties(&blocks[2]);
    assert_eq!(
        alpha[&schema[0].id],
        PropertyValue::Text("true".to_string())
    );
    assert_eq!(
        alpha[&schema[1].id],
        PropertyValue::OptionIds(vec![id_of("x"), id_of("y")])
    );

    let beta = card_properties(&blocks[3]);
    assert_eq!(beta[&schema[0].id], PropertyValue::Text("false".to_string()));
    assert_eq!(
        beta[&schema[1].id],
        PropertyValue::OptionIds(vec![id_of("x")])
    );
}

#[test]
fn every_property_key_exists_in_the_schema() {
    let table = tasks_table();
    let mut ids = SequentialIds::new();
    let blocks = assemble(&table, &NoContent, &mut ids);

    let schema = &blocks[0].board_fields().expect("board block").card_properties;
    for block in blocks.iter().filter(|b| b.kind == BlockKind::Card) {
        for key in card_properties(block).keys() {
            assert!(schema.iter().any(|template| &template.id == key));
        }
    }
}

#[test]
fn matched_titles_get_exactly_one_text_block() {
    let table = tasks_table();
    let mut content = BTreeMap::new();
    content.insert("Alpha".to_string(), "# Alpha notes".to_string());
    let mut ids = SequentialIds::new();
    let blocks = assemble(&table, &MapContent(content), &mut ids);

    assert_eq!(blocks.len(), 5);
    let alpha = &blocks[2];
    let text = &blocks[3];
    assert_eq!(text.kind, BlockKind::Text);
    assert_eq!(text.title, "# Alpha notes");
    assert_eq!(text.parent_id, alpha.id);
    assert_eq!(text.root_id, blocks[0].id);
    assert_eq!(
        alpha.card_fields().expect("card block").content_order,
        vec![text.id.clone()]
    );

    // Beta has no content and no contentOrder entries.
    let beta = &blocks[4];
    assert_eq!(beta.kind, BlockKind::Card);
    assert!(beta.card_fields().expect("card block").content_order.is_empty());
}

#[test]
fn empty_rows_are_skipped() {
    let mut table = SourceTable::new("Tasks", strings(&["Name", "Status"]));
    table.push_row(strings(&["Alpha", "Yes"]));
    table.push_row(Vec::new());
    table.push_row(strings(&["Beta", "No"]));

    let mut ids = SequentialIds::new();
    let blocks = assemble(&table, &NoContent, &mut ids);

    let cards: Vec<&Block> = blocks.iter().filter(|b| b.kind == BlockKind::Card).collect();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].title, "Alpha");
    assert_eq!(cards[1].title, "Beta");
}

#[test]
fn empty_title_cell_still_yields_a_card() {
    let mut table = SourceTable::new("Tasks", strings(&["Name", "Notes"]));
    table.push_row(strings(&["", "something"]));

    let mut ids = SequentialIds::new();
    let blocks = assemble(&table, &NoContent, &mut ids);

    let card = blocks.iter().find(|b| b.kind == BlockKind::Card).unwrap();
    assert_eq!(card.title, "");
}

#[test]
fn block_ids_are_unique_across_the_output() {
    let table = tasks_table();
    let mut content = BTreeMap::new();
    content.insert("Beta".to_string(), "notes".to_string());
    let mut ids = SequentialIds::new();
    let blocks = assemble(&table, &MapContent(content), &mut ids);

    let mut seen = std::collections::BTreeSet::new();
    for block in &blocks {
        assert!(seen.insert(block.id.clone()), "duplicate id {}", block.id);
    }
}
