/// Supplies optional freeform text content for a card.
///
/// The assembler does not interpret how titles map to content; an ingest
/// collaborator (e.g. a markdown folder) implements the association.
pub trait ContentSource {
    /// Content for the card with the given display title, if any exists.
    fn content_for(&self, title: &str) -> Option<String>;
}

/// A content source that never yields content.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoContent;

impl ContentSource for NoContent {
    fn content_for(&self, _title: &str) -> Option<String> {
        None
    }
}
