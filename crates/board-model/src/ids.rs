/// Mints globally unique block, template, and option identifiers.
///
/// Identifier generation is an explicit collaborator rather than an ambient
/// global: everything that needs an id takes `&mut dyn IdGenerator`, so a
/// whole conversion run can be made reproducible by swapping the generator.
pub trait IdGenerator {
    fn mint(&mut self) -> String;
}

/// Default generator backed by random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn mint(&mut self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Deterministic generator producing `id-1`, `id-2`, ... in mint order.
///
/// Intended for tests and reproducible fixture runs.
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn mint(&mut self) -> String {
        self.next += 1;
        format!("id-{}", self.next)
    }
}
