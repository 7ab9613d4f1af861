//! Identifier generation for calculation records.

use uuid::Uuid;

/// Source of unique record identifiers.
///
/// Identifiers must be unique within one history and sort in creation order.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Time-ordered UUID v7 identifiers.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidV7Generator;

impl IdGenerator for UuidV7Generator {
    fn next_id(&mut self) -> String {
        Uuid::now_v7().to_string()
    }
}

/// Counter-based identifiers, zero-padded so they sort lexically.
#[derive(Clone, Debug, Default)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting at `next`, e.g. after the highest id already stored.
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        let id = format!("{:020}", self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn uuid_ids_are_unique_under_rapid_generation() {
        let mut ids = UuidV7Generator;
        let generated: HashSet<String> = (0..1000).map(|_| ids.next_id()).collect();

        assert_eq!(generated.len(), 1000);
    }

    #[test]
    fn sequential_ids_sort_in_creation_order() {
        let mut ids = SequentialIdGenerator::starting_at(8);
        let first = ids.next_id();
        let second = ids.next_id();
        let third = ids.next_id();

        assert_eq!(first, "00000000000000000008");
        assert!(first < second);
        assert!(second < third);
    }
}
