// Deterministic id generators for store and HTTP tests.

use crate::shared::infrastructure::id_generator::IdGenerator;
use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out "1", "2", "3", ... so every insert gets a distinct, predictable id.
#[derive(Default)]
pub struct SequenceIdGenerator {
    last: AtomicU64,
}

impl SequenceIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn next_id(&self) -> String {
        (self.last.fetch_add(1, Ordering::SeqCst) + 1).to_string()
    }
}

/// Always returns the same id, standing in for two inserts within one wall clock second.
pub struct FixedIdGenerator(pub &'static str);

impl IdGenerator for FixedIdGenerator {
    fn next_id(&self) -> String {
        self.0.to_string()
    }
}
