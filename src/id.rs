//! Id generation for linking triggers to their content.
//!
//! Ids take the form `prefix-N`. Each [`SequentialIds`] owns its own counter;
//! [`create_id`] goes through one process-wide instance so every caller in
//! the process shares a single sequence.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Prefix used by [`create_id`].
pub const DEFAULT_ID_PREFIX: &str = "hawk";

/// Something that hands out unique ids.
pub trait IdGenerator {
    /// Produce the next id for `prefix`.
    fn next_id(&self, prefix: &str) -> String;
}

/// Monotonic counter. The first id is `prefix-1`.
#[derive(Debug, Default)]
pub struct SequentialIds {
    counter: AtomicUsize,
}

impl SequentialIds {
    pub const fn new() -> Self {
        Self {
            counter: AtomicUsize::new(0),
        }
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> usize {
        self.counter.load(Ordering::Relaxed)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self, prefix: &str) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{prefix}-{n}")
    }
}

static GLOBAL_IDS: SequentialIds = SequentialIds::new();

/// The process-wide generator behind [`create_id`].
pub fn global_ids() -> &'static SequentialIds {
    &GLOBAL_IDS
}

/// Generate a unique id with the default `hawk` prefix.
pub fn create_id() -> String {
    create_id_with_prefix(DEFAULT_ID_PREFIX)
}

/// Generate a unique id with a custom prefix.
pub fn create_id_with_prefix(prefix: &str) -> String {
    GLOBAL_IDS.next_id(prefix)
}
