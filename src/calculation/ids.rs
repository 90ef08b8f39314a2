//! Identifier generation for persisted records.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of record and correlation identifiers.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh identifier.
    fn generate(&self) -> Uuid;
}

/// Random version 4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn generate(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic identifiers counting up from a starting value.
///
/// # Example
///
/// ```
/// use schedule_engine::calculation::{IdGenerator, SequentialIds};
/// use uuid::Uuid;
///
/// let ids = SequentialIds::starting_at(7);
/// assert_eq!(ids.generate(), Uuid::from_u128(7));
/// assert_eq!(ids.generate(), Uuid::from_u128(8));
/// ```
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    /// Starts the sequence at `first`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn generate(&self) -> Uuid {
        Uuid::from_u128(u128::from(self.next.fetch_add(1, Ordering::Relaxed)))
    }
}
