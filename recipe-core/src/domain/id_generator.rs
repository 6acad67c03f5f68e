//! Recipe id generation.

use std::sync::atomic::{AtomicU64, Ordering};

use time::OffsetDateTime;

use super::models::RecipeId;

/// Process-wide: ids stay unique across generators and services.
static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Generates recipe ids of the form `<unix millis>-<sequence>`.
///
/// The millisecond token keeps ids roughly chronological; the sequence number
/// makes two ids requested within the same millisecond distinct.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecipeIdGenerator;

impl RecipeIdGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn next_id(&self) -> RecipeId {
        let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        let sequence = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        RecipeId::new(format!("{millis}-{sequence}"))
    }
}
