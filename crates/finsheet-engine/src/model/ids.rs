//! Row id allocation.

use chrono::Utc;

use super::row::{Row, RowId};

/// Hands out row ids derived from the wall clock in milliseconds.
///
/// Ids are strictly increasing for the lifetime of the source even when the
/// clock stalls or steps backwards, and never collide with ids already
/// present in the rows the source was seeded from.
#[derive(Clone, Debug, Default)]
pub struct RowIdSource {
    last: u64,
}

impl RowIdSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source that will only issue ids above every id in `rows`.
    pub fn after(rows: &[Row]) -> Self {
        let mut source = Self::new();
        source.observe(rows);
        source
    }

    /// Raise the floor past every id in `rows`.
    pub fn observe(&mut self, rows: &[Row]) {
        if let Some(max) = rows.iter().map(|row| row.id.0).max() {
            self.last = self.last.max(max);
        }
    }

    pub fn next_id(&mut self) -> RowId {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.last = now.max(self.last.saturating_add(1));
        RowId(self.last)
    }
}
