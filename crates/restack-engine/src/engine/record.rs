use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{SinkError, core::Tier};

/// Immutable summary of one finished round, emitted once for external storage.
///
/// `time_taken_secs` is `None` for skipped rounds (serialized as JSON
/// `null`); skipped rounds always carry a score of zero. Move counts and the
/// level's optimal are recorded as-is either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub timestamp: DateTime<Utc>,
    pub level_id: String,
    pub difficulty: Tier,
    pub time_taken_secs: Option<f64>,
    pub moves_taken: u32,
    pub optimal_moves: u32,
    pub score: u32,
}

impl RoundRecord {
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.time_taken_secs.is_none()
    }
}

/// Append-only destination for round records.
///
/// Sinks persist records and report success or failure; they return no data
/// back into the engine. By the time a sink sees a record, scoring and
/// difficulty adaptation have already completed in memory, so a failed
/// append never rolls back session state.
pub trait RecordSink {
    fn append(&mut self, record: &RoundRecord) -> Result<(), SinkError>;
}

/// In-memory sink, mainly for tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Vec<RoundRecord>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn records(&self) -> &[RoundRecord] {
        &self.records
    }
}

impl RecordSink for MemorySink {
    fn append(&mut self, record: &RoundRecord) -> Result<(), SinkError> {
        self.records.push(record.clone());
        Ok(())
    }
}
