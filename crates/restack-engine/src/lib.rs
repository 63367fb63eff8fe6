pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Reason a proposed block relocation was rejected.
///
/// Rejections are routine gameplay outcomes, not fatal conditions: the board
/// is left untouched and the caller is expected to simply ignore the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    #[display("source and destination are the same column")]
    SameColumn,
    #[display("column index out of range")]
    ColumnOutOfRange,
    #[display("source column is empty")]
    EmptySource,
    #[display("block is not the exposed top block of the source column")]
    NotTopmost,
    #[display("destination column is already at capacity")]
    DestinationFull,
    #[display("no round is in progress")]
    NoRoundInProgress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no round is in progress to skip")]
pub struct SkipError;

/// The level catalog has no levels for a difficulty tier.
///
/// This is a configuration error, not a gameplay error: a session cannot
/// start a round on an empty tier, so it is surfaced at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("level catalog has no {tier} levels")]
pub struct EmptyTierError {
    pub tier: crate::core::Tier,
}

/// A round-record sink failed to persist a record.
///
/// Sink failures never roll back session state; the record has already been
/// scored and the session advanced by the time a sink sees it.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("failed to append round record")]
pub struct SinkError {
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl SinkError {
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self {
            source: source.into(),
        }
    }
}
