//! Session orchestration on top of the core board model.
//!
//! - [`GameSession`] - the round/session state machine
//! - [`SessionSeed`] - seed for deterministic level draws
//! - [`RoundRecord`] / [`RecordSink`] - per-round outcome records and the
//!   append-only persistence boundary
//! - [`scoring`] and [`difficulty`] - the pure scoring and adaptation rules
//!
//! # Game flow
//!
//! 1. Build a [`GameSession`] from a validated level catalog
//! 2. `start_session` loads round 1 at `medium` difficulty
//! 3. The caller feeds moves in; after each accepted move the session checks
//!    the win condition
//! 4. A won or skipped round yields a [`RoundRecord`], adapts the difficulty
//!    tier, and loads the next round
//! 5. After round 10 the session reports its cumulative score
//!
//! # Example
//!
//! ```
//! use restack_engine::{BoardShape, GameSession, LevelCatalog};
//!
//! let mut session =
//!     GameSession::new(LevelCatalog::standard(), BoardShape::STANDARD).unwrap();
//! session.start_session();
//!
//! assert_eq!(session.round(), 1);
//! assert!(session.state().is_round_in_progress());
//! ```

pub use self::{record::*, seed::*, session::*};

pub mod difficulty;
pub mod scoring;

mod record;
mod seed;
mod session;
