//! # party-quiz
//!
//! A local-multiplayer trivia quiz engine: players take turns answering
//! multiple-choice questions against a countdown, scores accumulate, and a
//! final leaderboard ranks them.
//!
//! ## Design Principles
//!
//! 1. **One State Machine**: Phase, turn, countdown, and reveal live in a
//!    single tagged `Phase`. Every change is one call to `Session::apply`.
//!
//! 2. **Refuse, Don't Fail**: Invalid requests come back as a `Rejection`
//!    and leave the session untouched. Nothing panics or surfaces to players.
//!
//! 3. **Derived On Read**: Progress, leaderboard, and option marks are
//!    computed from the session every time they are asked for.
//!
//! ## Modules
//!
//! - `core`: Players, questions, the question bank, RNG, configuration
//! - `session`: Phases, events, the controller, and render snapshots
//! - `timer`: Cancellable countdown task for the tokio runtime

pub mod core;
pub mod session;
pub mod timer;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, OptionIndex, Player, PlayerColor, PlayerId, PlayerName, Question, QuestionBank,
    QuestionId, QuizConfig, QuizRng, MAX_BANK, MIN_ROSTER, OPTION_COUNT,
};

pub use crate::session::{
    Event, Leaderboard, NextStep, OptionMark, Phase, PhaseKind, QuestionView, Rejection, Session,
    SessionView, Standing, TimerToken, Transition, Turn, TurnState,
};

pub use crate::timer::{Countdown, CountdownGuard};
