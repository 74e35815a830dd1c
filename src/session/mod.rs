//! The session state machine.
//!
//! A `Session` moves through `setup -> playing -> results`, with
//! `results -> setup` as the only way back. All changes go through
//! [`Session::apply`]; derived values (progress, leaderboard, option marks)
//! are computed on read.

pub mod controller;
pub mod event;
pub mod phase;
pub mod view;

pub use controller::Session;
pub use event::{Event, Rejection, TimerToken, Transition};
pub use phase::{NextStep, Phase, PhaseKind, Turn, TurnState};
pub use view::{Leaderboard, OptionMark, QuestionView, SessionView, Standing};
