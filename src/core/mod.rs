//! Core value types: players, questions, the bank, RNG, configuration.
//!
//! Nothing here knows about phases or turns; the `session` module composes
//! these into the game state machine.

pub mod bank;
pub mod config;
pub mod player;
pub mod question;
pub mod rng;

pub use bank::{QuestionBank, MAX_BANK};
pub use config::{ConfigError, QuizConfig, MIN_ROSTER};
pub use player::{Player, PlayerColor, PlayerId, PlayerName};
pub use question::{OptionIndex, Question, QuestionId, OPTION_COUNT};
pub use rng::QuizRng;
