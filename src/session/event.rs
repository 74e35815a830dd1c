//! Events, transitions, and rejections.
//!
//! Every change to a session is an `Event` fed to `Session::apply`. An
//! accepted event yields a `Transition` describing what happened; a refused
//! one yields a `Rejection` and leaves the session untouched. Front-ends are
//! free to ignore rejections.

use thiserror::Error;

use super::phase::PhaseKind;
use crate::core::{OptionIndex, PlayerColor, PlayerId, PlayerName};

/// Ticket for one countdown.
///
/// Only the token handed out for the current awaiting turn is honored; any
/// older token is stale once the session has moved on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken {
    pub(crate) epoch: u64,
}

impl TimerToken {
    #[must_use]
    pub fn epoch(self) -> u64 {
        self.epoch
    }
}

/// Input to the session state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    AddPlayer(String),
    RemovePlayer(usize),
    StartGame,
    /// `None` means no answer (what a timeout submits).
    SubmitAnswer(Option<OptionIndex>),
    Tick(TimerToken),
    Advance,
    Reset,
}

/// What an accepted event did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    PlayerAdded {
        player: PlayerId,
        color: PlayerColor,
    },
    PlayerRemoved {
        name: PlayerName,
    },
    GameStarted {
        players: usize,
        questions: usize,
    },
    Ticked {
        remaining: u32,
    },
    AnswerRevealed {
        player: PlayerId,
        selected: Option<OptionIndex>,
        correct: bool,
        timed_out: bool,
    },
    NextPlayer {
        player: PlayerId,
    },
    NextQuestion {
        question: usize,
    },
    GameOver,
    SessionReset,
}

/// Why an event was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("not allowed during {actual} (requires {expected})")]
    WrongPhase {
        expected: PhaseKind,
        actual: PhaseKind,
    },

    #[error("player name is empty")]
    EmptyName,

    #[error("player name is {len} characters (max {max})")]
    NameTooLong { len: usize, max: usize },

    #[error("roster is full ({max} players)")]
    RosterFull { max: usize },

    #[error("no player at position {0}")]
    NoSuchPlayer(usize),

    #[error("need at least {need} players, have {have}")]
    NotEnoughPlayers { have: usize, need: usize },

    #[error("no questions to draw")]
    EmptyBank,

    #[error("answer already revealed")]
    AlreadyRevealed,

    #[error("answer not revealed yet")]
    NotRevealed,

    #[error("option {0} out of range")]
    OptionOutOfRange(usize),

    #[error("stale timer tick")]
    StaleTimer,
}
