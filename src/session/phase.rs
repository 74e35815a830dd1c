//! Tagged session phases.
//!
//! The session is always in exactly one `Phase`. While playing, the active
//! (question, player) pair and its answer state live together in a `Turn`,
//! so the countdown and reveal flags can never disagree.

use serde::{Deserialize, Serialize};

use crate::core::{OptionIndex, PlayerId};

/// Top-level stage of a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Roster is being assembled.
    Setup,
    /// A turn is in progress.
    Playing(Turn),
    /// All turns are done; the leaderboard is final.
    Results,
}

impl Phase {
    #[must_use]
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::Setup => PhaseKind::Setup,
            Phase::Playing(_) => PhaseKind::Playing,
            Phase::Results => PhaseKind::Results,
        }
    }
}

/// Phase without payload, for display and rejection reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseKind {
    Setup,
    Playing,
    Results,
}

impl std::fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            PhaseKind::Setup => "setup",
            PhaseKind::Playing => "playing",
            PhaseKind::Results => "results",
        })
    }
}

/// The active (question, player) pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    /// Index into the session's selected questions.
    pub question: usize,
    /// Whose turn it is.
    pub player: PlayerId,
    pub state: TurnState,
}

impl Turn {
    /// First turn of a question: player 0, full clock.
    #[must_use]
    pub fn start(question: usize, player: PlayerId, countdown_secs: u32) -> Self {
        Self {
            question,
            player,
            state: TurnState::AwaitingAnswer {
                remaining: countdown_secs,
            },
        }
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        matches!(self.state, TurnState::Revealed { .. })
    }
}

/// Answer state of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnState {
    /// Clock running, no answer yet.
    AwaitingAnswer { remaining: u32 },
    /// Answer locked in. `selected` is `None` on timeout.
    Revealed {
        selected: Option<OptionIndex>,
        correct: bool,
    },
}

/// What `advance` will do next, i.e. the label of the continue control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextStep {
    NextPlayer,
    NextQuestion,
    SeeResults,
}

impl NextStep {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            NextStep::NextPlayer => "Next Player",
            NextStep::NextQuestion => "Next Question",
            NextStep::SeeResults => "See Results",
        }
    }
}
