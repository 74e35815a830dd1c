//! Read-only snapshot for the rendering layer.
//!
//! Everything in a `SessionView` is derived from the session on demand;
//! nothing here is stored back.

use serde::Serialize;
use smallvec::SmallVec;

use super::phase::{NextStep, PhaseKind};
use crate::core::{OptionIndex, Player, PlayerColor, PlayerId, PlayerName, OPTION_COUNT};

/// Leaderboards never exceed the palette size.
pub type Leaderboard = SmallVec<[Standing; 8]>;

/// One leaderboard row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub player: PlayerId,
    pub name: PlayerName,
    pub score: u32,
    pub color: PlayerColor,
}

impl Standing {
    pub(crate) fn of(player: PlayerId, entry: &Player) -> Self {
        Self {
            player,
            name: entry.name.clone(),
            score: entry.score,
            color: entry.color,
        }
    }
}

/// How an option is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionMark {
    /// Neutral; every option before reveal.
    Plain,
    /// The correct option, after reveal.
    Correct,
    /// The selected option when it was wrong, after reveal.
    Wrong,
}

impl OptionMark {
    /// Marks for all options given the reveal outcome.
    ///
    /// `revealed` is `None` while the answer is still hidden.
    #[must_use]
    pub fn for_options(
        correct: OptionIndex,
        revealed: Option<Option<OptionIndex>>,
    ) -> [OptionMark; OPTION_COUNT] {
        let mut marks = [OptionMark::Plain; OPTION_COUNT];
        if let Some(selected) = revealed {
            if let Some(selected) = selected.filter(|s| *s != correct) {
                marks[selected.index()] = OptionMark::Wrong;
            }
            marks[correct.index()] = OptionMark::Correct;
        }
        marks
    }
}

/// The question on screen.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QuestionView {
    /// 1-based position in the session.
    pub number: usize,
    pub total: usize,
    pub prompt: &'static str,
    pub options: [&'static str; OPTION_COUNT],
    pub marks: [OptionMark; OPTION_COUNT],
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionView {
    pub phase: PhaseKind,
    pub roster: im::Vector<Player>,
    pub current_player: Option<PlayerId>,
    pub question: Option<QuestionView>,
    pub remaining_secs: Option<u32>,
    pub revealed: bool,
    pub selected: Option<OptionIndex>,
    pub progress: f64,
    pub next_step: Option<NextStep>,
    pub leaderboard: Leaderboard,
    pub can_start: bool,
}
