//! Trivia questions.
//!
//! A `Question` is an immutable record: prompt, exactly four options, and the
//! 0-based index of the correct option. Questions are compiled into the
//! binary, so their text is `&'static str`.

use serde::{Deserialize, Serialize};

/// Number of options every question carries.
pub const OPTION_COUNT: usize = 4;

/// Index of a question within a `QuestionBank`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionId(pub u16);

impl QuestionId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Question({})", self.0)
    }
}

/// A chosen option, guaranteed to be in `0..OPTION_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct OptionIndex(u8);

impl OptionIndex {
    /// Create an option index, or `None` if out of range.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < OPTION_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// All option indices in display order.
    pub fn all() -> impl Iterator<Item = OptionIndex> {
        (0..OPTION_COUNT as u8).map(OptionIndex)
    }
}

impl TryFrom<u8> for OptionIndex {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value as usize).ok_or_else(|| format!("option index {} out of range", value))
    }
}

impl From<OptionIndex> for u8 {
    fn from(option: OptionIndex) -> Self {
        option.0
    }
}

/// An immutable trivia item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Question {
    pub prompt: &'static str,
    pub options: [&'static str; OPTION_COUNT],
    correct: OptionIndex,
}

impl Question {
    /// Create a question.
    ///
    /// Panics if `correct` is not a valid option index; questions are
    /// compiled-in, so this is a programming error.
    #[must_use]
    pub const fn new(
        prompt: &'static str,
        options: [&'static str; OPTION_COUNT],
        correct: usize,
    ) -> Self {
        assert!(correct < OPTION_COUNT, "Correct index must be within options");
        Self {
            prompt,
            options,
            correct: OptionIndex(correct as u8),
        }
    }

    /// The correct option.
    #[must_use]
    pub const fn correct(&self) -> OptionIndex {
        self.correct
    }

    /// Whether a submission is correct. `None` (no answer) never is.
    #[must_use]
    pub fn is_correct(&self, selected: Option<OptionIndex>) -> bool {
        selected == Some(self.correct)
    }

    /// Text of an option.
    #[must_use]
    pub fn option(&self, option: OptionIndex) -> &'static str {
        self.options[option.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question::new("What is 5 + 7?", ["10", "11", "12", "13"], 2)
    }

    #[test]
    fn test_option_index_bounds() {
        assert_eq!(OptionIndex::new(0).map(OptionIndex::index), Some(0));
        assert_eq!(OptionIndex::new(3).map(OptionIndex::index), Some(3));
        assert!(OptionIndex::new(4).is_none());
        assert_eq!(OptionIndex::all().count(), OPTION_COUNT);
    }

    #[test]
    fn test_is_correct() {
        let q = sample();
        assert!(q.is_correct(OptionIndex::new(2)));
        assert!(!q.is_correct(OptionIndex::new(1)));
        assert!(!q.is_correct(None));
        assert_eq!(q.option(q.correct()), "12");
    }

    #[test]
    #[should_panic(expected = "Correct index must be within options")]
    fn test_correct_out_of_range() {
        let _ = Question::new("?", ["a", "b", "c", "d"], 4);
    }

    #[test]
    fn test_option_index_serde() {
        let option = OptionIndex::new(3).unwrap();
        let json = serde_json::to_string(&option).unwrap();
        assert_eq!(json, "3");

        let back: OptionIndex = serde_json::from_str(&json).unwrap();
        assert_eq!(back, option);
        assert!(serde_json::from_str::<OptionIndex>("7").is_err());
    }

    #[test]
    fn test_question_id_display() {
        assert_eq!(format!("{}", QuestionId::new(4)), "Question(4)");
    }
}
