//! The question bank: a fixed, compiled-in catalog.

use super::question::{Question, QuestionId};
use super::rng::QuizRng;

static STANDARD: [Question; 18] = [
    Question::new(
        "Which famous play features a character named Romeo?",
        ["Hamlet", "Romeo and Juliet", "Macbeth", "Othello"],
        1,
    ),
    Question::new(
        "What is the largest mammal in the world?",
        ["Elephant", "Blue whale", "Giraffe", "Hippo"],
        1,
    ),
    Question::new(
        "What is the main ingredient in guacamole?",
        ["Tomato", "Onion", "Avocado", "Pepper"],
        2,
    ),
    Question::new(
        "Who is known as the \"Father of the United States\"?",
        ["Thomas Jefferson", "George Washington", "Benjamin Franklin", "John Adams"],
        1,
    ),
    Question::new(
        "Who painted the Mona Lisa?",
        ["Michelangelo", "Pablo Picasso", "Leonardo da Vinci", "Vincent van Gogh"],
        2,
    ),
    Question::new(
        "What is the name of the largest ocean on Earth?",
        ["Atlantic Ocean", "Pacific Ocean", "Indian Ocean", "Arctic Ocean"],
        1,
    ),
    Question::new(
        "What famous music group was John Lennon a part of?",
        ["The Rolling Stones", "The Beatles", "Led Zeppelin", "Queen"],
        1,
    ),
    Question::new(
        "In the story of Snow White, how many dwarfs are there?",
        ["Five", "Six", "Seven", "Eight"],
        2,
    ),
    Question::new(
        "Who is the king of the gods in Greek mythology?",
        ["Apollo", "Zeus", "Poseidon", "Hades"],
        1,
    ),
    Question::new(
        "What do bees collect to make honey?",
        ["Pollen", "Nectar", "Water", "Sap"],
        1,
    ),
    Question::new(
        "In what galaxy is our solar system located?",
        ["Andromeda", "Milky Way", "Orion", "Pegasus"],
        1,
    ),
    Question::new(
        "Which planet is known as the \"Blue Planet\"?",
        ["Mars", "Venus", "Neptune", "Earth"],
        3,
    ),
    Question::new(
        "What is the capital of France?",
        ["London", "Berlin", "Paris", "Madrid"],
        2,
    ),
    Question::new(
        "How many sides does a triangle have?",
        ["2", "3", "4", "5"],
        1,
    ),
    Question::new(
        "What is the fastest land animal?",
        ["Lion", "Cheetah", "Horse", "Leopard"],
        1,
    ),
    Question::new(
        "Which gas do plants absorb from the atmosphere?",
        ["Oxygen", "Nitrogen", "Carbon Dioxide", "Hydrogen"],
        2,
    ),
    Question::new("What is 5 + 7?", ["10", "11", "12", "13"], 2),
    Question::new(
        "Which season comes after winter?",
        ["Summer", "Spring", "Fall", "Autumn"],
        1,
    ),
];

/// Most questions a bank can address.
pub const MAX_BANK: usize = u16::MAX as usize + 1;

/// Read-only catalog of questions.
///
/// ```
/// use party_quiz::core::QuestionBank;
///
/// let bank = QuestionBank::standard();
/// assert_eq!(bank.len(), 18);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct QuestionBank {
    questions: &'static [Question],
}

impl QuestionBank {
    /// The built-in 18-question catalog.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            questions: &STANDARD,
        }
    }

    /// A bank over an arbitrary static catalog.
    ///
    /// # Panics
    ///
    /// If the catalog holds more than [`MAX_BANK`] questions, since ids are `u16`.
    #[must_use]
    pub const fn from_static(questions: &'static [Question]) -> Self {
        assert!(
            questions.len() <= MAX_BANK,
            "question catalog exceeds the u16 id space"
        );
        Self { questions }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Look up a question.
    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<&'static Question> {
        self.questions.get(id.index())
    }

    /// Draw `count` distinct questions uniformly at random.
    ///
    /// Returns `min(count, len)` ids with no duplicates.
    pub fn draw(&self, rng: &mut QuizRng, count: usize) -> Vec<QuestionId> {
        rng.sample_distinct(self.len(), count)
            .into_iter()
            .filter_map(|i| u16::try_from(i).ok().map(QuestionId::new))
            .collect()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}
