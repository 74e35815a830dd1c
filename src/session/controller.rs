//! The game controller.
//!
//! `Session` owns all mutable game state and exposes one transition function,
//! [`Session::apply`]. Each event is validated in full before anything is
//! mutated, so a rejected event leaves the session unchanged.
//!
//! ## Turn order
//!
//! Every player answers a question before the next question is shown:
//!
//! ```text
//! (Q0, P0) -> (Q0, P1) -> ... -> (Q0, Pn) -> (Q1, P0) -> ... -> Results
//! ```
//!
//! ## Countdown
//!
//! `epoch` is bumped whenever a turn enters or leaves the awaiting state.
//! [`Session::timer_token`] stamps the current epoch into a [`TimerToken`];
//! ticks carrying any other epoch are refused, so a timer scheduled for an
//! earlier turn can never touch a later one.

use im::Vector;
use tracing::{debug, info, trace};

use super::event::{Event, Rejection, TimerToken, Transition};
use super::phase::{NextStep, Phase, PhaseKind, Turn, TurnState};
use super::view::{Leaderboard, OptionMark, QuestionView, SessionView, Standing};
use crate::core::{
    ConfigError, OptionIndex, Player, PlayerColor, PlayerId, PlayerName, Question, QuestionBank,
    QuestionId, QuizConfig, QuizRng, MIN_ROSTER, OPTION_COUNT,
};

/// A quiz session: roster, selected questions, and the phase machine.
///
/// ## Example
///
/// ```
/// use party_quiz::session::{PhaseKind, Session};
/// use party_quiz::core::QuizConfig;
///
/// let mut session = Session::new(QuizConfig::new().with_seed(1));
/// session.add_player("Alice").unwrap();
/// session.add_player("Bob").unwrap();
/// session.start_game().unwrap();
///
/// assert_eq!(session.phase_kind(), PhaseKind::Playing);
/// assert_eq!(session.session_questions().count(), 8);
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    config: QuizConfig,
    bank: QuestionBank,
    rng: QuizRng,
    roster: Vector<Player>,
    questions: Vector<QuestionId>,
    phase: Phase,
    epoch: u64,
}

impl Session {
    /// Create a session over the standard question bank.
    #[must_use]
    pub fn new(config: QuizConfig) -> Self {
        Self::with_bank(config, QuestionBank::standard())
    }

    /// Validate `config`, then create a session over the standard bank.
    pub fn try_new(config: QuizConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Create a session over a specific bank.
    #[must_use]
    pub fn with_bank(config: QuizConfig, bank: QuestionBank) -> Self {
        let rng = QuizRng::from_seed_or_entropy(config.seed);
        debug!(seed = rng.seed(), bank = bank.len(), "session created");
        Self {
            config,
            bank,
            rng,
            roster: Vector::new(),
            questions: Vector::new(),
            phase: Phase::Setup,
            epoch: 0,
        }
    }

    // === Transitions ===

    /// Apply one event atomically.
    pub fn apply(&mut self, event: Event) -> Result<Transition, Rejection> {
        let result = match event {
            Event::AddPlayer(name) => self.on_add_player(&name),
            Event::RemovePlayer(index) => self.on_remove_player(index),
            Event::StartGame => self.on_start_game(),
            Event::SubmitAnswer(selected) => self.on_submit(selected, false),
            Event::Tick(token) => self.on_tick(token),
            Event::Advance => self.on_advance(),
            Event::Reset => self.on_reset(),
        };

        match &result {
            Ok(Transition::Ticked { remaining }) => trace!(remaining, "tick"),
            Ok(transition) => debug!(?transition, "transition"),
            Err(rejection) => debug!(%rejection, "event rejected"),
        }
        result
    }

    /// Add a player to the roster (setup only).
    pub fn add_player(&mut self, name: &str) -> Result<Transition, Rejection> {
        self.apply(Event::AddPlayer(name.to_owned()))
    }

    /// Remove the player at `index` (setup only).
    pub fn remove_player(&mut self, index: usize) -> Result<Transition, Rejection> {
        self.apply(Event::RemovePlayer(index))
    }

    /// Draw questions and begin the first turn.
    pub fn start_game(&mut self) -> Result<Transition, Rejection> {
        self.apply(Event::StartGame)
    }

    /// Submit an answer for the current turn. `None` means no answer.
    pub fn submit_answer(&mut self, option: Option<usize>) -> Result<Transition, Rejection> {
        let selected = match option {
            Some(i) => Some(OptionIndex::new(i).ok_or(Rejection::OptionOutOfRange(i))?),
            None => None,
        };
        self.apply(Event::SubmitAnswer(selected))
    }

    /// Deliver one countdown second.
    pub fn tick(&mut self, token: TimerToken) -> Result<Transition, Rejection> {
        self.apply(Event::Tick(token))
    }

    /// Move past a revealed answer.
    pub fn advance(&mut self) -> Result<Transition, Rejection> {
        self.apply(Event::Advance)
    }

    /// Clear everything and return to setup (results only).
    pub fn reset_game(&mut self) -> Result<Transition, Rejection> {
        self.apply(Event::Reset)
    }

    fn on_add_player(&mut self, raw: &str) -> Result<Transition, Rejection> {
        self.expect_phase(PhaseKind::Setup)?;
        let name = PlayerName::parse(raw, self.config.max_name_len)?;

        let max = self.config.max_players;
        if self.roster.len() >= max {
            return Err(Rejection::RosterFull { max });
        }
        let taken: Vec<PlayerColor> = self.roster.iter().map(|p| p.color).collect();
        let color = PlayerColor::first_unused(&taken).ok_or(Rejection::RosterFull { max })?;

        let player = PlayerId::new(self.roster.len() as u8);
        self.roster.push_back(Player::new(name, color));
        Ok(Transition::PlayerAdded { player, color })
    }

    fn on_remove_player(&mut self, index: usize) -> Result<Transition, Rejection> {
        self.expect_phase(PhaseKind::Setup)?;
        if index >= self.roster.len() {
            return Err(Rejection::NoSuchPlayer(index));
        }
        let removed = self.roster.remove(index);
        Ok(Transition::PlayerRemoved { name: removed.name })
    }

    fn on_start_game(&mut self) -> Result<Transition, Rejection> {
        self.expect_phase(PhaseKind::Setup)?;
        let have = self.roster.len();
        let need = self.players_needed();
        if have < need {
            return Err(Rejection::NotEnoughPlayers { have, need });
        }
        let count = self.draw_count();
        if count == 0 {
            return Err(Rejection::EmptyBank);
        }

        self.questions = self.bank.draw(&mut self.rng, count).into_iter().collect();
        for player in self.roster.iter_mut() {
            player.score = 0;
        }
        self.begin_turn(0, PlayerId::new(0));

        info!(players = have, questions = self.questions.len(), "game started");
        Ok(Transition::GameStarted {
            players: have,
            questions: self.questions.len(),
        })
    }

    fn on_submit(
        &mut self,
        selected: Option<OptionIndex>,
        timed_out: bool,
    ) -> Result<Transition, Rejection> {
        let turn = self.awaiting_turn()?;
        let (question, player) = (turn.question, turn.player);

        let correct = self
            .question_at(question)
            .is_some_and(|q| q.is_correct(selected));
        if correct {
            if let Some(entry) = self.roster.get_mut(player.index()) {
                entry.score += 1;
            }
        }

        self.phase = Phase::Playing(Turn {
            question,
            player,
            state: TurnState::Revealed { selected, correct },
        });
        self.epoch += 1;

        Ok(Transition::AnswerRevealed {
            player,
            selected,
            correct,
            timed_out,
        })
    }

    fn on_tick(&mut self, token: TimerToken) -> Result<Transition, Rejection> {
        if token.epoch != self.epoch {
            return Err(Rejection::StaleTimer);
        }
        let remaining = match self.awaiting_turn()?.state {
            TurnState::AwaitingAnswer { remaining } => remaining.saturating_sub(1),
            TurnState::Revealed { .. } => return Err(Rejection::AlreadyRevealed),
        };

        if remaining == 0 {
            return self.on_submit(None, true);
        }
        if let Phase::Playing(turn) = &mut self.phase {
            turn.state = TurnState::AwaitingAnswer { remaining };
        }
        Ok(Transition::Ticked { remaining })
    }

    fn on_advance(&mut self) -> Result<Transition, Rejection> {
        let turn = self.playing_turn()?;
        if !turn.is_revealed() {
            return Err(Rejection::NotRevealed);
        }
        let (question, player) = (turn.question, turn.player);

        let transition = if player.index() + 1 < self.roster.len() {
            let next = PlayerId::new(player.0 + 1);
            self.begin_turn(question, next);
            Transition::NextPlayer { player: next }
        } else if question + 1 < self.questions.len() {
            self.begin_turn(question + 1, PlayerId::new(0));
            Transition::NextQuestion {
                question: question + 1,
            }
        } else {
            self.phase = Phase::Results;
            self.epoch += 1;
            if let Some(winner) = self.leaderboard().first() {
                info!(winner = %winner.name, score = winner.score, "game over");
            }
            Transition::GameOver
        };
        Ok(transition)
    }

    fn on_reset(&mut self) -> Result<Transition, Rejection> {
        self.expect_phase(PhaseKind::Results)?;
        self.roster.clear();
        self.questions.clear();
        self.phase = Phase::Setup;
        self.epoch += 1;
        info!("session reset");
        Ok(Transition::SessionReset)
    }

    fn begin_turn(&mut self, question: usize, player: PlayerId) {
        self.phase = Phase::Playing(Turn::start(question, player, self.config.countdown_secs));
        self.epoch += 1;
    }

    fn expect_phase(&self, expected: PhaseKind) -> Result<(), Rejection> {
        let actual = self.phase.kind();
        if actual == expected {
            Ok(())
        } else {
            Err(Rejection::WrongPhase { expected, actual })
        }
    }

    fn playing_turn(&self) -> Result<&Turn, Rejection> {
        match &self.phase {
            Phase::Playing(turn) => Ok(turn),
            other => Err(Rejection::WrongPhase {
                expected: PhaseKind::Playing,
                actual: other.kind(),
            }),
        }
    }

    fn awaiting_turn(&self) -> Result<&Turn, Rejection> {
        let turn = self.playing_turn()?;
        if turn.is_revealed() {
            return Err(Rejection::AlreadyRevealed);
        }
        Ok(turn)
    }

    fn players_needed(&self) -> usize {
        self.config.min_players.max(MIN_ROSTER)
    }

    fn draw_count(&self) -> usize {
        self.config.questions_per_game.min(self.bank.len())
    }

    fn question_at(&self, index: usize) -> Option<&'static Question> {
        self.questions.get(index).and_then(|id| self.bank.get(*id))
    }

    // === Reads ===

    #[must_use]
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn phase_kind(&self) -> PhaseKind {
        self.phase.kind()
    }

    /// Players in join order.
    #[must_use]
    pub fn roster(&self) -> &Vector<Player> {
        &self.roster
    }

    /// The questions selected for this game, in play order.
    pub fn session_questions(&self) -> impl Iterator<Item = &'static Question> + '_ {
        self.questions.iter().filter_map(|id| self.bank.get(*id))
    }

    /// The active turn, while playing.
    #[must_use]
    pub fn current_turn(&self) -> Option<&Turn> {
        match &self.phase {
            Phase::Playing(turn) => Some(turn),
            _ => None,
        }
    }

    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.current_turn()
            .and_then(|turn| self.roster.get(turn.player.index()))
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&'static Question> {
        self.current_turn()
            .and_then(|turn| self.question_at(turn.question))
    }

    /// Seconds left on the clock, while awaiting an answer.
    #[must_use]
    pub fn remaining_secs(&self) -> Option<u32> {
        match self.current_turn()?.state {
            TurnState::AwaitingAnswer { remaining } => Some(remaining),
            TurnState::Revealed { .. } => None,
        }
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.current_turn().is_some_and(Turn::is_revealed)
    }

    /// The revealed submission: `Some(None)` for a timeout, `None` if hidden.
    #[must_use]
    pub fn revealed_selection(&self) -> Option<Option<OptionIndex>> {
        match self.current_turn()?.state {
            TurnState::Revealed { selected, .. } => Some(selected),
            TurnState::AwaitingAnswer { .. } => None,
        }
    }

    /// Token for the running countdown, if one should be running.
    #[must_use]
    pub fn timer_token(&self) -> Option<TimerToken> {
        match self.current_turn()?.state {
            TurnState::AwaitingAnswer { .. } => Some(TimerToken { epoch: self.epoch }),
            TurnState::Revealed { .. } => None,
        }
    }

    /// Percentage of turns reached, counting the current one.
    ///
    /// 0 during setup, 100 in results.
    #[must_use]
    pub fn progress(&self) -> f64 {
        match &self.phase {
            Phase::Setup => 0.0,
            Phase::Results => 100.0,
            Phase::Playing(turn) => {
                let players = self.roster.len();
                let total = players * self.questions.len();
                if total == 0 {
                    return 0.0;
                }
                let completed = turn.question * players + turn.player.index() + 1;
                completed as f64 / total as f64 * 100.0
            }
        }
    }

    /// 1-based question number and total, while playing.
    #[must_use]
    pub fn question_number(&self) -> Option<(usize, usize)> {
        self.current_turn()
            .map(|turn| (turn.question + 1, self.questions.len()))
    }

    /// What `advance` will do, once the answer is revealed.
    #[must_use]
    pub fn next_step(&self) -> Option<NextStep> {
        let turn = self.current_turn().filter(|turn| turn.is_revealed())?;
        Some(if turn.player.index() + 1 < self.roster.len() {
            NextStep::NextPlayer
        } else if turn.question + 1 < self.questions.len() {
            NextStep::NextQuestion
        } else {
            NextStep::SeeResults
        })
    }

    /// Display marks for the current question's options.
    #[must_use]
    pub fn option_marks(&self) -> Option<[OptionMark; OPTION_COUNT]> {
        let question = self.current_question()?;
        Some(OptionMark::for_options(
            question.correct(),
            self.revealed_selection(),
        ))
    }

    /// Players by score, highest first. Ties keep join order.
    #[must_use]
    pub fn leaderboard(&self) -> Leaderboard {
        let mut standings: Leaderboard = PlayerId::all(self.roster.len())
            .zip(self.roster.iter())
            .map(|(id, p)| Standing::of(id, p))
            .collect();
        standings.sort_by(|a, b| b.score.cmp(&a.score));
        standings
    }

    /// The top of the final leaderboard.
    #[must_use]
    pub fn winner(&self) -> Option<Standing> {
        if self.phase.kind() != PhaseKind::Results {
            return None;
        }
        self.leaderboard().into_iter().next()
    }

    /// Whether `add_player(name)` would be accepted.
    #[must_use]
    pub fn can_add_player(&self, name: &str) -> bool {
        self.phase.kind() == PhaseKind::Setup
            && self.roster.len() < self.config.max_players
            && PlayerName::parse(name, self.config.max_name_len).is_ok()
    }

    /// Whether `start_game` would be accepted.
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.phase.kind() == PhaseKind::Setup
            && self.roster.len() >= self.players_needed()
            && self.draw_count() > 0
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> SessionView {
        let question = self.current_question().and_then(|q| {
            let (number, total) = self.question_number()?;
            Some(QuestionView {
                number,
                total,
                prompt: q.prompt,
                options: q.options,
                marks: self.option_marks()?,
            })
        });

        SessionView {
            phase: self.phase.kind(),
            roster: self.roster.clone(),
            current_player: self.current_turn().map(|turn| turn.player),
            question,
            remaining_secs: self.remaining_secs(),
            revealed: self.is_revealed(),
            selected: self.revealed_selection().flatten(),
            progress: self.progress(),
            next_step: self.next_step(),
            leaderboard: self.leaderboard(),
            can_start: self.can_start(),
        }
    }
}
