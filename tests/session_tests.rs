//! Integration tests for the session state machine.
//!
//! Scenario tests walk whole games; property tests check the turn order,
//! scoring, progress, and leaderboard rules over random rosters and answers.

use party_quiz::core::{PlayerColor, PlayerId, Question, QuestionBank, QuizConfig};
use party_quiz::session::{NextStep, PhaseKind, Rejection, Session, Transition};
use proptest::prelude::*;

fn session(config: QuizConfig, names: &[&str]) -> Session {
    let mut session = Session::new(config);
    for name in names {
        session.add_player(name).unwrap();
    }
    session
}

fn correct(session: &Session) -> usize {
    session.current_question().unwrap().correct().index()
}

fn wrong(session: &Session) -> usize {
    (correct(session) + 1) % 4
}

/// Let the clock run out on the current turn.
fn time_out(session: &mut Session) -> Transition {
    let token = session.timer_token().unwrap();
    loop {
        match session.tick(token).unwrap() {
            Transition::Ticked { .. } => continue,
            other => return other,
        }
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_two_player_tie_keeps_roster_order() {
    let config = QuizConfig::new().with_seed(11).with_questions_per_game(2);
    let mut s = session(config, &["Alice", "Bob"]);
    s.start_game().unwrap();
    assert_eq!(s.session_questions().count(), 2);

    // Q1: Alice right, Bob wrong.
    s.submit_answer(Some(correct(&s))).unwrap();
    s.advance().unwrap();
    s.submit_answer(Some(wrong(&s))).unwrap();
    assert_eq!(s.next_step(), Some(NextStep::NextQuestion));
    s.advance().unwrap();

    // Q2: Alice wrong, Bob right.
    s.submit_answer(Some(wrong(&s))).unwrap();
    s.advance().unwrap();
    s.submit_answer(Some(correct(&s))).unwrap();
    assert_eq!(s.next_step(), Some(NextStep::SeeResults));
    assert_eq!(s.advance(), Ok(Transition::GameOver));

    assert_eq!(s.phase_kind(), PhaseKind::Results);
    let board = s.leaderboard();
    let rows: Vec<_> = board.iter().map(|st| (st.name.as_str(), st.score)).collect();
    assert_eq!(rows, vec![("Alice", 1), ("Bob", 1)]);
    assert_eq!(s.winner().unwrap().name.as_str(), "Alice");
}

#[test]
fn test_timeout_is_a_null_submission() {
    let config = QuizConfig::new().with_seed(3).with_countdown_secs(15);
    let mut s = session(config, &["Alice", "Bob"]);
    s.start_game().unwrap();

    let revealed = time_out(&mut s);
    assert_eq!(
        revealed,
        Transition::AnswerRevealed {
            player: PlayerId::new(0),
            selected: None,
            correct: false,
            timed_out: true,
        }
    );
    assert!(s.is_revealed());
    assert_eq!(s.revealed_selection(), Some(None));
    assert_eq!(s.roster()[0].score, 0);

    // Nothing more may be submitted for this turn.
    assert_eq!(s.submit_answer(Some(correct(&s))), Err(Rejection::AlreadyRevealed));
    assert_eq!(s.roster()[0].score, 0);
}

#[test]
fn test_reset_clears_everything() {
    let config = QuizConfig::new().with_seed(8).with_questions_per_game(1);
    let mut s = session(config, &["Alice", "Bob", "Cara"]);
    s.start_game().unwrap();
    for _ in 0..3 {
        s.submit_answer(Some(correct(&s))).unwrap();
        s.advance().unwrap();
    }
    assert_eq!(s.phase_kind(), PhaseKind::Results);
    assert!(s.roster().iter().all(|p| p.score == 1));

    assert_eq!(s.reset_game(), Ok(Transition::SessionReset));
    assert_eq!(s.phase_kind(), PhaseKind::Setup);
    assert!(s.roster().is_empty());
    assert_eq!(s.session_questions().count(), 0);
    assert_eq!(s.progress(), 0.0);
    assert!(s.leaderboard().is_empty());
    assert_eq!(s.timer_token(), None);

    // A fresh roster starts from the first palette color again.
    s.add_player("Dee").unwrap();
    assert_eq!(s.roster()[0].color, PlayerColor::Red);
    assert_eq!(s.roster()[0].score, 0);
}

#[test]
fn test_results_reject_play_events() {
    let config = QuizConfig::new().with_seed(2).with_questions_per_game(1);
    let mut s = session(config, &["A", "B"]);
    s.start_game().unwrap();
    s.submit_answer(None).unwrap();
    s.advance().unwrap();
    s.submit_answer(None).unwrap();
    s.advance().unwrap();
    assert_eq!(s.phase_kind(), PhaseKind::Results);
    assert_eq!(s.progress(), 100.0);

    let wrong_phase = Rejection::WrongPhase {
        expected: PhaseKind::Playing,
        actual: PhaseKind::Results,
    };
    assert_eq!(s.submit_answer(Some(0)), Err(wrong_phase.clone()));
    assert_eq!(s.advance(), Err(wrong_phase));
    assert!(matches!(s.add_player("C"), Err(Rejection::WrongPhase { .. })));
}

#[test]
fn test_rejection_leaves_state_untouched() {
    let mut s = session(QuizConfig::new().with_seed(4), &["A", "B"]);
    s.start_game().unwrap();
    s.submit_answer(Some(correct(&s))).unwrap();

    let before = s.view();
    assert!(s.submit_answer(Some(wrong(&s))).is_err());
    assert!(s.add_player("C").is_err());
    assert!(s.start_game().is_err());
    assert!(s.reset_game().is_err());
    assert_eq!(s.view(), before);
}

#[test]
fn test_small_bank_plays_every_question_once() {
    static SMALL: [Question; 3] = [
        Question::new("1 + 1?", ["1", "2", "3", "4"], 1),
        Question::new("2 + 2?", ["2", "3", "4", "5"], 2),
        Question::new("3 + 3?", ["6", "7", "8", "9"], 0),
    ];
    let bank = QuestionBank::from_static(&SMALL);
    let mut s = Session::with_bank(QuizConfig::new().with_seed(4), bank);
    s.add_player("Alice").unwrap();
    s.add_player("Bob").unwrap();

    assert_eq!(
        s.start_game(),
        Ok(Transition::GameStarted {
            players: 2,
            questions: 3
        })
    );
    let mut prompts: Vec<_> = s.session_questions().map(|q| q.prompt).collect();
    prompts.sort_unstable();
    assert_eq!(prompts, vec!["1 + 1?", "2 + 2?", "3 + 3?"]);
    assert_eq!(s.question_number(), Some((1, 3)));

    let mut turns = 0;
    loop {
        s.submit_answer(Some(correct(&s))).unwrap();
        turns += 1;
        if s.advance().unwrap() == Transition::GameOver {
            break;
        }
    }
    assert_eq!(turns, 6);
    assert_eq!(s.phase_kind(), PhaseKind::Results);
    assert!(s.roster().iter().all(|p| p.score == 3));
}

#[test]
fn test_view_after_reveal() {
    let mut s = session(QuizConfig::new().with_seed(6), &["A", "B"]);
    s.start_game().unwrap();
    let pick = wrong(&s);
    s.submit_answer(Some(pick)).unwrap();

    let view = s.view();
    assert!(view.revealed);
    assert_eq!(view.remaining_secs, None);
    assert_eq!(view.selected.map(|o| o.index()), Some(pick));
    assert_eq!(view.next_step, Some(NextStep::NextPlayer));

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["phase"], "playing");
    assert_eq!(json["revealed"], true);
    assert_eq!(json["question"]["marks"][pick], "wrong");
    assert_eq!(json["next_step"], "next_player");
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_roster_cap_and_color_order(names in prop::collection::vec("[a-zA-Z]{1,20}", 0..12)) {
        let mut s = Session::new(QuizConfig::new().with_seed(1));
        for (i, name) in names.iter().enumerate() {
            let result = s.add_player(name);
            if i < 8 {
                prop_assert!(result.is_ok());
            } else {
                prop_assert_eq!(result, Err(Rejection::RosterFull { max: 8 }));
            }
        }

        let expected = names.len().min(8);
        prop_assert_eq!(s.roster().len(), expected);
        for (i, player) in s.roster().iter().enumerate() {
            prop_assert_eq!(player.color, PlayerColor::PALETTE[i]);
        }
    }

    #[test]
    fn prop_start_selects_distinct_questions(seed in any::<u64>(), players in 0usize..=8) {
        let mut s = Session::new(QuizConfig::new().with_seed(seed));
        for i in 0..players {
            s.add_player(&format!("P{}", i)).unwrap();
        }

        let result = s.start_game();
        if players < 2 {
            prop_assert!(result.is_err());
            prop_assert_eq!(s.phase_kind(), PhaseKind::Setup);
        } else {
            prop_assert!(result.is_ok());
            let mut prompts: Vec<_> = s.session_questions().map(|q| q.prompt).collect();
            prop_assert_eq!(prompts.len(), 8);
            prompts.sort_unstable();
            prompts.dedup();
            prop_assert_eq!(prompts.len(), 8);
        }
    }

    #[test]
    fn prop_full_game_rules(
        seed in any::<u64>(),
        players in 2usize..=5,
        questions in 1usize..=4,
        // 0-3: option index, 4: let the clock run out
        choices in prop::collection::vec(0u8..5, 20),
    ) {
        let config = QuizConfig::new()
            .with_seed(seed)
            .with_countdown_secs(2)
            .with_questions_per_game(questions);
        let mut s = Session::new(config);
        for i in 0..players {
            s.add_player(&format!("P{}", i)).unwrap();
        }
        s.start_game().unwrap();

        let total = players * questions;
        let mut expected = vec![0u32; players];
        let mut last_progress = 0.0;

        for turn_index in 0..total {
            let turn = s.current_turn().unwrap().clone();
            prop_assert_eq!(turn.question, turn_index / players);
            prop_assert_eq!(turn.player.index(), turn_index % players);

            let progress = s.progress();
            prop_assert!(progress >= last_progress);
            last_progress = progress;

            let choice = choices[turn_index];
            let answer = s.current_question().unwrap().correct().index();
            if choice == 4 {
                time_out(&mut s);
            } else {
                s.submit_answer(Some(choice as usize)).unwrap();
                if choice as usize == answer {
                    expected[turn.player.index()] += 1;
                }
            }

            // A second submission never scores again.
            prop_assert!(s.submit_answer(Some(answer)).is_err());
            let scores: Vec<u32> = s.roster().iter().map(|p| p.score).collect();
            prop_assert_eq!(&scores, &expected);

            if turn_index + 1 == total {
                prop_assert!((s.progress() - 100.0).abs() < 1e-9);
                prop_assert_eq!(s.next_step(), Some(NextStep::SeeResults));
            }
            s.advance().unwrap();
        }

        prop_assert_eq!(s.phase_kind(), PhaseKind::Results);

        let board = s.leaderboard();
        for pair in board.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].player < pair[1].player);
            }
        }
        let top = expected.iter().copied().max().unwrap_or(0);
        prop_assert_eq!(s.winner().map(|w| w.score), Some(top));
    }
}
