use std::io::{self, Write};

use party_quiz::{OptionIndex, OptionMark, PhaseKind, Session, SessionView, Transition};

const LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Writes frames either as text screens or JSON lines.
pub struct Renderer {
    json: bool,
}

impl Renderer {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Print a help or error line. JSON mode keeps stdout for snapshots only.
    pub fn notice(
        &self,
        out: &mut impl Write,
        err: &mut impl Write,
        message: &str,
    ) -> io::Result<()> {
        let target: &mut dyn Write = if self.json { err } else { out };
        writeln!(target, "{}", message)?;
        target.flush()
    }

    /// Draw after an accepted transition. `None` draws the full screen.
    pub fn render(
        &self,
        out: &mut impl Write,
        session: &Session,
        transition: Option<&Transition>,
    ) -> io::Result<()> {
        let view = session.view();
        if self.json {
            serde_json::to_writer(&mut *out, &view)?;
            writeln!(out)?;
            return out.flush();
        }

        if let Some(Transition::Ticked { remaining }) = transition {
            writeln!(out, "  time: {}s", remaining)?;
            return out.flush();
        }
        if let Some(Transition::AnswerRevealed { timed_out: true, .. }) = transition {
            writeln!(out, "  time's up!")?;
        }

        match view.phase {
            PhaseKind::Setup => setup_screen(out, &view)?,
            PhaseKind::Playing => playing_screen(out, session, &view)?,
            PhaseKind::Results => results_screen(out, &view)?,
        }
        out.flush()
    }
}

fn setup_screen(out: &mut impl Write, view: &SessionView) -> io::Result<()> {
    writeln!(out, "\n=== Quiz Battle: add 2-8 players ===")?;
    if view.roster.is_empty() {
        writeln!(out, "  (no players yet, type `add <name>`)")?;
    }
    for (i, player) in view.roster.iter().enumerate() {
        writeln!(out, "  {}. {} [{}]", i + 1, player.name, player.color.name())?;
    }
    if view.can_start {
        writeln!(out, "  type `start` to begin")?;
    }
    Ok(())
}

fn playing_screen(out: &mut impl Write, session: &Session, view: &SessionView) -> io::Result<()> {
    let Some(question) = &view.question else {
        return Ok(());
    };
    let player = session.current_player();

    writeln!(
        out,
        "\n--- Question {} of {} ({:.0}%) ---",
        question.number, question.total, view.progress
    )?;
    if let Some(player) = player {
        writeln!(out, "{}'s turn [{}]", player.name, player.color.name())?;
    }
    writeln!(out, "{}", question.prompt)?;
    for option in OptionIndex::all() {
        let i = option.index();
        let mark = match question.marks[i] {
            OptionMark::Plain => "  ",
            OptionMark::Correct => "✔ ",
            OptionMark::Wrong => "✘ ",
        };
        writeln!(out, "  {}{}) {}", mark, LETTERS[i], question.options[i])?;
    }
    if view.revealed {
        if let Some(asked) = session.current_question() {
            let answer = asked.correct();
            writeln!(out, "  answer: {}) {}", LETTERS[answer.index()], asked.option(answer))?;
        }
    }

    match (view.remaining_secs, view.next_step) {
        (Some(remaining), _) => writeln!(out, "  time: {}s", remaining)?,
        (None, Some(step)) => writeln!(out, "  type `next` ({})", step.label())?,
        (None, None) => {}
    }

    write!(out, "  scores:")?;
    for player in view.roster.iter() {
        write!(out, " {}={}", player.name, player.score)?;
    }
    writeln!(out)
}

fn results_screen(out: &mut impl Write, view: &SessionView) -> io::Result<()> {
    writeln!(out, "\n=== Final Results ===")?;
    if let Some(winner) = view.leaderboard.first() {
        writeln!(out, "Winner: {} with {} points", winner.name, winner.score)?;
    }
    for (rank, standing) in view.leaderboard.iter().enumerate() {
        writeln!(out, "  #{} {} - {}", rank + 1, standing.name, standing.score)?;
    }
    writeln!(out, "  type `reset` for a new game")
}

#[cfg(test)]
mod tests {
    use super::*;
    use party_quiz::QuizConfig;

    fn render(renderer: &Renderer, session: &Session, transition: Option<&Transition>) -> String {
        let mut buf = Vec::new();
        renderer.render(&mut buf, session, transition).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_setup_text() {
        let mut session = Session::new(QuizConfig::new().with_seed(1));
        session.add_player("Alice").unwrap();
        session.add_player("Bob").unwrap();

        let text = render(&Renderer::new(false), &session, None);
        assert!(text.contains("1. Alice [red]"));
        assert!(text.contains("2. Bob [blue]"));
        assert!(text.contains("start"));
    }

    #[test]
    fn test_playing_text() {
        let mut session = Session::new(QuizConfig::new().with_seed(1));
        session.add_player("Alice").unwrap();
        session.add_player("Bob").unwrap();
        session.start_game().unwrap();

        let text = render(&Renderer::new(false), &session, None);
        assert!(text.contains("Question 1 of 8"));
        assert!(text.contains("Alice's turn"));
        assert!(text.contains("time: 15s"));
    }

    #[test]
    fn test_reveal_shows_answer() {
        let mut session = Session::new(QuizConfig::new().with_seed(1));
        session.add_player("Alice").unwrap();
        session.add_player("Bob").unwrap();
        session.start_game().unwrap();
        let question = session.current_question().unwrap();

        let before = render(&Renderer::new(false), &session, None);
        assert!(!before.contains("answer:"));

        let transition = session.submit_answer(None).unwrap();
        let text = render(&Renderer::new(false), &session, Some(&transition));
        let answer = question.correct();
        let expected = format!("answer: {}) {}", LETTERS[answer.index()], question.option(answer));
        assert!(text.contains(&expected));
        assert!(text.contains("next"));
    }

    #[test]
    fn test_notice_stays_off_json_stream() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        Renderer::new(true).notice(&mut out, &mut err, "  unknown command `x`").unwrap();
        assert!(out.is_empty());
        assert_eq!(String::from_utf8(err).unwrap(), "  unknown command `x`\n");

        let (mut out, mut err) = (Vec::new(), Vec::new());
        Renderer::new(false).notice(&mut out, &mut err, "help").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "help\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_json_line() {
        let session = Session::new(QuizConfig::new().with_seed(1));
        let text = render(&Renderer::new(true), &session, None);

        let value: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(value["phase"], "setup");
    }
}
