//! Line commands typed at the prompt.

use party_quiz::{Event, OptionIndex};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  add <name>    join the game (setup)
  remove <n>    remove player n (setup)
  start         begin the quiz (setup)
  1-4 | a-d     answer the current question
  next          continue after the answer is shown
  reset         back to setup (results)
  help          show this list
  quit          leave";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Event(Event),
    Help,
    Quit,
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error("`{0}` is not a player number")]
    BadPlayerNumber(String),
}

impl Command {
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "add" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("add"));
                }
                Command::Event(Event::AddPlayer(rest.to_owned()))
            }
            "remove" | "rm" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("remove"));
                }
                let n: usize = rest
                    .parse()
                    .ok()
                    .filter(|n| *n >= 1)
                    .ok_or_else(|| CommandError::BadPlayerNumber(rest.to_owned()))?;
                Command::Event(Event::RemovePlayer(n - 1))
            }
            "start" => Command::Event(Event::StartGame),
            "next" | "n" => Command::Event(Event::Advance),
            "reset" => Command::Event(Event::Reset),
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => match parse_option(other) {
                Some(option) => Command::Event(Event::SubmitAnswer(Some(option))),
                None => return Err(CommandError::Unknown(other.to_owned())),
            },
        };
        Ok(Some(command))
    }
}

fn parse_option(word: &str) -> Option<OptionIndex> {
    let mut chars = word.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    let index = match c {
        '1'..='9' => c as usize - '1' as usize,
        'a'..='z' => c as usize - 'a' as usize,
        _ => return None,
    };
    OptionIndex::new(index)
}
