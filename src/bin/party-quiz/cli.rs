use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use party_quiz::QuizConfig;

/// Local-multiplayer trivia quiz for the terminal.
#[derive(Parser, Debug)]
#[command(name = "party-quiz", version, about)]
pub struct Args {
    /// TOML file with session settings.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Fix the question draw.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Seconds per turn.
    #[arg(long)]
    pub countdown: Option<u32>,

    /// Questions per game.
    #[arg(long)]
    pub questions: Option<usize>,

    /// Print one JSON snapshot per state change instead of text screens.
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Defaults, then the config file, then flags.
    pub fn resolve_config(&self) -> Result<QuizConfig> {
        let mut config = match &self.config {
            Some(path) => QuizConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => QuizConfig::default(),
        };

        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(secs) = self.countdown {
            config = config.with_countdown_secs(secs);
        }
        if let Some(count) = self.questions {
            config = config.with_questions_per_game(count);
        }
        config.validate().context("invalid settings")?;
        Ok(config)
    }
}
