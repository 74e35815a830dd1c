//! party-quiz - terminal front-end.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use party_quiz::{Countdown, Event, Session};

mod cli;
mod input;
mod render;

use cli::Args;
use input::{Command, HELP};
use render::Renderer;

const TICK_PERIOD: Duration = Duration::from_secs(1);

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they don't interleave with the screen.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "party_quiz=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = args.resolve_config()?;
    let mut session = Session::try_new(config).context("invalid settings")?;
    tracing::info!(config = ?session.config(), "starting party-quiz");

    let renderer = Renderer::new(args.json);
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();

    let (tick_tx, mut tick_rx) = mpsc::channel(8);
    let mut countdown = Countdown::new(tick_tx, TICK_PERIOD);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if !args.json {
        renderer.notice(&mut stdout, &mut stderr, HELP)?;
    }
    renderer.render(&mut stdout, &session, None)?;

    loop {
        let event = tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else {
                    break;
                };
                match Command::parse(&line) {
                    Ok(Some(Command::Event(event))) => event,
                    Ok(Some(Command::Help)) => {
                        renderer.notice(&mut stdout, &mut stderr, HELP)?;
                        continue;
                    }
                    Ok(Some(Command::Quit)) => break,
                    Ok(None) => continue,
                    Err(err) => {
                        renderer.notice(&mut stdout, &mut stderr, &format!("  {}", err))?;
                        continue;
                    }
                }
            }
            Some(token) = tick_rx.recv() => Event::Tick(token),
        };

        // Rejected events change nothing, so there is nothing to redraw.
        if let Ok(transition) = session.apply(event) {
            countdown.sync(session.timer_token());
            renderer
                .render(&mut stdout, &session, Some(&transition))
                .context("writing to stdout")?;
        }
    }

    countdown.sync(None);
    tracing::info!("bye");
    Ok(())
}
