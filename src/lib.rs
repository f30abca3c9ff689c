#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]

pub mod cli;
pub mod commands;
pub mod drafts;
pub mod event;
pub mod feed;
pub mod helpers;
pub mod models;
pub mod output;
pub mod seed;
pub mod store;

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use cli::{Cli, Commands};
use event::Event;
use feed::Feed;
use output::Output;

fn open_script(script: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script: {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Apply every event in `reader` to `feed`, in order, reporting each outcome.
/// Returns the number of events applied.
pub fn play(reader: impl BufRead, feed: &mut Feed, output: &Output) -> Result<usize> {
    let mut applied = 0;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Failed to read script line {line_no}"))?;

        let Some(event) =
            Event::parse_line(&line).with_context(|| format!("Invalid event on line {line_no}"))?
        else {
            continue;
        };

        log::debug!("line {line_no}: {event:?}");
        let outcome = commands::play::apply(event, feed);
        output.outcome(&outcome)?;
        applied += 1;
    }

    log::info!("applied {applied} events");
    Ok(applied)
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Show { json } => {
            let feed = seed::load(cli.seed.as_deref())?;
            Output::new(json).feed(&commands::show::snapshot(&feed))
        }
        Commands::Play { script, json } => {
            let mut feed = seed::load(cli.seed.as_deref())?;
            let reader = open_script(script.as_deref())?;
            play(reader, &mut feed, &Output::new(json))?;
            Ok(())
        }
        Commands::Guide => {
            let text = commands::guide::run();
            Output::new(false).guide(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Cursor;

    #[rstest]
    fn play_applies_events_in_order() {
        let mut feed = seed::load(None).unwrap();
        let script = "like 1\n# a comment\n\ndraft 2 nice\nsubmit 2\nlike 1\nlike 2\n";

        let applied = play(Cursor::new(script), &mut feed, &Output::new(true)).unwrap();
        assert_eq!(applied, 5);

        let posts = feed.posts();
        assert_eq!(posts.get_post("1").unwrap().like_count(), 120);
        assert!(!posts.get_post("1").unwrap().liked());
        assert_eq!(posts.get_post("2").unwrap().like_count(), 86);
        assert_eq!(posts.get_post("2").unwrap().comments()[1].id(), "c2");
        assert_eq!(feed.drafts().draft("2"), "");
    }

    // Events before a malformed line have already been applied when the
    // run stops.
    #[rstest]
    fn play_stops_at_malformed_line() {
        let mut feed = seed::load(None).unwrap();
        let script = "like 1\nfollow 2\nlike 2\n";

        let err = play(Cursor::new(script), &mut feed, &Output::new(true)).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("line 2"));
        assert!(message.contains("Unknown event: follow"));

        assert!(feed.posts().get_post("1").unwrap().liked());
        assert!(!feed.posts().get_post("2").unwrap().liked());
    }

    #[rstest]
    fn open_script_missing_file_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(open_script(Some(&dir.path().join("missing.txt"))).is_err());
    }
}
