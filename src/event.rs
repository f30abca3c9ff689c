use std::str::FromStr;

use anyhow::{Result, anyhow, bail};
use strum::{AsRefStr, EnumString};

/// First word of an event line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Verb {
    Like,
    Draft,
    Submit,
    Comment,
    Show,
}

/// One user gesture against the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Like { post_id: String },
    Draft { post_id: String, text: String },
    Submit { post_id: String },
    Comment { post_id: String, text: String },
    Show,
}

impl Event {
    pub fn verb(&self) -> Verb {
        match self {
            Event::Like { .. } => Verb::Like,
            Event::Draft { .. } => Verb::Draft,
            Event::Submit { .. } => Verb::Submit,
            Event::Comment { .. } => Verb::Comment,
            Event::Show => Verb::Show,
        }
    }

    /// Parse a script line. Blank lines and `#` comments yield `None`.
    ///
    /// Text arguments are taken verbatim after the single separator that
    /// follows the post id, so `comment 1   ` carries the text `"  "`.
    pub fn parse_line(line: &str) -> Result<Option<Self>> {
        let line = line.trim_start();
        if line.trim_end().is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = split_word(line);
        let verb = Verb::from_str(word).map_err(|_| anyhow!("Unknown event: {word}"))?;

        if verb == Verb::Show {
            if !rest.trim().is_empty() {
                bail!("show takes no arguments");
            }
            return Ok(Some(Event::Show));
        }

        let (post_id, text) = split_word(rest.trim_start());
        if post_id.is_empty() {
            bail!("{} needs a post id", verb.as_ref());
        }
        let post_id = post_id.to_owned();

        let event = match verb {
            Verb::Like | Verb::Submit => {
                if !text.trim().is_empty() {
                    bail!("{} takes only a post id", verb.as_ref());
                }
                if verb == Verb::Like {
                    Event::Like { post_id }
                } else {
                    Event::Submit { post_id }
                }
            }
            Verb::Draft => Event::Draft {
                post_id,
                text: text.to_owned(),
            },
            Verb::Comment => Event::Comment {
                post_id,
                text: text.to_owned(),
            },
            Verb::Show => unreachable!("handled above"),
        };

        Ok(Some(event))
    }
}

/// Split off the first whitespace-delimited word, consuming exactly one
/// separator character.
fn split_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (input, ""),
    }
}
