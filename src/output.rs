use anyhow::Result;
use console::{Term, style};
use serde::Serialize;

use crate::commands::play::{IgnoreReason, Outcome};
use crate::commands::show::FeedSnapshot;
use crate::models::{Comment, Post};

const LOGO: &str = "Instagram";
const INDENT: &str = "  ";

pub struct Output {
    term: Term,
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self {
            term: Term::stdout(),
            json,
        }
    }

    fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let output = serde_json::to_string_pretty(value)?;
        self.term.write_line(&output)?;
        Ok(())
    }

    /// Compact single-line JSON, so a played script yields one object per event.
    fn print_json_line<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let output = serde_json::to_string(value)?;
        self.term.write_line(&output)?;
        Ok(())
    }

    fn wrap_width(&self) -> usize {
        let (_, columns) = self.term.size();
        usize::from(columns).max(20)
    }

    fn write_wrapped(&self, text: &str, indent: &str) -> Result<()> {
        let options = textwrap::Options::new(self.wrap_width())
            .initial_indent(indent)
            .subsequent_indent(indent);
        for line in textwrap::wrap(text, options) {
            self.term.write_line(&line)?;
        }
        Ok(())
    }

    fn likes_line(post: &Post) -> String {
        let heart = if post.liked() {
            style("♥").red().bold()
        } else {
            style("♡").dim()
        };
        format!(
            "{heart} {}",
            style(format!("{} likes", post.like_count())).bold()
        )
    }

    fn comment_line(comment: &Comment) -> String {
        format!(
            "{} {}",
            style(comment.author()).bold(),
            comment.text()
        )
    }

    pub fn feed(&self, snapshot: &FeedSnapshot) -> Result<()> {
        if self.json {
            return self.print_json(snapshot);
        }

        self.term
            .write_line(&style(LOGO).bold().to_string())?;
        self.term.write_line("")?;

        if !snapshot.stories().is_empty() {
            let names: Vec<String> = snapshot
                .stories()
                .iter()
                .map(|story| style(story.username()).magenta().to_string())
                .collect();
            self.term
                .write_line(&format!("Stories: {}", names.join("  ")))?;
            self.term.write_line("")?;
        }

        if snapshot.posts().is_empty() {
            self.term.write_line("No posts yet.")?;
            return Ok(());
        }

        for post in snapshot.posts() {
            self.post(post, snapshot.draft(post.id()))?;
            self.term.write_line("")?;
        }
        Ok(())
    }

    fn post(&self, post: &Post, draft: Option<&str>) -> Result<()> {
        self.term.write_line(&format!(
            "{} [{}]",
            style(post.author()).cyan().bold(),
            style(post.id()).dim()
        ))?;
        self.term
            .write_line(&format!("{INDENT}Image: {}", post.image_url()))?;
        self.term
            .write_line(&format!("{INDENT}{}", Self::likes_line(post)))?;
        self.write_wrapped(
            &format!("{} {}", style(post.author()).bold(), post.caption()),
            INDENT,
        )?;

        if !post.comments().is_empty() {
            self.term.write_line(&format!(
                "{INDENT}Comments: ({})",
                post.comments().len()
            ))?;
            for comment in post.comments() {
                self.write_wrapped(&Self::comment_line(comment), "    ")?;
            }
        }

        if let Some(draft) = draft {
            self.term.write_line(&format!(
                "{INDENT}{} {draft}",
                style("Draft:").dim()
            ))?;
        }
        Ok(())
    }

    pub fn outcome(&self, outcome: &Outcome) -> Result<()> {
        if self.json {
            return self.print_json_line(outcome);
        }

        match outcome {
            Outcome::Liked { post } => {
                self.term.write_line(&format!(
                    "{} {} ({} likes)",
                    style("Liked post:").green(),
                    style(post.id()).cyan().bold(),
                    post.like_count()
                ))?;
            }
            Outcome::Unliked { post } => {
                self.term.write_line(&format!(
                    "{} {} ({} likes)",
                    style("Unliked post:").yellow(),
                    style(post.id()).cyan().bold(),
                    post.like_count()
                ))?;
            }
            Outcome::Drafted { post_id, text } => {
                self.term.write_line(&format!(
                    "{} {}: {text}",
                    style("Draft for post").dim(),
                    style(post_id).cyan()
                ))?;
            }
            Outcome::Commented {
                post_id,
                comment,
                comment_count,
            } => {
                self.term.write_line(&format!(
                    "{} {}",
                    style("Added comment to post:").green(),
                    style(post_id).cyan().bold()
                ))?;
                self.term.write_line(&format!(
                    "{INDENT}Comment: [{}] {}",
                    comment.id(),
                    Self::comment_line(comment)
                ))?;
                self.term
                    .write_line(&format!("{INDENT}Total comments: {comment_count}"))?;
            }
            Outcome::Ignored {
                event,
                post_id,
                reason,
                suggestion,
            } => {
                let why = match reason {
                    IgnoreReason::UnknownPost => {
                        format!("post not found: {post_id}")
                    }
                    IgnoreReason::EmptyDraft => {
                        format!("empty draft for post {post_id}")
                    }
                };
                self.term.write_line(&format!(
                    "{} {}",
                    style(format!("Ignored {event}:")).dim(),
                    style(why).dim()
                ))?;
                if let Some(suggestion) = suggestion {
                    self.term
                        .write_line(&format!("{INDENT}Did you mean: {suggestion}"))?;
                }
            }
            Outcome::Feed(snapshot) => self.feed(snapshot)?,
        }
        Ok(())
    }

    pub fn guide(&self, text: &str) -> Result<()> {
        self.term.write_line(text)?;
        Ok(())
    }
}
