use serde::Serialize;
use strum::AsRefStr;

use crate::commands::comment::Submission;
use crate::commands::show::FeedSnapshot;
use crate::commands::{comment, draft, like, show};
use crate::event::Event;
use crate::feed::Feed;
use crate::helpers::suggest_post_id;
use crate::models::{Comment, Post};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IgnoreReason {
    UnknownPost,
    EmptyDraft,
}

/// Result of applying one event to the feed.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Liked {
        post: Post,
    },
    Unliked {
        post: Post,
    },
    Drafted {
        post_id: String,
        text: String,
    },
    Commented {
        post_id: String,
        comment: Comment,
        comment_count: usize,
    },
    Ignored {
        event: String,
        post_id: String,
        reason: IgnoreReason,
        #[serde(skip_serializing_if = "Option::is_none")]
        suggestion: Option<String>,
    },
    Feed(FeedSnapshot),
}

pub fn apply(event: Event, feed: &mut Feed) -> Outcome {
    let verb = event.verb();
    let ignored = |feed: &Feed, post_id: String, reason: IgnoreReason| {
        let suggestion = match reason {
            IgnoreReason::UnknownPost => suggest_post_id(&post_id, feed.posts()),
            IgnoreReason::EmptyDraft => None,
        };
        log::debug!("{} on post {post_id} ignored: {}", verb.as_ref(), reason.as_ref());
        Outcome::Ignored {
            event: verb.as_ref().to_owned(),
            post_id,
            reason,
            suggestion,
        }
    };

    match event {
        Event::Like { post_id } => match like::toggle(&post_id, feed) {
            Some(post) if post.liked() => Outcome::Liked { post },
            Some(post) => Outcome::Unliked { post },
            None => ignored(feed, post_id, IgnoreReason::UnknownPost),
        },
        Event::Draft { post_id, text } => {
            draft::set(&post_id, text.clone(), feed);
            Outcome::Drafted { post_id, text }
        }
        Event::Submit { post_id } => submission(comment::submit(&post_id, feed), feed, ignored),
        Event::Comment { post_id, text } => {
            submission(comment::post(&post_id, text, feed), feed, ignored)
        }
        Event::Show => Outcome::Feed(show::snapshot(feed)),
    }
}

fn submission(
    result: Submission,
    feed: &Feed,
    ignored: impl Fn(&Feed, String, IgnoreReason) -> Outcome,
) -> Outcome {
    match result {
        Submission::Added {
            post_id,
            comment,
            comment_count,
        } => Outcome::Commented {
            post_id,
            comment,
            comment_count,
        },
        Submission::EmptyDraft { post_id } => ignored(feed, post_id, IgnoreReason::EmptyDraft),
        Submission::UnknownPost { post_id } => ignored(feed, post_id, IgnoreReason::UnknownPost),
    }
}
