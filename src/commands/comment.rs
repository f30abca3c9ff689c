use serde::Serialize;

use crate::commands::draft;
use crate::feed::Feed;
use crate::models::Comment;

/// What happened when a draft was submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Submission {
    Added {
        post_id: String,
        comment: Comment,
        comment_count: usize,
    },
    EmptyDraft {
        post_id: String,
    },
    UnknownPost {
        post_id: String,
    },
}

/// Post the draft for `post_id` as a comment by the current user.
///
/// The draft is cleared only when the comment was appended; an empty draft or
/// an unknown post leaves both the feed and the draft as they were.
pub fn submit(post_id: &str, feed: &mut Feed) -> Submission {
    let (posts, drafts) = feed.stores_mut();

    let text = drafts.consume_draft(post_id);
    if text.is_empty() {
        return Submission::EmptyDraft {
            post_id: post_id.to_owned(),
        };
    }

    let Some(comment) = posts.add_comment(post_id, &text).cloned() else {
        return Submission::UnknownPost {
            post_id: post_id.to_owned(),
        };
    };
    drafts.clear_draft(post_id);

    let comment_count = posts
        .get_post(post_id)
        .map_or(0, |post| post.comments().len());

    Submission::Added {
        post_id: post_id.to_owned(),
        comment,
        comment_count,
    }
}

/// Type `text` into the draft for `post_id` and submit it.
pub fn post(post_id: &str, text: String, feed: &mut Feed) -> Submission {
    draft::set(post_id, text, feed);
    submit(post_id, feed)
}
