use std::collections::BTreeMap;

use serde::Serialize;

use crate::feed::Feed;
use crate::models::{Post, Story};

/// Everything needed to draw the feed screen at one point in time.
#[derive(Debug, Clone, Serialize)]
pub struct FeedSnapshot {
    stories: Vec<Story>,
    posts: Vec<Post>,
    drafts: BTreeMap<String, String>,
}

impl FeedSnapshot {
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn draft(&self, post_id: &str) -> Option<&str> {
        self.drafts.get(post_id).map(String::as_str)
    }
}

pub fn snapshot(feed: &Feed) -> FeedSnapshot {
    FeedSnapshot {
        stories: feed.stories().to_vec(),
        posts: feed.posts().posts().to_vec(),
        drafts: feed
            .drafts()
            .iter()
            .map(|(id, text)| (id.to_owned(), text.to_owned()))
            .collect(),
    }
}
