use anyhow::{Result, bail};
use std::collections::HashSet;

use crate::models::{CURRENT_USER, Comment, Post};

/// Ordered, in-memory collection of feed posts.
///
/// Unknown post ids and empty comment text are not errors: the mutating
/// methods return `None` and leave every post untouched.
#[derive(Debug, Clone, Default)]
pub struct FeedStore {
    posts: Vec<Post>,
}

impl FeedStore {
    /// Build a store from seed posts, rejecting data that would break the
    /// store's invariants.
    pub fn new(posts: Vec<Post>) -> Result<Self> {
        let mut seen = HashSet::new();
        for post in &posts {
            if !seen.insert(post.id()) {
                bail!("Duplicate post id in seed: {}", post.id());
            }
            if post.liked() && post.like_count() == 0 {
                bail!("Post {} is liked but has a like count of 0", post.id());
            }

            let mut comment_ids = HashSet::new();
            for comment in post.comments() {
                if !comment_ids.insert(comment.id()) {
                    bail!(
                        "Duplicate comment id {} in post {}",
                        comment.id(),
                        post.id()
                    );
                }
                if comment.text().is_empty() {
                    bail!("Comment {} in post {} has no text", comment.id(), post.id());
                }
            }
        }

        Ok(Self { posts })
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn get_post(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id() == id)
    }

    fn get_post_mut(&mut self, id: &str) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id() == id)
    }

    pub fn post_ids(&self) -> Vec<&str> {
        self.posts.iter().map(Post::id).collect()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn toggle_like(&mut self, post_id: &str) -> Option<&Post> {
        let Some(post) = self.get_post_mut(post_id) else {
            log::debug!("toggle_like ignored, no post {post_id}");
            return None;
        };

        post.toggle_like();
        log::debug!(
            "post {post_id} liked={} like_count={}",
            post.liked(),
            post.like_count()
        );
        Some(&*post)
    }

    /// Append a comment by the current user. Whitespace-only text counts as
    /// non-empty.
    pub fn add_comment(&mut self, post_id: &str, text: &str) -> Option<&Comment> {
        if text.is_empty() {
            log::debug!("add_comment ignored, empty text for post {post_id}");
            return None;
        }
        let Some(post) = self.get_post_mut(post_id) else {
            log::debug!("add_comment ignored, no post {post_id}");
            return None;
        };

        let comment = post.push_comment(CURRENT_USER, text);
        log::debug!("post {post_id} gained comment {}", comment.id());
        Some(comment)
    }
}
