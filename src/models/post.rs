use serde::{Deserialize, Serialize};

use super::Comment;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    id: String,
    author: String,
    author_avatar_url: String,
    image_url: String,
    caption: String,
    like_count: u32,
    #[serde(default)]
    liked: bool,
    #[serde(default)]
    comments: Vec<Comment>,
}

impl Post {
    pub fn new(
        id: String,
        author: String,
        author_avatar_url: String,
        image_url: String,
        caption: String,
        like_count: u32,
    ) -> Self {
        Self {
            id,
            author,
            author_avatar_url,
            image_url,
            caption,
            like_count,
            liked: false,
            comments: Vec::new(),
        }
    }

    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn author_avatar_url(&self) -> &str {
        &self.author_avatar_url
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn like_count(&self) -> u32 {
        self.like_count
    }

    pub fn liked(&self) -> bool {
        self.liked
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Flips `liked` and moves `like_count` one step in the same direction.
    ///
    /// A liked post always has `like_count >= 1` (seed validation rejects the
    /// opposite), so the decrement never saturates in practice.
    pub(crate) fn toggle_like(&mut self) {
        if self.liked {
            self.like_count = self.like_count.saturating_sub(1);
        } else {
            self.like_count = self.like_count.saturating_add(1);
        }
        self.liked = !self.liked;
    }

    /// Appends a comment and returns it. The id is `c{len + 1}`, advanced past
    /// any id already present in this post.
    pub(crate) fn push_comment(&mut self, author: &str, text: &str) -> &Comment {
        let id = self.next_comment_id();
        self.comments
            .push(Comment::new(id, author.to_owned(), text.to_owned()));
        &self.comments[self.comments.len() - 1]
    }

    fn next_comment_id(&self) -> String {
        let mut n = self.comments.len() + 1;
        loop {
            let candidate = format!("c{n}");
            if !self.comments.iter().any(|c| c.id() == candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}
