use crate::drafts::DraftStore;
use crate::models::Story;
use crate::store::FeedStore;

/// Everything the feed screen reads: the stories strip, the posts and the
/// comment drafts. Owned by whoever drives the screen and handed to commands
/// by reference.
#[derive(Debug, Clone, Default)]
pub struct Feed {
    stories: Vec<Story>,
    posts: FeedStore,
    drafts: DraftStore,
}

impl Feed {
    pub fn new(stories: Vec<Story>, posts: FeedStore) -> Self {
        Self {
            stories,
            posts,
            drafts: DraftStore::new(),
        }
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn posts(&self) -> &FeedStore {
        &self.posts
    }

    pub fn posts_mut(&mut self) -> &mut FeedStore {
        &mut self.posts
    }

    pub fn drafts(&self) -> &DraftStore {
        &self.drafts
    }

    pub fn drafts_mut(&mut self) -> &mut DraftStore {
        &mut self.drafts
    }

    /// Both stores at once, for commands that touch posts and drafts together.
    pub fn stores_mut(&mut self) -> (&mut FeedStore, &mut DraftStore) {
        (&mut self.posts, &mut self.drafts)
    }
}
