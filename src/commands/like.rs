use crate::feed::Feed;
use crate::models::Post;

/// Toggle the like on `post_id`, returning the updated post. `None` when no
/// post matched; the feed is unchanged in that case.
pub fn toggle(post_id: &str, feed: &mut Feed) -> Option<Post> {
    feed.posts_mut().toggle_like(post_id).cloned()
}
