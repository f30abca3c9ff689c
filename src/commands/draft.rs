use crate::feed::Feed;

/// Replace the comment draft for `post_id`. The post does not have to exist.
pub fn set(post_id: &str, text: String, feed: &mut Feed) {
    log::debug!("draft for post {post_id} is now {} bytes", text.len());
    feed.drafts_mut().set_draft(post_id, text);
}
