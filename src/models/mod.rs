mod comment;
mod post;
mod story;

pub use comment::{CURRENT_USER, Comment};
pub use post::Post;
pub use story::Story;
