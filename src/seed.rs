use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::feed::Feed;
use crate::models::{Post, Story};
use crate::store::FeedStore;

/// Mock data shown when no seed file is given.
pub const DEFAULT_SEED: &str = include_str!("../data/feed.toml");

#[derive(Debug, Deserialize)]
pub struct Seed {
    #[serde(default)]
    stories: Vec<Story>,
    #[serde(default)]
    posts: Vec<Post>,
}

impl Seed {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse seed data")
    }

    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid seed file: {}", path.display()))
    }

    pub fn into_feed(self) -> Result<Feed> {
        let posts = FeedStore::new(self.posts).context("Seed data failed validation")?;
        Ok(Feed::new(self.stories, posts))
    }
}

/// Build the feed from `path`, or from the built-in mock data when no path is
/// given.
pub fn load(path: Option<&Path>) -> Result<Feed> {
    let seed = match path {
        Some(path) => {
            log::info!("loading seed from {}", path.display());
            Seed::read(path)?
        }
        None => {
            log::info!("loading built-in seed");
            Seed::parse(DEFAULT_SEED)?
        }
    };

    let feed = seed.into_feed()?;
    log::info!(
        "feed ready: {} stories, {} posts",
        feed.stories().len(),
        feed.posts().len()
    );
    Ok(feed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_seed(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    // -- built-in seed --

    #[rstest]
    fn default_seed_matches_mock_feed() {
        let feed = load(None).unwrap();

        let usernames: Vec<&str> = feed.stories().iter().map(Story::username).collect();
        assert_eq!(usernames, vec!["your_story", "coderqueen", "techguy"]);

        let posts = feed.posts();
        assert_eq!(posts.post_ids(), vec!["1", "2"]);

        let first = posts.get_post("1").unwrap();
        assert_eq!(first.author(), "amirabbas_dev");
        assert_eq!(first.like_count(), 120);
        assert!(!first.liked());
        assert_eq!(first.comments().len(), 2);

        let second = posts.get_post("2").unwrap();
        assert_eq!(second.like_count(), 85);
        assert_eq!(second.comments().len(), 1);
        assert_eq!(second.comments()[0].id(), "c3");
    }

    #[rstest]
    fn default_seed_has_no_drafts() {
        let feed = load(None).unwrap();
        assert_eq!(feed.drafts().iter().count(), 0);
    }

    // -- seed files --

    #[rstest]
    fn load_reads_seed_file() {
        let file = write_seed(
            r#"
            [[posts]]
            id = "a"
            author = "someone"
            author_avatar_url = "https://example.com/a.jpg"
            image_url = "https://example.com/b.jpg"
            caption = "hello"
            like_count = 1
            liked = true
            "#,
        );

        let feed = load(Some(file.path())).unwrap();
        assert!(feed.stories().is_empty());
        let post = feed.posts().get_post("a").unwrap();
        assert!(post.liked());
        assert_eq!(post.like_count(), 1);
    }

    #[rstest]
    fn load_missing_file_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read seed file"));
    }

    #[rstest]
    #[case::not_toml("this is = = not toml")]
    #[case::missing_field("[[posts]]\nid = \"a\"\n")]
    #[case::negative_likes(
        "[[posts]]\nid = \"a\"\nauthor = \"x\"\nauthor_avatar_url = \"x\"\nimage_url = \"x\"\ncaption = \"x\"\nlike_count = -1\n"
    )]
    fn load_rejects_malformed_seed(#[case] content: &str) {
        let file = write_seed(content);
        assert!(load(Some(file.path())).is_err());
    }

    #[rstest]
    fn load_rejects_duplicate_posts() {
        let post = "[[posts]]\nid = \"a\"\nauthor = \"x\"\nauthor_avatar_url = \"x\"\nimage_url = \"x\"\ncaption = \"x\"\nlike_count = 0\n";
        let file = write_seed(&format!("{post}{post}"));
        let err = load(Some(file.path())).unwrap_err();
        assert!(format!("{err:#}").contains("Duplicate post id"));
    }
}
