use std::collections::BTreeMap;

/// In-progress comment text, keyed by post id.
#[derive(Debug, Clone, Default)]
pub struct DraftStore {
    drafts: BTreeMap<String, String>,
}

impl DraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites whatever was typed before. No validation.
    pub fn set_draft(&mut self, post_id: &str, text: impl Into<String>) {
        self.drafts.insert(post_id.to_owned(), text.into());
    }

    pub fn draft(&self, post_id: &str) -> &str {
        self.drafts.get(post_id).map_or("", String::as_str)
    }

    /// Current text for submission. The draft stays in place until the
    /// caller clears it after a successful submit.
    pub fn consume_draft(&self, post_id: &str) -> String {
        self.draft(post_id).to_owned()
    }

    pub fn clear_draft(&mut self, post_id: &str) {
        if let Some(text) = self.drafts.get_mut(post_id) {
            text.clear();
        }
    }

    /// Drafts that currently hold text, ordered by post id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.drafts
            .iter()
            .filter(|(_, text)| !text.is_empty())
            .map(|(id, text)| (id.as_str(), text.as_str()))
    }
}
