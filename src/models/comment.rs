use serde::{Deserialize, Serialize};

/// Author label stamped on comments written from this device.
pub const CURRENT_USER: &str = "current_user";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    id: String,
    author: String,
    text: String,
}

impl Comment {
    pub fn new(id: String, author: String, text: String) -> Self {
        Self { id, author, text }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
