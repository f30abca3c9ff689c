use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    id: String,
    username: String,
    avatar_url: String,
}

impl Story {
    pub fn new(id: String, username: String, avatar_url: String) -> Self {
        Self {
            id,
            username,
            avatar_url,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }
}
