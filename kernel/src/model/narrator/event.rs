use super::Narrator;
use crate::model::id::NarratorId;

// ナレーターに削除操作はない

#[derive(Debug)]
pub struct CreateNarrator {
    pub name: String,
    pub bio: Option<String>,
}

#[derive(Debug)]
pub struct UpdateNarrator {
    pub narrator_id: NarratorId,
    pub name: Option<String>,
    pub bio: Option<Option<String>>,
}

impl UpdateNarrator {
    pub fn apply(self, current: Narrator) -> Narrator {
        Narrator {
            name: self.name.unwrap_or(current.name),
            bio: self.bio.unwrap_or(current.bio),
            ..current
        }
    }
}
