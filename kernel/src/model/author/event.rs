use super::Author;
use crate::model::id::AuthorId;

#[derive(Debug)]
pub struct CreateAuthor {
    pub name: String,
    pub bio: Option<String>,
}

// bio は NULL 許容カラムなので二重 Option になる。
// 外側の None は「未指定」、Some(None) は「明示的に NULL へ更新」を表す
#[derive(Debug)]
pub struct UpdateAuthor {
    pub author_id: AuthorId,
    pub name: Option<String>,
    pub bio: Option<Option<String>>,
}

impl UpdateAuthor {
    pub fn apply(self, current: Author) -> Author {
        Author {
            name: self.name.unwrap_or(current.name),
            bio: self.bio.unwrap_or(current.bio),
            ..current
        }
    }
}

#[derive(Debug)]
pub struct DeleteAuthor {
    pub author_id: AuthorId,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn author() -> Author {
        Author {
            id: AuthorId::new(1),
            name: "Author One".into(),
            bio: Some("A bio".into()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn omitted_bio_is_kept() {
        let event = UpdateAuthor {
            author_id: AuthorId::new(1),
            name: Some("Renamed".into()),
            bio: None,
        };
        let updated = event.apply(author());
        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.bio.as_deref(), Some("A bio"));
    }

    #[test]
    fn explicit_null_clears_bio() {
        let event = UpdateAuthor {
            author_id: AuthorId::new(1),
            name: None,
            bio: Some(None),
        };
        let updated = event.apply(author());
        assert_eq!(updated.name, "Author One");
        assert_eq!(updated.bio, None);
    }
}
