use serde::{Deserialize, Serialize};

// 主キーは全エンティティで自動採番の 64bit 整数。型を分けて取り違えを防ぐ
macro_rules! define_id {
    ($id_name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $id_name(i64);

        impl $id_name {
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            pub fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $id_name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $id_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

define_id!(UserId);
define_id!(SubscriptionId);
define_id!(AuthorId);
define_id!(NarratorId);
define_id!(AudiobookId);
define_id!(ChapterId);
define_id!(CategoryId);
define_id!(ListeningHistoryId);
define_id!(BookmarkId);
define_id!(ReviewId);
define_id!(RatingId);
define_id!(PurchaseId);
