use serde::{Deserialize, Deserializer};

pub mod audiobook;
pub mod author;
pub mod bookmark;
pub mod category;
pub mod chapter;
pub mod list;
pub mod listening_history;
pub mod narrator;
pub mod purchase;
pub mod rating;
pub mod review;
pub mod subscription;
pub mod user;

// PUT の部分更新で「フィールド省略」と「明示的な null」を区別するためのデシリアライザ。
// #[serde(default, deserialize_with = "double_option")] を付けたフィールドは、
// 省略時に None、null 指定時に Some(None) になる
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
