use shared::error::AppError;

pub mod audiobook;
pub mod author;
pub mod bookmark;
pub mod category;
pub mod chapter;
pub mod health;
pub mod listening_history;
pub mod narrator;
pub mod purchase;
pub mod rating;
pub mod review;
pub mod subscription;
pub mod user;

// 一意制約・外部キー制約の違反はクライアント起因のエラーとして返す
pub(crate) fn map_constraint_error(err: sqlx::Error, entity: &str) -> AppError {
    match err {
        sqlx::Error::Database(ref e) if e.is_unique_violation() => {
            AppError::UniqueConstraintError(format!("{entity} violates a unique constraint"))
        }
        sqlx::Error::Database(ref e) if e.is_foreign_key_violation() => {
            AppError::ForeignKeyConstraintError(format!("{entity} violates a foreign key constraint"))
        }
        e => AppError::SpecificOperationError(e),
    }
}
