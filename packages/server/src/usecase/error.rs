//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{RepositoryError, ValueObjectError};

/// Association 操作のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssociationError {
    /// 入力値が不正（空のアドレス、カタログにない支払い方法など）
    #[error("Validation failed: {0}")]
    Validation(#[from] ValueObjectError),

    /// ユーザーが存在しない
    #[error("User not found: {0}")]
    NotFound(String),

    /// ストレージの失敗
    #[error("Storage failure: {0}")]
    Storage(String),
}

impl From<RepositoryError> for AssociationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::UserNotFound(id) => Self::NotFound(id),
            RepositoryError::Storage(msg) => Self::Storage(msg),
        }
    }
}
