//! UseCase: Association 取得処理

use std::sync::Arc;

use crate::domain::{Association, AssociationRepository, UserId};

use super::error::AssociationError;

/// Association 取得のユースケース
pub struct FetchAssociationUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn AssociationRepository>,
}

impl FetchAssociationUseCase {
    /// 新しい FetchAssociationUseCase を作成
    pub fn new(repository: Arc<dyn AssociationRepository>) -> Self {
        Self { repository }
    }

    /// 現在の Association を取得
    ///
    /// 未登録ユーザーは `AssociationError::NotFound`
    pub async fn execute(&self, user_id: UserId) -> Result<Association, AssociationError> {
        Ok(self.repository.fetch(&user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MockAssociationRepository, RepositoryError};

    #[tokio::test]
    async fn test_fetch_maps_not_found() {
        // テスト項目: Repository の UserNotFound は NotFound に変換される
        // given (前提条件):
        let mut repository = MockAssociationRepository::new();
        repository
            .expect_fetch()
            .returning(|id| Err(RepositoryError::UserNotFound(id.to_string())));
        let usecase = FetchAssociationUseCase::new(Arc::new(repository));

        // when (操作):
        let result = usecase.execute(UserId::new("5".to_string()).unwrap()).await;

        // then (期待する結果):
        assert_eq!(result.unwrap_err(), AssociationError::NotFound("5".to_string()));
    }

    #[tokio::test]
    async fn test_fetch_returns_association() {
        // テスト項目: Repository の結果がそのまま返される
        // given (前提条件):
        let mut repository = MockAssociationRepository::new();
        repository
            .expect_fetch()
            .returning(|id| Ok(Association::empty(id.clone())));
        let usecase = FetchAssociationUseCase::new(Arc::new(repository));

        // when (操作):
        let result = usecase.execute(UserId::new("6".to_string()).unwrap()).await;

        // then (期待する結果):
        assert!(!result.unwrap().is_connected());
    }
}
