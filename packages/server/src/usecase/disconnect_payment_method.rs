//! UseCase: 支払い方法の切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectPaymentMethodUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 切断後は支払い方法とアドレスの両方が消えていることを保証
//! - 既に切断済みでも成功する（冪等）ことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：接続済みユーザーの切断、切断済みユーザーの再切断
//! - 異常系：存在しないユーザーの切断

use std::sync::Arc;

use crate::domain::{Association, AssociationRepository, UserId};

use super::error::AssociationError;

/// 支払い方法切断のユースケース
pub struct DisconnectPaymentMethodUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn AssociationRepository>,
}

impl DisconnectPaymentMethodUseCase {
    /// 新しい DisconnectPaymentMethodUseCase を作成
    pub fn new(repository: Arc<dyn AssociationRepository>) -> Self {
        Self { repository }
    }

    /// 支払い方法の切断を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Association)` - 切断後の（空の）Association
    /// * `Err(AssociationError::NotFound)` - ユーザーが存在しない
    pub async fn execute(&self, user_id: UserId) -> Result<Association, AssociationError> {
        let association = self.repository.clear(&user_id).await?;
        tracing::info!("User '{}' disconnected payment method", user_id);
        Ok(association)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{MethodId, PaymentAddress, PaymentBinding, Timestamp},
        infrastructure::repository::InMemoryAssociationRepository,
    };

    fn user_id(id: &str) -> UserId {
        UserId::new(id.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_disconnect_connected_user() {
        // テスト項目: 接続済みユーザーを切断すると両方のフィールドが消える
        // given (前提条件):
        let repository = Arc::new(InMemoryAssociationRepository::default());
        repository
            .upsert(
                &user_id("10"),
                PaymentBinding::new(
                    MethodId::try_from("trustwallet").unwrap(),
                    PaymentAddress::try_from("0xABC").unwrap(),
                ),
                Timestamp::new(0),
            )
            .await
            .unwrap();
        let usecase = DisconnectPaymentMethodUseCase::new(repository.clone());

        // when (操作):
        let result = usecase.execute(user_id("10")).await;

        // then (期待する結果):
        let association = result.unwrap();
        assert_eq!(association.method_id(), None);
        assert_eq!(association.address(), None);
        assert!(!repository.fetch(&user_id("10")).await.unwrap().is_connected());
    }

    #[tokio::test]
    async fn test_disconnect_twice_succeeds() {
        // テスト項目: 切断済みユーザーの再切断も成功する
        // given (前提条件):
        let repository = Arc::new(InMemoryAssociationRepository::default());
        repository
            .register(crate::domain::User::new(user_id("11"), Timestamp::new(0)))
            .await
            .unwrap();
        let usecase = DisconnectPaymentMethodUseCase::new(repository);

        // when (操作):
        let first = usecase.execute(user_id("11")).await.unwrap();
        let second = usecase.execute(user_id("11")).await.unwrap();

        // then (期待する結果):
        assert_eq!(first, second);
        assert_eq!(second, Association::empty(user_id("11")));
    }

    #[tokio::test]
    async fn test_disconnect_unknown_user() {
        // テスト項目: 存在しないユーザーの切断は NotFound になる
        let usecase =
            DisconnectPaymentMethodUseCase::new(Arc::new(InMemoryAssociationRepository::default()));
        let result = usecase.execute(user_id("ghost")).await;
        assert_eq!(
            result.unwrap_err(),
            AssociationError::NotFound("ghost".to_string())
        );
    }
}
