//! InMemory Association Repository 実装
//!
//! ドメイン層が定義する AssociationRepository trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。
//!
//! 全てのユーザーレコードを 1 つの Mutex で保護しているため、
//! 支払い方法とアドレスの更新は常に同時に観測されます。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    Association, AssociationRepository, PaymentBinding, RepositoryError, Timestamp, User, UserId,
};

/// インメモリ Association Repository 実装
#[derive(Clone, Default)]
pub struct InMemoryAssociationRepository {
    /// ユーザー ID をキーにしたユーザーレコード
    users: Arc<Mutex<HashMap<UserId, User>>>,
}

impl InMemoryAssociationRepository {
    /// 新しい InMemoryAssociationRepository を作成
    pub fn new(users: Arc<Mutex<HashMap<UserId, User>>>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl AssociationRepository for InMemoryAssociationRepository {
    async fn fetch(&self, user_id: &UserId) -> Result<Association, RepositoryError> {
        let users = self.users.lock().await;
        users
            .get(user_id)
            .map(User::association)
            .ok_or_else(|| RepositoryError::UserNotFound(user_id.to_string()))
    }

    async fn upsert(
        &self,
        user_id: &UserId,
        binding: PaymentBinding,
        now: Timestamp,
    ) -> Result<Association, RepositoryError> {
        let mut users = self.users.lock().await;
        let user = users
            .entry(user_id.clone())
            .or_insert_with(|| User::new(user_id.clone(), now));
        user.bind(binding);
        Ok(user.association())
    }

    async fn clear(&self, user_id: &UserId) -> Result<Association, RepositoryError> {
        let mut users = self.users.lock().await;
        let user = users
            .get_mut(user_id)
            .ok_or_else(|| RepositoryError::UserNotFound(user_id.to_string()))?;
        user.unbind();
        Ok(user.association())
    }

    async fn register(&self, user: User) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().await;
        let stored = users.entry(user.id.clone()).or_insert(user);
        Ok(stored.clone())
    }

    async fn get_user(&self, user_id: &UserId) -> Result<User, RepositoryError> {
        let users = self.users.lock().await;
        users
            .get(user_id)
            .cloned()
            .ok_or_else(|| RepositoryError::UserNotFound(user_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MethodId, PaymentAddress};

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - InMemoryAssociationRepository の fetch / upsert / clear / register
    // - 支払い方法とアドレスが常にペアで更新されること
    //
    // 【なぜこのテストが必要か】
    // - Repository は UseCase から呼ばれるデータアクセス層の中核
    // - クライアントはサーバーの応答だけを信頼するため、保存内容の正しさが前提になる
    //
    // 【どのようなシナリオをテストするか】
    // 1. 未登録ユーザーの fetch（NotFound）
    // 2. upsert による暗黙のユーザー作成
    // 3. clear の冪等性
    // 4. register の冪等性
    // ========================================

    fn user_id(id: &str) -> UserId {
        UserId::new(id.to_string()).unwrap()
    }

    fn binding(method: &str, address: &str) -> PaymentBinding {
        PaymentBinding::new(
            MethodId::try_from(method).unwrap(),
            PaymentAddress::try_from(address).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_fetch_unknown_user() {
        // テスト項目: 未登録ユーザーの fetch は UserNotFound になる
        // given (前提条件):
        let repo = InMemoryAssociationRepository::default();

        // when (操作):
        let result = repo.fetch(&user_id("nobody")).await;

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            RepositoryError::UserNotFound("nobody".to_string())
        );
    }

    #[tokio::test]
    async fn test_upsert_creates_user_and_round_trips() {
        // テスト項目: upsert で保存した内容が fetch で取得できる
        // given (前提条件):
        let repo = InMemoryAssociationRepository::default();
        let id = user_id("1001");

        // when (操作):
        let stored = repo
            .upsert(&id, binding("binance", "abc123"), Timestamp::new(10))
            .await
            .unwrap();
        let fetched = repo.fetch(&id).await.unwrap();

        // then (期待する結果):
        assert_eq!(stored, fetched);
        assert_eq!(fetched.method_id().unwrap().as_str(), "binance");
        assert_eq!(fetched.address().unwrap().as_str(), "abc123");
        assert_eq!(
            repo.get_user(&id).await.unwrap().registered_at,
            Timestamp::new(10)
        );
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        // テスト項目: clear を 2 回呼んでも成功し、同じ結果になる
        // given (前提条件):
        let repo = InMemoryAssociationRepository::default();
        let id = user_id("1002");
        repo.upsert(&id, binding("upi", "user@upi"), Timestamp::new(0))
            .await
            .unwrap();

        // when (操作):
        let first = repo.clear(&id).await.unwrap();
        let second = repo.clear(&id).await.unwrap();

        // then (期待する結果):
        assert_eq!(first, second);
        assert!(!second.is_connected());
        assert_eq!(second.address(), None);
    }

    #[tokio::test]
    async fn test_clear_unknown_user() {
        // テスト項目: 未登録ユーザーの clear は UserNotFound になる
        let repo = InMemoryAssociationRepository::default();
        let result = repo.clear(&user_id("ghost")).await;
        assert!(matches!(result, Err(RepositoryError::UserNotFound(_))));
    }

    #[tokio::test]
    async fn test_register_keeps_existing_user() {
        // テスト項目: 既存ユーザーの register は既存レコードを返し上書きしない
        // given (前提条件):
        let repo = InMemoryAssociationRepository::default();
        let id = user_id("1003");
        repo.upsert(&id, binding("kucoin", "k-1"), Timestamp::new(1))
            .await
            .unwrap();

        // when (操作):
        let user = User::new(id.clone(), Timestamp::new(99)).with_profile("bob", "Bob", "");
        let stored = repo.register(user).await.unwrap();

        // then (期待する結果):
        assert_eq!(stored.registered_at, Timestamp::new(1));
        assert!(stored.payment.is_some());
        assert_eq!(repo.get_user(&id).await.unwrap(), stored);
    }
}
