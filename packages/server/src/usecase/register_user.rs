//! UseCase: ユーザー登録・取得処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RegisterUserUseCase::execute() / find()
//!
//! ### なぜこのテストが必要か
//! - 既存ユーザーの再登録で接続済みの支払い方法が消えないことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規登録、再登録、取得
//! - 異常系：存在しないユーザーの取得

use std::sync::Arc;

use paylink_shared::time::get_jst_timestamp;

use crate::domain::{AssociationRepository, Timestamp, User, UserId};

use super::error::AssociationError;

/// プロフィール情報（全て任意）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

/// ユーザー登録のユースケース
pub struct RegisterUserUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn AssociationRepository>,
}

impl RegisterUserUseCase {
    /// 新しい RegisterUserUseCase を作成
    pub fn new(repository: Arc<dyn AssociationRepository>) -> Self {
        Self { repository }
    }

    /// ユーザーが存在しなければ作成し、保存されているユーザーを返す
    pub async fn execute(
        &self,
        user_id: UserId,
        profile: UserProfile,
    ) -> Result<User, AssociationError> {
        let user = User::new(user_id, Timestamp::new(get_jst_timestamp())).with_profile(
            profile.username,
            profile.first_name,
            profile.last_name,
        );
        let stored = self.repository.register(user).await?;
        tracing::info!("User '{}' registered", stored.id);
        Ok(stored)
    }

    /// 登録済みユーザーを取得
    pub async fn find(&self, user_id: UserId) -> Result<User, AssociationError> {
        Ok(self.repository.get_user(&user_id).await?)
    }
}
