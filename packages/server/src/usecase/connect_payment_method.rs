//! UseCase: 支払い方法の接続処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectPaymentMethodUseCase::execute() メソッド
//! - 支払い方法とアドレスのペアでの保存（upsert）
//!
//! ### なぜこのテストが必要か
//! - カタログにない支払い方法を保存させない
//! - 保存の失敗がそのまま呼び出し元に伝わることを保証（クライアントは応答だけを信頼する）
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規ユーザーへの接続、既存の接続の置き換え
//! - 異常系：カタログにない支払い方法、ストレージ障害

use std::sync::Arc;

use paylink_shared::time::get_jst_timestamp;

use crate::domain::{
    Association, AssociationRepository, Catalog, MethodId, PaymentAddress, PaymentBinding,
    Timestamp, UserId, ValueObjectError,
};

use super::error::AssociationError;

/// 支払い方法接続のユースケース
pub struct ConnectPaymentMethodUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn AssociationRepository>,
    /// 接続可能な支払い方法
    catalog: Arc<Catalog>,
}

impl ConnectPaymentMethodUseCase {
    /// 新しい ConnectPaymentMethodUseCase を作成
    pub fn new(repository: Arc<dyn AssociationRepository>, catalog: Arc<Catalog>) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    /// 支払い方法の接続を実行
    ///
    /// # Arguments
    ///
    /// * `user_id` - 対象ユーザー
    /// * `method_id` - カタログ内の支払い方法
    /// * `address` - 支払い先アドレス
    ///
    /// # Returns
    ///
    /// * `Ok(Association)` - 保存後の Association
    /// * `Err(AssociationError)` - 検証またはストレージの失敗
    pub async fn execute(
        &self,
        user_id: UserId,
        method_id: MethodId,
        address: PaymentAddress,
    ) -> Result<Association, AssociationError> {
        if !self.catalog.contains(&method_id) {
            return Err(ValueObjectError::UnknownMethod(method_id.into_string()).into());
        }

        let now = Timestamp::new(get_jst_timestamp());
        let association = self
            .repository
            .upsert(&user_id, PaymentBinding::new(method_id, address), now)
            .await?;

        tracing::info!(
            "User '{}' connected payment method '{}'",
            user_id,
            association
                .method_id()
                .map(MethodId::as_str)
                .unwrap_or_default()
        );
        Ok(association)
    }
}
