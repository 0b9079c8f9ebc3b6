//! Core domain models for the association store.

use serde::{Deserialize, Serialize};

use super::value_object::{MethodId, PaymentAddress, Timestamp, UserId};

/// A payment method paired with its address.
///
/// The two values only exist together, so an association can never hold a
/// method without an address or an address without a method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentBinding {
    pub method_id: MethodId,
    pub address: PaymentAddress,
}

impl PaymentBinding {
    pub fn new(method_id: MethodId, address: PaymentAddress) -> Self {
        Self { method_id, address }
    }
}

/// The persisted (method, address) pair for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Association {
    /// Owner of the association
    pub user_id: UserId,
    /// Current binding, `None` when disconnected
    pub binding: Option<PaymentBinding>,
}

impl Association {
    /// Association with no payment method
    pub fn empty(user_id: UserId) -> Self {
        Self {
            user_id,
            binding: None,
        }
    }

    /// Association bound to `binding`
    pub fn bound(user_id: UserId, binding: PaymentBinding) -> Self {
        Self {
            user_id,
            binding: Some(binding),
        }
    }

    pub fn method_id(&self) -> Option<&MethodId> {
        self.binding.as_ref().map(|b| &b.method_id)
    }

    pub fn address(&self) -> Option<&PaymentAddress> {
        self.binding.as_ref().map(|b| &b.address)
    }

    /// Whether a payment method is connected
    pub fn is_connected(&self) -> bool {
        self.binding.is_some()
    }
}

/// A registered user with an optional payment binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User identifier
    pub id: UserId,
    /// Display handle, may be empty
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Timestamp when the user was first stored
    pub registered_at: Timestamp,
    /// Current payment binding
    pub payment: Option<PaymentBinding>,
}

impl User {
    /// Create a user with an empty profile and no payment binding
    pub fn new(id: UserId, registered_at: Timestamp) -> Self {
        Self {
            id,
            username: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            registered_at,
            payment: None,
        }
    }

    /// Set profile fields
    pub fn with_profile(
        mut self,
        username: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// Replace the binding as a whole
    pub fn bind(&mut self, binding: PaymentBinding) {
        self.payment = Some(binding);
    }

    /// Drop the binding. Calling it on an unbound user is a no-op.
    pub fn unbind(&mut self) {
        self.payment = None;
    }

    /// Project the user's association
    pub fn association(&self) -> Association {
        Association {
            user_id: self.id.clone(),
            binding: self.payment.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binding(method: &str, address: &str) -> PaymentBinding {
        PaymentBinding::new(
            MethodId::try_from(method).unwrap(),
            PaymentAddress::try_from(address).unwrap(),
        )
    }

    #[test]
    fn test_user_new_has_no_binding() {
        // テスト項目: 新しいユーザーは支払い方法を持たない
        // when (操作):
        let user = User::new(UserId::new("42".to_string()).unwrap(), Timestamp::new(0));

        // then (期待する結果):
        let association = user.association();
        assert!(!association.is_connected());
        assert_eq!(association.method_id(), None);
        assert_eq!(association.address(), None);
    }

    #[test]
    fn test_bind_replaces_previous_binding() {
        // テスト項目: bind は既存のバインディングを丸ごと置き換える
        // given (前提条件):
        let mut user = User::new(UserId::new("42".to_string()).unwrap(), Timestamp::new(0));
        user.bind(binding("binance", "abc"));

        // when (操作):
        user.bind(binding("upi", "user@upi"));

        // then (期待する結果):
        let association = user.association();
        assert_eq!(association.method_id().unwrap().as_str(), "upi");
        assert_eq!(association.address().unwrap().as_str(), "user@upi");
    }

    #[test]
    fn test_unbind_is_idempotent() {
        // テスト項目: unbind を繰り返しても同じ状態になる
        // given (前提条件):
        let mut user = User::new(UserId::new("42".to_string()).unwrap(), Timestamp::new(0));
        user.bind(binding("kucoin", "k-1"));

        // when (操作):
        user.unbind();
        let first = user.association();
        user.unbind();

        // then (期待する結果):
        assert_eq!(first, user.association());
        assert!(!user.association().is_connected());
    }

    #[test]
    fn test_with_profile() {
        // テスト項目: プロフィール項目を設定できる
        let user = User::new(UserId::new("7".to_string()).unwrap(), Timestamp::new(5))
            .with_profile("alice", "Alice", "Liddell");
        assert_eq!(user.username, "alice");
        assert_eq!(user.first_name, "Alice");
        assert_eq!(user.last_name, "Liddell");
        assert_eq!(user.registered_at, Timestamp::new(5));
    }
}
