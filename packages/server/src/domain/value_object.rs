//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ValueObjectError;

/// Maximum length of a user identifier
pub const USER_ID_MAX_LEN: usize = 100;

/// Maximum length of a payment address
pub const ADDRESS_MAX_LEN: usize = 256;

/// User identifier value object.
///
/// Stable, externally supplied key of the association record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Create a new UserId.
    ///
    /// # Arguments
    ///
    /// * `id` - The user identifier string
    ///
    /// # Returns
    ///
    /// A Result containing the UserId or an error if validation fails
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        if id.trim().is_empty() {
            return Err(ValueObjectError::UserIdEmpty);
        }
        let len = id.chars().count();
        if len > USER_ID_MAX_LEN {
            return Err(ValueObjectError::UserIdTooLong {
                max: USER_ID_MAX_LEN,
                actual: len,
            });
        }
        Ok(Self(id))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Payment method identifier value object.
///
/// Only checks non-emptiness; membership in the catalog is checked by
/// [`crate::domain::Catalog::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MethodId(String);

impl MethodId {
    /// Create a new MethodId.
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ValueObjectError::MethodIdEmpty);
        }
        Ok(Self(id.to_string()))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for MethodId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for MethodId {
    type Error = ValueObjectError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl From<MethodId> for String {
    fn from(value: MethodId) -> Self {
        value.0
    }
}

impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Payment address value object.
///
/// The only rule is non-emptiness after trimming; the stored value is the
/// trimmed input. No per-method format checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PaymentAddress(String);

impl PaymentAddress {
    /// Create a new PaymentAddress.
    ///
    /// # Arguments
    ///
    /// * `address` - Raw address text as typed by the user
    ///
    /// # Returns
    ///
    /// A Result containing the trimmed PaymentAddress or an error if validation fails
    pub fn new(address: String) -> Result<Self, ValueObjectError> {
        let address = address.trim();
        Self::validate(address)?;
        Ok(Self(address.to_string()))
    }

    fn validate(trimmed: &str) -> Result<(), ValueObjectError> {
        if trimmed.is_empty() {
            return Err(ValueObjectError::AddressEmpty);
        }
        let len = trimmed.chars().count();
        if len > ADDRESS_MAX_LEN {
            return Err(ValueObjectError::AddressTooLong {
                max: ADDRESS_MAX_LEN,
                actual: len,
            });
        }
        Ok(())
    }

    /// Whether `text` would be accepted by [`Self::new`].
    pub fn is_acceptable(text: &str) -> bool {
        Self::validate(text.trim()).is_ok()
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for PaymentAddress {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for PaymentAddress {
    type Error = ValueObjectError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl From<PaymentAddress> for String {
    fn from(value: PaymentAddress) -> Self {
        value.0
    }
}

impl fmt::Display for PaymentAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds (JST).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
