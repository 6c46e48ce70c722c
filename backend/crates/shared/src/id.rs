//! Common ID Types
//!
//! Type-safe ID wrappers for portal records.
//!
//! Record identifiers in the portal datasets are opaque strings
//! (`"admin-1"`, `"cust-2"`), so the wrapper stores a `String` and
//! serializes transparently.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::Id;
/// pub struct AccountMarker;
/// type AccountId = Id<AccountMarker>;
///
/// let id = AccountId::new("acc-1");
/// assert_eq!(id.as_str(), "acc-1");
/// ```
pub struct Id<T> {
    value: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _marker: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<&str> for Id<T> {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Account;
    struct Customer;

    #[test]
    fn test_id_type_safety() {
        let account_id: Id<Account> = Id::new("acc-1");
        let customer_id: Id<Customer> = Id::new("acc-1");

        // Same underlying value, distinct types
        assert_eq!(account_id.as_str(), customer_id.as_str());
    }

    #[test]
    fn test_id_serializes_transparently() {
        let id: Id<Account> = Id::new("acc-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"acc-1\"");

        let back: Id<Account> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
