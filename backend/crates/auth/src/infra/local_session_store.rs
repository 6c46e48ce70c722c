//! Session persistence over client-local storage
//!
//! The session is stored as the JSON-serialized user record under a single
//! fixed key.

use std::sync::Arc;

use platform::storage::KeyValueStore;

use crate::domain::entity::user::User;
use crate::domain::repository::SessionStore;
use crate::error::{AuthError, AuthResult};

/// Default storage key of the persisted session
pub const SESSION_STORAGE_KEY: &str = "prominence_user";

/// [`SessionStore`] backed by a [`KeyValueStore`]
pub struct LocalSessionStore<K>
where
    K: KeyValueStore,
{
    storage: Arc<K>,
    key: String,
}

impl<K> LocalSessionStore<K>
where
    K: KeyValueStore,
{
    pub fn new(storage: Arc<K>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<K> Clone for LocalSessionStore<K>
where
    K: KeyValueStore,
{
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            key: self.key.clone(),
        }
    }
}

impl<K> SessionStore for LocalSessionStore<K>
where
    K: KeyValueStore,
{
    fn load(&self) -> AuthResult<Option<User>> {
        let Some(raw) = self.storage.get_item(&self.key)? else {
            return Ok(None);
        };

        serde_json::from_str::<User>(&raw)
            .map(Some)
            .map_err(|e| AuthError::MalformedSession(e.to_string()))
    }

    fn save(&self, user: &User) -> AuthResult<()> {
        let raw = serde_json::to_string(user)
            .map_err(|e| AuthError::Internal(format!("Failed to serialize session: {e}")))?;
        self.storage.set_item(&self.key, &raw)?;
        Ok(())
    }

    fn clear(&self) -> AuthResult<()> {
        self.storage.remove_item(&self.key)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::demo_data::demo_users;
    use platform::storage::MemoryStore;

    fn store() -> (Arc<MemoryStore>, LocalSessionStore<MemoryStore>) {
        let storage = Arc::new(MemoryStore::new());
        let store = LocalSessionStore::new(storage.clone(), SESSION_STORAGE_KEY);
        (storage, store)
    }

    #[test]
    fn test_save_load_clear() {
        let (storage, store) = store();
        let user = demo_users().remove(0);

        assert_eq!(store.load().unwrap(), None);

        store.save(&user).unwrap();
        assert!(storage.get_item(SESSION_STORAGE_KEY).unwrap().is_some());
        assert_eq!(store.load().unwrap(), Some(user));

        store.clear().unwrap();
        store.clear().unwrap();
        assert_eq!(storage.get_item(SESSION_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_save_overwrites() {
        let (_, store) = store();
        let users = demo_users();

        store.save(&users[0]).unwrap();
        store.save(&users[2]).unwrap();
        assert_eq!(store.load().unwrap().unwrap().email, users[2].email);
    }

    #[test]
    fn test_malformed_entry() {
        let (storage, store) = store();

        storage.set_item(SESSION_STORAGE_KEY, "{not json").unwrap();
        assert!(matches!(store.load(), Err(AuthError::MalformedSession(_))));

        storage
            .set_item(SESSION_STORAGE_KEY, r#"{"id":"x","role":"root"}"#)
            .unwrap();
        assert!(matches!(store.load(), Err(AuthError::MalformedSession(_))));
    }

    #[test]
    fn test_uses_configured_key() {
        let storage = Arc::new(MemoryStore::new());
        let store = LocalSessionStore::new(storage.clone(), "other_key");
        store.save(&demo_users()[1]).unwrap();

        assert_eq!(store.key(), "other_key");
        assert!(storage.get_item(SESSION_STORAGE_KEY).unwrap().is_none());
        assert!(storage.get_item("other_key").unwrap().is_some());
    }
}
