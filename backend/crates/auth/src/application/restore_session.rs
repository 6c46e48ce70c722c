//! Restore Session Use Case
//!
//! Rehydrates the session persisted by a previous run. Never fails:
//! anything unreadable counts as "no session".

use std::sync::Arc;

use crate::application::sign_in::link_customer;
use crate::domain::entity::session::Session;
use crate::domain::repository::{AuthDirectory, SessionStore};

pub struct RestoreSessionUseCase<R, S>
where
    R: AuthDirectory,
    S: SessionStore,
{
    directory: Arc<R>,
    session_store: Arc<S>,
}

impl<R, S> RestoreSessionUseCase<R, S>
where
    R: AuthDirectory,
    S: SessionStore,
{
    pub fn new(directory: Arc<R>, session_store: Arc<S>) -> Self {
        Self {
            directory,
            session_store,
        }
    }

    pub async fn execute(&self) -> Option<Session> {
        let user = match self.session_store.load() {
            Ok(Some(user)) => user,
            Ok(None) => return None,
            Err(e) => {
                e.log();
                return None;
            }
        };

        // The stored record is trusted as-is; only the customer link is re-derived
        let customer = match link_customer(self.directory.as_ref(), &user).await {
            Ok(customer) => customer,
            Err(e) => {
                e.log();
                None
            }
        };

        tracing::info!(
            subject_id = %user.id,
            role = %user.role,
            "Restored persisted session"
        );

        Some(Session::new(user, customer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_role::UserRole;
    use crate::infra::demo_data::demo_users;
    use crate::infra::{DemoDirectory, LocalSessionStore};
    use platform::storage::{KeyValueStore, MemoryStore};

    fn setup() -> (
        Arc<MemoryStore>,
        Arc<LocalSessionStore<MemoryStore>>,
        RestoreSessionUseCase<DemoDirectory, LocalSessionStore<MemoryStore>>,
    ) {
        let storage = Arc::new(MemoryStore::new());
        let store = Arc::new(LocalSessionStore::new(storage.clone(), "prominence_user"));
        let use_case = RestoreSessionUseCase::new(Arc::new(DemoDirectory::seeded()), store.clone());
        (storage, store, use_case)
    }

    #[tokio::test]
    async fn test_nothing_stored() {
        let (_, _, use_case) = setup();
        assert!(use_case.execute().await.is_none());
    }

    #[tokio::test]
    async fn test_restores_client_with_customer() {
        let (_, store, use_case) = setup();
        let john = demo_users().remove(1);
        store.save(&john).unwrap();

        let session = use_case.execute().await.unwrap();
        assert_eq!(session.user(), &john);
        assert_eq!(session.customer().unwrap().id.as_str(), "cust-1");
    }

    #[tokio::test]
    async fn test_restores_admin_without_customer() {
        let (_, store, use_case) = setup();
        store.save(&demo_users()[0]).unwrap();

        let session = use_case.execute().await.unwrap();
        assert_eq!(session.role(), UserRole::Admin);
        assert!(session.customer().is_none());
    }

    #[tokio::test]
    async fn test_malformed_entry_is_no_session() {
        let (storage, _, use_case) = setup();
        storage.set_item("prominence_user", "undefined").unwrap();
        assert!(use_case.execute().await.is_none());

        storage.set_item("prominence_user", "").unwrap();
        assert!(use_case.execute().await.is_none());
    }
}
