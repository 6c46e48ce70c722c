//! Sign Out Use Case
//!
//! Removes the persisted session entry.

use std::sync::Arc;

use crate::domain::repository::SessionStore;
use crate::error::AuthResult;

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: SessionStore,
{
    session_store: Arc<S>,
}

impl<S> SignOutUseCase<S>
where
    S: SessionStore,
{
    pub fn new(session_store: Arc<S>) -> Self {
        Self { session_store }
    }

    /// Idempotent: clearing an absent entry succeeds
    pub fn execute(&self) -> AuthResult<()> {
        self.session_store.clear()?;
        tracing::info!("User signed out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::demo_data::demo_users;
    use crate::infra::LocalSessionStore;
    use platform::storage::MemoryStore;

    #[test]
    fn test_sign_out_twice() {
        let store = Arc::new(LocalSessionStore::new(
            Arc::new(MemoryStore::new()),
            "prominence_user",
        ));
        store.save(&demo_users()[0]).unwrap();

        let use_case = SignOutUseCase::new(store.clone());
        use_case.execute().unwrap();
        assert_eq!(store.load().unwrap(), None);

        use_case.execute().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
