use std::sync::{PoisonError, RwLock};

use tracing::{error, info};

use crate::domain::{
    common::entities::app_errors::CoreError,
    session::entities::{SessionState, User},
    storage::{
        ports::KeyValueStorage,
        services::{load_document, save_document},
        value_objects::AUTH_STORAGE_KEY,
    },
};

pub const SESSION_STORE_VERSION: u32 = 1;

/// Simulated sign-in state persisted under `auth-storage`.
///
/// Credentials are not verified; signing in only records who is using the app
/// and whether onboarding still has to run.
pub struct SessionStore<S: KeyValueStorage> {
    storage: S,
    state: RwLock<SessionState>,
}

fn validated_email(email: &str) -> Result<&str, CoreError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(CoreError::Invalid("email is required".to_string()));
    }
    Ok(email)
}

fn local_part(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        let state = load_document(&storage, AUTH_STORAGE_KEY, SESSION_STORE_VERSION);
        Self {
            storage,
            state: RwLock::new(state),
        }
    }

    pub fn current(&self) -> SessionState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn replace<F>(&self, mutate: F) -> Result<SessionState, CoreError>
    where
        F: FnOnce(&mut SessionState),
    {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = state.clone();
        mutate(&mut next);

        save_document(&self.storage, AUTH_STORAGE_KEY, SESSION_STORE_VERSION, &next)
            .inspect_err(|e| error!("Failed to persist session: {}", e))?;

        *state = next.clone();
        Ok(next)
    }

    pub fn login(&self, email: &str, _password: &str) -> Result<SessionState, CoreError> {
        let email = validated_email(email)?;
        let user = User::new(email, local_part(email));
        info!(user_id = %user.id, "user signed in");

        self.replace(|state| {
            state.user = Some(user);
            state.is_authenticated = true;
            state.needs_onboarding = false;
        })
    }

    pub fn register(
        &self,
        name: &str,
        email: &str,
        _password: &str,
    ) -> Result<SessionState, CoreError> {
        let email = validated_email(email)?;
        let name = match name.trim() {
            "" => local_part(email),
            name => name.to_string(),
        };
        let user = User::new(email, name);
        info!(user_id = %user.id, "user registered");

        self.replace(|state| {
            state.user = Some(user);
            state.is_authenticated = true;
            state.needs_onboarding = true;
        })
    }

    pub fn logout(&self) -> Result<SessionState, CoreError> {
        self.replace(|state| *state = SessionState::default())
    }

    pub fn complete_onboarding(&self) -> Result<SessionState, CoreError> {
        self.replace(|state| state.needs_onboarding = false)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::infrastructure::storage::MemoryKeyValueStorage;

    fn store() -> (Arc<MemoryKeyValueStorage>, SessionStore<Arc<MemoryKeyValueStorage>>) {
        let storage = Arc::new(MemoryKeyValueStorage::new());
        (Arc::clone(&storage), SessionStore::new(storage))
    }

    #[test]
    fn test_login_uses_local_part_and_stable_id() {
        let (_, session) = store();

        let first = session.login("Ada@Example.com", "secret").unwrap();
        let user = first.user.clone().unwrap();
        assert_eq!(user.name, "ada");
        assert_eq!(user.email, "ada@example.com");
        assert!(first.is_authenticated);
        assert!(!first.needs_onboarding);

        let second = session.login("ada@example.com", "other").unwrap();
        assert_eq!(second.user.unwrap().id, user.id);
    }

    #[test]
    fn test_register_requires_onboarding() {
        let (_, session) = store();

        let state = session.register("Ada Lovelace", "ada@example.com", "pw").unwrap();
        assert_eq!(state.user.unwrap().name, "Ada Lovelace");
        assert!(state.needs_onboarding);

        let state = session.complete_onboarding().unwrap();
        assert!(!state.needs_onboarding);
        assert!(state.is_authenticated);
    }

    #[test]
    fn test_empty_email_is_rejected() {
        let (_, session) = store();

        assert!(matches!(session.login("   ", "pw"), Err(CoreError::Invalid(_))));
        assert_eq!(session.current(), SessionState::default());
    }

    #[test]
    fn test_logout_resets_and_persists() {
        let (storage, session) = store();
        session.login("bob@example.com", "pw").unwrap();

        let reopened = SessionStore::new(Arc::clone(&storage));
        assert!(reopened.current().is_authenticated);

        session.logout().unwrap();
        let reopened = SessionStore::new(storage);
        assert_eq!(reopened.current(), SessionState::default());
    }
}
