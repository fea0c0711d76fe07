use crate::domain::{SessionError, StorageError, User};
use crate::infra::kv::KeyValueStore;
use std::sync::Arc;

/// Storage key of the persisted session object.
pub const SESSION_KEY: &str = "manpower.session";

/// Signed-in user, mirrored to a key-value store on every change.
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    user: Option<User>,
}

impl SessionStore {
    /// Restore whatever session the storage holds.
    ///
    /// A corrupt stored value is logged and treated as signed out.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Result<Self, SessionError> {
        let user = match storage.get(SESSION_KEY)? {
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(err) => {
                    log::warn!("Discarding unreadable session: {}", err);
                    None
                }
            },
            None => None,
        };
        Ok(Self { storage, user })
    }

    pub fn current(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn require_user(&self) -> Result<&User, SessionError> {
        self.user.as_ref().ok_or(SessionError::NotSignedIn)
    }

    pub fn login(&mut self, user: User) -> Result<(), SessionError> {
        let raw = serde_json::to_string(&user).map_err(|e| StorageError::Corrupt {
            key: SESSION_KEY.to_string(),
            reason: e.to_string(),
        })?;
        self.storage.set(SESSION_KEY, &raw)?;
        log::info!("{} signed in as {}", user.email, user.role);
        self.user = Some(user);
        Ok(())
    }

    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.storage.remove(SESSION_KEY)?;
        if let Some(user) = self.user.take() {
            log::info!("{} signed out", user.email);
        }
        Ok(())
    }
}
