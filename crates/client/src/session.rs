//! Session persistence.
//!
//! The current user identity and an authenticated flag live under fixed keys
//! in a persistent local key-value store; presence of both on load restores
//! the session without re-contacting the server. Logout is a pure local
//! operation: it clears the keys and never calls the server.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use fridgemate_core::{Email, User, UserId};

/// Fixed session store keys.
pub mod keys {
    /// Key holding the serialized [`CurrentUser`](super::CurrentUser).
    pub const USER: &str = "user";

    /// Key holding the authenticated flag (`"true"` when logged in).
    pub const IS_AUTHENTICATED: &str = "isAuthenticated";
}

/// Errors that can occur reading or writing the session store.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Underlying store I/O failed.
    #[error("session store error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored value could not be (de)serialized.
    #[error("session data error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// A persistent string key-value store, the stand-in for browser
/// `localStorage`.
pub trait SessionStore {
    /// Read a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Write a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Remove a value; removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), SessionError>;
}

/// In-memory store, used by tests and one-shot tools.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SessionError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed store: a single JSON object persisted write-through, so the
/// session survives process restarts.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    /// Open (or lazily create) the store at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, entries })
    }

    fn persist(&self) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<(), SessionError> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

/// Session-stored user identity.
///
/// Minimal data persisted to identify the logged-in user across reloads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentUser {
    /// User's database ID.
    pub id: UserId,
    /// User's display name.
    pub name: String,
    /// User's email address.
    pub email: Email,
}

impl From<User> for CurrentUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Explicit session context passed to screen controllers.
///
/// Owns the persisted identity so that no component touches the store
/// directly: initialization reads it once, login writes through it, logout
/// tears it down.
#[derive(Debug)]
pub struct Session<S: SessionStore> {
    store: S,
    current: Option<CurrentUser>,
}

impl<S: SessionStore> Session<S> {
    /// Restore a session from the store.
    ///
    /// The session is considered live only when BOTH the identity and the
    /// authenticated flag are present; anything else (missing keys,
    /// unparseable identity) falls back to logged-out without error.
    pub fn load(store: S) -> Self {
        let authenticated = matches!(
            store.get(keys::IS_AUTHENTICATED),
            Ok(Some(ref flag)) if flag == "true"
        );
        let current = if authenticated {
            store
                .get(keys::USER)
                .ok()
                .flatten()
                .and_then(|raw| serde_json::from_str(&raw).ok())
        } else {
            None
        };
        if current.is_some() {
            debug!("session restored from store");
        }
        Self { store, current }
    }

    /// The logged-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&CurrentUser> {
        self.current.as_ref()
    }

    /// Whether a user is logged in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Persist a successful login.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn sign_in(&mut self, user: CurrentUser) -> Result<(), SessionError> {
        self.store.set(keys::USER, &serde_json::to_string(&user)?)?;
        self.store.set(keys::IS_AUTHENTICATED, "true")?;
        self.current = Some(user);
        Ok(())
    }

    /// Log out: clears the persisted identity. Local only, no server call.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn sign_out(&mut self) -> Result<(), SessionError> {
        self.store.remove(keys::USER)?;
        self.store.remove(keys::IS_AUTHENTICATED)?;
        self.current = None;
        Ok(())
    }

    /// Consume the session and hand back the store (used to simulate a
    /// reload in tests).
    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn current_user() -> CurrentUser {
        CurrentUser {
            id: UserId::new(1),
            name: "홍길동".to_owned(),
            email: Email::parse("hong@example.com").unwrap(),
        }
    }

    #[test]
    fn test_fresh_store_is_logged_out() {
        let session = Session::load(MemoryStore::new());
        assert!(!session.is_authenticated());
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_sign_in_persists_both_keys() {
        let mut session = Session::load(MemoryStore::new());
        session.sign_in(current_user()).unwrap();
        assert!(session.is_authenticated());

        let store = session.into_store();
        assert_eq!(
            store.get(keys::IS_AUTHENTICATED).unwrap().as_deref(),
            Some("true")
        );
        assert!(store.get(keys::USER).unwrap().is_some());

        // Simulated reload: a new session over the same store restores
        let session = Session::load(store);
        assert_eq!(session.current_user(), Some(&current_user()));
    }

    #[test]
    fn test_sign_out_is_local_and_clears_keys() {
        let mut session = Session::load(MemoryStore::new());
        session.sign_in(current_user()).unwrap();
        session.sign_out().unwrap();
        assert!(!session.is_authenticated());

        let store = session.into_store();
        assert!(store.get(keys::USER).unwrap().is_none());
        assert!(store.get(keys::IS_AUTHENTICATED).unwrap().is_none());
    }

    #[test]
    fn test_flag_without_identity_stays_logged_out() {
        let mut store = MemoryStore::new();
        store.set(keys::IS_AUTHENTICATED, "true").unwrap();
        let session = Session::load(store);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_identity_without_flag_stays_logged_out() {
        let mut store = MemoryStore::new();
        store
            .set(keys::USER, &serde_json::to_string(&current_user()).unwrap())
            .unwrap();
        let session = Session::load(store);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_file_store_roundtrip() {
        let path = std::env::temp_dir().join(format!(
            "fridgemate-session-test-{}.json",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let mut store = FileStore::open(&path).unwrap();
        store.set(keys::IS_AUTHENTICATED, "true").unwrap();
        store.set(keys::USER, "{\"id\":1,\"name\":\"홍길동\",\"email\":\"hong@example.com\"}")
            .unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get(keys::IS_AUTHENTICATED).unwrap().as_deref(),
            Some("true")
        );

        let _ = std::fs::remove_file(&path);
    }
}
