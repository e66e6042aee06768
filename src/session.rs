//! Session
//!
//! Explicit authentication state. `login` and `logout` are the only
//! transitions; the flag is persisted through a [`SessionStore`].

use std::sync::{Arc, Mutex};

use leptos::prelude::*;
use thiserror::Error;

use crate::config::{AppConfig, AUTH_STORAGE_KEY};

/// Where the authentication flag lives between page loads
pub trait SessionStore: Send + Sync {
    fn load(&self) -> bool;
    fn save(&self, authenticated: bool);
}

/// Browser `localStorage`
#[derive(Debug, Clone, Copy)]
pub struct LocalStorageStore {
    key: &'static str,
}

impl LocalStorageStore {
    pub fn new() -> Self {
        Self { key: AUTH_STORAGE_KEY }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalStorageStore {
    fn load(&self) -> bool {
        Self::storage()
            .and_then(|s| s.get_item(self.key).ok().flatten())
            .as_deref()
            == Some("true")
    }

    fn save(&self, authenticated: bool) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, session not persisted");
            return;
        };
        let result = if authenticated {
            storage.set_item(self.key, "true")
        } else {
            storage.remove_item(self.key)
        };
        if let Err(e) = result {
            tracing::warn!(error = ?e, "failed to persist session");
        }
    }
}

/// Process-local store
#[derive(Debug, Default)]
pub struct MemoryStore {
    flag: Mutex<bool>,
}

impl SessionStore for MemoryStore {
    fn load(&self) -> bool {
        self.flag.lock().map(|f| *f).unwrap_or(false)
    }

    fn save(&self, authenticated: bool) {
        if let Ok(mut flag) = self.flag.lock() {
            *flag = authenticated;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// Credential check plus persistence, without any reactivity
#[derive(Clone)]
pub struct Authenticator {
    store: Arc<dyn SessionStore>,
    username: String,
    password: String,
}

impl Authenticator {
    pub fn new(store: Arc<dyn SessionStore>, config: &AppConfig) -> Self {
        Self {
            store,
            username: config.admin_user.clone(),
            password: config.admin_password.clone(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.load()
    }

    pub fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        if username.trim() != self.username || password != self.password {
            return Err(AuthError::InvalidCredentials);
        }
        self.store.save(true);
        Ok(())
    }

    pub fn logout(&self) {
        self.store.save(false);
    }
}

/// Reactive session handle provided through context
#[derive(Clone)]
pub struct Session {
    auth: Authenticator,
    authenticated: RwSignal<bool>,
}

impl Session {
    pub fn new(auth: Authenticator) -> Self {
        let authenticated = RwSignal::new(auth.is_authenticated());
        Self { auth, authenticated }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.get()
    }

    pub fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        self.auth.login(username, password)?;
        tracing::info!(user = username.trim(), "logged in");
        self.authenticated.set(true);
        Ok(())
    }

    pub fn logout(&self) {
        self.auth.logout();
        tracing::info!("logged out");
        self.authenticated.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> (Authenticator, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::default());
        let config = AppConfig::default().with_credentials("owner", "s3cret");
        (Authenticator::new(store.clone(), &config), store)
    }

    #[test]
    fn test_starts_logged_out() {
        let (auth, _) = auth();
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_login_persists_flag() {
        let (auth, store) = auth();
        auth.login(" owner ", "s3cret").unwrap();
        assert!(auth.is_authenticated());
        assert!(store.load());
    }

    #[test]
    fn test_bad_credentials_leave_state_unchanged() {
        let (auth, _) = auth();
        assert_eq!(auth.login("owner", "wrong"), Err(AuthError::InvalidCredentials));
        assert_eq!(auth.login("intruder", "s3cret"), Err(AuthError::InvalidCredentials));
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_logout_clears_flag() {
        let (auth, store) = auth();
        auth.login("owner", "s3cret").unwrap();
        auth.logout();
        assert!(!auth.is_authenticated());
        assert!(!store.load());
    }

    #[test]
    fn test_state_survives_new_authenticator() {
        let (auth, store) = auth();
        auth.login("owner", "s3cret").unwrap();
        let reloaded = Authenticator::new(store, &AppConfig::default());
        assert!(reloaded.is_authenticated());
    }
}
