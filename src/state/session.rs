//! Session Context
//!
//! Injected credential storage and user identity derivation. Pages never
//! touch browser storage directly; they go through the `Session` handle
//! provided at the app root, which keeps the auth flow deterministic under
//! test.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

const ACCESS_TOKEN_KEY: &str = "access_token";
const REFRESH_TOKEN_KEY: &str = "refresh_token";
const USER_EMAIL_KEY: &str = "user_email";

/// Key-value storage for the opaque credential strings.
pub trait CredentialStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser local storage.
pub struct BrowserStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

impl CredentialStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory store for deterministic tests.
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// Handle to the signed-in user's stored credentials, provided via context
/// at the app root.
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn CredentialStore>,
}

impl Session {
    pub fn browser() -> Self {
        Self::with_store(Rc::new(BrowserStore))
    }

    pub fn with_store(store: Rc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Stored email, `None` when nobody is signed in.
    pub fn email(&self) -> Option<String> {
        self.store.get(USER_EMAIL_KEY).filter(|email| !email.is_empty())
    }

    pub fn store_login(&self, access_token: &str, refresh_token: &str, email: &str) {
        self.store.set(ACCESS_TOKEN_KEY, access_token);
        self.store.set(REFRESH_TOKEN_KEY, refresh_token);
        self.store.set(USER_EMAIL_KEY, email);
    }

    /// Clears every stored credential. Tokens are opaque to the client and
    /// there is no server-side invalidation endpoint.
    pub fn clear(&self) {
        self.store.remove(ACCESS_TOKEN_KEY);
        self.store.remove(REFRESH_TOKEN_KEY);
        self.store.remove(USER_EMAIL_KEY);
    }
}

/// Display identity derived from a signed-in email address.
#[derive(Clone, Debug, PartialEq)]
pub struct Identity {
    pub email: String,
    pub name: String,
    pub initials: String,
}

impl Identity {
    /// Name is everything before the `'@'`; initials are the first two
    /// characters of the address, uppercased.
    pub fn from_email(email: &str) -> Self {
        let name = email.split('@').next().unwrap_or_default().to_string();
        let initials = email.chars().take(2).collect::<String>().to_uppercase();
        Self {
            email: email.to_string(),
            name,
            initials,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_derivation() {
        let identity = Identity::from_email("alice@example.com");
        assert_eq!(identity.name, "alice");
        assert_eq!(identity.initials, "AL");
        assert_eq!(identity.email, "alice@example.com");
    }

    #[test]
    fn identity_from_short_address() {
        let identity = Identity::from_email("a");
        assert_eq!(identity.name, "a");
        assert_eq!(identity.initials, "A");
    }

    #[test]
    fn session_round_trip() {
        let session = Session::with_store(Rc::new(MemoryStore::default()));
        assert_eq!(session.email(), None);

        session.store_login("acc", "ref", "alice@example.com");
        assert_eq!(session.email().as_deref(), Some("alice@example.com"));

        session.clear();
        assert_eq!(session.email(), None);
    }

    #[test]
    fn blank_stored_email_counts_as_signed_out() {
        let session = Session::with_store(Rc::new(MemoryStore::default()));
        session.store_login("acc", "ref", "");
        assert_eq!(session.email(), None);
    }
}
