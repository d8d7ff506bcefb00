//! Bearer token sources.
//!
//! The settings form never owns the token: it is handed a [`TokenSource`] and
//! asks it for the current value before every request.

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use keyring::Entry;

use crate::error::{Error, Result};

const KEYRING_SERVICE_NAME: &str = "siteadmin";

/// Name the bearer token is persisted under.
pub const TOKEN_KEY: &str = "token";

/// Read-only access to the current bearer token.
pub trait TokenSource {
    /// Returns the stored token, or `None` when nothing is stored.
    fn token(&self) -> Result<Option<String>>;
}

impl<T: TokenSource + ?Sized> TokenSource for &T {
    fn token(&self) -> Result<Option<String>> {
        (**self).token()
    }
}

impl<T: TokenSource + ?Sized> TokenSource for Arc<T> {
    fn token(&self) -> Result<Option<String>> {
        (**self).token()
    }
}

impl<T: TokenSource + ?Sized> TokenSource for Rc<T> {
    fn token(&self) -> Result<Option<String>> {
        (**self).token()
    }
}

/// Token persisted in the OS keyring (`keyring` crate).
#[derive(Debug, Clone)]
pub struct KeyringTokenStore {
    service_name: String,
    username: String,
}

impl Default for KeyringTokenStore {
    fn default() -> Self {
        Self {
            service_name: KEYRING_SERVICE_NAME.to_string(),
            username: TOKEN_KEY.to_string(),
        }
    }
}

impl KeyringTokenStore {
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn save_token(&self, token: &str) -> Result<()> {
        let token = token.trim();
        if token.is_empty() {
            return Err(Error::InvalidConfiguration(
                "token must not be empty".to_string(),
            ));
        }
        self.entry()?
            .set_password(token)
            .map_err(|error| Error::SecureStorage(error.to_string()))
    }

    pub fn clear_token(&self) -> Result<()> {
        match self.entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(error) => Err(Error::SecureStorage(error.to_string())),
        }
    }

    fn entry(&self) -> Result<Entry> {
        Entry::new(&self.service_name, &self.username)
            .map_err(|error| Error::SecureStorage(error.to_string()))
    }
}

impl TokenSource for KeyringTokenStore {
    fn token(&self) -> Result<Option<String>> {
        match self.entry()?.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(error) => Err(Error::SecureStorage(error.to_string())),
        }
    }
}

/// A fixed, in-process token.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    /// A source that never has a token.
    pub const fn none() -> Self {
        Self(None)
    }
}

impl fmt::Debug for StaticToken {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self.0.as_ref().map(|_| "[REDACTED]");
        formatter.debug_tuple("StaticToken").field(&shown).finish()
    }
}

impl TokenSource for StaticToken {
    fn token(&self) -> Result<Option<String>> {
        Ok(self.0.clone())
    }
}
