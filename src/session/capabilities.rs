//! Capability URLs advertised by a RETS server.
//!
//! A session starts with a single `Login` capability derived from the
//! connection URL. After a successful login round trip, the Login handler
//! replaces the whole set with the server's advertised capability list
//! (Search, GetMetadata, GetObject, Logout, ...).

use std::collections::HashMap;

/// Capability name of the login endpoint.
pub const LOGIN_CAPABILITY: &str = "Login";

/// Capability-name to URL mapping for a session.
#[derive(Debug, Clone)]
pub struct CapabilityUrls {
    urls: HashMap<String, String>,
    /// Login URL derived from the connection options, kept so the set can
    /// be reset on logout and so `Login` always resolves.
    initial_login: String,
}

impl CapabilityUrls {
    /// Create the initial set containing only the `Login` capability.
    pub(crate) fn new(login_url: String) -> Self {
        let mut urls = HashMap::new();
        urls.insert(LOGIN_CAPABILITY.to_string(), login_url.clone());
        Self {
            urls,
            initial_login: login_url,
        }
    }

    /// Look up a capability URL by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.urls.get(name).map(String::as_str)
    }

    /// The login endpoint URL.
    ///
    /// Falls back to the connection-time URL if a server capability list
    /// omitted `Login`.
    pub fn login(&self) -> &str {
        self.get(LOGIN_CAPABILITY).unwrap_or(&self.initial_login)
    }

    /// Iterate over advertised capability names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.urls.keys().map(String::as_str)
    }

    /// Number of capabilities currently known.
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// True when no capabilities are known (only possible after a
    /// wholesale replacement with an empty server list).
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Replace the set wholesale with a server-advertised list.
    pub(crate) fn replace(&mut self, urls: HashMap<String, String>) {
        self.urls = urls;
    }

    /// Reset back to just the original `Login` entry.
    pub(crate) fn reset(&mut self) {
        self.urls.clear();
        self.urls
            .insert(LOGIN_CAPABILITY.to_string(), self.initial_login.clone());
    }
}
