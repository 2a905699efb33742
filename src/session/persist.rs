//! Saving and restoring the session through a [`KeyValueStore`].

use tracing::{debug, warn};

use crate::api::UserProfile;

use super::context::Session;
use super::credentials::SecureString;
use super::storage::{KeyValueStore, StorageError};

/// Storage key of the raw access token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Storage key of the JSON-serialized user profile.
pub const USER_KEY: &str = "user";

/// Load a previously persisted session.
///
/// Only a complete, well-formed pair is adopted. A lone token, a lone
/// profile, an unparsable profile or an unreadable store all count as "no
/// session", and any leftover half is removed.
pub fn load_session(store: &dyn KeyValueStore) -> Option<Session> {
    let token = read(store, ACCESS_TOKEN_KEY);
    let user = read(store, USER_KEY);

    let session = match (&token, &user) {
        (Some(token), Some(user)) if !token.is_empty() => {
            match serde_json::from_str::<UserProfile>(user) {
                Ok(user) => Some(Session {
                    token: SecureString::new(token.as_str()),
                    user,
                }),
                Err(e) => {
                    warn!(error = %e, "Stored user profile is malformed");
                    None
                }
            }
        }
        _ => None,
    };

    if session.is_none() && (token.is_some() || user.is_some()) {
        debug!("Removing incomplete persisted session");
        if let Err(e) = forget_session(store) {
            warn!(error = %e, "Failed to remove incomplete persisted session");
        }
    }

    session
}

/// Persist both halves of a session.
pub fn save_session(store: &dyn KeyValueStore, session: &Session) -> Result<(), StorageError> {
    let user = serde_json::to_string(&session.user)?;
    store.set(ACCESS_TOKEN_KEY, session.token.expose())?;
    store.set(USER_KEY, &user)
}

/// Remove any persisted session.
pub fn forget_session(store: &dyn KeyValueStore) -> Result<(), StorageError> {
    store.remove(ACCESS_TOKEN_KEY)?;
    store.remove(USER_KEY)
}

fn read(store: &dyn KeyValueStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "Failed to read persisted value");
            None
        }
    }
}
