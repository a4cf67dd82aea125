//! Auth Cache
//!
//! The one piece of persistent client-side state: `{ token, user }`,
//! stored as a single serialized local-storage value and read
//! synchronously on boot so protected routes don't flicker through a
//! redirect while the session loads.

use serde::{Deserialize, Serialize};

use crate::api::types::User;

const STORAGE_KEY: &str = "farmunity_auth";

/// Cached auth blob.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Persist the session after login/signup.
pub fn save_auth(session: &AuthSession) {
    if let Some(storage) = storage() {
        if let Ok(raw) = serde_json::to_string(session) {
            let _ = storage.set_item(STORAGE_KEY, &raw);
        }
    }
}

/// Read the cached session. Corrupt JSON is treated as logged out.
pub fn get_auth() -> Option<AuthSession> {
    let raw = storage()?.get_item(STORAGE_KEY).ok()??;
    parse_session(&raw)
}

/// Drop the cached session (logout, or any 401 from the API).
pub fn clear_auth() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}

/// Bearer token for authenticated requests.
pub fn auth_token() -> Option<String> {
    get_auth().map(|s| s.token)
}

fn parse_session(raw: &str) -> Option<AuthSession> {
    serde_json::from_str(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_round_trips_through_json() {
        let session = AuthSession {
            token: "jwt-token".into(),
            user: User {
                id: "u1".into(),
                name: "Priya".into(),
                email: "priya@example.com".into(),
                role: "Buyer".into(),
                location: Some("Karnataka".into()),
                phone: None,
                rating: Some(4.8),
                created_at: None,
            },
        };
        let raw = serde_json::to_string(&session).unwrap();
        assert_eq!(parse_session(&raw), Some(session));
    }

    #[test]
    fn corrupt_blob_reads_as_logged_out() {
        assert_eq!(parse_session("not-json"), None);
        assert_eq!(parse_session("{\"token\":1}"), None);
        assert_eq!(parse_session(""), None);
    }
}
