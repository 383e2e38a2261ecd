//! Auth Session
//!
//! The bearer token handed out at login/signup, plus the display name and
//! user id read from its JWT payload. The token is not verified here; the
//! server remains the authority on whether it is valid.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use sbrain_ui::storage::KeyValueStorage;
use serde::Deserialize;
use thiserror::Error;

pub const TOKEN_KEY: &str = "token";
pub const NAME_KEY: &str = "userName";
pub const USER_ID_KEY: &str = "userId";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Invalid token received: expected three segments")]
    MalformedToken,
    #[error("Invalid token received: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("Invalid token received: {0}")]
    Claims(#[from] serde_json::Error),
}

/// Claims S-Brain puts in its tokens
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Claims {
    name: String,
    unique_id: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub name: String,
    pub user_id: String,
}

impl Session {
    /// Decode the payload segment of a JWT
    pub fn from_token(token: &str) -> Result<Self, SessionError> {
        let mut segments = token.trim().split('.');
        let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
            (Some(_), Some(payload), Some(_), None) if !payload.is_empty() => payload,
            _ => return Err(SessionError::MalformedToken),
        };
        let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
        let claims: Claims = serde_json::from_slice(&bytes)?;
        let user_id = match claims.unique_id {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        Ok(Self {
            token: token.trim().to_string(),
            name: claims.name,
            user_id,
        })
    }

    pub fn save(&self, storage: &impl KeyValueStorage) {
        storage.set(TOKEN_KEY, &self.token);
        storage.set(NAME_KEY, &self.name);
        storage.set(USER_ID_KEY, &self.user_id);
    }

    /// Restore a persisted session; requires a token to be present
    pub fn load(storage: &impl KeyValueStorage) -> Option<Self> {
        let token = storage.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
        Some(Self {
            token,
            name: storage.get(NAME_KEY).unwrap_or_default(),
            user_id: storage.get(USER_ID_KEY).unwrap_or_default(),
        })
    }

    pub fn clear(storage: &impl KeyValueStorage) {
        storage.remove(TOKEN_KEY);
        storage.remove(NAME_KEY);
        storage.remove(USER_ID_KEY);
    }
}

#[cfg(test)]
pub(crate) fn make_token(claims: &str) -> String {
    format!(
        "{}.{}.signature",
        URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(claims)
    )
}
