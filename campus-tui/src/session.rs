//! Session guard and stored credentials.
//!
//! Admin actions authenticate with a bearer token kept in a small JSON
//! file next to the UI state. A separate session marker file plays the
//! role of a per-session flag: it is consulted exactly once at startup,
//! and if it is absent the stored credentials are purged before a new
//! marker is created. A clean exit removes the marker, so the next run
//! starts fresh; after a crash the marker survives and the interrupted
//! session resumes with its credentials intact.

use campus_core::UserData;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredAuth {
    pub token: String,
    pub user: UserData,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Consult the session marker once at startup. Returns `true` when an
/// existing session continues, `false` when a fresh session was started
/// (in which case any stored credentials were purged first).
pub fn ensure_session(marker_path: &Path, auth_path: &Path) -> Result<bool, SessionError> {
    if marker_path.exists() {
        return Ok(true);
    }
    clear_auth(auth_path)?;
    if let Some(parent) = marker_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(marker_path, "active")?;
    Ok(false)
}

/// Remove the session marker on clean exit, so the next startup treats
/// itself as a fresh session and purges any stored credentials.
pub fn end_session(marker_path: &Path) -> Result<(), SessionError> {
    if marker_path.exists() {
        std::fs::remove_file(marker_path)?;
    }
    Ok(())
}

pub fn load_auth(path: &Path) -> Result<Option<StoredAuth>, SessionError> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)?;
    let auth = serde_json::from_str::<StoredAuth>(&contents)?;
    Ok(Some(auth))
}

pub fn save_auth(path: &Path, auth: &StoredAuth) -> Result<(), SessionError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(auth)?;
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn clear_auth(path: &Path) -> Result<(), SessionError> {
    if path.exists() {
        std::fs::remove_file(path)?;
    }
    Ok(())
}
