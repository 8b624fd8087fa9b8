use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::models::users::Role;

/// Environment variable overriding where the session file lives.
pub const SESSION_FILE_ENV: &str = "CRM_SESSION_FILE";

const DEFAULT_SESSION_FILE: &str = "session.json";

/// The identity of the currently authenticated user, as persisted on disk:
/// `{"user_id": int, "username": string, "email": string, "role": string}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: i32,
    pub username: String,
    pub email: String,
    pub role: Role,
}

/// File-backed store for the single local session.
///
/// The path is an explicit value rather than ambient global state, so
/// commands receive the store (or an already-loaded `Session`) as an
/// argument and tests can point it at a temporary directory.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the session file path from `CRM_SESSION_FILE`, falling back
    /// to `session.json` in the working directory.
    pub fn from_env() -> Self {
        let path = std::env::var(SESSION_FILE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE));
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist the session, creating parent directories as needed.
    pub fn save(&self, session: &Session) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let payload = serde_json::to_vec_pretty(session)?;
        fs::write(&self.path, payload)
    }

    /// Load the persisted session. An absent or malformed file is treated
    /// identically to "no session".
    pub fn load(&self) -> Option<Session> {
        let data = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&data).ok()
    }

    /// Remove the persisted session. Returns `false` when there was nothing
    /// to remove.
    pub fn clear(&self) -> std::io::Result<bool> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
