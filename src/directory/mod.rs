use std::collections::HashMap;
use tracing::info;
use crate::error::{AppError, AppResult};
use crate::events;

pub mod models;

pub use models::{Record, UserRecord};

/// Built-in users: (username, secret, realm).
const SEED_USERS: [(&str, &str, &str); 2] = [
    ("1001", "pass123", "sentiric"),
    ("1002", "test456", "sentiric"),
];

/// Read-only username → record table, built once at startup.
///
/// There are no mutating methods after construction, so a single instance can
/// be shared across request tasks without locking.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    users: HashMap<String, Record>,
}

impl Directory {
    /// Directory populated with the built-in users.
    pub fn seeded() -> Self {
        Self::from_entries(
            SEED_USERS
                .iter()
                .map(|(username, secret, realm)| (username.to_string(), Record::new(*secret, *realm))),
        )
    }

    /// Build a directory from `(username, record)` pairs. A repeated username
    /// keeps its last record.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Record)>,
    {
        Self {
            users: entries.into_iter().collect(),
        }
    }

    pub fn get(&self, username: &str) -> Option<&Record> {
        self.users.get(username)
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Exact-match lookup of `username`, with no trimming or case folding.
    ///
    /// Logs the request and the outcome; the secret is never logged.
    pub fn lookup_user(&self, username: &str) -> AppResult<UserRecord> {
        info!(event = events::USER_LOOKUP_RECEIVED, username = ?username, "User lookup received");

        match self.get(username) {
            Some(record) => {
                info!(event = events::USER_LOOKUP, username = ?username, "User found, returning record");
                Ok(UserRecord::from_record(username, record))
            }
            None => {
                info!(
                    event = events::USER_LOOKUP_FAILED,
                    username = ?username,
                    reason = "not_found",
                    "User not found"
                );
                Err(AppError::UserNotFound)
            }
        }
    }
}
