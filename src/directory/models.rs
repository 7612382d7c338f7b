use serde::Serialize;

/// Stored credential data for one user. The username is the directory key
/// and is not repeated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub secret: String,
    pub realm: String,
}

impl Record {
    pub fn new(secret: impl Into<String>, realm: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            realm: realm.into(),
        }
    }
}

/// Lookup result, serialized as the `GET /users/{username}` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub username: String,
    pub secret: String,
    pub realm: String,
}

impl UserRecord {
    pub fn from_record(username: &str, record: &Record) -> Self {
        Self {
            username: username.to_string(),
            secret: record.secret.clone(),
            realm: record.realm.clone(),
        }
    }
}
