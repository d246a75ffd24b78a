// JSON-file-backed test fixtures
//
// Registration tests persist the accounts they create so later runs can
// log in with them. The file is rewritten wholesale on each append;
// the suite runs tests sequentially, so there is no locking.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Outcome of a registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    Registered,
    Failed,
}

/// Credentials for a registration attempt, before the outcome is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

const FIRST_NAMES: [&str; 10] = [
    "Emma", "Liam", "Olivia", "Noah", "Ava", "Ethan", "Sophia", "Mason", "Isabella", "William",
];
const LAST_NAMES: [&str; 10] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez",
];

impl NewUser {
    /// Generates a random, memorable account: `first.last123@test.com`.
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        let number = rng.gen_range(1..1000);
        let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
        Self {
            full_name: format!("{first} {last}"),
            email: format!(
                "{}.{}{}@test.com",
                first.to_lowercase(),
                last.to_lowercase(),
                number
            ),
            password: format!("Welcome{number}!"),
        }
    }
}

/// One persisted registration record.
///
/// Passwords are stored in plaintext for test convenience only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub registered_at: DateTime<Utc>,
    pub status: RegistrationStatus,
}

impl UserRecord {
    /// Stamps a registration attempt with its outcome and the current time.
    pub fn new(user: &NewUser, status: RegistrationStatus) -> Self {
        Self {
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
            registered_at: Utc::now(),
            status,
        }
    }
}

/// On-disk document shape: the append-only list plus a pointer to the
/// most recently added record.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserStore {
    registered_users: Vec<UserRecord>,
    last_registered_user: Option<UserRecord>,
}

/// Append-only store of registration records backed by a JSON file.
pub struct FixtureStore {
    path: PathBuf,
}

impl FixtureStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The suite's conventional location: `test-data/userData.json`
    /// next to this crate.
    pub fn default_location() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("test-data/userData.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `record` to the store, creating the file and its parent
    /// directory if absent. Also updates the last-registered pointer.
    ///
    /// Read-modify-write of the whole document; last writer wins.
    pub async fn append(&self, record: UserRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let mut store = self.load().await?;
        store.last_registered_user = Some(record.clone());
        store.registered_users.push(record);
        let json = serde_json::to_string_pretty(&store)?;
        tokio::fs::write(&self.path, json).await?;
        tracing::debug!(
            path = %self.path.display(),
            total = store.registered_users.len(),
            "saved registration record"
        );
        Ok(())
    }

    /// Most recent record whose status is `registered`.
    ///
    /// A nonexistent or unreadable file yields `None`, never an error.
    pub async fn last_registered(&self) -> Option<UserRecord> {
        match self.load().await {
            Ok(store) => store
                .registered_users
                .into_iter()
                .rev()
                .find(|user| user.status == RegistrationStatus::Registered),
            Err(error) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %error,
                    "could not read fixture store"
                );
                None
            }
        }
    }

    /// Number of persisted records.
    pub async fn len(&self) -> usize {
        self.load()
            .await
            .map(|store| store.registered_users.len())
            .unwrap_or(0)
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn load(&self) -> Result<UserStore> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                Ok(UserStore::default())
            }
            Err(error) => Err(error.into()),
        }
    }
}

/// Appends the given credentials to a local `.env` file so the next run
/// can pick them up as `TEST_USER_EMAIL`/`TEST_USER_PASSWORD`.
pub async fn append_credentials_to_env(env_path: &Path, email: &str, password: &str) -> Result<()> {
    let existing = match tokio::fs::read_to_string(env_path).await {
        Ok(content) => content,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(error) => return Err(error.into()),
    };
    let appended = format!(
        "{existing}\n# Last registered user (auto-generated)\n\
        TEST_USER_EMAIL={email}\nTEST_USER_PASSWORD={password}\n"
    );
    tokio::fs::write(env_path, appended).await?;
    Ok(())
}
