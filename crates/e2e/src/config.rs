// Suite configuration from the process environment
//
// A `.env` file next to the suite is honored when present. All values
// are optional; the base URL defaults to a local ngx-admin instance.

use std::path::{Path, PathBuf};

use crate::fixtures::FixtureStore;

/// Default ngx-admin dev-server address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4200";

/// An email/password pair usable on the auth pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Environment-driven suite configuration.
#[derive(Debug, Clone)]
pub struct TestConfig {
    /// Root URL of the application under test.
    pub base_url: String,
    /// Explicit test-user override (`TEST_USER_EMAIL`/`TEST_USER_PASSWORD`).
    pub user_email: Option<String>,
    pub user_password: Option<String>,
    /// Fallback pair (`DEFAULT_TEST_EMAIL`/`DEFAULT_TEST_PASSWORD`).
    pub default_email: Option<String>,
    pub default_password: Option<String>,
    /// When set, freshly registered credentials are also appended to `.env`.
    pub save_to_env: bool,
}

impl TestConfig {
    /// Reads configuration from the environment, loading `.env` first
    /// on a best-effort basis.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self {
            base_url: std::env::var("NGX_ADMIN_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            user_email: std::env::var("TEST_USER_EMAIL").ok(),
            user_password: std::env::var("TEST_USER_PASSWORD").ok(),
            default_email: std::env::var("DEFAULT_TEST_EMAIL").ok(),
            default_password: std::env::var("DEFAULT_TEST_PASSWORD").ok(),
            save_to_env: std::env::var("SAVE_TO_ENV").as_deref() == Ok("true"),
        }
    }

    /// Configuration pointing at an explicit base URL, ignoring the
    /// environment. Used by the integration tests with the embedded
    /// demo server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            user_email: None,
            user_password: None,
            default_email: None,
            default_password: None,
            save_to_env: false,
        }
    }

    /// Absolute URL for an application route.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// The `.env` file registration should mirror credentials into,
    /// when `SAVE_TO_ENV` is set.
    pub fn env_append_path(&self) -> Option<PathBuf> {
        self.save_to_env
            .then(|| Path::new(env!("CARGO_MANIFEST_DIR")).join(".env"))
    }

    /// Resolves login credentials, in order: explicit environment
    /// override, then the fixture store's last registered user, then
    /// the fallback defaults.
    pub async fn resolve_credentials(&self, store: &FixtureStore) -> Option<Credentials> {
        if let (Some(email), Some(password)) = (&self.user_email, &self.user_password) {
            return Some(Credentials {
                email: email.clone(),
                password: password.clone(),
            });
        }

        if let Some(user) = store.last_registered().await {
            return Some(Credentials {
                email: user.email,
                password: user.password,
            });
        }

        if let (Some(email), Some(password)) = (&self.default_email, &self.default_password) {
            return Some(Credentials {
                email: email.clone(),
                password: password.clone(),
            });
        }

        None
    }
}
