// Registration page, wired to the fixture store

use std::time::Duration;

use playwright_rs::{CheckOptions, GotoOptions, Page, WaitUntil};

use crate::error::Result;
use crate::fixtures::{FixtureStore, NewUser, RegistrationStatus, UserRecord};
use crate::wait;

pub struct RegisterPage {
    page: Page,
    base_url: String,
    store: FixtureStore,
    env_append: Option<std::path::PathBuf>,
}

impl RegisterPage {
    const ROUTE: &'static str = "/auth/register";
    const FULL_NAME_INPUT: &'static str = "input[placeholder=\"Full Name\"]";
    const EMAIL_INPUT: &'static str = "input[placeholder=\"Email\"]";
    const PASSWORD_INPUT: &'static str = "input[placeholder=\"Password\"]";
    const CONFIRM_PASSWORD_INPUT: &'static str = "input[placeholder=\"Confirm Password\"]";
    const TERMS_CHECKBOX: &'static str = "input[type=\"checkbox\"]";
    const SUBMIT: &'static str = "button[type=\"submit\"]";
    const LOGIN_LINK: &'static str = "a:text-is(\"Log In\")";
    const SUCCESS_MESSAGE: &'static str = ".alert-success";
    const ERROR_MESSAGE: &'static str = ".alert-danger";

    pub fn new(page: Page, base_url: impl Into<String>, store: FixtureStore) -> Self {
        Self {
            page,
            base_url: base_url.into(),
            store,
            env_append: None,
        }
    }

    /// Also append successfully registered credentials to the given
    /// `.env` file (the `SAVE_TO_ENV` behavior).
    pub fn with_env_append(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.env_append = Some(path.into());
        self
    }

    pub async fn goto(&self) -> Result<()> {
        let url = format!("{}{}", self.base_url, Self::ROUTE);
        self.page
            .goto(
                &url,
                Some(GotoOptions::new().wait_until(WaitUntil::DomContentLoaded)),
            )
            .await?;
        Ok(())
    }

    /// Fills the registration form; the confirm field is only touched
    /// when the page actually renders one.
    pub async fn fill_form(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
        confirm_password: Option<&str>,
    ) -> Result<()> {
        self.page
            .locator(Self::FULL_NAME_INPUT)
            .await
            .first()
            .fill(full_name, None)
            .await?;
        self.page
            .locator(Self::EMAIL_INPUT)
            .await
            .first()
            .fill(email, None)
            .await?;
        self.page
            .locator(Self::PASSWORD_INPUT)
            .await
            .first()
            .fill(password, None)
            .await?;

        if let Some(confirm) = confirm_password {
            let field = self.page.locator(Self::CONFIRM_PASSWORD_INPUT).await.first();
            if field.is_visible().await? {
                field.fill(confirm, None).await?;
            }
        }
        Ok(())
    }

    /// Best-effort click on the terms checkbox; some revisions of the
    /// page do not render it, which is only worth a warning.
    pub async fn accept_terms(&self) {
        let checkbox = self.page.locator(Self::TERMS_CHECKBOX).await.first();
        let result = checkbox
            .check(Some(CheckOptions::builder().force(true).build()))
            .await;
        if let Err(error) = result {
            tracing::warn!(%error, "could not check the terms checkbox");
        }
    }

    pub async fn submit(&self) -> Result<()> {
        self.page
            .locator(Self::SUBMIT)
            .await
            .first()
            .click(None)
            .await
            .map_err(Into::into)
    }

    /// Full registration journey: fill, optionally accept terms,
    /// submit, record the outcome in the fixture store, and return the
    /// persisted record.
    pub async fn register_user(&self, user: &NewUser, accept_terms: bool) -> Result<UserRecord> {
        let status = match self.attempt(user, accept_terms).await {
            Ok(true) => RegistrationStatus::Registered,
            Ok(false) => RegistrationStatus::Failed,
            Err(error) => {
                tracing::warn!(%error, email = %user.email, "registration attempt errored");
                RegistrationStatus::Failed
            }
        };

        let record = UserRecord::new(user, status);
        if let Err(error) = self.store.append(record.clone()).await {
            tracing::warn!(%error, "could not persist registration record");
        }

        if status == RegistrationStatus::Registered {
            if let Some(env_path) = &self.env_append {
                let appended =
                    crate::fixtures::append_credentials_to_env(env_path, &user.email, &user.password)
                        .await;
                if let Err(error) = appended {
                    tracing::warn!(%error, "could not append credentials to .env");
                }
            }
        }
        Ok(record)
    }

    async fn attempt(&self, user: &NewUser, accept_terms: bool) -> Result<bool> {
        self.fill_form(
            &user.full_name,
            &user.email,
            &user.password,
            Some(&user.password),
        )
        .await?;
        if accept_terms {
            self.accept_terms().await;
        }
        self.submit().await?;
        Ok(self.is_registration_successful().await)
    }

    /// Waits for either the success or the error message, then reports
    /// which one won. Nothing showing up in time counts as failure.
    pub async fn is_registration_successful(&self) -> bool {
        let success = self.page.locator(Self::SUCCESS_MESSAGE).await.first();
        let error = self.page.locator(Self::ERROR_MESSAGE).await.first();

        let outcome = wait::until(
            "registration success or error message",
            Duration::from_secs(5),
            || {
                let success = success.clone();
                let error = error.clone();
                async move {
                    Ok(success.is_visible().await.unwrap_or(false)
                        || error.is_visible().await.unwrap_or(false))
                }
            },
        )
        .await;

        match outcome {
            Ok(()) => success.is_visible().await.unwrap_or(false),
            Err(_) => false,
        }
    }

    pub async fn error_message(&self) -> String {
        let message = self.page.locator(Self::ERROR_MESSAGE).await.first();
        if !wait::is_eventually_visible(&message, Duration::from_secs(3)).await {
            return String::new();
        }
        message
            .text_content()
            .await
            .ok()
            .flatten()
            .unwrap_or_default()
            .trim()
            .to_string()
    }

    pub async fn click_login_link(&self) -> Result<()> {
        self.page
            .locator(Self::LOGIN_LINK)
            .await
            .first()
            .click(None)
            .await?;
        wait::url_contains(&self.page, "/auth/login", wait::DEFAULT_TIMEOUT).await
    }

    pub async fn is_email_field_visible(&self) -> Result<bool> {
        self.page
            .locator(Self::EMAIL_INPUT)
            .await
            .first()
            .is_visible()
            .await
            .map_err(Into::into)
    }

    pub async fn is_password_field_visible(&self) -> Result<bool> {
        self.page
            .locator(Self::PASSWORD_INPUT)
            .await
            .first()
            .is_visible()
            .await
            .map_err(Into::into)
    }

    pub async fn is_register_button_visible(&self) -> Result<bool> {
        self.page
            .locator(Self::SUBMIT)
            .await
            .first()
            .is_visible()
            .await
            .map_err(Into::into)
    }

    pub fn store(&self) -> &FixtureStore {
        &self.store
    }
}
