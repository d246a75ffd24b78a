// Login page

use std::time::Duration;

use playwright_rs::{CheckOptions, GotoOptions, Page, WaitUntil};

use crate::config::Credentials;
use crate::error::Result;
use crate::wait;

pub struct LoginPage {
    page: Page,
    base_url: String,
}

impl LoginPage {
    const ROUTE: &'static str = "/auth/login";
    const EMAIL_INPUT: &'static str = "input[type=\"email\"]";
    const PASSWORD_INPUT: &'static str = "input[type=\"password\"]";
    const REMEMBER_ME: &'static str = "input[type=\"checkbox\"]";
    const SUBMIT: &'static str = "button[type=\"submit\"]";
    const ERROR_MESSAGE: &'static str = ".alert-danger";
    const REGISTER_LINK: &'static str = "a:text-is(\"Register\")";
    const FORGOT_PASSWORD_LINK: &'static str = "a:text-is(\"Forgot Password?\")";
    const DASHBOARD_ROUTE: &'static str = "/pages/iot-dashboard";

    pub fn new(page: Page, base_url: impl Into<String>) -> Self {
        Self {
            page,
            base_url: base_url.into(),
        }
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

    pub async fn fill_form(&self, email: &str, password: &str) -> Result<()> {
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
        Ok(())
    }

    pub async fn clear_form(&self) -> Result<()> {
        self.page
            .locator(Self::EMAIL_INPUT)
            .await
            .first()
            .clear(None)
            .await?;
        self.page
            .locator(Self::PASSWORD_INPUT)
            .await
            .first()
            .clear(None)
            .await?;
        Ok(())
    }

    pub async fn set_remember_me(&self, checked: bool) -> Result<()> {
        let checkbox = self.page.locator(Self::REMEMBER_ME).await.first();
        if checkbox.is_visible().await? {
            checkbox
                .set_checked(checked, Some(CheckOptions::builder().force(true).build()))
                .await?;
        }
        Ok(())
    }

    pub async fn is_remember_me_checked(&self) -> Result<bool> {
        let checkbox = self.page.locator(Self::REMEMBER_ME).await.first();
        if checkbox.is_visible().await? {
            Ok(checkbox.is_checked().await?)
        } else {
            Ok(false)
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

    /// Full login journey. Returns true when the app navigates to the
    /// dashboard, false when an error is shown or nothing happens in
    /// time; failures along the way are logged, not propagated.
    pub async fn login(&self, credentials: &Credentials, remember_me: bool) -> bool {
        match self.try_login(credentials, remember_me).await {
            Ok(success) => success,
            Err(error) => {
                tracing::warn!(%error, "login attempt failed");
                false
            }
        }
    }

    async fn try_login(&self, credentials: &Credentials, remember_me: bool) -> Result<bool> {
        self.fill_form(&credentials.email, &credentials.password)
            .await?;
        if remember_me {
            self.set_remember_me(true).await?;
        }
        self.submit().await?;

        // Race: either the dashboard route loads or an error shows up.
        let error_message = self.page.locator(Self::ERROR_MESSAGE).await.first();
        let outcome = wait::until(
            "login to succeed or fail visibly",
            Duration::from_secs(5),
            || {
                let url = self.page.url();
                let error_message = error_message.clone();
                async move {
                    if url.contains(Self::DASHBOARD_ROUTE) {
                        return Ok(true);
                    }
                    Ok(error_message.is_visible().await.unwrap_or(false))
                }
            },
        )
        .await;

        match outcome {
            Ok(()) => Ok(self.page.url().contains(Self::DASHBOARD_ROUTE)),
            Err(_) => Ok(false),
        }
    }

    /// Text of the login error, or an empty string when none appears
    /// within three seconds.
    pub async fn error_message(&self) -> String {
        let message = self.page.locator(Self::ERROR_MESSAGE).await.first();
        if !wait::is_eventually_visible(&message, Duration::from_secs(3)).await {
            return String::new();
        }
        match message.text_content().await {
            Ok(text) => text.unwrap_or_default().trim().to_string(),
            Err(error) => {
                tracing::warn!(%error, "could not read login error message");
                String::new()
            }
        }
    }

    pub async fn is_error_displayed(&self) -> Result<bool> {
        self.page
            .locator(Self::ERROR_MESSAGE)
            .await
            .first()
            .is_visible()
            .await
            .map_err(Into::into)
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

    pub async fn is_login_button_enabled(&self) -> Result<bool> {
        self.page
            .locator(Self::SUBMIT)
            .await
            .first()
            .is_enabled()
            .await
            .map_err(Into::into)
    }

    pub async fn click_register_link(&self) -> Result<()> {
        self.page
            .locator(Self::REGISTER_LINK)
            .await
            .first()
            .click(None)
            .await?;
        wait::url_contains(&self.page, "/auth/register", wait::DEFAULT_TIMEOUT).await
    }

    pub async fn click_forgot_password_link(&self) -> Result<()> {
        let link = self.page.locator(Self::FORGOT_PASSWORD_LINK).await.first();
        if link.is_visible().await? {
            link.click(None).await?;
        }
        Ok(())
    }

    /// URL-based probe: logged in means we are off the auth pages.
    pub fn is_logged_in(&self) -> bool {
        let url = self.page.url();
        !url.contains("/auth/login") && !url.contains("/auth/register")
    }
}
