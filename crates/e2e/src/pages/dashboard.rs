// IoT dashboard: light and coffee-maker status cards

use playwright_rs::{GotoOptions, Page, WaitUntil};

use crate::error::Result;

pub struct DashboardPage {
    page: Page,
    base_url: String,
}

impl DashboardPage {
    const ROUTE: &'static str = "/pages/iot-dashboard";
    const LIGHT_BUTTON: &'static str = "button:has-text(\"Light\")";
    const COFFEE_MAKER_CARD: &'static str = "ngx-status-card:has-text(\"Coffee Maker\")";

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

    pub async fn toggle_light(&self) -> Result<()> {
        self.page
            .locator(Self::LIGHT_BUTTON)
            .await
            .first()
            .click(None)
            .await
            .map_err(Into::into)
    }

    /// Whether the light card is in its active (on) state.
    pub async fn is_light_active(&self) -> Result<bool> {
        let classes = self
            .page
            .locator(Self::LIGHT_BUTTON)
            .await
            .first()
            .get_attribute("class")
            .await?;
        Ok(classes.is_some_and(|c| c.contains("active")))
    }

    pub async fn toggle_coffee_maker(&self) -> Result<()> {
        self.page
            .locator(Self::COFFEE_MAKER_CARD)
            .await
            .first()
            .click(None)
            .await
            .map_err(Into::into)
    }

    /// Displayed status text of the coffee-maker card ("ON"/"OFF").
    pub async fn coffee_maker_status(&self) -> Result<String> {
        let text = self
            .page
            .locator(Self::COFFEE_MAKER_CARD)
            .await
            .first()
            .inner_text()
            .await?;
        Ok(text.trim().to_string())
    }
}
