// Form Layouts page: the "Using the Grid" and "Inline form" cards

use playwright_rs::{CheckOptions, Locator, Page};

use crate::error::Result;

/// Radio choice on the grid form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridOption {
    Option1,
    Option2,
}

impl GridOption {
    fn value(self) -> &'static str {
        match self {
            GridOption::Option1 => "Option 1",
            GridOption::Option2 => "Option 2",
        }
    }
}

pub struct FormLayoutsPage {
    page: Page,
}

impl FormLayoutsPage {
    const GRID_CARD: &'static str = "nb-card:has-text(\"Using the Grid\")";
    const INLINE_CARD: &'static str = "nb-card:has-text(\"Inline form\")";

    pub fn new(page: Page) -> Self {
        Self { page }
    }

    async fn grid_card(&self) -> Locator {
        self.page.locator(Self::GRID_CARD).await
    }

    async fn inline_card(&self) -> Locator {
        self.page.locator(Self::INLINE_CARD).await
    }

    /// Fills and submits the "Using the Grid" form.
    pub async fn submit_grid_form(
        &self,
        email: &str,
        password: &str,
        option: GridOption,
    ) -> Result<()> {
        let card = self.grid_card().await;
        card.locator("input[placeholder=\"Email\"]")
            .fill(email, None)
            .await?;
        card.locator("input[placeholder=\"Password\"]")
            .fill(password, None)
            .await?;

        // Nebular hides the native radio input behind its own styling.
        let radio = card.locator(&format!("input[type=\"radio\"][value=\"{}\"]", option.value()));
        radio
            .check(Some(CheckOptions::builder().force(true).build()))
            .await?;

        card.locator("button[type=\"submit\"]").click(None).await?;
        Ok(())
    }

    /// Fills and submits the "Inline form" card.
    pub async fn submit_inline_form(
        &self,
        name: &str,
        email: &str,
        remember_me: bool,
    ) -> Result<()> {
        let card = self.inline_card().await;
        card.locator("input[placeholder=\"Jane Doe\"]")
            .fill(name, None)
            .await?;
        card.locator("input[placeholder=\"Email\"]")
            .fill(email, None)
            .await?;

        if remember_me {
            card.locator("input[type=\"checkbox\"]")
                .first()
                .check(Some(CheckOptions::builder().force(true).build()))
                .await?;
        }

        card.locator("button[type=\"submit\"]").click(None).await?;
        Ok(())
    }

    /// Whether the grid form has been submitted (the app marks the form).
    pub async fn grid_form_submitted(&self) -> Result<bool> {
        let class = self
            .grid_card()
            .await
            .locator("form")
            .get_attribute("class")
            .await?;
        Ok(class.is_some_and(|c| c.contains("submitted")))
    }

    /// Whether the inline form has been submitted.
    pub async fn inline_form_submitted(&self) -> Result<bool> {
        let class = self
            .inline_card()
            .await
            .locator("form")
            .get_attribute("class")
            .await?;
        Ok(class.is_some_and(|c| c.contains("submitted")))
    }

    /// Current value of the grid form's email field.
    pub async fn grid_email_value(&self) -> Result<String> {
        self.grid_card()
            .await
            .locator("input[placeholder=\"Email\"]")
            .input_value(None)
            .await
            .map_err(Into::into)
    }
}
