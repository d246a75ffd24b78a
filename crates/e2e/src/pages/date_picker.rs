// Datepicker page: calendar popup from the "Form Picker" input

use chrono::{Datelike, Duration, Local};
use playwright_rs::Page;

use crate::error::Result;
use crate::wait;

pub struct DatePickerPage {
    page: Page,
}

impl DatePickerPage {
    const PICKER_INPUT: &'static str = "input[placeholder=\"Form Picker\"]";
    const CALENDAR: &'static str = "nb-calendar";
    const DAY_CELL: &'static str = "nb-calendar-day-cell";

    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// Opens the calendar popup and waits for it to render.
    pub async fn open_calendar(&self) -> Result<()> {
        self.page
            .locator(Self::PICKER_INPUT)
            .await
            .click(None)
            .await?;
        let calendar = self.page.locator(Self::CALENDAR).await;
        wait::visible(&calendar, wait::DEFAULT_TIMEOUT).await
    }

    /// Clicks the given day in the open calendar; defaults to tomorrow.
    ///
    /// Day cells are matched by exact text, so "2" never hits "21".
    pub async fn select_day(&self, day: Option<u32>) -> Result<()> {
        let target = day.unwrap_or_else(|| (Local::now() + Duration::days(1)).day());
        let cell = self
            .page
            .locator(Self::DAY_CELL)
            .await
            .locator(&format!("text=\"{target}\""))
            .first();
        cell.click(None).await?;

        // The popup closes and the input reflects the chosen date.
        let input = self.page.locator(Self::PICKER_INPUT).await;
        wait::until(
            "date picker input to be filled",
            wait::DEFAULT_TIMEOUT,
            || {
                let input = input.clone();
                async move { Ok(!input.input_value(None).await?.is_empty()) }
            },
        )
        .await
    }

    /// The formatted date currently shown in the picker input.
    pub async fn selected_date(&self) -> Result<String> {
        self.page
            .locator(Self::PICKER_INPUT)
            .await
            .input_value(None)
            .await
            .map_err(Into::into)
    }
}
