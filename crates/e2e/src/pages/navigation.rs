// Sidebar menu navigation

use playwright_rs::Page;

use crate::error::Result;
use crate::wait;

/// Drives the sidebar menu: expands a group when collapsed, then clicks
/// the target item and waits for the route to change.
pub struct NavigationPage {
    page: Page,
}

impl NavigationPage {
    const FORM_LAYOUTS_ITEM: &'static str = "//a[normalize-space()='Form Layouts']";
    const DATEPICKER_ITEM: &'static str = "//a[normalize-space()='Datepicker']";
    const SMART_TABLE_ITEM: &'static str = "//a[normalize-space()='Smart Table']";
    const TOASTR_ITEM: &'static str = "//a[normalize-space()='Toastr']";
    const TOOLTIP_ITEM: &'static str = "//a[normalize-space()='Tooltip']";

    pub fn new(page: Page) -> Self {
        Self { page }
    }

    pub async fn form_layouts_page(&self) -> Result<()> {
        self.open("Forms", Self::FORM_LAYOUTS_ITEM, "/forms/layouts").await
    }

    pub async fn datepicker_page(&self) -> Result<()> {
        self.open("Forms", Self::DATEPICKER_ITEM, "/forms/datepicker").await
    }

    pub async fn smart_table_page(&self) -> Result<()> {
        self.open("Tables & Data", Self::SMART_TABLE_ITEM, "/tables/smart-table")
            .await
    }

    pub async fn toastr_page(&self) -> Result<()> {
        self.open("Modal & Overlays", Self::TOASTR_ITEM, "/modal-overlays/toastr")
            .await
    }

    pub async fn tooltip_page(&self) -> Result<()> {
        self.open("Modal & Overlays", Self::TOOLTIP_ITEM, "/modal-overlays/tooltip")
            .await
    }

    /// Expands `group` if needed, clicks `item`, and waits until the
    /// URL reflects the new route.
    async fn open(&self, group: &str, item: &str, route: &str) -> Result<()> {
        self.expand_group(group).await?;
        self.page.locator(item).await.click(None).await?;
        wait::url_contains(&self.page, route, wait::DEFAULT_TIMEOUT).await
    }

    /// Clicks a group header only when it is collapsed, so an already
    /// open group is not toggled shut.
    async fn expand_group(&self, title: &str) -> Result<()> {
        let header = self
            .page
            .locator(&format!("a[title=\"{title}\"]"))
            .await;
        if header.get_attribute("aria-expanded").await? == Some("false".to_string()) {
            header.click(None).await?;
        }
        Ok(())
    }
}
