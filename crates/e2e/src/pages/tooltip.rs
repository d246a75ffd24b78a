// Tooltip page: hover triggers and the floating tooltip element

use std::time::Duration;

use playwright_rs::Page;

use crate::error::Result;
use crate::slider::BoundingBox;
use crate::wait;

/// Which trigger button to hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipTrigger {
    Default,
    Top,
    Right,
    Bottom,
    Left,
    Colored,
    WithIcon,
}

impl TooltipTrigger {
    fn label(self) -> &'static str {
        match self {
            TooltipTrigger::Default => "Show Tooltip",
            TooltipTrigger::Top => "Top",
            TooltipTrigger::Right => "Right",
            TooltipTrigger::Bottom => "Bottom",
            TooltipTrigger::Left => "Left",
            TooltipTrigger::Colored => "Colored Tooltip",
            TooltipTrigger::WithIcon => "With Icon",
        }
    }
}

pub struct TooltipPage {
    page: Page,
}

impl TooltipPage {
    const TOOLTIP: &'static str = "nb-tooltip";

    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// Hovers the trigger button and waits for its tooltip to appear.
    pub async fn hover_trigger(&self, trigger: TooltipTrigger) -> Result<()> {
        let button = self
            .page
            .locator(&format!("button:text-is(\"{}\")", trigger.label()))
            .await;
        button.hover(None).await?;
        let tooltip = self.page.locator(Self::TOOLTIP).await.first();
        wait::visible(&tooltip, wait::DEFAULT_TIMEOUT).await
    }

    /// Text of the visible tooltip.
    pub async fn tooltip_text(&self) -> Result<String> {
        let tooltip = self.page.locator(Self::TOOLTIP).await.first();
        wait::visible(&tooltip, wait::DEFAULT_TIMEOUT).await?;
        Ok(tooltip.text_content().await?.unwrap_or_default().trim().to_string())
    }

    pub async fn is_tooltip_visible(&self) -> bool {
        let tooltip = self.page.locator(Self::TOOLTIP).await.first();
        wait::is_eventually_visible(&tooltip, Duration::from_secs(2)).await
    }

    /// On-screen position of the visible tooltip.
    pub async fn tooltip_bounds(&self) -> Result<BoundingBox> {
        let tooltip = self.page.locator(Self::TOOLTIP).await.first();
        wait::visible(&tooltip, wait::DEFAULT_TIMEOUT).await?;
        super::bounding_box(&self.page, Self::TOOLTIP).await
    }

    /// Parks the pointer in the top-left corner, away from any trigger.
    pub async fn move_mouse_away(&self) -> Result<()> {
        self.page.mouse().move_to(0, 0, None).await.map_err(Into::into)
    }

    /// Moves the pointer away and reports whether the tooltip hid.
    pub async fn tooltip_hides_on_mouse_out(&self) -> Result<bool> {
        self.move_mouse_away().await?;
        let tooltip = self.page.locator(Self::TOOLTIP).await.first();
        Ok(wait::is_eventually_hidden(&tooltip, Duration::from_secs(2)).await)
    }
}
