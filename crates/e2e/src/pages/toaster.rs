// Toastr page: firing and inspecting toast notifications

use std::time::Duration;

use playwright_rs::{CheckOptions, Locator, Page};

use crate::error::Result;
use crate::wait;

/// Toast flavor, mirrored in the toast element's class list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Warning,
    Primary,
    Danger,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Info => "info",
            ToastKind::Warning => "warning",
            ToastKind::Primary => "primary",
            ToastKind::Danger => "danger",
        }
    }

    fn button_label(self) -> &'static str {
        match self {
            ToastKind::Success => "Success",
            ToastKind::Info => "Info",
            ToastKind::Warning => "Warning",
            ToastKind::Primary => "Primary",
            ToastKind::Danger => "Danger",
        }
    }

    fn from_class_list(classes: &str) -> Option<Self> {
        [
            ToastKind::Success,
            ToastKind::Info,
            ToastKind::Warning,
            ToastKind::Primary,
            ToastKind::Danger,
        ]
        .into_iter()
        .find(|kind| classes.contains(kind.as_str()))
    }
}

/// Corner or edge where the toastr container anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPosition {
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
    TopCenter,
    BottomCenter,
}

impl ToastPosition {
    pub fn as_str(self) -> &'static str {
        match self {
            ToastPosition::TopRight => "top-right",
            ToastPosition::TopLeft => "top-left",
            ToastPosition::BottomRight => "bottom-right",
            ToastPosition::BottomLeft => "bottom-left",
            ToastPosition::TopCenter => "top-center",
            ToastPosition::BottomCenter => "bottom-center",
        }
    }

    fn from_class_list(classes: &str) -> Option<Self> {
        [
            ToastPosition::TopRight,
            ToastPosition::TopLeft,
            ToastPosition::BottomRight,
            ToastPosition::BottomLeft,
            ToastPosition::TopCenter,
            ToastPosition::BottomCenter,
        ]
        .into_iter()
        .find(|position| classes.contains(position.as_str()))
    }
}

/// Settings applied before firing a toast; unset fields keep the page
/// defaults.
#[derive(Debug, Default, Clone)]
pub struct ToastConfig {
    pub position: Option<ToastPosition>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub timeout_ms: Option<u32>,
    pub kind: Option<ToastKind>,
    pub prevent_duplicates: Option<bool>,
    pub hide_on_click: Option<bool>,
}

/// Title and body of a rendered toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    pub title: String,
    pub content: String,
}

pub struct ToasterPage {
    page: Page,
}

impl ToasterPage {
    const POSITION_SELECT: &'static str = "nb-select[placeholder=\"Position\"]";
    const TYPE_SELECT: &'static str = "nb-select[placeholder=\"Toast type\"]";
    const TITLE_INPUT: &'static str = "input[placeholder=\"Title\"]";
    const CONTENT_INPUT: &'static str = "input[placeholder=\"Content\"]";
    const TIMEOUT_INPUT: &'static str = "input[placeholder=\"Timeout\"]";
    const PREVENT_DUPLICATES: &'static str =
        "nb-checkbox:has-text(\"Prevent arising of duplicate toast\")";
    const HIDE_ON_CLICK: &'static str = "nb-checkbox:has-text(\"Hide on click\")";
    const SHOW_TOAST: &'static str = "button:text-is(\"Show toast\")";
    const CLEAR_ALL: &'static str = "button:text-is(\"Clear all toasts\")";
    const CLEAR_LAST: &'static str = "button:text-is(\"Clear last toast\")";
    const CONTAINER: &'static str = "nb-toastr-container";
    const TOASTS: &'static str = "nb-toast";

    pub fn new(page: Page) -> Self {
        Self { page }
    }

    async fn toasts(&self) -> Locator {
        self.page.locator(Self::TOASTS).await
    }

    // Configuration

    pub async fn select_position(&self, position: ToastPosition) -> Result<()> {
        self.select_option(Self::POSITION_SELECT, position.as_str()).await
    }

    pub async fn select_kind(&self, kind: ToastKind) -> Result<()> {
        self.select_option(Self::TYPE_SELECT, kind.as_str()).await
    }

    async fn select_option(&self, select: &str, value: &str) -> Result<()> {
        self.page.locator(select).await.click(None).await?;
        self.page
            .locator(&format!("nb-option[ng-reflect-value=\"{value}\"]"))
            .await
            .click(None)
            .await?;
        Ok(())
    }

    pub async fn set_title(&self, title: &str) -> Result<()> {
        let input = self.page.locator(Self::TITLE_INPUT).await;
        input.clear(None).await?;
        input.fill(title, None).await?;
        Ok(())
    }

    pub async fn set_content(&self, content: &str) -> Result<()> {
        let input = self.page.locator(Self::CONTENT_INPUT).await;
        input.clear(None).await?;
        input.fill(content, None).await?;
        Ok(())
    }

    pub async fn set_timeout_ms(&self, timeout_ms: u32) -> Result<()> {
        let input = self.page.locator(Self::TIMEOUT_INPUT).await;
        input.clear(None).await?;
        input.fill(&timeout_ms.to_string(), None).await?;
        Ok(())
    }

    pub async fn set_prevent_duplicates(&self, enable: bool) -> Result<()> {
        self.set_checkbox(Self::PREVENT_DUPLICATES, enable).await
    }

    pub async fn set_hide_on_click(&self, enable: bool) -> Result<()> {
        self.set_checkbox(Self::HIDE_ON_CLICK, enable).await
    }

    /// Clicks the checkbox only when its state differs from `enable`.
    async fn set_checkbox(&self, selector: &str, enable: bool) -> Result<()> {
        let input = self
            .page
            .locator(selector)
            .await
            .locator("input[type=\"checkbox\"]");
        if input.is_checked().await? != enable {
            input
                .set_checked(enable, Some(CheckOptions::builder().force(true).build()))
                .await?;
        }
        Ok(())
    }

    /// Applies `config` and fires a toast with the configured settings.
    pub async fn configure_and_show(&self, config: &ToastConfig) -> Result<()> {
        if let Some(position) = config.position {
            self.select_position(position).await?;
        }
        if let Some(title) = &config.title {
            self.set_title(title).await?;
        }
        if let Some(content) = &config.content {
            self.set_content(content).await?;
        }
        if let Some(timeout_ms) = config.timeout_ms {
            self.set_timeout_ms(timeout_ms).await?;
        }
        if let Some(kind) = config.kind {
            self.select_kind(kind).await?;
        }
        if let Some(prevent) = config.prevent_duplicates {
            self.set_prevent_duplicates(prevent).await?;
        }
        if let Some(hide) = config.hide_on_click {
            self.set_hide_on_click(hide).await?;
        }
        self.show_toast().await
    }

    // Actions

    pub async fn show_toast(&self) -> Result<()> {
        self.click(Self::SHOW_TOAST).await
    }

    /// Fires the quick-action toast for `kind` (the row of type buttons).
    pub async fn show_quick_toast(&self, kind: ToastKind) -> Result<()> {
        self.click(&format!("button:text-is(\"{}\")", kind.button_label()))
            .await
    }

    pub async fn clear_all_toasts(&self) -> Result<()> {
        self.click(Self::CLEAR_ALL).await
    }

    pub async fn clear_last_toast(&self) -> Result<()> {
        self.click(Self::CLEAR_LAST).await
    }

    async fn click(&self, selector: &str) -> Result<()> {
        self.page
            .locator(selector)
            .await
            .click(None)
            .await
            .map_err(Into::into)
    }

    pub async fn click_toast(&self, index: i32) -> Result<()> {
        let toast = self.toasts().await.nth(index);
        wait::visible(&toast, wait::DEFAULT_TIMEOUT).await?;
        toast.click(None).await.map_err(Into::into)
    }

    // Inspection

    pub async fn toast_count(&self) -> Result<usize> {
        self.toasts().await.count().await.map_err(Into::into)
    }

    /// Title and body of the nth toast (0 is the oldest on screen).
    pub async fn toast_message(&self, index: i32) -> Result<ToastMessage> {
        let toast = self.toasts().await.nth(index);
        wait::visible(&toast, wait::DEFAULT_TIMEOUT).await?;
        let title = toast
            .locator(".toast-title")
            .text_content()
            .await?
            .unwrap_or_default();
        let content = toast
            .locator(".toast-message")
            .text_content()
            .await?
            .unwrap_or_default();
        Ok(ToastMessage {
            title: title.trim().to_string(),
            content: content.trim().to_string(),
        })
    }

    /// Flavor of the nth toast, read back from its class list.
    pub async fn toast_kind(&self, index: i32) -> Result<Option<ToastKind>> {
        let toast = self.toasts().await.nth(index);
        wait::visible(&toast, wait::DEFAULT_TIMEOUT).await?;
        let classes = toast.get_attribute("class").await?.unwrap_or_default();
        Ok(ToastKind::from_class_list(&classes))
    }

    /// Where the toastr container is currently anchored.
    pub async fn toast_position(&self) -> Result<Option<ToastPosition>> {
        let container = self.page.locator(Self::CONTAINER).await;
        wait::visible(&container, wait::DEFAULT_TIMEOUT).await?;
        let classes = container.get_attribute("class").await?.unwrap_or_default();
        Ok(ToastPosition::from_class_list(&classes))
    }

    /// True if the nth toast shows up within two seconds.
    pub async fn is_toast_visible(&self, index: i32) -> bool {
        let toast = self.toasts().await.nth(index);
        wait::is_eventually_visible(&toast, Duration::from_secs(2)).await
    }

    /// True if the nth toast goes away within `timeout`.
    pub async fn toast_dismissed_within(&self, index: i32, timeout: Duration) -> bool {
        let toast = self.toasts().await.nth(index);
        wait::is_eventually_hidden(&toast, timeout).await
    }
}
