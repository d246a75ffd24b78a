// Page objects for the ngx-admin demo application
//
// Each page object holds a cloned `Page` handle plus selector
// constants; locators are built at action time, never stored, so they
// resolve against the DOM as it exists when the action runs. There is
// no inheritance: shared behavior lives in free functions (`wait`, the
// bounding-box helper below).

pub mod dashboard;
pub mod date_picker;
pub mod form_layouts;
pub mod login;
pub mod navigation;
pub mod register;
pub mod smart_table;
pub mod temperature;
pub mod toaster;
pub mod tooltip;

pub use dashboard::DashboardPage;
pub use date_picker::DatePickerPage;
pub use form_layouts::FormLayoutsPage;
pub use login::LoginPage;
pub use navigation::NavigationPage;
pub use register::RegisterPage;
pub use smart_table::SmartTablePage;
pub use temperature::TemperaturePage;
pub use toaster::{ToastConfig, ToastKind, ToastMessage, ToastPosition, ToasterPage};
pub use tooltip::TooltipPage;

use playwright_rs::Page;

use crate::error::{Error, Result};
use crate::slider::BoundingBox;

const BOUNDING_BOX_FN: &str = r#"(selector) => {
    const el = document.querySelector(selector);
    if (!el) return null;
    const r = el.getBoundingClientRect();
    return { x: r.x, y: r.y, width: r.width, height: r.height };
}"#;

/// Bounding box of the first element matching `selector`.
///
/// Fails fast with [`Error::ElementNotRendered`] when the element is
/// absent, instead of letting callers compute coordinates from nothing.
pub(crate) async fn bounding_box(page: &Page, selector: &str) -> Result<BoundingBox> {
    let bounds: Option<BoundingBox> = page.evaluate(BOUNDING_BOX_FN, Some(&selector)).await?;
    bounds.ok_or_else(|| Error::ElementNotRendered {
        selector: selector.to_string(),
    })
}
