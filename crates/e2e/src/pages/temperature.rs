// Temperature card on the IoT dashboard
//
// Setting a value means dragging the thumb of a circular slider, so
// this page object is the consumer of the `slider` arc geometry: it
// resolves the control's bounding box, maps the target value to a
// screen coordinate, and replays a press-move-release sequence.

use std::time::Duration;

use playwright_rs::{GotoOptions, Page, WaitUntil};

use crate::error::Result;
use crate::slider::{ArcSlider, BoundingBox, interpolate};
use crate::wait;

/// Pointer interpolation steps between the control center and the
/// release coordinate.
const DRAG_STEPS: usize = 5;

pub struct TemperaturePage {
    page: Page,
    base_url: String,
    slider: ArcSlider,
}

impl TemperaturePage {
    const ROUTE: &'static str = "/pages/iot-dashboard";
    const DRAGGER: &'static str = "ngx-temperature-dragger";
    const SVG: &'static str = "ngx-temperature-dragger svg";
    const THUMB: &'static str = "ngx-temperature-dragger circle";
    const VALUE: &'static str = ".value.temperature";
    const TAB: &'static str = "[tabtitle=\"Temperature\"]";
    const TAB_FALLBACK: &'static str = "text=Temperature";

    pub fn new(page: Page, base_url: impl Into<String>) -> Self {
        Self {
            page,
            base_url: base_url.into(),
            slider: ArcSlider::TEMPERATURE,
        }
    }

    /// Navigates to the dashboard and waits for the dragger to render.
    pub async fn goto(&self) -> Result<()> {
        let url = format!("{}{}", self.base_url, Self::ROUTE);
        self.page
            .goto(
                &url,
                Some(GotoOptions::new().wait_until(WaitUntil::NetworkIdle)),
            )
            .await?;
        let dragger = self.page.locator(Self::DRAGGER).await.first();
        wait::visible(&dragger, wait::DEFAULT_TIMEOUT).await
    }

    /// Activates the Temperature tab. The tab markup has shifted
    /// between app revisions, so a text-based fallback covers the
    /// cases the attribute locator misses.
    pub async fn click_temperature_tab(&self) -> Result<()> {
        let tab = self.page.locator(Self::TAB).await.first();
        match wait::visible(&tab, Duration::from_secs(5)).await {
            Ok(()) => tab.click(None).await?,
            Err(error) => {
                tracing::warn!(%error, "primary tab locator failed, falling back to text");
                self.page
                    .locator(Self::TAB_FALLBACK)
                    .await
                    .first()
                    .click(None)
                    .await?;
            }
        }
        let dragger = self.page.locator(Self::DRAGGER).await.first();
        wait::visible(&dragger, wait::DEFAULT_TIMEOUT).await
    }

    pub async fn is_slider_visible(&self) -> Result<bool> {
        self.page
            .locator(Self::THUMB)
            .await
            .first()
            .is_visible()
            .await
            .map_err(Into::into)
    }

    /// Raw text of the value readout, trimmed; empty when absent.
    pub async fn temperature_value(&self) -> String {
        let value = self.page.locator(Self::VALUE).await.first();
        match value.text_content().await {
            Ok(text) => text.unwrap_or_default().trim().to_string(),
            Err(error) => {
                tracing::warn!(%error, "could not read the temperature value");
                String::new()
            }
        }
    }

    /// The readout parsed as degrees, ignoring the unit suffix.
    pub async fn temperature_celsius(&self) -> Option<f64> {
        let text = self.temperature_value().await;
        let digits: String = text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        digits.parse().ok()
    }

    pub async fn svg_bounds(&self) -> Result<BoundingBox> {
        super::bounding_box(&self.page, Self::SVG).await
    }

    pub async fn thumb_bounds(&self) -> Result<BoundingBox> {
        super::bounding_box(&self.page, Self::THUMB).await
    }

    pub async fn hover_slider(&self) -> Result<()> {
        self.page
            .locator(Self::THUMB)
            .await
            .first()
            .hover(None)
            .await
            .map_err(Into::into)
    }

    /// Drags the thumb so the control reads `target` degrees.
    ///
    /// Positioning is best-effort: the widget owns its hit-testing, so
    /// callers should assert within a tolerance window rather than
    /// expect exact equality.
    pub async fn set_temperature(&self, target: f64) -> Result<()> {
        let dragger = self.page.locator(Self::DRAGGER).await.first();
        wait::visible(&dragger, wait::DEFAULT_TIMEOUT).await?;

        let bounds = self.svg_bounds().await?;
        let center = bounds.center();
        let release = self.slider.target_point(&bounds, target);

        tracing::debug!(
            target = self.slider.clamp(target),
            fraction = self.slider.fraction(target),
            angle_degrees = self.slider.angle(target).to_degrees(),
            center_x = center.x,
            center_y = center.y,
            release_x = release.x,
            release_y = release.y,
            "dragging temperature slider"
        );

        dragger.hover(None).await?;

        let mouse = self.page.mouse();
        mouse
            .move_to(center.x.round() as i32, center.y.round() as i32, None)
            .await?;
        mouse.down(None).await?;
        for point in interpolate(center, release, DRAG_STEPS) {
            mouse
                .move_to(point.x.round() as i32, point.y.round() as i32, None)
                .await?;
        }
        mouse.up(None).await?;
        Ok(())
    }
}
