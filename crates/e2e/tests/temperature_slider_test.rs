// Integration tests for the temperature-slider drive
//
// The slider is circular: setting a value means mapping it onto the
// control's arc and replaying a press-move-release pointer sequence.
// The widget owns its hit-testing, so assertions use a tolerance
// window rather than exact equality.
//
// Performance: related scenarios share one browser launch.


use demo_app::DemoApp;
use ngx_admin_e2e::pages::TemperaturePage;
use playwright_rs::protocol::Playwright;

mod common;

#[tokio::test]
async fn test_set_temperature_via_bounding_box() {
    common::init_tracing();
    let app = DemoApp::start().await;
    let playwright = Playwright::launch()
        .await
        .expect("Failed to launch Playwright");
    let browser = playwright
        .chromium()
        .launch()
        .await
        .expect("Failed to launch browser");
    let page = browser.new_page().await.expect("Failed to create page");

    let temperature = TemperaturePage::new(page, app.url());
    temperature.goto().await.expect("Failed to open dashboard");
    temperature
        .click_temperature_tab()
        .await
        .expect("Failed to activate the Temperature tab");

    assert!(
        temperature
            .is_slider_visible()
            .await
            .expect("Failed to probe slider visibility"),
        "slider thumb should be visible"
    );

    // Both geometry sources must be available before the drive.
    let svg_bounds = temperature
        .svg_bounds()
        .await
        .expect("SVG container should be rendered");
    let thumb_bounds = temperature
        .thumb_bounds()
        .await
        .expect("Slider thumb should be rendered");
    assert!(svg_bounds.width > 1.0 && svg_bounds.height > 1.0);
    assert!(thumb_bounds.width > 1.0 && thumb_bounds.height > 1.0);

    let initial = temperature.temperature_value().await;
    assert!(!initial.is_empty(), "readout should show a starting value");

    temperature.hover_slider().await.expect("Failed to hover");
    temperature
        .set_temperature(19.0)
        .await
        .expect("Failed to drag the slider");

    let value = temperature
        .temperature_celsius()
        .await
        .expect("readout should be numeric after the drag");
    assert!(
        (15.0..=30.0).contains(&value),
        "expected roughly 19 degrees, got {value}"
    );

    browser.close().await.expect("Failed to close browser");
    app.shutdown();
}

#[tokio::test]
async fn test_drive_is_monotone_and_clamps() {
    common::init_tracing();
    let app = DemoApp::start().await;
    let playwright = Playwright::launch()
        .await
        .expect("Failed to launch Playwright");
    let browser = playwright
        .chromium()
        .launch()
        .await
        .expect("Failed to launch browser");
    let page = browser.new_page().await.expect("Failed to create page");

    let temperature = TemperaturePage::new(page, app.url());
    temperature.goto().await.expect("Failed to open dashboard");
    temperature
        .click_temperature_tab()
        .await
        .expect("Failed to activate the Temperature tab");

    // A low target must land below a high target.
    temperature
        .set_temperature(12.0)
        .await
        .expect("Failed to drag to 12");
    let low = temperature
        .temperature_celsius()
        .await
        .expect("readout should be numeric");

    temperature
        .set_temperature(33.0)
        .await
        .expect("Failed to drag to 33");
    let high = temperature
        .temperature_celsius()
        .await
        .expect("readout should be numeric");

    assert!(low < high, "expected {low} < {high} after dragging upward");

    // Targets outside the range clamp to the ends of the arc.
    temperature
        .set_temperature(-40.0)
        .await
        .expect("Failed to drag below the minimum");
    let clamped = temperature
        .temperature_celsius()
        .await
        .expect("readout should be numeric");
    assert!(
        clamped <= 12.0,
        "expected the minimum after clamping, got {clamped}"
    );

    browser.close().await.expect("Failed to close browser");
    app.shutdown();
}
