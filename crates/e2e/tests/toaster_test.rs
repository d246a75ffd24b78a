// Integration tests for toast notifications
//
// Performance: related scenarios share one browser launch.

use std::time::Duration;


use demo_app::DemoApp;
use ngx_admin_e2e::pages::{ToastConfig, ToastKind, ToastPosition, ToasterPage};
use playwright_rs::protocol::Playwright;

mod common;

async fn open_toastr_page(app: &DemoApp, browser: &playwright_rs::Browser) -> ToasterPage {
    let page = browser.new_page().await.expect("Failed to create page");
    page.goto(&format!("{}/modal-overlays/toastr", app.url()), None)
        .await
        .expect("Failed to navigate");
    ToasterPage::new(page)
}

#[tokio::test]
async fn test_configured_toast_shows_title_content_and_kind() {
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

    let toaster = open_toastr_page(&app, &browser).await;
    toaster
        .configure_and_show(&ToastConfig {
            title: Some("Test Toast".to_string()),
            content: Some("This is a test message".to_string()),
            kind: Some(ToastKind::Danger),
            ..ToastConfig::default()
        })
        .await
        .expect("Failed to show the toast");

    assert!(toaster.is_toast_visible(0).await);
    let message = toaster.toast_message(0).await.unwrap();
    assert_eq!(message.title, "Test Toast");
    assert_eq!(message.content, "This is a test message");
    assert_eq!(toaster.toast_kind(0).await.unwrap(), Some(ToastKind::Danger));

    browser.close().await.expect("Failed to close browser");
    app.shutdown();
}

#[tokio::test]
async fn test_quick_action_buttons_fire_each_kind() {
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

    let toaster = open_toastr_page(&app, &browser).await;
    for kind in [
        ToastKind::Success,
        ToastKind::Info,
        ToastKind::Warning,
        ToastKind::Primary,
        ToastKind::Danger,
    ] {
        toaster
            .show_quick_toast(kind)
            .await
            .expect("Failed to fire a quick toast");
        assert!(toaster.is_toast_visible(0).await);
        assert_eq!(toaster.toast_kind(0).await.unwrap(), Some(kind));
        toaster.clear_all_toasts().await.unwrap();
        assert_eq!(toaster.toast_count().await.unwrap(), 0);
    }

    browser.close().await.expect("Failed to close browser");
    app.shutdown();
}

#[tokio::test]
async fn test_toast_lifecycle_and_position() {
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

    let toaster = open_toastr_page(&app, &browser).await;

    // Duplicate prevention keeps the second identical toast away.
    toaster
        .configure_and_show(&ToastConfig {
            title: Some("Once".to_string()),
            content: Some("only".to_string()),
            prevent_duplicates: Some(true),
            ..ToastConfig::default()
        })
        .await
        .unwrap();
    toaster.show_toast().await.unwrap();
    assert_eq!(toaster.toast_count().await.unwrap(), 1);
    toaster.clear_all_toasts().await.unwrap();

    // Hide-on-click dismisses the toast.
    toaster.set_prevent_duplicates(false).await.unwrap();
    toaster.set_hide_on_click(true).await.unwrap();
    toaster.show_toast().await.unwrap();
    toaster.click_toast(0).await.unwrap();
    assert!(
        toaster
            .toast_dismissed_within(0, Duration::from_secs(2))
            .await
    );

    // A short timeout auto-dismisses without interaction.
    toaster.set_timeout_ms(1000).await.unwrap();
    toaster.show_toast().await.unwrap();
    assert!(toaster.is_toast_visible(0).await);
    assert!(
        toaster
            .toast_dismissed_within(0, Duration::from_secs(5))
            .await
    );

    // The container follows the configured position.
    toaster
        .select_position(ToastPosition::BottomLeft)
        .await
        .unwrap();
    toaster.show_toast().await.unwrap();
    assert_eq!(
        toaster.toast_position().await.unwrap(),
        Some(ToastPosition::BottomLeft)
    );

    // Clear last removes the newest toast only.
    toaster.clear_all_toasts().await.unwrap();
    toaster.set_timeout_ms(30000).await.unwrap();
    toaster.set_title("First").await.unwrap();
    toaster.show_toast().await.unwrap();
    toaster.set_title("Second").await.unwrap();
    toaster.show_toast().await.unwrap();
    toaster.clear_last_toast().await.unwrap();
    let remaining = toaster.toast_message(0).await.unwrap();
    assert_eq!(remaining.title, "First");

    browser.close().await.expect("Failed to close browser");
    app.shutdown();
}
