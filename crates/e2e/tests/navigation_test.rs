// Integration tests for sidebar navigation


use demo_app::DemoApp;
use ngx_admin_e2e::pages::NavigationPage;
use playwright_rs::expect;
use playwright_rs::protocol::Playwright;

mod common;

#[tokio::test]
async fn test_main_menu_items_are_visible() {
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

    page.goto(&format!("{}/", app.url()), None)
        .await
        .expect("Failed to navigate");

    for item in ["IoT Dashboard", "Forms", "Modal & Overlays", "Tables & Data", "Auth"] {
        let menu_entry = page
            .locator(&format!("ul.menu a:text-is(\"{item}\")"))
            .await
            .first();
        expect(menu_entry)
            .to_be_visible()
            .await
            .unwrap_or_else(|_| panic!("menu item '{item}' should be visible"));
    }

    browser.close().await.expect("Failed to close browser");
    app.shutdown();
}

#[tokio::test]
async fn test_navigates_to_every_section() {
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

    page.goto(&format!("{}/", app.url()), None)
        .await
        .expect("Failed to navigate");

    // Every page carries the sidebar, so one journey can hop through
    // all sections in sequence. Each call waits for its route.
    let navigation = NavigationPage::new(page.clone());
    navigation
        .form_layouts_page()
        .await
        .expect("Failed to open Form Layouts");
    assert!(page.url().contains("/forms/layouts"));

    navigation
        .datepicker_page()
        .await
        .expect("Failed to open Datepicker");
    assert!(page.url().contains("/forms/datepicker"));

    navigation
        .smart_table_page()
        .await
        .expect("Failed to open Smart Table");
    assert!(page.url().contains("/tables/smart-table"));

    navigation
        .toastr_page()
        .await
        .expect("Failed to open Toastr");
    assert!(page.url().contains("/modal-overlays/toastr"));

    navigation
        .tooltip_page()
        .await
        .expect("Failed to open Tooltip");
    assert!(page.url().contains("/modal-overlays/tooltip"));

    browser.close().await.expect("Failed to close browser");
    app.shutdown();
}

#[tokio::test]
async fn test_group_expansion_reflects_aria_state() {
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

    page.goto(&format!("{}/", app.url()), None)
        .await
        .expect("Failed to navigate");

    let group = page.locator("a[title=\"Forms\"]").await;
    assert_eq!(
        group.get_attribute("aria-expanded").await.unwrap(),
        Some("false".to_string()),
        "groups start collapsed"
    );

    group.click(None).await.expect("Failed to expand group");
    assert_eq!(
        group.get_attribute("aria-expanded").await.unwrap(),
        Some("true".to_string())
    );
    let submenu_item = page.locator("//a[normalize-space()='Form Layouts']").await;
    expect(submenu_item.clone())
        .to_be_visible()
        .await
        .expect("submenu should show after expansion");

    group.click(None).await.expect("Failed to collapse group");
    expect(submenu_item)
        .to_be_hidden()
        .await
        .expect("submenu should hide after collapse");

    browser.close().await.expect("Failed to close browser");
    app.shutdown();
}
