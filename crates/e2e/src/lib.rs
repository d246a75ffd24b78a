//! ngx-admin-e2e: page-object end-to-end tests for the ngx-admin demo
//!
//! The suite wraps each page of the demo dashboard in a page object:
//! selector constants plus intention-revealing actions. Test specs
//! compose page objects into user journeys and assert on the resulting
//! UI state through `playwright-rs`.
//!
//! # Example
//!
//! ```ignore
//! use ngx_admin_e2e::config::TestConfig;
//! use ngx_admin_e2e::pages::TemperaturePage;
//! use playwright_rs::Playwright;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = TestConfig::from_env();
//!     let playwright = Playwright::launch().await?;
//!     let browser = playwright.chromium().launch().await?;
//!     let page = browser.new_page().await?;
//!
//!     let temperature = TemperaturePage::new(page, &config.base_url);
//!     temperature.goto().await?;
//!     temperature.click_temperature_tab().await?;
//!     temperature.set_temperature(19.0).await?;
//!     assert!(temperature.temperature_celsius().await.is_some());
//!
//!     browser.close().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod fixtures;
pub mod pages;
pub mod slider;
pub mod wait;

pub use config::{Credentials, TestConfig};
pub use error::{Error, Result};
pub use fixtures::{FixtureStore, NewUser, RegistrationStatus, UserRecord};
pub use slider::{ArcSlider, BoundingBox, Point};
