// Smart Table page: reading the users table

use playwright_rs::{Locator, Page};

use crate::error::Result;
use crate::wait;

/// One data row of the users table.
///
/// Values are kept as displayed text; the table renders everything,
/// including ages and ids, as strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub age: String,
}

pub struct SmartTablePage {
    page: Page,
}

impl SmartTablePage {
    const ROWS: &'static str = "//table//tbody//tr";
    const SEARCH_INPUT: &'static str = "//input[@placeholder=\"Search\"]";

    pub fn new(page: Page) -> Self {
        Self { page }
    }

    async fn rows(&self) -> Locator {
        self.page.locator(Self::ROWS).await
    }

    pub async fn row_count(&self) -> Result<usize> {
        self.rows().await.count().await.map_err(Into::into)
    }

    /// Visible text of every data row. An empty or missing table yields
    /// an empty vec rather than an error.
    pub async fn row_texts(&self) -> Vec<String> {
        match self.collect_row_texts().await {
            Ok(rows) => rows,
            Err(error) => {
                tracing::warn!(%error, "unable to read table rows");
                Vec::new()
            }
        }
    }

    async fn collect_row_texts(&self) -> Result<Vec<String>> {
        let rows = self.rows().await;
        wait::visible(&rows.first(), wait::DEFAULT_TIMEOUT).await?;

        let count = rows.count().await?;
        let mut texts = Vec::with_capacity(count);
        for i in 0..count {
            let text = rows.nth(i as i32).inner_text().await?;
            texts.push(text.trim().to_string());
        }
        Ok(texts)
    }

    /// Every data row as a typed record. Cell 0 is the actions column,
    /// so data starts at cell 1.
    pub async fn row_records(&self) -> Vec<TableRow> {
        match self.collect_row_records().await {
            Ok(rows) => rows,
            Err(error) => {
                tracing::warn!(%error, "unable to convert table rows to records");
                Vec::new()
            }
        }
    }

    async fn collect_row_records(&self) -> Result<Vec<TableRow>> {
        let rows = self.rows().await;
        wait::visible(&rows.first(), wait::DEFAULT_TIMEOUT).await?;

        let count = rows.count().await?;
        let mut records = Vec::with_capacity(count);
        for i in 0..count {
            let row = rows.nth(i as i32);
            let cells = row.locator("td");
            records.push(TableRow {
                id: cell_text(&cells, 1).await?,
                first_name: cell_text(&cells, 2).await?,
                last_name: cell_text(&cells, 3).await?,
                username: cell_text(&cells, 4).await?,
                email: cell_text(&cells, 5).await?,
                age: cell_text(&cells, 6).await?,
            });
        }
        Ok(records)
    }

    /// Types into the table's search box.
    pub async fn search(&self, query: &str) -> Result<()> {
        self.page
            .locator(Self::SEARCH_INPUT)
            .await
            .fill(query, None)
            .await
            .map_err(Into::into)
    }
}

async fn cell_text(cells: &Locator, index: i32) -> Result<String> {
    Ok(cells.nth(index).inner_text().await?.trim().to_string())
}
