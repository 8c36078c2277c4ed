//! Export service domain logic for the birthday tracker.
//!
//! Produces the CSV download of every stored birthday. The REST layer only
//! sets headers around the text built here.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use crate::domain::models::birthday::Birthday;
use crate::storage::BirthdayStorage;

const CSV_HEADER: [&str; 6] = ["id", "name", "birth_date", "email", "message", "status"];

#[derive(Clone)]
pub struct ExportService {
    storage: Arc<dyn BirthdayStorage>,
}

impl ExportService {
    pub fn new(storage: Arc<dyn BirthdayStorage>) -> Self {
        Self { storage }
    }

    /// All birthdays as CSV, in birth date order
    pub async fn export_csv(&self) -> Result<String> {
        let mut birthdays = self.storage.list_birthdays().await?;
        birthdays.sort_by_key(|b| b.birth_date);

        info!("Exporting {} birthdays as CSV", birthdays.len());
        Self::to_csv(&birthdays)
    }

    pub fn to_csv(birthdays: &[Birthday]) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(CSV_HEADER)?;

        for birthday in birthdays {
            let birth_date = birthday.birth_date.format("%Y-%m-%d").to_string();
            writer.write_record([
                birthday.id.as_str(),
                birthday.name.as_str(),
                birth_date.as_str(),
                birthday.email.as_deref().unwrap_or(""),
                birthday.message.as_deref().unwrap_or(""),
                birthday.status.label(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e.error()))?;
        String::from_utf8(bytes).context("CSV output was not valid UTF-8")
    }
}
