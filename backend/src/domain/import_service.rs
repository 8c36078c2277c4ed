//! Bulk import of already-parsed rows.
//!
//! Each row is validated and stored on its own. A bad row, or a storage error
//! for one row, is recorded against that row and the batch carries on.

use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::birthday_service::BirthdayService;
use crate::domain::commands::birthdays::CreateBirthdayCommand;
use crate::domain::commands::import::{ImportBirthdaysCommand, ImportOutcome, ImportReport};
use crate::domain::models::birthday::Birthday;
use crate::storage::BirthdayStorage;
use shared::ImportRow;

#[derive(Clone)]
pub struct ImportService {
    storage: Arc<dyn BirthdayStorage>,
}

impl ImportService {
    pub fn new(storage: Arc<dyn BirthdayStorage>) -> Self {
        Self { storage }
    }

    pub async fn import_birthdays(&self, command: ImportBirthdaysCommand) -> Result<ImportReport> {
        info!("Importing {} birthday rows", command.rows.len());

        let mut report = ImportReport::default();
        for (row, input) in command.rows.into_iter().enumerate() {
            let result = self.import_row(&input).await;
            if let Err(reason) = &result {
                warn!("Import row {} rejected: {}", row, reason);
            }
            report.outcomes.push(ImportOutcome { row, input, result });
        }

        info!(
            "Import finished: {} imported, {} failed",
            report.imported(),
            report.failed()
        );
        Ok(report)
    }

    async fn import_row(&self, input: &ImportRow) -> Result<Birthday, String> {
        let command = CreateBirthdayCommand {
            name: input.name.clone().unwrap_or_default(),
            birth_date: input.date.clone().unwrap_or_default(),
            email: input.email.clone(),
            message: None,
            status: None,
        };

        let birthday = BirthdayService::build_birthday(command).map_err(|e| e.to_string())?;
        self.storage
            .store_birthday(&birthday)
            .await
            .map_err(|e| format!("Failed to store row: {}", e))?;

        Ok(birthday)
    }
}
