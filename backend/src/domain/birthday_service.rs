use anyhow::Result;
use chrono::{Datelike, NaiveDate, Utc};
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::birthdays::{
    BirthdayListQuery, BirthdayResult, CreateBirthdayCommand, GroupedBirthdaysQuery,
    GroupedBirthdaysResult, UpcomingBirthdaysResult, UpdateBirthdayCommand,
};
use crate::domain::models::birthday::{
    normalize_email, normalize_message, parse_birth_date, validate_name, Birthday, BirthdayError,
    BirthdayValidationError,
};
use crate::domain::schedule;
use crate::storage::BirthdayStorage;

/// Service for managing birthday records and their derived views
#[derive(Clone)]
pub struct BirthdayService {
    storage: Arc<dyn BirthdayStorage>,
}

impl BirthdayService {
    pub fn new(storage: Arc<dyn BirthdayStorage>) -> Self {
        Self { storage }
    }

    /// Create a new birthday
    pub async fn create_birthday(&self, command: CreateBirthdayCommand) -> Result<BirthdayResult> {
        info!("Creating birthday: name={}, birth_date={}", command.name, command.birth_date);

        let birthday = Self::build_birthday(command)?;
        self.storage.store_birthday(&birthday).await?;

        info!("Created birthday for {} with ID: {}", birthday.name, birthday.id);

        Ok(BirthdayResult {
            birthday,
            success_message: "Birthday created successfully".to_string(),
        })
    }

    /// Get a birthday by ID
    pub async fn get_birthday(&self, birthday_id: &str) -> Result<Option<Birthday>> {
        info!("Getting birthday: {}", birthday_id);

        let birthday = self.storage.get_birthday(birthday_id).await?;
        if birthday.is_none() {
            warn!("Birthday not found: {}", birthday_id);
        }

        Ok(birthday)
    }

    /// List birthdays in storage order, optionally filtered by a search term
    pub async fn list_birthdays(&self, query: BirthdayListQuery) -> Result<Vec<Birthday>> {
        info!("Listing birthdays with search: {:?}", query.search);

        let mut birthdays = self.storage.list_birthdays().await?;
        if let Some(term) = query.search.as_deref() {
            birthdays.retain(|b| b.matches_search(term));
        }

        info!("Found {} birthdays", birthdays.len());
        Ok(birthdays)
    }

    /// Update an existing birthday. Only the provided fields change.
    pub async fn update_birthday(
        &self,
        birthday_id: &str,
        command: UpdateBirthdayCommand,
    ) -> Result<BirthdayResult> {
        info!("Updating birthday: {}", birthday_id);

        let mut birthday = self
            .storage
            .get_birthday(birthday_id)
            .await?
            .ok_or_else(|| BirthdayError::NotFound(birthday_id.to_string()))?;

        Self::apply_update(&mut birthday, command)?;
        birthday.updated_at = Utc::now();

        if !self.storage.update_birthday(&birthday).await? {
            // Deleted between the read and the write
            return Err(BirthdayError::NotFound(birthday_id.to_string()).into());
        }

        info!("Updated birthday for {} with ID: {}", birthday.name, birthday.id);

        Ok(BirthdayResult {
            birthday,
            success_message: "Birthday updated successfully".to_string(),
        })
    }

    /// Delete a birthday
    pub async fn delete_birthday(&self, birthday_id: &str) -> Result<()> {
        info!("Deleting birthday: {}", birthday_id);

        if !self.storage.delete_birthday(birthday_id).await? {
            warn!("Cannot delete, birthday not found: {}", birthday_id);
            return Err(BirthdayError::NotFound(birthday_id.to_string()).into());
        }

        info!("Deleted birthday: {}", birthday_id);
        Ok(())
    }

    /// Birthdays ranked by days until their next occurrence and split into buckets
    pub async fn list_grouped(&self, query: GroupedBirthdaysQuery) -> Result<GroupedBirthdaysResult> {
        info!("Grouping birthdays relative to {}", query.today);

        let birthdays = self
            .list_birthdays(BirthdayListQuery { search: query.search })
            .await?;
        let groups = schedule::rank_and_group(birthdays, query.today);

        Ok(GroupedBirthdaysResult {
            today: query.today,
            groups,
        })
    }

    /// Birthdays still to come in `today`'s calendar year, today included,
    /// nearest first
    pub async fn list_upcoming(&self, today: NaiveDate) -> Result<UpcomingBirthdaysResult> {
        info!("Listing birthdays still ahead in {}", today.year());

        let birthdays = self.storage.list_birthdays().await?;
        let upcoming = schedule::rank_all(birthdays, today)
            .into_iter()
            .filter(|ranked| ranked.next_occurrence.year() == today.year())
            .collect();

        Ok(UpcomingBirthdaysResult {
            today,
            birthdays: upcoming,
        })
    }

    /// Validate raw input and build a new record.
    /// Shared with the import path so both go through identical checks.
    pub(crate) fn build_birthday(command: CreateBirthdayCommand) -> Result<Birthday, BirthdayValidationError> {
        let name = validate_name(&command.name)?;
        let birth_date = parse_birth_date(&command.birth_date)?;
        let email = normalize_email(command.email.as_deref())?;
        let message = normalize_message(command.message.as_deref())?;

        let now = Utc::now();
        Ok(Birthday {
            id: Birthday::generate_id(),
            name,
            birth_date,
            email,
            message,
            status: command.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        })
    }

    fn apply_update(birthday: &mut Birthday, command: UpdateBirthdayCommand) -> Result<(), BirthdayValidationError> {
        // Validate everything before touching the record
        let name = command.name.as_deref().map(validate_name).transpose()?;
        let birth_date = command.birth_date.as_deref().map(parse_birth_date).transpose()?;
        let email = command
            .email
            .as_deref()
            .map(|e| normalize_email(Some(e)))
            .transpose()?;
        let message = command
            .message
            .as_deref()
            .map(|m| normalize_message(Some(m)))
            .transpose()?;

        if let Some(name) = name {
            birthday.name = name;
        }
        if let Some(birth_date) = birth_date {
            birthday.birth_date = birth_date;
        }
        if let Some(email) = email {
            birthday.email = email;
        }
        if let Some(message) = message {
            birthday.message = message;
        }
        if let Some(status) = command.status {
            birthday.status = status;
        }

        Ok(())
    }
}
