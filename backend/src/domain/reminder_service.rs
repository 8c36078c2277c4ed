//! Daily reminder bookkeeping: who celebrates on a given day, who celebrates
//! the day after, who should hear about it, and whether wishes went out.
//! Delivering the messages is left to whatever consumes the digest.

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use shared::BirthdayStatus;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::reminders::{CelebrantEntry, ReminderDigest};
use crate::domain::models::birthday::{Birthday, BirthdayError};
use crate::domain::schedule;
use crate::storage::BirthdayStorage;

#[derive(Clone)]
pub struct ReminderService {
    storage: Arc<dyn BirthdayStorage>,
}

impl ReminderService {
    pub fn new(storage: Arc<dyn BirthdayStorage>) -> Self {
        Self { storage }
    }

    /// Birthdays that fall exactly on `date`
    pub async fn birthdays_on(&self, date: NaiveDate) -> Result<Vec<Birthday>> {
        let birthdays = self.storage.list_birthdays().await?;
        Ok(Self::celebrating_on(birthdays, date))
    }

    pub async fn digest(&self, today: NaiveDate) -> Result<ReminderDigest> {
        info!("Building reminder digest for {}", today);

        let birthdays = self.storage.list_birthdays().await?;

        // The last representable day has no tomorrow
        let tomorrow = match today.succ_opt() {
            Some(tomorrow_date) => Self::celebrating_on(birthdays.clone(), tomorrow_date),
            None => Vec::new(),
        };
        let today_entries = Self::celebrating_on(birthdays.clone(), today)
            .into_iter()
            .map(|birthday| CelebrantEntry {
                announcement_recipients: Self::recipients_excluding(&birthdays, &birthday),
                birthday,
            })
            .collect::<Vec<_>>();

        info!(
            "Digest for {}: {} today, {} tomorrow",
            today,
            today_entries.len(),
            tomorrow.len()
        );

        Ok(ReminderDigest {
            date: today,
            today: today_entries,
            tomorrow,
        })
    }

    pub async fn mark_sent(&self, birthday_id: &str) -> Result<Birthday> {
        self.set_status(birthday_id, BirthdayStatus::Sent).await
    }

    pub async fn reset_status(&self, birthday_id: &str) -> Result<Birthday> {
        self.set_status(birthday_id, BirthdayStatus::NotSent).await
    }

    async fn set_status(&self, birthday_id: &str, status: BirthdayStatus) -> Result<Birthday> {
        info!("Setting status of {} to {}", birthday_id, status);

        let mut birthday = match self.storage.get_birthday(birthday_id).await? {
            Some(birthday) => birthday,
            None => {
                warn!("Cannot set status, birthday not found: {}", birthday_id);
                return Err(BirthdayError::NotFound(birthday_id.to_string()).into());
            }
        };

        birthday.status = status;
        birthday.updated_at = Utc::now();

        if !self.storage.update_birthday(&birthday).await? {
            return Err(BirthdayError::NotFound(birthday_id.to_string()).into());
        }

        Ok(birthday)
    }

    fn celebrating_on(birthdays: Vec<Birthday>, date: NaiveDate) -> Vec<Birthday> {
        birthdays
            .into_iter()
            .filter(|b| schedule::days_until(b.birth_date, date) == 0)
            .collect()
    }

    /// Every stored address except the celebrant's own, without duplicates
    fn recipients_excluding(all: &[Birthday], celebrant: &Birthday) -> Vec<String> {
        let mut recipients: Vec<String> = Vec::new();
        for email in all
            .iter()
            .filter(|b| b.id != celebrant.id)
            .filter_map(|b| b.email.as_ref())
        {
            if Some(email) != celebrant.email.as_ref() && !recipients.contains(email) {
                recipients.push(email.clone());
            }
        }
        recipients
    }
}
