//! # Storage Traits
//!
//! Storage abstraction the domain layer depends on, so services can be backed
//! by any store that can hold birthday records.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::birthday::Birthday;

/// Record store for birthdays
#[async_trait]
pub trait BirthdayStorage: Send + Sync {
    /// Store a new birthday
    async fn store_birthday(&self, birthday: &Birthday) -> Result<()>;

    /// Retrieve a specific birthday by ID
    async fn get_birthday(&self, birthday_id: &str) -> Result<Option<Birthday>>;

    /// List all birthdays ordered by birth date, then insertion order
    async fn list_birthdays(&self) -> Result<Vec<Birthday>>;

    /// Overwrite an existing birthday.
    /// Returns false if no record with that ID exists.
    async fn update_birthday(&self, birthday: &Birthday) -> Result<bool>;

    /// Returns true if the birthday was found and deleted
    async fn delete_birthday(&self, birthday_id: &str) -> Result<bool>;
}
