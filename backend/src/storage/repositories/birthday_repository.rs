use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use shared::BirthdayStatus;
use sqlx::{sqlite::SqliteRow, Row};

use crate::domain::models::birthday::Birthday;
use crate::storage::connection::DbConnection;
use crate::storage::traits::BirthdayStorage;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// SQLite-backed repository for birthday records
#[derive(Clone)]
pub struct BirthdayRepository {
    db: DbConnection,
}

impl BirthdayRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn status_to_column(status: BirthdayStatus) -> &'static str {
        match status {
            BirthdayStatus::NotSent => "NotSent",
            BirthdayStatus::Sent => "Sent",
        }
    }

    fn status_from_column(value: &str) -> Result<BirthdayStatus> {
        match value {
            "NotSent" => Ok(BirthdayStatus::NotSent),
            "Sent" => Ok(BirthdayStatus::Sent),
            other => Err(anyhow::anyhow!("Unknown birthday status in database: {}", other)),
        }
    }

    fn row_to_birthday(row: &SqliteRow) -> Result<Birthday> {
        let id: String = row.get("id");
        let birth_date: String = row.get("birth_date");
        let status: String = row.get("status");
        let created_at: String = row.get("created_at");
        let updated_at: String = row.get("updated_at");

        Ok(Birthday {
            birth_date: NaiveDate::parse_from_str(&birth_date, DATE_FORMAT)
                .with_context(|| format!("Invalid birth_date stored for {}", id))?,
            status: Self::status_from_column(&status)?,
            created_at: DateTime::parse_from_rfc3339(&created_at)
                .with_context(|| format!("Invalid created_at stored for {}", id))?
                .with_timezone(&Utc),
            updated_at: DateTime::parse_from_rfc3339(&updated_at)
                .with_context(|| format!("Invalid updated_at stored for {}", id))?
                .with_timezone(&Utc),
            name: row.get("name"),
            email: row.get("email"),
            message: row.get("message"),
            id,
        })
    }
}

#[async_trait]
impl BirthdayStorage for BirthdayRepository {
    async fn store_birthday(&self, birthday: &Birthday) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO birthdays (id, name, birth_date, email, message, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&birthday.id)
        .bind(&birthday.name)
        .bind(birthday.birth_date.format(DATE_FORMAT).to_string())
        .bind(&birthday.email)
        .bind(&birthday.message)
        .bind(Self::status_to_column(birthday.status))
        .bind(birthday.created_at.to_rfc3339())
        .bind(birthday.updated_at.to_rfc3339())
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn get_birthday(&self, birthday_id: &str) -> Result<Option<Birthday>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, birth_date, email, message, status, created_at, updated_at
            FROM birthdays
            WHERE id = ?
            "#,
        )
        .bind(birthday_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::row_to_birthday).transpose()
    }

    async fn list_birthdays(&self) -> Result<Vec<Birthday>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, birth_date, email, message, status, created_at, updated_at
            FROM birthdays
            ORDER BY birth_date ASC, rowid ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::row_to_birthday).collect()
    }

    async fn update_birthday(&self, birthday: &Birthday) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE birthdays
            SET name = ?, birth_date = ?, email = ?, message = ?, status = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&birthday.name)
        .bind(birthday.birth_date.format(DATE_FORMAT).to_string())
        .bind(&birthday.email)
        .bind(&birthday.message)
        .bind(Self::status_to_column(birthday.status))
        .bind(birthday.updated_at.to_rfc3339())
        .bind(&birthday.id)
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_birthday(&self, birthday_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM birthdays WHERE id = ?")
            .bind(birthday_id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_test() -> BirthdayRepository {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        BirthdayRepository::new(db)
    }

    fn create_test_birthday(name: &str, birth_date: &str) -> Birthday {
        let now = Utc::now();
        Birthday {
            id: Birthday::generate_id(),
            name: name.to_string(),
            birth_date: NaiveDate::parse_from_str(birth_date, DATE_FORMAT).unwrap(),
            email: Some(format!("{}@example.com", name.to_lowercase())),
            message: None,
            status: BirthdayStatus::NotSent,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_store_and_get_birthday() {
        let repo = setup_test().await;
        let birthday = create_test_birthday("Ada", "1815-12-10");

        repo.store_birthday(&birthday).await.expect("Failed to store birthday");

        let loaded = repo
            .get_birthday(&birthday.id)
            .await
            .expect("Failed to get birthday")
            .expect("Birthday should exist");

        assert_eq!(loaded.id, birthday.id);
        assert_eq!(loaded.name, "Ada");
        assert_eq!(loaded.birth_date, birthday.birth_date);
        assert_eq!(loaded.email.as_deref(), Some("ada@example.com"));
        assert_eq!(loaded.message, None);
        assert_eq!(loaded.status, BirthdayStatus::NotSent);
        assert_eq!(loaded.created_at.timestamp_millis(), birthday.created_at.timestamp_millis());
    }

    #[tokio::test]
    async fn test_get_nonexistent_birthday() {
        let repo = setup_test().await;
        let loaded = repo.get_birthday("birthday::missing").await.expect("Query should succeed");
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_list_orders_by_birth_date_then_insertion() {
        let repo = setup_test().await;

        let late = create_test_birthday("Late", "2001-09-01");
        let early = create_test_birthday("Early", "1980-01-15");
        let twin_a = create_test_birthday("TwinA", "1995-05-05");
        let twin_b = create_test_birthday("TwinB", "1995-05-05");

        for b in [&late, &early, &twin_a, &twin_b] {
            repo.store_birthday(b).await.expect("Failed to store birthday");
        }

        let names: Vec<String> = repo
            .list_birthdays()
            .await
            .expect("Failed to list birthdays")
            .into_iter()
            .map(|b| b.name)
            .collect();

        assert_eq!(names, vec!["Early", "TwinA", "TwinB", "Late"]);
    }

    #[tokio::test]
    async fn test_update_birthday() {
        let repo = setup_test().await;
        let mut birthday = create_test_birthday("Grace", "1906-12-09");
        repo.store_birthday(&birthday).await.unwrap();

        birthday.name = "Grace Hopper".to_string();
        birthday.status = BirthdayStatus::Sent;
        birthday.message = Some("Happy birthday, Admiral".to_string());
        birthday.email = None;

        let updated = repo.update_birthday(&birthday).await.expect("Failed to update birthday");
        assert!(updated);

        let loaded = repo.get_birthday(&birthday.id).await.unwrap().unwrap();
        assert_eq!(loaded.name, "Grace Hopper");
        assert_eq!(loaded.status, BirthdayStatus::Sent);
        assert_eq!(loaded.message.as_deref(), Some("Happy birthday, Admiral"));
        assert_eq!(loaded.email, None);
    }

    #[tokio::test]
    async fn test_update_nonexistent_birthday_reports_false() {
        let repo = setup_test().await;
        let birthday = create_test_birthday("Ghost", "1990-01-01");
        let updated = repo.update_birthday(&birthday).await.expect("Query should succeed");
        assert!(!updated);
    }

    #[tokio::test]
    async fn test_delete_birthday() {
        let repo = setup_test().await;
        let birthday = create_test_birthday("Alan", "1912-06-23");
        repo.store_birthday(&birthday).await.unwrap();

        assert!(repo.delete_birthday(&birthday.id).await.unwrap());
        assert!(repo.get_birthday(&birthday.id).await.unwrap().is_none());
        assert!(!repo.delete_birthday(&birthday.id).await.unwrap());
    }
}
