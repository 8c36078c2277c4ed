//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer maps the DTOs from the `shared`
//! crate onto them.

pub mod birthdays {
    use chrono::NaiveDate;
    use shared::BirthdayStatus;

    use crate::domain::models::birthday::Birthday;
    use crate::domain::schedule::{BucketGroup, Ranked};

    /// Input for creating a birthday. Strings are raw user input.
    #[derive(Debug, Clone)]
    pub struct CreateBirthdayCommand {
        pub name: String,
        pub birth_date: String,
        pub email: Option<String>,
        pub message: Option<String>,
        pub status: Option<BirthdayStatus>,
    }

    /// Partial update; `None` leaves the stored value as is
    #[derive(Debug, Clone, Default)]
    pub struct UpdateBirthdayCommand {
        pub name: Option<String>,
        pub birth_date: Option<String>,
        pub email: Option<String>,
        pub message: Option<String>,
        pub status: Option<BirthdayStatus>,
    }

    #[derive(Debug, Clone, Default)]
    pub struct BirthdayListQuery {
        pub search: Option<String>,
    }

    #[derive(Debug, Clone)]
    pub struct GroupedBirthdaysQuery {
        pub today: NaiveDate,
        pub search: Option<String>,
    }

    #[derive(Debug, Clone)]
    pub struct BirthdayResult {
        pub birthday: Birthday,
        pub success_message: String,
    }

    #[derive(Debug, Clone)]
    pub struct GroupedBirthdaysResult {
        pub today: NaiveDate,
        pub groups: Vec<BucketGroup<Birthday>>,
    }

    #[derive(Debug, Clone)]
    pub struct UpcomingBirthdaysResult {
        pub today: NaiveDate,
        pub birthdays: Vec<Ranked<Birthday>>,
    }
}

pub mod import {
    use shared::ImportRow;

    use crate::domain::models::birthday::Birthday;

    #[derive(Debug, Clone)]
    pub struct ImportBirthdaysCommand {
        pub rows: Vec<ImportRow>,
    }

    /// What happened to one input row
    #[derive(Debug, Clone)]
    pub struct ImportOutcome {
        pub row: usize,
        pub input: ImportRow,
        pub result: Result<Birthday, String>,
    }

    #[derive(Debug, Clone, Default)]
    pub struct ImportReport {
        pub outcomes: Vec<ImportOutcome>,
    }

    impl ImportReport {
        pub fn imported(&self) -> usize {
            self.outcomes.iter().filter(|o| o.result.is_ok()).count()
        }

        pub fn failed(&self) -> usize {
            self.outcomes.iter().filter(|o| o.result.is_err()).count()
        }
    }
}

pub mod reminders {
    use chrono::NaiveDate;

    use crate::domain::models::birthday::Birthday;

    #[derive(Debug, Clone)]
    pub struct CelebrantEntry {
        pub birthday: Birthday,
        /// Every other stored email address
        pub announcement_recipients: Vec<String>,
    }

    #[derive(Debug, Clone)]
    pub struct ReminderDigest {
        pub date: NaiveDate,
        pub today: Vec<CelebrantEntry>,
        pub tomorrow: Vec<Birthday>,
    }
}
