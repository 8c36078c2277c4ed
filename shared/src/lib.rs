use serde::{Deserialize, Serialize};
use std::fmt;

/// A stored birthday entry as exchanged over the REST API.
///
/// ID format: "birthday::<uuid v4>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Birthday {
    pub id: String,
    pub name: String,
    /// Birth date in ISO format (YYYY-MM-DD)
    pub birth_date: String,
    pub email: Option<String>,
    pub message: Option<String>,
    pub status: BirthdayStatus,
    /// RFC 3339 timestamp
    pub created_at: String,
    /// RFC 3339 timestamp
    pub updated_at: String,
}

/// Whether the birthday wishes for the current cycle have gone out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BirthdayStatus {
    #[default]
    #[serde(rename = "Not Sent", alias = "NotSent")]
    NotSent,
    Sent,
}

impl BirthdayStatus {
    /// Human readable label, also used as the JSON representation
    pub fn label(&self) -> &'static str {
        match self {
            BirthdayStatus::NotSent => "Not Sent",
            BirthdayStatus::Sent => "Sent",
        }
    }
}

impl fmt::Display for BirthdayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBirthdayRequest {
    pub name: String,
    /// Accepts `date` as well, which is what older clients send
    #[serde(alias = "date")]
    pub birth_date: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<BirthdayStatus>,
}

/// Partial update; `None` leaves a field untouched.
/// An empty `email` or `message` clears the stored value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UpdateBirthdayRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "date")]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<BirthdayStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthdayResponse {
    pub birthday: Birthday,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthdayListResponse {
    pub birthdays: Vec<Birthday>,
}

/// Display bucket a birthday falls into relative to a reference date.
/// Variants are declared in display priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BirthdayBucket {
    ThisWeek,
    NextWeek,
    ThisMonth,
    NextMonth,
    Later,
}

impl BirthdayBucket {
    /// All buckets in display order
    pub const ALL: [BirthdayBucket; 5] = [
        BirthdayBucket::ThisWeek,
        BirthdayBucket::NextWeek,
        BirthdayBucket::ThisMonth,
        BirthdayBucket::NextMonth,
        BirthdayBucket::Later,
    ];

    /// Section header shown above the bucket
    pub fn label(&self) -> &'static str {
        match self {
            BirthdayBucket::ThisWeek => "This Week",
            BirthdayBucket::NextWeek => "Next Week",
            BirthdayBucket::ThisMonth => "This Month",
            BirthdayBucket::NextMonth => "Next Month",
            BirthdayBucket::Later => "Later",
        }
    }
}

/// A birthday together with the values derived for one reference date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingBirthday {
    pub birthday: Birthday,
    /// Next occurrence on or after the reference date (YYYY-MM-DD)
    pub next_occurrence: String,
    pub days_until: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthdayGroup {
    pub bucket: BirthdayBucket,
    pub label: String,
    pub birthdays: Vec<UpcomingBirthday>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedBirthdaysResponse {
    /// Reference date the grouping was computed for (YYYY-MM-DD)
    pub today: String,
    pub groups: Vec<BirthdayGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingBirthdaysResponse {
    pub today: String,
    pub birthdays: Vec<UpcomingBirthday>,
}

/// One already-parsed row from an uploaded file. Fields may be missing or blank;
/// validation happens per row on the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ImportRow {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportBirthdaysRequest {
    pub rows: Vec<ImportRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportRowResult {
    /// Zero-based position of the row in the request
    pub row: usize,
    pub input: ImportRow,
    pub birthday: Option<Birthday>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportBirthdaysResponse {
    pub imported: usize,
    pub failed: usize,
    pub results: Vec<ImportRowResult>,
}

/// Someone celebrating on the digest date, with the addresses to announce it to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Celebrant {
    pub birthday: Birthday,
    pub announcement_recipients: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderDigestResponse {
    pub date: String,
    pub today: Vec<Celebrant>,
    pub tomorrow: Vec<Birthday>,
}
