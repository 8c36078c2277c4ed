use crate::domain::commands::reminders::{CelebrantEntry, ReminderDigest};
use crate::io::rest::mappers::birthday_mapper::{BirthdayMapper, DATE_FORMAT};
use shared::{Celebrant, ReminderDigestResponse};

pub struct ReminderMapper;

impl ReminderMapper {
    pub fn to_digest_dto(digest: ReminderDigest) -> ReminderDigestResponse {
        ReminderDigestResponse {
            date: digest.date.format(DATE_FORMAT).to_string(),
            today: digest.today.into_iter().map(Self::to_celebrant_dto).collect(),
            tomorrow: digest.tomorrow.into_iter().map(BirthdayMapper::to_dto).collect(),
        }
    }

    fn to_celebrant_dto(entry: CelebrantEntry) -> Celebrant {
        Celebrant {
            birthday: BirthdayMapper::to_dto(entry.birthday),
            announcement_recipients: entry.announcement_recipients,
        }
    }
}
