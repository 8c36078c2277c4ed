//! Conversions between the shared birthday DTOs and the domain model.

use crate::domain::commands::birthdays::{
    BirthdayResult, CreateBirthdayCommand, GroupedBirthdaysResult, UpcomingBirthdaysResult,
    UpdateBirthdayCommand,
};
use crate::domain::models::birthday::Birthday as DomainBirthday;
use crate::domain::schedule::{BucketGroup, Ranked};
use shared::{
    Birthday as SharedBirthday, BirthdayGroup, BirthdayListResponse, BirthdayResponse,
    CreateBirthdayRequest, GroupedBirthdaysResponse, UpcomingBirthday, UpcomingBirthdaysResponse,
    UpdateBirthdayRequest,
};

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Maps request DTOs to domain commands and domain results to response DTOs.
pub struct BirthdayMapper;

impl BirthdayMapper {
    /// Converts a domain Birthday model to a shared Birthday DTO.
    pub fn to_dto(domain: DomainBirthday) -> SharedBirthday {
        SharedBirthday {
            id: domain.id,
            name: domain.name,
            birth_date: domain.birth_date.format(DATE_FORMAT).to_string(),
            email: domain.email,
            message: domain.message,
            status: domain.status,
            created_at: domain.created_at.to_rfc3339(),
            updated_at: domain.updated_at.to_rfc3339(),
        }
    }

    pub fn to_create_command(request: CreateBirthdayRequest) -> CreateBirthdayCommand {
        CreateBirthdayCommand {
            name: request.name,
            birth_date: request.birth_date,
            email: request.email,
            message: request.message,
            status: request.status,
        }
    }

    pub fn to_update_command(request: UpdateBirthdayRequest) -> UpdateBirthdayCommand {
        UpdateBirthdayCommand {
            name: request.name,
            birth_date: request.birth_date,
            email: request.email,
            message: request.message,
            status: request.status,
        }
    }

    pub fn to_response_dto(result: BirthdayResult) -> BirthdayResponse {
        BirthdayResponse {
            birthday: Self::to_dto(result.birthday),
            success_message: result.success_message,
        }
    }

    pub fn to_list_dto(birthdays: Vec<DomainBirthday>) -> BirthdayListResponse {
        BirthdayListResponse {
            birthdays: birthdays.into_iter().map(Self::to_dto).collect(),
        }
    }

    pub fn to_upcoming_dto(ranked: Ranked<DomainBirthday>) -> UpcomingBirthday {
        UpcomingBirthday {
            birthday: Self::to_dto(ranked.record),
            next_occurrence: ranked.next_occurrence.format(DATE_FORMAT).to_string(),
            days_until: ranked.days_until,
        }
    }

    pub fn to_group_dto(group: BucketGroup<DomainBirthday>) -> BirthdayGroup {
        BirthdayGroup {
            bucket: group.bucket,
            label: group.bucket.label().to_string(),
            birthdays: group.entries.into_iter().map(Self::to_upcoming_dto).collect(),
        }
    }

    pub fn to_grouped_response_dto(result: GroupedBirthdaysResult) -> GroupedBirthdaysResponse {
        GroupedBirthdaysResponse {
            today: result.today.format(DATE_FORMAT).to_string(),
            groups: result.groups.into_iter().map(Self::to_group_dto).collect(),
        }
    }

    pub fn to_upcoming_response_dto(result: UpcomingBirthdaysResult) -> UpcomingBirthdaysResponse {
        UpcomingBirthdaysResponse {
            today: result.today.format(DATE_FORMAT).to_string(),
            birthdays: result.birthdays.into_iter().map(Self::to_upcoming_dto).collect(),
        }
    }
}
