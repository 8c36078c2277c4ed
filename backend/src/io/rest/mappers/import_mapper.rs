use crate::domain::commands::import::{ImportBirthdaysCommand, ImportOutcome, ImportReport};
use crate::io::rest::mappers::birthday_mapper::BirthdayMapper;
use shared::{ImportBirthdaysRequest, ImportBirthdaysResponse, ImportRowResult};

pub struct ImportMapper;

impl ImportMapper {
    pub fn to_command(request: ImportBirthdaysRequest) -> ImportBirthdaysCommand {
        ImportBirthdaysCommand { rows: request.rows }
    }

    pub fn to_response_dto(report: ImportReport) -> ImportBirthdaysResponse {
        let imported = report.imported();
        let failed = report.failed();

        ImportBirthdaysResponse {
            imported,
            failed,
            results: report.outcomes.into_iter().map(Self::to_row_dto).collect(),
        }
    }

    fn to_row_dto(outcome: ImportOutcome) -> ImportRowResult {
        let (birthday, error) = match outcome.result {
            Ok(birthday) => (Some(BirthdayMapper::to_dto(birthday)), None),
            Err(reason) => (None, Some(reason)),
        };

        ImportRowResult {
            row: outcome.row,
            input: outcome.input,
            birthday,
            error,
        }
    }
}
