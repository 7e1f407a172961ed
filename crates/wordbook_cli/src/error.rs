//! CLI error type and its mapping to process exit codes.

use thiserror::Error;
use uuid::Uuid;
use wordbook_core::db::DbError;
use wordbook_core::{LoggingError, RepoError, ServiceError};

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_CLIENT: u8 = 2;
pub const EXIT_NOT_FOUND: u8 = 3;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("{kind} with id {id} not found")]
    NotFound { kind: &'static str, id: Uuid },
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Repo(#[from] RepoError),
    #[error(transparent)]
    Db(#[from] DbError),
    #[error(transparent)]
    Logging(#[from] LoggingError),
    #[error("cannot resolve log directory: {0}")]
    LogDir(#[source] std::io::Error),
    #[error("cannot encode output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    /// 2 for caller mistakes, 3 for missing records, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::TooLong { .. } => EXIT_CLIENT,
            Self::NotFound { .. } => EXIT_NOT_FOUND,
            Self::Service(err) if err.is_validation() => EXIT_CLIENT,
            Self::Service(err) if err.is_not_found() => EXIT_NOT_FOUND,
            Self::Service(ServiceError::Repo(RepoError::AlreadyExists(_))) => EXIT_CLIENT,
            Self::Logging(
                LoggingError::UnsupportedLevel(_)
                | LoggingError::EmptyLogDir
                | LoggingError::RelativeLogDir(_)
                | LoggingError::Conflict { .. },
            ) => EXIT_CLIENT,
            _ => EXIT_FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CliError, EXIT_CLIENT, EXIT_FAILURE, EXIT_NOT_FOUND};
    use std::path::PathBuf;
    use uuid::Uuid;
    use wordbook_core::{LoggingError, RepoError, ServiceError, ValidationError};

    #[test]
    fn maps_errors_to_exit_codes() {
        let missing = Uuid::new_v4();
        let cases = [
            (
                CliError::TooLong {
                    field: "name",
                    max: 200,
                },
                EXIT_CLIENT,
            ),
            (
                CliError::NotFound {
                    kind: "Dictionary",
                    id: missing,
                },
                EXIT_NOT_FOUND,
            ),
            (
                CliError::Service(ServiceError::Validation(ValidationError::EmptyName)),
                EXIT_CLIENT,
            ),
            (
                CliError::Service(ServiceError::Repo(RepoError::DictionaryNotFound(missing))),
                EXIT_NOT_FOUND,
            ),
            (
                CliError::Service(ServiceError::Repo(RepoError::InvalidData(
                    "bad row".to_string(),
                ))),
                EXIT_FAILURE,
            ),
            (CliError::Repo(RepoError::ForeignKeysDisabled), EXIT_FAILURE),
            (
                CliError::Service(ServiceError::Repo(RepoError::Validation(
                    ValidationError::EmptyName,
                ))),
                EXIT_FAILURE,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.exit_code(), expected, "{err}");
        }
    }

    #[test]
    fn not_found_message_names_the_record() {
        let id = Uuid::nil();
        let err = CliError::NotFound {
            kind: "Entry",
            id,
        };
        assert_eq!(
            err.to_string(),
            "Entry with id 00000000-0000-0000-0000-000000000000 not found"
        );
    }

    #[test]
    fn logging_input_errors_are_client_errors_but_io_failures_are_not() {
        let client = [
            LoggingError::UnsupportedLevel("loud".to_string()),
            LoggingError::EmptyLogDir,
            LoggingError::RelativeLogDir("logs".to_string()),
            LoggingError::Conflict {
                setting: "level",
                active: "info".to_string(),
                requested: "debug".to_string(),
            },
        ];
        for err in client {
            assert_eq!(CliError::Logging(err).exit_code(), EXIT_CLIENT);
        }

        let io_failure = CliError::Logging(LoggingError::CreateDir {
            path: PathBuf::from("/proc/wordbook-logs"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        });
        assert_eq!(io_failure.exit_code(), EXIT_FAILURE);
    }
}
