#[derive(Debug, thiserror::Error)]
pub enum InflationReportError {
    #[error("inflation_report.invalid_report_type")]
    InvalidReportType,
    #[error("repository.database_error")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
