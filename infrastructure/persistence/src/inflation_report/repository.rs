use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::inflation_report::model::InflationReport;
use business::domain::inflation_report::repository::InflationReportRepository;
use business::domain::inflation_report::value_objects::ReportType;

use super::entity::InflationReportEntity;
use crate::db::database_error;

pub struct InflationReportRepositoryPostgres {
    pool: PgPool,
}

impl InflationReportRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InflationReportRepository for InflationReportRepositoryPostgres {
    async fn get_all(
        &self,
        report_type: Option<ReportType>,
    ) -> Result<Vec<InflationReport>, RepositoryError> {
        let entities = sqlx::query_as::<_, InflationReportEntity>(
            r#"SELECT r.uuid, r.report_type, c.uuid AS category_uuid, c.name AS category_name,
                r.start_date, r.end_date, r.inflation_rate
            FROM inflation_reports r
            JOIN categories c ON c.id = r.category_id
            WHERE ($1::text IS NULL OR r.report_type = $1)
            ORDER BY r.end_date DESC, c.name"#,
        )
        .bind(report_type.map(|t| t.to_string()))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        entities
            .into_iter()
            .map(InflationReportEntity::into_domain)
            .collect()
    }
}
