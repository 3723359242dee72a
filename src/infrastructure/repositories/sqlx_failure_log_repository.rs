use crate::domain::{
    distance::errors::DomainError,
    failure_log::{
        entity::{FailureRecord, FailureReport},
        repository::FailureLogRepository,
    },
};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

const RECORD_COLUMNS: &str = "id, from_pincode, to_pincode, from_lat, from_lng, to_lat, to_lng, \
     error_message, error_code, response_data, retry_count, first_seen_at, last_attempt_at";

pub struct SqlxFailureLogRepository {
    pool: PgPool,
}

impl SqlxFailureLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FailureLogRepository for SqlxFailureLogRepository {
    // One statement: the unique (from_pincode, to_pincode) constraint serialises concurrent
    // writers, and first_seen_at only appears in the insert branch.
    #[instrument(skip_all, fields(from = %report.from_pincode, to = %report.to_pincode))]
    async fn upsert_failure(&self, report: &FailureReport) -> Result<FailureRecord, DomainError> {
        sqlx::query_as::<_, FailureRecord>(&format!(
            "INSERT INTO failed_distance_logs (
                id, from_pincode, to_pincode, from_lat, from_lng, to_lat, to_lng,
                error_message, error_code, response_data,
                retry_count, first_seen_at, last_attempt_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, 1, NOW(), NOW())
            ON CONFLICT (from_pincode, to_pincode) DO UPDATE SET
                from_lat = EXCLUDED.from_lat,
                from_lng = EXCLUDED.from_lng,
                to_lat = EXCLUDED.to_lat,
                to_lng = EXCLUDED.to_lng,
                error_message = EXCLUDED.error_message,
                error_code = EXCLUDED.error_code,
                response_data = EXCLUDED.response_data,
                retry_count = failed_distance_logs.retry_count + 1,
                last_attempt_at = EXCLUDED.last_attempt_at,
                updated_at = NOW()
            RETURNING {}",
            RECORD_COLUMNS
        ))
        .bind(Uuid::now_v7())
        .bind(&report.from_pincode)
        .bind(&report.to_pincode)
        .bind(report.from.latitude)
        .bind(report.from.longitude)
        .bind(report.to.latitude)
        .bind(report.to.longitude)
        .bind(&report.error_message)
        .bind(&report.error_code)
        .bind(&report.response_data)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }

    async fn find_by_pair(
        &self,
        from_pincode: &str,
        to_pincode: &str,
    ) -> Result<Option<FailureRecord>, DomainError> {
        sqlx::query_as::<_, FailureRecord>(&format!(
            "SELECT {} FROM failed_distance_logs WHERE from_pincode = $1 AND to_pincode = $2",
            RECORD_COLUMNS
        ))
        .bind(from_pincode)
        .bind(to_pincode)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }
}
