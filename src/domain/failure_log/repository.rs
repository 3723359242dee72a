use super::entity::{FailureRecord, FailureReport};
use crate::domain::distance::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FailureLogRepository: Send + Sync {
    /// Inserts the pair with `retry_count = 1` or, if it already exists, overwrites the
    /// diagnostic fields and bumps `retry_count` by one. Must be a single atomic statement.
    async fn upsert_failure(&self, report: &FailureReport) -> Result<FailureRecord, DomainError>;
    async fn find_by_pair(
        &self,
        from_pincode: &str,
        to_pincode: &str,
    ) -> Result<Option<FailureRecord>, DomainError>;
}
