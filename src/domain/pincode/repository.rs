use super::entity::{Coordinates, PincodeEntry};
use super::value_objects::PinCode;
use crate::domain::distance::errors::DomainError;
use async_trait::async_trait;

/// Read-only view of the postal code reference table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PincodeRepository: Send + Sync {
    async fn find_by_code(&self, code: &PinCode) -> Result<Option<PincodeEntry>, DomainError>;
    /// Coordinates-only projection of `find_by_code`.
    async fn find_coordinates(&self, code: &PinCode) -> Result<Option<Coordinates>, DomainError>;
    /// Any single row, used to tell an empty table from a populated one.
    async fn find_any(&self) -> Result<Option<PincodeEntry>, DomainError>;
}
