use crate::domain::{
    distance::errors::DomainError,
    pincode::{
        entity::{Coordinates, PincodeEntry},
        repository::PincodeRepository,
        value_objects::PinCode,
    },
};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

const ENTRY_COLUMNS: &str = "pincode, latitude, longitude, circle_name, region_name, \
     division_name, office_name, office_type, delivery, district, state_name";

pub struct SqlxPincodeRepository {
    pool: PgPool,
}

impl SqlxPincodeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PincodeRepository for SqlxPincodeRepository {
    #[instrument(skip(self), fields(pincode = %code))]
    async fn find_by_code(&self, code: &PinCode) -> Result<Option<PincodeEntry>, DomainError> {
        let entry = sqlx::query_as::<_, PincodeEntry>(&format!(
            "SELECT {} FROM pincodes WHERE pincode = $1",
            ENTRY_COLUMNS
        ))
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        debug!(found = entry.is_some(), "Pincode lookup");
        entry.map(PincodeEntry::checked).transpose()
    }

    async fn find_coordinates(&self, code: &PinCode) -> Result<Option<Coordinates>, DomainError> {
        let row = sqlx::query_as::<_, (f64, f64)>(
            "SELECT latitude, longitude FROM pincodes WHERE pincode = $1",
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        row.map(|(latitude, longitude)| {
            Coordinates::new(latitude, longitude).map_err(|e| {
                DomainError::InfrastructureError(format!(
                    "pincode {} has invalid coordinates: {}",
                    code, e
                ))
            })
        })
        .transpose()
    }

    async fn find_any(&self) -> Result<Option<PincodeEntry>, DomainError> {
        sqlx::query_as::<_, PincodeEntry>(&format!(
            "SELECT {} FROM pincodes LIMIT 1",
            ENTRY_COLUMNS
        ))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?
        .map(PincodeEntry::checked)
        .transpose()
    }
}
