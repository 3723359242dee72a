use crate::{
    application::resolve_distance::use_case::ResolveDistanceUseCase,
    domain::pincode::repository::PincodeRepository,
};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub pincode_repo: Arc<dyn PincodeRepository>,
    pub resolve_distance: Arc<ResolveDistanceUseCase>,
}
