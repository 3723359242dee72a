pub mod sqlx_failure_log_repository;
pub mod sqlx_pincode_repository;
