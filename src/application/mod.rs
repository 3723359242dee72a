pub mod record_failure;
pub mod resolve_distance;
