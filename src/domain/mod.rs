pub mod distance;
pub mod failure_log;
pub mod pincode;
