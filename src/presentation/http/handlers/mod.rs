pub mod distance;
pub mod health;
pub mod pincodes;
