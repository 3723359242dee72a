pub mod entity;
pub mod errors;
pub mod geometry;
pub mod policy;
pub mod routing;
