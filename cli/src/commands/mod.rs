//! Command implementations

pub mod validate;
pub mod version;
