//! Request and response DTOs for the REST API.
//!
//! Wire format is camelCase, matching the established client contract.

pub mod alias;
pub mod analytics;
pub mod health;
pub mod redirect;
pub mod shorten;
