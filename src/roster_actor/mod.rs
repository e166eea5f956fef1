//! Roster-specific domain logic: enrollment transitions and their errors.

mod actions;
pub mod dtos;
pub mod entity;
pub mod error;

pub use actions::*;
pub use dtos::*;
pub use entity::validate_catalog;
pub use error::*;
