// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod business_repository;
pub mod category_repository;
pub mod feedback_repository;

pub use business_repository::*;
pub use category_repository::*;
pub use feedback_repository::*;
