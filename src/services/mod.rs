// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod aggregator;
pub mod cache;
pub mod places_client;

pub use aggregator::*;
pub use cache::*;
pub use places_client::*;
