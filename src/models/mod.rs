// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod business;
pub mod category;
pub mod external;
pub mod feedback;

pub use business::*;
pub use category::*;
pub use external::*;
pub use feedback::*;
