//! Infrastructure layer
//!
//! Concrete hardware drivers, network services and the background tasks
//! that tie them to the library crates.

pub mod adapters;
pub mod drivers;
pub mod services;
pub mod tasks;
