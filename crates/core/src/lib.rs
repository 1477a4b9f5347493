//! Domain types and pure logic for the career goals service.
//!
//! Nothing in this crate touches the database or the network.

pub mod error;
pub mod goal_progress;
pub mod types;
