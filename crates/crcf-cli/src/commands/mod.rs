//! Command handlers.
//!
//! Handlers translate parsed CLI arguments into core calls and display the
//! results.  No business logic lives here.

pub mod generate;
