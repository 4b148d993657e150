//! sri-core
//!
//! Pure domain types, storage key conventions, and the clock/id capabilities
//! injected into the engine. No I/O; this is the shared vocabulary of the
//! SRI system.

pub mod clock;
pub mod error;
pub mod ids;
pub mod keys;
pub mod models;
