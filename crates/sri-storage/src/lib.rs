//! sri-storage
//!
//! Local persistence for assessment sessions. A key-value backend holds a
//! single versioned JSON root; repositories, the eviction policy and the
//! session store are layered on top of it.

pub mod backend;
pub mod config;
pub mod draft;
pub mod error;
pub mod policy;
pub mod repository;
pub mod store;
