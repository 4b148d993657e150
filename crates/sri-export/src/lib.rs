//! sri-export
//!
//! Anonymized export of completed sessions (JSON, CSV) and the shareable
//! result projections: link payloads and share text rendered from templates.

pub mod csv;
pub mod error;
pub mod export;
pub mod render;
pub mod share;
