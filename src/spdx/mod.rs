//! SPDX domain layer
//!
//! The document model and the pure services that resolve identifiers,
//! classify relationships and dig the relationship graph. No I/O happens here.
pub mod domain;
pub mod services;
