//! Candidate workflows: scanner enrollment, profile maintenance (status,
//! OSINT, documents), candidate portal analysis and HR imports.
//!
//! Each workflow calls the analysis gateway, then writes through the record
//! facade. Gateway errors propagate to the caller; store errors never do.

pub mod enroll;
pub mod handlers;
pub mod import;
pub mod portal;
pub mod profile;
