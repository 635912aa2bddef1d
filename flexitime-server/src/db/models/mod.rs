//! Database Models
//!
//! Document shapes as stored in SurrealDB. API-facing types live in
//! `shared::models`; see `api::convert` for the mapping.

pub mod employee;
pub mod flexitime;

pub use employee::*;
pub use flexitime::*;
