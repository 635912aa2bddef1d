//! Data models
//!
//! Shared between flexitime-server and its clients (via API).
//! IDs are opaque strings assigned by the server's store.

pub mod employee;
pub mod flexitime;

// Re-exports
pub use employee::*;
pub use flexitime::*;
