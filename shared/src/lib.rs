//! Shared types for the flexitime service
//!
//! API-facing models serialized over HTTP. The server converts its stored
//! documents into these, and clients deserialize responses into them.

pub mod models;
