//! Depot API
//!
//! HTTP surface for the storage gateway: multipart uploads, downloads,
//! presigned links, and folder operations, each forwarding to exactly one
//! backend call.

pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;
pub mod utils;
