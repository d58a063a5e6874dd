//! Networking modules for the admin REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the authenticated calls, `error` classifies their failures,
//! and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
