//! Domains module containing business logic organized by bounded contexts.
//!
//! - **geology**: WMS request translation for the BGS geology service
//! - **tools**: MCP tools exposing the geology domain to clients

pub mod geology;
pub mod tools;
