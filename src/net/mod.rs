//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` handles transport and error normalization, `api` exposes one typed
//! function per endpoint, and `types` defines the shared wire schema.

pub mod api;
pub mod http;
pub mod types;
