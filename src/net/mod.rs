//! Networking modules for the hosted identity service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the gateway operations plus the session fetch/refresh pair,
//! `auth_client` owns the startup and notification lifecycle, `config` the
//! public service settings, and `types` the wire schema.

pub mod api;
pub mod auth_client;
pub mod config;
pub mod types;
