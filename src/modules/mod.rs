//! Modules layer - Infrastructure components for external integrations
//!
//! Contains clients for the services EasyTrip depends on.

pub mod places_api;
