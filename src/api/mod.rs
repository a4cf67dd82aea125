//! REST API Client
//!
//! Thin wrapper over the Farmunity backend plus the wire types it speaks.

pub mod client;
pub mod types;

pub use client::*;
