//! Backend API
//!
//! HTTP client for the Converse backend service.

pub mod client;

pub use client::*;
