//! HTTP API Client
//!
//! Functions for talking to the portfolio backend REST API.

pub mod client;

pub use client::*;
