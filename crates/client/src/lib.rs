//! HTTP client for the AdCP campaign generation service.

pub mod client;

pub use client::{GenerateError, GenerationClient, ServiceHealth};
