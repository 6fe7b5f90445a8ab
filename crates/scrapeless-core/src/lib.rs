//! Core traits and types for the Scrapeless agent tools
//!
//! This crate provides the contract shared by every other crate in the workspace:
//! the `Tool` abstraction an agent framework invokes, the error taxonomy,
//! credential resolution and configuration loading.

pub mod auth;
pub mod config;
pub mod context;
pub mod error;
pub mod traits;

// Re-exports
pub use auth::{ApiToken, ERROR_SCRAPELESS_TOKEN_ENV_VAR_NOT_SET, SCRAPELESS_API_KEY_ENV};
pub use config::{ScrapelessConfig, TelemetryConfig};
pub use context::ToolContext;
pub use error::{Error, Result};
pub use traits::{Tool, ToolResponse, Toolset};
