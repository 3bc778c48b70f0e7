//! Google Cloud interaction.
//!
//! This module handles all GCP-related operations:
//! - [`cli`] - Command execution for the gcloud CLI
//! - [`auth`] - Access token lookup
//! - [`compute`] - Compute Engine REST calls behind the [`ComputeApi`] trait

mod auth;
mod cli;
mod compute;

// Re-export public types and functions
pub use auth::{access_token, token_from};
pub use cli::run;
pub use compute::{api_error_message, ComputeApi, GcpClient};
