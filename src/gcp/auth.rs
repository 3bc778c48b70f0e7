//! Access token lookup.
//!
//! The tool never handles credentials itself: it takes a token that the
//! environment already minted, either from an env var (or `.env`) or from
//! the gcloud CLI.

use super::cli;
use crate::BoxError;
use crate::config;

/// Get an OAuth access token for the Compute API.
pub fn access_token() -> Result<String, BoxError> {
    token_from(std::env::var(config::TOKEN_ENV_VAR).ok(), || {
        cli::run(config::GCLOUD_TOKEN_CMD)
    })
}

/// Prefer `env_token` when set and non-blank, otherwise call `fallback`.
pub fn token_from<F>(env_token: Option<String>, fallback: F) -> Result<String, BoxError>
where
    F: FnOnce() -> Result<String, BoxError>,
{
    if let Some(token) = env_token.map(|t| t.trim().to_string()) {
        if !token.is_empty() {
            log::info!("Using access token from ${}", config::TOKEN_ENV_VAR);
            return Ok(token);
        }
    }

    log::info!("Getting access token with '{}'", config::GCLOUD_TOKEN_CMD);
    let token = fallback()?;
    if token.is_empty() {
        return Err("Empty access token returned".into());
    }
    Ok(token)
}
