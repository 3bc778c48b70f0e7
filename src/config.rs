//! Static configuration for talking to the Compute API and writing reports.

/// Base URL of the Compute Engine v1 REST API.
pub const COMPUTE_API_BASE: &str = "https://compute.googleapis.com/compute/v1";

/// Per request timeout, covers connect and body download.
pub const HTTP_TIMEOUT_SECS: u64 = 60;

/// Env var holding a ready made OAuth access token (also read from `.env`).
pub const TOKEN_ENV_VAR: &str = "GOOGLE_OAUTH_ACCESS_TOKEN";

/// Fallback command used when [`TOKEN_ENV_VAR`] is not set.
pub const GCLOUD_TOKEN_CMD: &str = "gcloud auth print-access-token";

/// Directory the `<subnet>.md` reports land in.
pub const DEFAULT_OUTPUT_DIR: &str = ".";

pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Extension of every report file.
pub const REPORT_EXTENSION: &str = "md";
