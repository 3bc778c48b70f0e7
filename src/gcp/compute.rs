//! Compute Engine REST calls.
//!
//! [`ComputeApi`] is the seam between the aggregation engine and the network.
//! [`GcpClient`] implements it over HTTPS; tests implement it in memory.

use crate::BoxError;
use crate::config;
use crate::models::compute::{AddressAggregatedList, InstanceAggregatedList, XpnResources};
use crate::models::{Address, Instance};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Read only queries the summary needs from the provider.
#[async_trait]
pub trait ComputeApi: Send + Sync {
    /// Ids of the service projects attached to a Shared VPC host.
    async fn list_service_projects(&self, host_project: &str) -> Result<Vec<String>, BoxError>;

    /// All reserved addresses of a project, across regions.
    async fn list_addresses(&self, project: &str) -> Result<Vec<Address>, BoxError>;

    /// All instances of a project, across zones.
    async fn list_instances(&self, project: &str) -> Result<Vec<Instance>, BoxError>;
}

/// Compute Engine v1 client authenticated with a bearer token.
#[derive(Debug, Clone)]
pub struct GcpClient {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

impl GcpClient {
    pub fn new(token: String) -> Result<GcpClient, BoxError> {
        GcpClient::with_base_url(token, config::COMPUTE_API_BASE)
    }

    /// Client against a different endpoint, e.g. a local emulator.
    pub fn with_base_url(token: String, base_url: &str) -> Result<GcpClient, BoxError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config::HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|e| format!("Error building HTTP client: {e}"))?;
        Ok(GcpClient {
            client,
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn project_url(&self, project: &str, path: &str) -> String {
        format!("{}/projects/{project}/{path}", self.base_url)
    }

    /// GET a URL and decode the JSON body, reporting the failing JSON path.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, BoxError> {
        log::debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| format!("Error requesting {url}: {e}"))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| format!("Error reading response from {url}: {e}"))?;

        if !status.is_success() {
            log::trace!("GET {url} status={status} body=\n{body}");
            return Err(format!("GET {url} returned {status}: {}", api_error_message(&body)).into());
        }

        let mut deserializer = serde_json::Deserializer::from_str(&body);
        let parsed = serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
            log::error!("OUTPUT START:\n\n{}\n\nOUTPUT END\n", body);
            format!(
                "Error parsing JSON from {url}: path={} error={}",
                e.path(),
                e
            )
        })?;
        Ok(parsed)
    }
}

fn warn_if_truncated(what: &str, project: &str, next_page_token: &Option<String>) {
    if next_page_token.is_some() {
        log::warn!("{what} for {project} has more pages, only the first page is used");
    }
}

#[async_trait]
impl ComputeApi for GcpClient {
    async fn list_service_projects(&self, host_project: &str) -> Result<Vec<String>, BoxError> {
        let url = self.project_url(host_project, "getXpnResources");
        let xpn: XpnResources = self.get_json(&url).await?;
        warn_if_truncated("Service projects", host_project, &xpn.next_page_token);
        Ok(xpn.resources.into_iter().map(|r| r.id).collect())
    }

    async fn list_addresses(&self, project: &str) -> Result<Vec<Address>, BoxError> {
        let url = self.project_url(project, "aggregated/addresses");
        let list: AddressAggregatedList = self.get_json(&url).await?;
        warn_if_truncated("Addresses", project, &list.next_page_token);
        Ok(list.into_records())
    }

    async fn list_instances(&self, project: &str) -> Result<Vec<Instance>, BoxError> {
        let url = self.project_url(project, "aggregated/instances");
        let list: InstanceAggregatedList = self.get_json(&url).await?;
        warn_if_truncated("Instances", project, &list.next_page_token);
        Ok(list.into_records())
    }
}

/// Pull `error.message` out of a Google API error body, or fall back to the raw body.
pub fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(|s| s.to_string()))
        .unwrap_or_else(|| body.trim().chars().take(200).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_url() {
        let client = GcpClient::with_base_url("t".to_string(), "http://localhost:8080/compute/v1/")
            .unwrap();
        assert_eq!(
            client.project_url("svc-a", "aggregated/addresses"),
            "http://localhost:8080/compute/v1/projects/svc-a/aggregated/addresses"
        );
    }

    #[test]
    fn test_api_error_message_google_body() {
        let body = r#"{"error":{"code":403,"message":"Required 'compute.addresses.list' permission for 'projects/svc-a'","errors":[]}}"#;
        assert_eq!(
            api_error_message(body),
            "Required 'compute.addresses.list' permission for 'projects/svc-a'"
        );
    }

    #[test]
    fn test_api_error_message_plain_body() {
        assert_eq!(api_error_message("  Bad Gateway \n"), "Bad Gateway");
    }
}
