//! Summarise IP address usage per subnet across a GCP Shared VPC.
//!
//! [`run`] lists the service projects of a host project, fetches their
//! reserved addresses and instances concurrently, merges everything into one
//! record per IP and writes one Markdown table per subnet.

pub mod args;
pub mod config;
pub mod gcp;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use gcp::ComputeApi;
use models::AddressRecord;
use output::ReportSink;
use std::collections::BTreeMap;
use std::error::Error;
use std::sync::Arc;

/// Error type used across the crate; Send + Sync so it can leave a tokio task.
pub type BoxError = Box<dyn Error + Send + Sync>;

/// Merge snapshots and group the result by subnet.
pub fn summarize(snapshots: Vec<models::ProjectSnapshot>) -> BTreeMap<String, Vec<AddressRecord>> {
    let records = processing::flatten(snapshots);
    processing::group_by_subnet(records)
}

/// Collect, merge, group and report. Returns the number of reports written.
///
/// Errors only when the service projects can't be listed or a report can't
/// be written; per project fetch failures are logged and skipped.
pub async fn run(
    api: Arc<dyn ComputeApi>,
    host_project: &str,
    sink: &mut dyn ReportSink,
) -> Result<usize, BoxError> {
    let snapshots = processing::aggregate(api, host_project).await?;
    let groups = summarize(snapshots);
    log::info!("Found addresses in {} subnets", groups.len());
    output::write_all(sink, groups)
}
