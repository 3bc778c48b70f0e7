//! Concurrent collection across all service projects.
//!
//! One tokio task per project fetches a [`ProjectSnapshot`] and sends it on
//! a shared channel. A supervisor task waits for every fetch and then drops
//! the last sender so the collecting loop ends.

use crate::gcp::ComputeApi;
use crate::models::ProjectSnapshot;
use crate::BoxError;
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Fetch addresses and instances of one project.
///
/// Never fails: a failed query is logged and leaves its list `None`, so one
/// broken project can't hide the results of the others.
pub async fn fetch_project_snapshot(api: &dyn ComputeApi, project: &str) -> ProjectSnapshot {
    log::info!("Looking for instances and IPs in {project}");
    let mut snapshot = ProjectSnapshot::new(project);

    match api.list_addresses(project).await {
        Ok(addresses) => snapshot.address_records = Some(addresses),
        Err(e) => log::warn!("Error getting reserved IPs for {project}: {e}"),
    }

    match api.list_instances(project).await {
        Ok(instances) => snapshot.instance_records = Some(instances),
        Err(e) => log::warn!("Error getting instances for {project}: {e}"),
    }

    snapshot
}

/// Collect snapshots of every service project attached to `host_project`.
///
/// Failing to list the service projects is the only error. Snapshots come
/// back sorted by project id, whatever order the fetches finished in.
pub async fn aggregate(
    api: Arc<dyn ComputeApi>,
    host_project: &str,
) -> Result<Vec<ProjectSnapshot>, BoxError> {
    log::info!("Looking for service projects in {host_project}");
    let projects = api
        .list_service_projects(host_project)
        .await
        .map_err(|e| {
            log::error!("Error getting service projects for {host_project}: {e}");
            e
        })?;
    log::info!(
        "Found {} service projects attached to {host_project}",
        projects.len()
    );

    let (tx, mut rx) = mpsc::unbounded_channel::<ProjectSnapshot>();

    let handles: Vec<_> = projects
        .into_iter()
        .map(|project| {
            let api = Arc::clone(&api);
            let tx = tx.clone();
            tokio::spawn(async move {
                let snapshot = fetch_project_snapshot(api.as_ref(), &project).await;
                if tx.send(snapshot).is_err() {
                    log::warn!("Collector closed, dropped snapshot of {project}");
                }
            })
        })
        .collect();

    // Supervisor: the channel closes once this last sender is dropped.
    tokio::spawn(async move {
        for result in join_all(handles).await {
            if let Err(e) = result {
                log::error!("Fetch task failed: {e}");
            }
        }
        drop(tx);
    });

    let mut snapshots = Vec::new();
    while let Some(snapshot) = rx.recv().await {
        log::debug!("Received snapshot of {}", snapshot.project);
        snapshots.push(snapshot);
    }

    // Completion order is random, merging is first-writer-wins.
    snapshots.sort_by(|a, b| a.project.cmp(&b.project));
    log::info!("Collected {} project snapshots", snapshots.len());
    Ok(snapshots)
}
