//! Address data processing logic.
//!
//! This module contains the aggregation engine:
//! - [`aggregate`] - Concurrent fan-out over service projects
//! - [`merge`] - Flattening snapshots into one record per IP
//! - [`group`] - Grouping records by subnet

mod aggregate;
mod group;
mod merge;

// Re-export public functions
pub use aggregate::{aggregate, fetch_project_snapshot};
pub use group::group_by_subnet;
pub use merge::{
    flatten, insert_address_record, record_from_address, record_from_instance, resource_name,
};
