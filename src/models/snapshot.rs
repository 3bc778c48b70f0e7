//! Raw per project collection result.

use super::{Address, Instance};

/// Everything fetched from one service project, before merging.
///
/// A `None` list means that query failed; `Some(vec![])` means it succeeded
/// and the project has nothing of that kind.
#[derive(Debug, Clone, Default)]
pub struct ProjectSnapshot {
    /// Project id the lists were fetched from.
    pub project: String,
    /// Reserved addresses across all regions.
    pub address_records: Option<Vec<Address>>,
    /// Instances across all zones.
    pub instance_records: Option<Vec<Instance>>,
}

impl ProjectSnapshot {
    pub fn new(project: &str) -> ProjectSnapshot {
        ProjectSnapshot {
            project: project.to_string(),
            address_records: None,
            instance_records: None,
        }
    }
}
