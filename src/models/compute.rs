//! Compute Engine API v1 response types.
//!
//! Only the fields the summary needs are modelled; everything else in the
//! JSON is ignored. Missing fields fall back to empty values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response of `projects/{host}/getXpnResources`.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct XpnResources {
    #[serde(default)]
    pub resources: Vec<XpnResourceId>,
    pub next_page_token: Option<String>,
}

/// A resource attached to a Shared VPC host, normally a service project.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct XpnResourceId {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
}

/// `aggregated/*` response: one scoped list per region or zone.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedList<S> {
    /// Keyed by scope, e.g. `regions/us-central1` or `zones/us-central1-a`.
    #[serde(default)]
    pub items: BTreeMap<String, S>,
    pub next_page_token: Option<String>,
}

/// Set instead of a list when a scope has nothing to report.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct ScopeWarning {
    pub code: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct AddressesScopedList {
    pub addresses: Option<Vec<Address>>,
    pub warning: Option<ScopeWarning>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct InstancesScopedList {
    pub instances: Option<Vec<Instance>>,
    pub warning: Option<ScopeWarning>,
}

pub type AddressAggregatedList = AggregatedList<AddressesScopedList>;
pub type InstanceAggregatedList = AggregatedList<InstancesScopedList>;

/// A reserved internal or external address.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Address {
    pub name: String,
    pub address: String,
    /// `RESERVING`, `RESERVED` or `IN_USE`.
    pub status: String,
    /// Self-link of the subnetwork, empty for global/external addresses.
    pub subnetwork: String,
    /// Self-links of resources using the address.
    pub users: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Instance {
    pub name: String,
    pub network_interfaces: Vec<NetworkInterface>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct NetworkInterface {
    #[serde(rename = "networkIP")]
    pub network_ip: String,
    pub subnetwork: String,
}

impl AddressAggregatedList {
    /// Flatten all scopes into one list, in scope key order.
    pub fn into_records(self) -> Vec<Address> {
        self.items
            .into_values()
            .filter_map(|scope| scope.addresses)
            .flatten()
            .collect()
    }
}

impl InstanceAggregatedList {
    /// Flatten all scopes into one list, in scope key order.
    pub fn into_records(self) -> Vec<Instance> {
        self.items
            .into_values()
            .filter_map(|scope| scope.instances)
            .flatten()
            .collect()
    }
}
