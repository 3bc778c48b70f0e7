//! Flatten project snapshots into one record per IP address.
//!
//! Reserved addresses and instance NICs both name IPs. A candidate record is
//! built from each and merged by IP: the first record for an IP keeps its
//! values, later ones only fill fields that are still empty.

use crate::models::{Address, AddressRecord, Instance, ProjectSnapshot};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Last path segment of a self-link, e.g. the subnet name of
/// `.../regions/us-central1/subnetworks/sub1`.
///
/// # Examples
/// ```
/// use gcp_vpc_ip_summary::processing::resource_name;
/// assert_eq!(resource_name("projects/h/regions/r/subnetworks/sub1"), "sub1");
/// assert_eq!(resource_name("plain"), "plain");
/// ```
pub fn resource_name(self_link: &str) -> &str {
    self_link.rsplit('/').next().unwrap_or(self_link)
}

/// Candidate from a reserved address. `user` is the first consumer, if any.
pub fn record_from_address(project: &str, address: &Address) -> AddressRecord {
    AddressRecord {
        ip: address.address.clone(),
        project: project.to_string(),
        status: address.status.clone(),
        subnet: resource_name(&address.subnetwork).to_string(),
        user: address
            .users
            .first()
            .map(|u| resource_name(u).to_string())
            .unwrap_or_default(),
    }
}

/// Candidate from an instance's first network interface. `status` stays empty.
pub fn record_from_instance(project: &str, instance: &Instance) -> Option<AddressRecord> {
    let nic = instance.network_interfaces.first()?;
    Some(AddressRecord {
        ip: nic.network_ip.clone(),
        project: project.to_string(),
        status: String::new(),
        subnet: resource_name(&nic.subnetwork).to_string(),
        user: instance.name.clone(),
    })
}

/// Merge a candidate into `records`.
///
/// New IP: inserted as is. Known IP: only empty fields of the existing record
/// are filled, nothing is overwritten.
pub fn insert_address_record(records: &mut HashMap<String, AddressRecord>, record: AddressRecord) {
    if record.ip.is_empty() {
        log::debug!("Skipping record without IP in {}: {:?}", record.project, record);
        return;
    }

    match records.entry(record.ip.clone()) {
        Entry::Occupied(mut entry) => {
            let existing = entry.get_mut();
            if !record.project.is_empty() && existing.project != record.project {
                log::warn!(
                    "{ip} found in {kept} and {other}, keeping {kept}",
                    ip = record.ip,
                    kept = existing.project,
                    other = record.project
                );
            }
            existing.fill_empty_from(&record);
        }
        Entry::Vacant(entry) => {
            entry.insert(record);
        }
    }
}

/// Flatten all snapshots into a map keyed by IP.
///
/// Snapshots are merged in the order given; for a deterministic result pass
/// them sorted by project, as `aggregate` returns them.
pub fn flatten(snapshots: Vec<ProjectSnapshot>) -> HashMap<String, AddressRecord> {
    let mut records = HashMap::new();

    for snapshot in snapshots {
        let project = snapshot.project.as_str();

        match snapshot.address_records.as_deref() {
            Some(addresses) if !addresses.is_empty() => {
                for address in addresses {
                    insert_address_record(&mut records, record_from_address(project, address));
                }
            }
            _ => log::info!("{project} has no reserved addresses"),
        }

        match snapshot.instance_records.as_deref() {
            Some(instances) if !instances.is_empty() => {
                for instance in instances {
                    match record_from_instance(project, instance) {
                        Some(record) => insert_address_record(&mut records, record),
                        None => log::debug!(
                            "Instance {} in {project} has no network interface",
                            instance.name
                        ),
                    }
                }
            }
            _ => log::info!("{project} has no instances"),
        }
    }

    log::info!("Merged {} distinct IP addresses", records.len());
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NetworkInterface;

    const SUBNET_LINK: &str =
        "https://www.googleapis.com/compute/v1/projects/host/regions/us-central1/subnetworks/";

    fn address(ip: &str, status: &str, subnet: &str, users: &[&str]) -> Address {
        Address {
            name: format!("addr-{ip}"),
            address: ip.to_string(),
            status: status.to_string(),
            subnetwork: format!("{SUBNET_LINK}{subnet}"),
            users: users.iter().map(|u| u.to_string()).collect(),
        }
    }

    fn instance(name: &str, ip: &str, subnet: &str) -> Instance {
        Instance {
            name: name.to_string(),
            network_interfaces: vec![NetworkInterface {
                network_ip: ip.to_string(),
                subnetwork: format!("{SUBNET_LINK}{subnet}"),
            }],
        }
    }

    fn snapshot(
        project: &str,
        addresses: Option<Vec<Address>>,
        instances: Option<Vec<Instance>>,
    ) -> ProjectSnapshot {
        ProjectSnapshot {
            project: project.to_string(),
            address_records: addresses,
            instance_records: instances,
        }
    }

    #[test]
    fn test_resource_name() {
        assert_eq!(resource_name(&format!("{SUBNET_LINK}sub1")), "sub1");
        assert_eq!(resource_name(""), "");
        assert_eq!(resource_name("trailing/"), "");
    }

    #[test]
    fn test_record_from_address_with_user() {
        let a = address(
            "10.0.0.7",
            "IN_USE",
            "sub1",
            &[
                "https://www.googleapis.com/compute/v1/projects/svc-a/regions/us-central1/forwardingRules/ilb-fr",
                "https://www.googleapis.com/compute/v1/projects/svc-a/zones/us-central1-a/instances/ignored",
            ],
        );
        let r = record_from_address("svc-a", &a);
        assert_eq!(r.subnet, "sub1");
        assert_eq!(r.user, "ilb-fr");
        assert_eq!(r.status, "IN_USE");
    }

    #[test]
    fn test_record_from_instance_without_nic() {
        let vm = Instance {
            name: "lonely".to_string(),
            network_interfaces: vec![],
        };
        assert!(record_from_instance("p", &vm).is_none());
    }

    #[test]
    fn test_first_writer_wins() {
        let mut records = HashMap::new();
        let first = AddressRecord {
            ip: "10.0.0.5".into(),
            project: "svc-a".into(),
            status: "RESERVED".into(),
            subnet: "sub1".into(),
            user: String::new(),
        };
        let second = AddressRecord {
            ip: "10.0.0.5".into(),
            project: "svc-b".into(),
            status: "IN_USE".into(),
            subnet: "sub9".into(),
            user: "vm1".into(),
        };
        insert_address_record(&mut records, first);
        insert_address_record(&mut records, second);

        assert_eq!(records.len(), 1);
        let merged = &records["10.0.0.5"];
        assert_eq!(merged.project, "svc-a");
        assert_eq!(merged.status, "RESERVED");
        assert_eq!(merged.subnet, "sub1");
        assert_eq!(merged.user, "vm1");
    }

    #[test]
    fn test_empty_candidate_changes_nothing() {
        let mut records = HashMap::new();
        let full = record_from_instance("svc-a", &instance("vm1", "10.0.0.5", "sub1")).unwrap();
        insert_address_record(&mut records, full.clone());
        insert_address_record(
            &mut records,
            AddressRecord {
                ip: "10.0.0.5".into(),
                ..Default::default()
            },
        );
        assert_eq!(records["10.0.0.5"], full);
    }

    #[test]
    fn test_record_without_ip_is_skipped() {
        let mut records = HashMap::new();
        insert_address_record(&mut records, AddressRecord::default());
        assert!(records.is_empty());
    }

    #[test]
    fn test_flatten_unique_ips() {
        let snapshots = vec![
            snapshot(
                "svc-a",
                Some(vec![
                    address("10.0.0.5", "RESERVED", "sub1", &[]),
                    address("10.0.0.6", "RESERVED", "sub1", &[]),
                ]),
                Some(vec![instance("vm-a", "10.0.0.6", "sub1")]),
            ),
            snapshot(
                "svc-b",
                Some(vec![address("10.0.0.5", "IN_USE", "sub1", &["x/y/fr"])]),
                Some(vec![
                    instance("vm-b", "10.0.0.5", "sub1"),
                    instance("vm-c", "10.0.1.2", "sub2"),
                ]),
            ),
        ];
        let records = flatten(snapshots);
        assert_eq!(records.len(), 3);
        for (ip, record) in &records {
            assert_eq!(ip, &record.ip);
        }
        assert_eq!(records["10.0.0.6"].user, "vm-a");
        assert_eq!(records["10.0.0.5"].user, "fr");
        assert_eq!(records["10.0.1.2"].project, "svc-b");
    }

    #[test]
    fn test_flatten_partial_failure_keeps_addresses() {
        let snapshots = vec![snapshot(
            "svc-a",
            Some(vec![address("10.0.0.5", "RESERVED", "sub1", &[])]),
            None,
        )];
        let records = flatten(snapshots);
        assert_eq!(records.len(), 1);
        assert_eq!(records["10.0.0.5"].status, "RESERVED");
    }

    #[test]
    fn test_flatten_empty_project() {
        let records = flatten(vec![snapshot("empty", Some(vec![]), None)]);
        assert!(records.is_empty());
    }

    #[test]
    fn test_flatten_cross_project_merge() {
        let snapshots = vec![
            snapshot(
                "svc-a",
                Some(vec![address("10.0.0.5", "RESERVED", "sub1", &[])]),
                Some(vec![]),
            ),
            snapshot(
                "svc-b",
                Some(vec![]),
                Some(vec![instance("vm1", "10.0.0.5", "sub1")]),
            ),
        ];
        let records = flatten(snapshots);
        assert_eq!(
            records["10.0.0.5"],
            AddressRecord {
                ip: "10.0.0.5".into(),
                project: "svc-a".into(),
                status: "RESERVED".into(),
                subnet: "sub1".into(),
                user: "vm1".into(),
            }
        );
    }
}
