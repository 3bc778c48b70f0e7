//! Merged per IP address record.

use super::ip::ip_sort_key;
use serde::{Deserialize, Serialize};

/// One IP address with everything known about who holds it.
///
/// Empty strings mean "unknown". Only one record exists per IP in a run.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressRecord {
    /// IPv4 or IPv6 address in text form, the unique key.
    pub ip: String,
    /// Project the record was first seen in.
    pub project: String,
    /// Reservation state, e.g. `RESERVED` or `IN_USE`. Empty for instance only IPs.
    pub status: String,
    /// Subnet name (last segment of the subnetwork self-link).
    pub subnet: String,
    /// Instance or resource consuming the address.
    pub user: String,
}

impl AddressRecord {
    /// Copy fields from `other` into fields of `self` that are still empty.
    ///
    /// Non-empty fields are never overwritten. Returns true if anything changed.
    pub fn fill_empty_from(&mut self, other: &AddressRecord) -> bool {
        let mut changed = false;
        for (mine, theirs) in [
            (&mut self.project, &other.project),
            (&mut self.status, &other.status),
            (&mut self.subnet, &other.subnet),
            (&mut self.user, &other.user),
        ] {
            if mine.is_empty() && !theirs.is_empty() {
                mine.clone_from(theirs);
                changed = true;
            }
        }
        changed
    }

    /// Report columns: IP, project, status, user.
    pub fn table_row(&self) -> [&str; 4] {
        [&self.ip, &self.project, &self.status, &self.user]
    }
}

/// Sort records ascending by numeric IP value.
///
/// Unparseable addresses go first, ordered by their text.
pub fn sort_by_ip(records: &mut [AddressRecord]) {
    records.sort_by_cached_key(|r| (ip_sort_key(&r.ip), r.ip.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ip: &str, project: &str, status: &str, subnet: &str, user: &str) -> AddressRecord {
        AddressRecord {
            ip: ip.to_string(),
            project: project.to_string(),
            status: status.to_string(),
            subnet: subnet.to_string(),
            user: user.to_string(),
        }
    }

    #[test]
    fn test_fill_empty_only() {
        let mut first = record("10.0.0.5", "svc-a", "RESERVED", "sub1", "");
        let second = record("10.0.0.5", "svc-b", "IN_USE", "sub2", "vm1");
        assert!(first.fill_empty_from(&second));
        assert_eq!(first, record("10.0.0.5", "svc-a", "RESERVED", "sub1", "vm1"));
    }

    #[test]
    fn test_fill_with_empty_candidate_is_noop() {
        let mut full = record("10.0.0.5", "svc-a", "IN_USE", "sub1", "vm1");
        let before = full.clone();
        assert!(!full.fill_empty_from(&record("10.0.0.5", "", "", "", "")));
        assert_eq!(full, before);
    }

    #[test]
    fn test_sort_by_ip() {
        let mut records: Vec<AddressRecord> = ["10.0.0.10", "10.0.0.2", "10.0.0.9"]
            .iter()
            .map(|ip| record(ip, "p", "", "s", ""))
            .collect();
        sort_by_ip(&mut records);
        let ips: Vec<&str> = records.iter().map(|r| r.ip.as_str()).collect();
        assert_eq!(ips, vec!["10.0.0.2", "10.0.0.9", "10.0.0.10"]);
    }

    #[test]
    fn test_table_row_order() {
        let r = record("10.0.0.5", "svc-a", "RESERVED", "sub1", "vm1");
        assert_eq!(r.table_row(), ["10.0.0.5", "svc-a", "RESERVED", "vm1"]);
    }
}
