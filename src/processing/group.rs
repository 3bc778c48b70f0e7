//! Group merged records by subnet.

use crate::models::{sort_by_ip, AddressRecord};
use itertools::Itertools;
use std::collections::{BTreeMap, HashMap};

/// Re-key records by subnet name, each group sorted by numeric IP.
///
/// Records without a subnet are kept under the empty key; the reporter
/// skips that group.
pub fn group_by_subnet(
    records: HashMap<String, AddressRecord>,
) -> BTreeMap<String, Vec<AddressRecord>> {
    records
        .into_values()
        .map(|r| (r.subnet.clone(), r))
        .into_group_map()
        .into_iter()
        .map(|(subnet, mut group)| {
            sort_by_ip(&mut group);
            (subnet, group)
        })
        .collect()
}
