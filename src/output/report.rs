//! Per subnet report writing.

use super::markdown::render_report;
use super::sink::ReportSink;
use crate::config;
use crate::models::{sort_by_ip, AddressRecord};
use crate::BoxError;
use std::collections::BTreeMap;

/// Sink name of a subnet's report, e.g. `sub1.md`.
pub fn report_name(subnet: &str) -> String {
    format!("{subnet}.{}", config::REPORT_EXTENSION)
}

/// Sort `records` by IP and write them as one table named after `subnet`.
pub fn write_subnet_report(
    sink: &mut dyn ReportSink,
    subnet: &str,
    mut records: Vec<AddressRecord>,
) -> Result<(), BoxError> {
    if subnet.is_empty() {
        return Err("Cannot write a report for an empty subnet name".into());
    }
    sort_by_ip(&mut records);

    let name = report_name(subnet);
    log::info!("Writing to {name} ({} addresses)", records.len());
    sink.write_report(&name, &render_report(subnet, &records))?;
    Ok(())
}

/// Write one report per subnet; the group without a subnet is skipped.
///
/// Returns the number of reports written. Stops at the first sink error.
pub fn write_all(
    sink: &mut dyn ReportSink,
    groups: BTreeMap<String, Vec<AddressRecord>>,
) -> Result<usize, BoxError> {
    let mut written = 0;
    for (subnet, records) in groups {
        if subnet.is_empty() {
            log::info!("Skipping {} addresses without a subnet", records.len());
            continue;
        }
        write_subnet_report(sink, &subnet, records)?;
        written += 1;
    }
    Ok(written)
}
