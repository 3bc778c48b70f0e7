//! Numeric ordering of textual IP addresses.
//!
//! Addresses arrive from the API as strings. Reports order them by their
//! binary value, so `10.0.0.9` sorts before `10.0.0.10`.

use std::cmp::Ordering;
use std::net::IpAddr;

/// Binary sort key for an address in text form.
///
/// IPv4 is mapped into `::ffff:a.b.c.d` so both families share one ordering.
/// Text that does not parse yields `None`, which sorts before every address.
///
/// # Examples
/// ```
/// use gcp_vpc_ip_summary::models::ip_sort_key;
/// assert!(ip_sort_key("10.0.0.9") < ip_sort_key("10.0.0.10"));
/// assert_eq!(ip_sort_key("not-an-ip"), None);
/// ```
pub fn ip_sort_key(ip: &str) -> Option<[u8; 16]> {
    let addr: IpAddr = ip.trim().parse().ok()?;
    let v6 = match addr {
        IpAddr::V4(v4) => v4.to_ipv6_mapped(),
        IpAddr::V6(v6) => v6,
    };
    Some(v6.octets())
}

/// Compare two textual addresses by binary value.
pub fn cmp_ip(a: &str, b: &str) -> Ordering {
    ip_sort_key(a).cmp(&ip_sort_key(b))
}
