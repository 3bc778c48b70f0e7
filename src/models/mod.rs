//! Domain models for the shared VPC IP summary.
//!
//! This module contains the core data structures used throughout the application:
//! - [`AddressRecord`] - One IP address with its resolved owner and subnet
//! - [`ProjectSnapshot`] - Raw per project collection result
//! - [`compute`] - Wire types returned by the Compute Engine API
//! - [`ip`] - Numeric ordering of textual IP addresses

mod address;
pub mod compute;
mod ip;
mod snapshot;

// Re-export public types
pub use address::{sort_by_ip, AddressRecord};
pub use compute::{Address, Instance, NetworkInterface};
pub use ip::{cmp_ip, ip_sort_key};
pub use snapshot::ProjectSnapshot;
