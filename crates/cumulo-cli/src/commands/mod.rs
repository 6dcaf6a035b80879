//! CLI command implementations.
//!
//! Each submodule implements the commands for one resource:
//! - [`instance`] - Instance lifecycle and power operations
//! - [`dns`] - DNS domains and records
//! - [`network`] - Private networks
//! - [`firewall`] - Firewalls and rules
//! - [`sshkey`] - SSH keys
//! - [`snapshot`] - Snapshots
//! - [`catalog`] - Templates, sizes, and regions
//! - [`quota`] - Account quotas
//! - [`account`] - Account administration

pub mod account;
pub mod catalog;
pub mod dns;
pub mod firewall;
pub mod instance;
pub mod network;
pub mod quota;
pub mod snapshot;
pub mod sshkey;

pub use account::AccountCommand;
pub use catalog::CatalogCommand;
pub use dns::DnsCommand;
pub use firewall::FirewallCommand;
pub use instance::InstanceCommand;
pub use network::NetworkCommand;
pub use quota::QuotaCommand;
pub use snapshot::SnapshotCommand;
pub use sshkey::SshKeyCommand;
