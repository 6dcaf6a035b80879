//! Account quota endpoints.
//!
//! Quota is a flat set of numeric limits keyed to one account, read or
//! replaced wholesale. The account travels as a query parameter on reads
//! and as a path segment on writes — it never appears in the form body.

use reqwest::Method;

use crate::document::Document;
use crate::error::Result;
use crate::params::{FormParams, encode, push_opt};
use crate::transport::Transport;

/// Parameters for replacing an account's quota limits.
///
/// Only supplied limits are enumerated; the service applies them as given
/// without merging.
#[derive(Debug, Clone, Default)]
pub struct QuotaParams {
    /// Account the quota belongs to. Path-only: never part of the body.
    pub account: String,
    /// Maximum number of instances.
    pub instance_count: Option<String>,
    /// Maximum total CPU cores.
    pub cpu_core: Option<String>,
    /// Maximum total RAM in megabytes.
    pub ram_mb: Option<String>,
    /// Maximum total disk in gigabytes.
    pub disk_gb: Option<String>,
    /// Maximum number of disk volumes.
    pub disk_volume_count: Option<String>,
    /// Maximum number of disk snapshots.
    pub disk_snapshot_count: Option<String>,
    /// Maximum number of public IP addresses.
    pub public_ip_address: Option<String>,
    /// Maximum number of subnets.
    pub subnet_count: Option<String>,
    /// Maximum number of private networks.
    pub network_count: Option<String>,
    /// Maximum number of security groups.
    pub security_group: Option<String>,
    /// Maximum number of security group rules.
    pub security_group_rule: Option<String>,
    /// Maximum number of ports.
    pub port_count: Option<String>,
}

impl FormParams for QuotaParams {
    fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        push_opt(&mut fields, "instance_count_limit", self.instance_count.as_ref());
        push_opt(&mut fields, "cpu_core_limit", self.cpu_core.as_ref());
        push_opt(&mut fields, "ram_mb_limit", self.ram_mb.as_ref());
        push_opt(&mut fields, "disk_gb_limit", self.disk_gb.as_ref());
        push_opt(&mut fields, "disk_volume_count_limit", self.disk_volume_count.as_ref());
        push_opt(&mut fields, "disk_snapshot_count_limit", self.disk_snapshot_count.as_ref());
        push_opt(&mut fields, "public_ip_address_limit", self.public_ip_address.as_ref());
        push_opt(&mut fields, "subnet_count_limit", self.subnet_count.as_ref());
        push_opt(&mut fields, "network_count_limit", self.network_count.as_ref());
        push_opt(&mut fields, "security_group_limit", self.security_group.as_ref());
        push_opt(&mut fields, "security_group_rule_limit", self.security_group_rule.as_ref());
        push_opt(&mut fields, "port_count_limit", self.port_count.as_ref());
        fields
    }
}

/// Fetch the quota limits for an account.
pub async fn get(transport: &Transport, account: &str) -> Result<Document> {
    transport
        .request(Method::GET, &format!("/v1/quota?username={account}"), None)
        .await
}

/// Replace the quota limits for the account named in `params`.
pub async fn set(transport: &Transport, params: &QuotaParams) -> Result<Document> {
    transport
        .request(
            Method::PUT,
            &format!("/v1/quota/{}", params.account),
            Some(encode(params)),
        )
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_never_appears_in_the_body() {
        let params = QuotaParams {
            account: "acme".to_string(),
            instance_count: Some("25".to_string()),
            ram_mb: Some("65536".to_string()),
            ..QuotaParams::default()
        };
        let body = encode(&params);
        assert!(!body.contains("acme"));
        assert!(!body.contains("account"));
        assert!(!body.contains("username"));
    }

    #[test]
    fn supplied_limits_use_exact_wire_names() {
        let params = QuotaParams {
            account: "acme".to_string(),
            instance_count: Some("25".to_string()),
            cpu_core: Some("50".to_string()),
            disk_snapshot_count: Some("100".to_string()),
            ..QuotaParams::default()
        };
        assert_eq!(
            params.fields(),
            vec![
                ("instance_count_limit", "25".to_string()),
                ("cpu_core_limit", "50".to_string()),
                ("disk_snapshot_count_limit", "100".to_string()),
            ]
        );
    }

    #[test]
    fn unsupplied_limits_are_omitted() {
        let params = QuotaParams {
            account: "acme".to_string(),
            ..QuotaParams::default()
        };
        assert!(encode(&params).is_empty());
    }

    #[test]
    fn every_limit_has_a_wire_name() {
        let params = QuotaParams {
            account: "acme".to_string(),
            instance_count: Some("1".to_string()),
            cpu_core: Some("1".to_string()),
            ram_mb: Some("1".to_string()),
            disk_gb: Some("1".to_string()),
            disk_volume_count: Some("1".to_string()),
            disk_snapshot_count: Some("1".to_string()),
            public_ip_address: Some("1".to_string()),
            subnet_count: Some("1".to_string()),
            network_count: Some("1".to_string()),
            security_group: Some("1".to_string()),
            security_group_rule: Some("1".to_string()),
            port_count: Some("1".to_string()),
        };
        let names: Vec<&str> = params.fields().iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            vec![
                "instance_count_limit",
                "cpu_core_limit",
                "ram_mb_limit",
                "disk_gb_limit",
                "disk_volume_count_limit",
                "disk_snapshot_count_limit",
                "public_ip_address_limit",
                "subnet_count_limit",
                "network_count_limit",
                "security_group_limit",
                "security_group_rule_limit",
                "port_count_limit",
            ]
        );
    }
}
