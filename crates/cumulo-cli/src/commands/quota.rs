//! Quota command implementation.

use std::io::Write;

use cumulo_api::resources::quota::{self, QuotaParams};
use cumulo_api::{ApiConfig, Document, Transport};

use crate::cli::{QuotaCommands, QuotaSetArgs};
use crate::error::CliError;
use crate::output::{OutputFormat, QuotaLimit, QuotaView};

/// Display labels paired with the wire names the service reports.
const LIMIT_FIELDS: &[(&str, &str)] = &[
    ("Instances", "instance_count_limit"),
    ("CPU Cores", "cpu_core_limit"),
    ("RAM (MB)", "ram_mb_limit"),
    ("Disk (GB)", "disk_gb_limit"),
    ("Disk Volumes", "disk_volume_count_limit"),
    ("Disk Snapshots", "disk_snapshot_count_limit"),
    ("Public IPs", "public_ip_address_limit"),
    ("Subnets", "subnet_count_limit"),
    ("Networks", "network_count_limit"),
    ("Security Groups", "security_group_limit"),
    ("Security Group Rules", "security_group_rule_limit"),
    ("Ports", "port_count_limit"),
];

/// Quota command executor.
pub struct QuotaCommand {
    transport: Transport,
}

impl QuotaCommand {
    /// Create a new quota command.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            transport: Transport::new(config),
        }
    }

    /// Execute a quota subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation fails.
    pub async fn execute<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
        command: &QuotaCommands,
    ) -> Result<(), CliError> {
        match command {
            QuotaCommands::Show { account } => {
                let account = self.resolve_account(account.as_deref())?;
                let doc = quota::get(&self.transport, &account).await?;
                format.write(writer, &quota_view(&account, &doc))?;
            }
            QuotaCommands::Set(args) => {
                let account = self.resolve_account(args.account.as_deref())?;
                let params = quota_params(&account, args);
                let doc = quota::set(&self.transport, &params).await?;
                format.write(writer, &quota_view(&account, &doc))?;
            }
        }
        Ok(())
    }

    fn resolve_account(&self, flag: Option<&str>) -> Result<String, CliError> {
        let account = match flag {
            Some(account) => account.to_string(),
            None => self.transport.config().default_account.clone(),
        };
        if account.is_empty() {
            return Err(CliError::InvalidArgument(
                "no account given; pass --account or configure a default".to_string(),
            ));
        }
        Ok(account)
    }
}

fn quota_params(account: &str, args: &QuotaSetArgs) -> QuotaParams {
    let limit = |value: Option<u32>| value.map(|v| v.to_string());
    QuotaParams {
        account: account.to_string(),
        instance_count: limit(args.instances),
        cpu_core: limit(args.cpu_cores),
        ram_mb: limit(args.ram_mb),
        disk_gb: limit(args.disk_gb),
        disk_volume_count: limit(args.disk_volumes),
        disk_snapshot_count: limit(args.disk_snapshots),
        public_ip_address: limit(args.public_ips),
        subnet_count: limit(args.subnets),
        network_count: limit(args.networks),
        security_group: limit(args.security_groups),
        security_group_rule: limit(args.security_group_rules),
        port_count: limit(args.ports),
    }
}

fn quota_view(account: &str, doc: &Document) -> QuotaView {
    let limits = LIMIT_FIELDS
        .iter()
        .map(|(label, field)| QuotaLimit {
            label: (*label).to_string(),
            value: doc.text(field),
        })
        .collect();
    QuotaView {
        account: account.to_string(),
        limits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_args() -> QuotaSetArgs {
        QuotaSetArgs {
            account: Some("acme".to_string()),
            instances: Some(25),
            cpu_cores: None,
            ram_mb: Some(65536),
            disk_gb: None,
            disk_volumes: None,
            disk_snapshots: None,
            public_ips: None,
            subnets: None,
            networks: None,
            security_groups: None,
            security_group_rules: None,
            ports: None,
        }
    }

    #[test]
    fn quota_params_carry_only_supplied_limits() {
        let params = quota_params("acme", &set_args());
        assert_eq!(params.account, "acme");
        assert_eq!(params.instance_count.as_deref(), Some("25"));
        assert_eq!(params.ram_mb.as_deref(), Some("65536"));
        assert!(params.cpu_core.is_none());
        assert!(params.port_count.is_none());
    }

    #[test]
    fn quota_view_reads_wire_fields() {
        let doc = Document::parse(
            r#"{"instance_count_limit":25,"ram_mb_limit":65536,"cpu_core_limit":50}"#,
        )
        .expect("valid json");
        let view = quota_view("acme", &doc);
        assert_eq!(view.account, "acme");
        assert_eq!(view.limits.len(), LIMIT_FIELDS.len());
        let instances = view
            .limits
            .iter()
            .find(|l| l.label == "Instances")
            .expect("instances limit");
        assert_eq!(instances.value, "25");
        // Absent limits render as empty, not as an error.
        let ports = view.limits.iter().find(|l| l.label == "Ports").expect("ports limit");
        assert_eq!(ports.value, "");
    }
}
