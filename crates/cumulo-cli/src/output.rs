//! Output formatting for CLI commands.
//!
//! Supports table (human-readable) and JSON output formats. Every command
//! renders through a display struct here: fixed-width columns for lists,
//! section-style views for single resources, [`Message`] for one-line
//! confirmations.

use std::io::Write;

use serde::Serialize;

use crate::cli::Format;
use crate::error::CliError;

/// Output formatter that handles both table and JSON output.
#[derive(Debug, Clone)]
pub struct OutputFormat {
    format: Format,
}

impl OutputFormat {
    /// Create a new output formatter.
    #[must_use]
    pub const fn new(format: Format) -> Self {
        Self { format }
    }

    /// Get the current format.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Write a serializable value to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write<W, T>(&self, writer: &mut W, value: &T) -> Result<(), CliError>
    where
        W: Write,
        T: Serialize + TableDisplay,
    {
        match self.format {
            Format::Json => {
                serde_json::to_writer_pretty(&mut *writer, value)
                    .map_err(|e| CliError::Format(format!("JSON serialization failed: {e}")))?;
                writeln!(writer)?;
            }
            Format::Table => {
                value.write_table(writer)?;
            }
        }
        Ok(())
    }

    /// Write a serializable value to a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_string<T>(&self, value: &T) -> Result<String, CliError>
    where
        T: Serialize + TableDisplay,
    {
        let mut buf = Vec::new();
        self.write(&mut buf, value)?;
        String::from_utf8(buf).map_err(|e| CliError::Format(format!("UTF-8 error: {e}")))
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::new(Format::Table)
    }
}

/// Trait for types that can be displayed as a table.
pub trait TableDisplay {
    /// Write the value as a human-readable table.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError>;
}

/// Instance information for listing.
#[derive(Debug, Clone, Serialize)]
pub struct InstanceRow {
    /// Instance ID.
    pub id: String,
    /// Hostname.
    pub hostname: String,
    /// Size code.
    pub size: String,
    /// Region code.
    pub region: String,
    /// Lifecycle status reported by the service.
    pub status: String,
    /// Public IP address, when allocated.
    pub public_ip: String,
}

/// List of instances for display.
#[derive(Debug, Clone, Serialize)]
pub struct InstanceList {
    /// Instances on the account.
    pub instances: Vec<InstanceRow>,
}

impl TableDisplay for InstanceList {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        if self.instances.is_empty() {
            writeln!(writer, "No instances found")?;
            return Ok(());
        }

        writeln!(
            writer,
            "{:<36}  {:<24}  {:<10}  {:<8}  {:<10}  {:<15}",
            "ID", "HOSTNAME", "SIZE", "REGION", "STATUS", "PUBLIC IP"
        )?;
        writeln!(writer, "{}", "─".repeat(113))?;

        for instance in &self.instances {
            writeln!(
                writer,
                "{:<36}  {:<24}  {:<10}  {:<8}  {:<10}  {:<15}",
                instance.id,
                truncate(&instance.hostname, 24),
                instance.size,
                instance.region,
                instance.status,
                instance.public_ip
            )?;
        }

        writeln!(writer)?;
        writeln!(writer, "Total: {} instance(s)", self.instances.len())?;
        Ok(())
    }
}

/// Detailed instance information.
#[derive(Debug, Clone, Serialize)]
pub struct InstanceDetail {
    /// Instance ID.
    pub id: String,
    /// Hostname.
    pub hostname: String,
    /// Size code.
    pub size: String,
    /// Region code.
    pub region: String,
    /// Lifecycle status.
    pub status: String,
    /// Public IP address, when allocated.
    pub public_ip: String,
    /// Private IP address.
    pub private_ip: String,
    /// Template the instance was built from.
    pub template: String,
    /// Initial user account.
    pub initial_user: String,
    /// Space-separated tag list.
    pub tags: String,
}

impl TableDisplay for InstanceDetail {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        writeln!(writer, "Instance: {}", self.hostname)?;
        writeln!(writer, "══════════════════════════════════════════════════")?;
        writeln!(writer, "ID:             {}", self.id)?;
        writeln!(writer, "Status:         {}", self.status)?;
        writeln!(writer, "Size:           {}", self.size)?;
        writeln!(writer, "Region:         {}", self.region)?;
        writeln!(writer, "Public IP:      {}", self.public_ip)?;
        writeln!(writer, "Private IP:     {}", self.private_ip)?;
        writeln!(writer, "Template:       {}", self.template)?;
        writeln!(writer, "Initial User:   {}", self.initial_user)?;
        writeln!(writer, "Tags:           {}", self.tags)?;
        Ok(())
    }
}

/// DNS domain information for listing.
#[derive(Debug, Clone, Serialize)]
pub struct DomainRow {
    /// Domain ID.
    pub id: String,
    /// Fully-qualified domain name.
    pub name: String,
}

/// List of DNS domains for display.
#[derive(Debug, Clone, Serialize)]
pub struct DomainList {
    /// Domains on the account.
    pub domains: Vec<DomainRow>,
}

impl TableDisplay for DomainList {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        if self.domains.is_empty() {
            writeln!(writer, "No domains found")?;
            return Ok(());
        }

        writeln!(writer, "{:<36}  {:<40}", "ID", "NAME")?;
        writeln!(writer, "{}", "─".repeat(78))?;
        for domain in &self.domains {
            writeln!(writer, "{:<36}  {:<40}", domain.id, domain.name)?;
        }
        Ok(())
    }
}

/// DNS record information for listing.
#[derive(Debug, Clone, Serialize)]
pub struct RecordRow {
    /// Record ID.
    pub id: String,
    /// Record type.
    pub record_type: String,
    /// Record name.
    pub name: String,
    /// Record value.
    pub value: String,
    /// Time to live in seconds.
    pub ttl: String,
    /// Priority, for MX records.
    pub priority: String,
}

/// List of DNS records for display.
#[derive(Debug, Clone, Serialize)]
pub struct RecordList {
    /// Records in the domain.
    pub records: Vec<RecordRow>,
}

impl TableDisplay for RecordList {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        if self.records.is_empty() {
            writeln!(writer, "No records found")?;
            return Ok(());
        }

        writeln!(
            writer,
            "{:<36}  {:<6}  {:<20}  {:<30}  {:>6}  {:>8}",
            "ID", "TYPE", "NAME", "VALUE", "TTL", "PRIORITY"
        )?;
        writeln!(writer, "{}", "─".repeat(116))?;
        for record in &self.records {
            writeln!(
                writer,
                "{:<36}  {:<6}  {:<20}  {:<30}  {:>6}  {:>8}",
                record.id,
                record.record_type,
                truncate(&record.name, 20),
                truncate(&record.value, 30),
                record.ttl,
                record.priority
            )?;
        }
        Ok(())
    }
}

/// Network information for listing.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkRow {
    /// Network ID.
    pub id: String,
    /// Network label.
    pub label: String,
    /// Region code.
    pub region: String,
    /// Whether this is the account's default network.
    pub default: String,
}

/// List of private networks for display.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkList {
    /// Networks on the account.
    pub networks: Vec<NetworkRow>,
}

impl TableDisplay for NetworkList {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        if self.networks.is_empty() {
            writeln!(writer, "No networks found")?;
            return Ok(());
        }

        writeln!(
            writer,
            "{:<36}  {:<24}  {:<8}  {:<7}",
            "ID", "LABEL", "REGION", "DEFAULT"
        )?;
        writeln!(writer, "{}", "─".repeat(81))?;
        for network in &self.networks {
            writeln!(
                writer,
                "{:<36}  {:<24}  {:<8}  {:<7}",
                network.id,
                truncate(&network.label, 24),
                network.region,
                network.default
            )?;
        }
        Ok(())
    }
}

/// Firewall information for listing.
#[derive(Debug, Clone, Serialize)]
pub struct FirewallRow {
    /// Firewall ID.
    pub id: String,
    /// Firewall name.
    pub name: String,
    /// Region code.
    pub region: String,
    /// Number of attached rules.
    pub rules: String,
}

/// List of firewalls for display.
#[derive(Debug, Clone, Serialize)]
pub struct FirewallList {
    /// Firewalls on the account.
    pub firewalls: Vec<FirewallRow>,
}

impl TableDisplay for FirewallList {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        if self.firewalls.is_empty() {
            writeln!(writer, "No firewalls found")?;
            return Ok(());
        }

        writeln!(
            writer,
            "{:<36}  {:<24}  {:<8}  {:>5}",
            "ID", "NAME", "REGION", "RULES"
        )?;
        writeln!(writer, "{}", "─".repeat(79))?;
        for firewall in &self.firewalls {
            writeln!(
                writer,
                "{:<36}  {:<24}  {:<8}  {:>5}",
                firewall.id,
                truncate(&firewall.name, 24),
                firewall.region,
                firewall.rules
            )?;
        }
        Ok(())
    }
}

/// Firewall rule information for listing.
#[derive(Debug, Clone, Serialize)]
pub struct RuleRow {
    /// Rule ID.
    pub id: String,
    /// Protocol.
    pub protocol: String,
    /// First port in the range.
    pub start_port: String,
    /// Last port in the range.
    pub end_port: String,
    /// CIDR the rule applies to.
    pub cidr: String,
    /// Traffic direction.
    pub direction: String,
}

/// List of firewall rules for display.
#[derive(Debug, Clone, Serialize)]
pub struct RuleList {
    /// Rules attached to the firewall.
    pub rules: Vec<RuleRow>,
}

impl TableDisplay for RuleList {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        if self.rules.is_empty() {
            writeln!(writer, "No rules found")?;
            return Ok(());
        }

        writeln!(
            writer,
            "{:<36}  {:<8}  {:>10}  {:>8}  {:<18}  {:<9}",
            "ID", "PROTOCOL", "START PORT", "END PORT", "CIDR", "DIRECTION"
        )?;
        writeln!(writer, "{}", "─".repeat(100))?;
        for rule in &self.rules {
            writeln!(
                writer,
                "{:<36}  {:<8}  {:>10}  {:>8}  {:<18}  {:<9}",
                rule.id, rule.protocol, rule.start_port, rule.end_port, rule.cidr, rule.direction
            )?;
        }
        Ok(())
    }
}

/// SSH key information for listing.
#[derive(Debug, Clone, Serialize)]
pub struct SshKeyRow {
    /// Key ID.
    pub id: String,
    /// Key name.
    pub name: String,
    /// Key fingerprint.
    pub fingerprint: String,
}

/// List of SSH keys for display.
#[derive(Debug, Clone, Serialize)]
pub struct SshKeyList {
    /// Uploaded keys.
    pub keys: Vec<SshKeyRow>,
}

impl TableDisplay for SshKeyList {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        if self.keys.is_empty() {
            writeln!(writer, "No SSH keys found")?;
            return Ok(());
        }

        writeln!(writer, "{:<36}  {:<20}  {:<47}", "ID", "NAME", "FINGERPRINT")?;
        writeln!(writer, "{}", "─".repeat(105))?;
        for key in &self.keys {
            writeln!(
                writer,
                "{:<36}  {:<20}  {:<47}",
                key.id,
                truncate(&key.name, 20),
                key.fingerprint
            )?;
        }
        Ok(())
    }
}

/// Snapshot information for listing.
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotRow {
    /// Snapshot ID.
    pub id: String,
    /// Snapshot name.
    pub name: String,
    /// Instance the snapshot was taken from.
    pub instance_id: String,
    /// Snapshot state reported by the service.
    pub state: String,
}

/// List of snapshots for display.
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotList {
    /// Snapshots on the account.
    pub snapshots: Vec<SnapshotRow>,
}

impl TableDisplay for SnapshotList {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        if self.snapshots.is_empty() {
            writeln!(writer, "No snapshots found")?;
            return Ok(());
        }

        writeln!(
            writer,
            "{:<36}  {:<20}  {:<36}  {:<10}",
            "ID", "NAME", "INSTANCE", "STATE"
        )?;
        writeln!(writer, "{}", "─".repeat(108))?;
        for snapshot in &self.snapshots {
            writeln!(
                writer,
                "{:<36}  {:<20}  {:<36}  {:<10}",
                snapshot.id,
                truncate(&snapshot.name, 20),
                snapshot.instance_id,
                snapshot.state
            )?;
        }
        Ok(())
    }
}

/// Template information for listing.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateRow {
    /// Template code.
    pub id: String,
    /// Template name.
    pub name: String,
}

/// List of OS templates for display.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateList {
    /// Available templates.
    pub templates: Vec<TemplateRow>,
}

impl TableDisplay for TemplateList {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        if self.templates.is_empty() {
            writeln!(writer, "No templates found")?;
            return Ok(());
        }

        writeln!(writer, "{:<24}  {:<40}", "ID", "NAME")?;
        writeln!(writer, "{}", "─".repeat(66))?;
        for template in &self.templates {
            writeln!(writer, "{:<24}  {:<40}", template.id, template.name)?;
        }
        Ok(())
    }
}

/// Size information for listing.
#[derive(Debug, Clone, Serialize)]
pub struct SizeRow {
    /// Size code.
    pub name: String,
    /// CPU cores.
    pub cpu_cores: String,
    /// RAM in megabytes.
    pub ram_mb: String,
    /// Disk in gigabytes.
    pub disk_gb: String,
    /// Human-readable description.
    pub description: String,
}

/// List of instance sizes for display.
#[derive(Debug, Clone, Serialize)]
pub struct SizeList {
    /// Sizes on offer.
    pub sizes: Vec<SizeRow>,
}

impl TableDisplay for SizeList {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        if self.sizes.is_empty() {
            writeln!(writer, "No sizes found")?;
            return Ok(());
        }

        writeln!(
            writer,
            "{:<12}  {:>5}  {:>8}  {:>9}  {:<30}",
            "NAME", "CPU", "RAM (MB)", "DISK (GB)", "DESCRIPTION"
        )?;
        writeln!(writer, "{}", "─".repeat(72))?;
        for size in &self.sizes {
            writeln!(
                writer,
                "{:<12}  {:>5}  {:>8}  {:>9}  {:<30}",
                size.name,
                size.cpu_cores,
                size.ram_mb,
                size.disk_gb,
                truncate(&size.description, 30)
            )?;
        }
        Ok(())
    }
}

/// Region information for listing.
#[derive(Debug, Clone, Serialize)]
pub struct RegionRow {
    /// Region code.
    pub code: String,
    /// Region name.
    pub name: String,
}

/// List of regions for display.
#[derive(Debug, Clone, Serialize)]
pub struct RegionList {
    /// Available regions.
    pub regions: Vec<RegionRow>,
}

impl TableDisplay for RegionList {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        if self.regions.is_empty() {
            writeln!(writer, "No regions found")?;
            return Ok(());
        }

        writeln!(writer, "{:<8}  {:<30}", "CODE", "NAME")?;
        writeln!(writer, "{}", "─".repeat(40))?;
        for region in &self.regions {
            writeln!(writer, "{:<8}  {:<30}", region.code, region.name)?;
        }
        Ok(())
    }
}

/// One named quota limit.
#[derive(Debug, Clone, Serialize)]
pub struct QuotaLimit {
    /// Human-readable label.
    pub label: String,
    /// Limit value as reported by the service.
    pub value: String,
}

/// Quota limits for one account.
#[derive(Debug, Clone, Serialize)]
pub struct QuotaView {
    /// Account the quota belongs to.
    pub account: String,
    /// The flat set of limits.
    pub limits: Vec<QuotaLimit>,
}

impl TableDisplay for QuotaView {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        writeln!(writer, "Quota for {}", self.account)?;
        writeln!(writer, "══════════════════════════════════")?;
        for limit in &self.limits {
            let label = format!("{}:", limit.label);
            writeln!(writer, "{label:<24}{}", limit.value)?;
        }
        Ok(())
    }
}

/// Account information for listing.
#[derive(Debug, Clone, Serialize)]
pub struct AccountRow {
    /// Account ID.
    pub id: String,
    /// Account name.
    pub name: String,
    /// Contact email.
    pub email: String,
}

/// List of accounts for display.
#[derive(Debug, Clone, Serialize)]
pub struct AccountList {
    /// Accounts visible to the token.
    pub accounts: Vec<AccountRow>,
}

impl TableDisplay for AccountList {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        if self.accounts.is_empty() {
            writeln!(writer, "No accounts found")?;
            return Ok(());
        }

        writeln!(writer, "{:<36}  {:<20}  {:<30}", "ID", "NAME", "EMAIL")?;
        writeln!(writer, "{}", "─".repeat(90))?;
        for account in &self.accounts {
            writeln!(
                writer,
                "{:<36}  {:<20}  {:<30}",
                account.id,
                truncate(&account.name, 20),
                account.email
            )?;
        }
        Ok(())
    }
}

/// Simple message output.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    /// Message text.
    pub message: String,
    /// Whether this is a success message.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub success: bool,
}

impl Message {
    /// Create a success message.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    /// Create an informational message.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl TableDisplay for Message {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        if self.success {
            writeln!(writer, "✓ {}", self.message)?;
        } else {
            writeln!(writer, "{}", self.message)?;
        }
        Ok(())
    }
}

/// Truncate a string to a maximum length.
fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        format!("{}...", &s[..max_len - 3])
    } else {
        s[..max_len].to_string()
    }
}
