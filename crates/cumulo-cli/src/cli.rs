//! Command-line argument parsing with clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Cumulo CLI - cloud instances, DNS, networks and firewalls.
#[derive(Parser, Debug, Clone)]
#[command(name = "cumulo")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the config file (default: ~/.cumulo.toml).
    #[arg(long, global = true, env = "CUMULO_CONFIG")]
    pub config: Option<PathBuf>,

    /// API base URL override.
    #[arg(long, global = true, env = "CUMULO_URL")]
    pub url: Option<String>,

    /// API token override.
    #[arg(long, global = true, env = "CUMULO_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Output format.
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Format {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON output for scripting.
    Json,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Instance management commands.
    Instance {
        /// Instance subcommand to execute.
        #[command(subcommand)]
        command: InstanceCommands,
    },

    /// DNS domain and record commands.
    Dns {
        /// DNS subcommand to execute.
        #[command(subcommand)]
        command: DnsCommands,
    },

    /// Private network commands.
    Network {
        /// Network subcommand to execute.
        #[command(subcommand)]
        command: NetworkCommands,
    },

    /// Firewall and firewall-rule commands.
    Firewall {
        /// Firewall subcommand to execute.
        #[command(subcommand)]
        command: FirewallCommands,
    },

    /// SSH key commands.
    Sshkey {
        /// SSH key subcommand to execute.
        #[command(subcommand)]
        command: SshKeyCommands,
    },

    /// Snapshot commands.
    Snapshot {
        /// Snapshot subcommand to execute.
        #[command(subcommand)]
        command: SnapshotCommands,
    },

    /// List the OS templates available for new instances.
    Templates,

    /// List the instance sizes on offer.
    Sizes,

    /// List the regions instances can be placed in.
    Regions,

    /// Account quota commands.
    Quota {
        /// Quota subcommand to execute.
        #[command(subcommand)]
        command: QuotaCommands,
    },

    /// Account administration commands.
    Account {
        /// Account subcommand to execute.
        #[command(subcommand)]
        command: AccountCommands,
    },
}

/// Instance subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum InstanceCommands {
    /// List all instances.
    List,

    /// Show details for one instance.
    Show {
        /// Instance ID, ID prefix, hostname, or hostname fragment.
        id: String,
    },

    /// Create a new instance.
    Create(InstanceCreateArgs),

    /// Reboot an instance.
    Reboot {
        /// Instance ID.
        id: String,

        /// Power-cycle instead of a clean shutdown.
        #[arg(long)]
        hard: bool,
    },

    /// Stop a running instance.
    Stop {
        /// Instance ID.
        id: String,
    },

    /// Start a stopped instance.
    Start {
        /// Instance ID.
        id: String,
    },

    /// Resize an instance to a new size.
    Upgrade {
        /// Instance ID.
        id: String,

        /// New size from `cumulo sizes`.
        size: String,
    },

    /// Replace the tag list on an instance.
    Tags {
        /// Instance ID.
        id: String,

        /// Space-separated list of tags.
        tags: String,
    },

    /// Destroy an instance permanently.
    Remove {
        /// Instance ID.
        id: String,
    },

    /// Ask the service for an unused hostname.
    SuggestName,
}

/// Arguments for creating an instance.
#[derive(Args, Debug, Clone)]
pub struct InstanceCreateArgs {
    /// Hostname; lowercase, hyphen separated. A suggestion is fetched when
    /// omitted.
    #[arg(short, long)]
    pub name: Option<String>,

    /// The size from `cumulo sizes`.
    #[arg(short, long, default_value = "g1.small")]
    pub size: String,

    /// The region from `cumulo regions`; the configured default when
    /// omitted.
    #[arg(short, long)]
    pub region: Option<String>,

    /// The SSH key ID or name from `cumulo sshkey list`.
    #[arg(short = 'k', long, default_value = "default")]
    pub ssh_key: String,

    /// The template from `cumulo templates`.
    #[arg(short, long, default_value = "ubuntu-22.04")]
    pub template: String,

    /// The default user to create.
    #[arg(short = 'u', long, default_value = "cumulo")]
    pub initial_user: String,

    /// Should a public IP address be allocated.
    #[arg(short, long, default_value_t = true, action = clap::ArgAction::Set, value_name = "BOOL")]
    pub public_ip: bool,

    /// The network ID or name from `cumulo network list`.
    #[arg(short = 'w', long, default_value = "Default")]
    pub network: String,

    /// The firewall ID or name from `cumulo firewall list`.
    #[arg(long, default_value = "default")]
    pub firewall: String,

    /// A space-separated list of tags.
    #[arg(short = 'g', long, default_value = "")]
    pub tags: String,
}

/// DNS subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum DnsCommands {
    /// List DNS domains.
    List,

    /// Register a new domain.
    Create {
        /// Fully-qualified domain name.
        name: String,
    },

    /// Remove a domain and all of its records.
    Remove {
        /// Domain ID.
        id: String,
    },

    /// DNS record commands.
    Record {
        /// Record subcommand to execute.
        #[command(subcommand)]
        command: RecordCommands,
    },
}

/// DNS record subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum RecordCommands {
    /// List the records in a domain.
    List {
        /// Domain ID.
        domain: String,
    },

    /// Create a record in a domain.
    Create(RecordCreateArgs),

    /// Remove a record from a domain.
    Remove {
        /// Domain ID.
        domain: String,

        /// Record ID.
        id: String,
    },
}

/// Arguments for creating a DNS record.
#[derive(Args, Debug, Clone)]
pub struct RecordCreateArgs {
    /// Domain ID.
    pub domain: String,

    /// Record type.
    #[arg(short = 't', long = "type", value_enum, default_value_t = RecordType::A)]
    pub record_type: RecordType,

    /// Record name, relative to the domain.
    #[arg(short, long)]
    pub name: String,

    /// Record value: an IP address or a target host.
    #[arg(short, long)]
    pub value: String,

    /// Priority, for MX records.
    #[arg(long)]
    pub priority: Option<u16>,

    /// Time to live in seconds.
    #[arg(long, default_value_t = 3600)]
    pub ttl: u32,
}

/// DNS record type argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordType {
    /// Address record.
    A,
    /// Canonical name record.
    Cname,
    /// Mail exchange record.
    Mx,
    /// Text record.
    Txt,
}

impl RecordType {
    /// The wire value the API expects.
    #[must_use]
    pub const fn wire(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::Cname => "cname",
            Self::Mx => "mx",
            Self::Txt => "txt",
        }
    }
}

/// Network subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum NetworkCommands {
    /// List private networks.
    List,

    /// Create a private network.
    Create {
        /// Network label.
        label: String,

        /// The region to create the network in; the configured default
        /// when omitted.
        #[arg(short, long)]
        region: Option<String>,
    },

    /// Remove a private network.
    Remove {
        /// Network ID.
        id: String,
    },
}

/// Firewall subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum FirewallCommands {
    /// List firewalls.
    List,

    /// Create a firewall.
    Create {
        /// Firewall name.
        name: String,

        /// The region to create the firewall in; the configured default
        /// when omitted.
        #[arg(short, long)]
        region: Option<String>,
    },

    /// Remove a firewall.
    Remove {
        /// Firewall ID.
        id: String,
    },

    /// Firewall rule commands.
    Rule {
        /// Rule subcommand to execute.
        #[command(subcommand)]
        command: RuleCommands,
    },
}

/// Firewall rule subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum RuleCommands {
    /// List the rules attached to a firewall.
    List {
        /// Firewall ID.
        firewall: String,
    },

    /// Attach a rule to a firewall.
    Create(RuleCreateArgs),

    /// Detach a rule from a firewall.
    Remove {
        /// Firewall ID.
        firewall: String,

        /// Rule ID.
        id: String,
    },
}

/// Arguments for creating a firewall rule.
#[derive(Args, Debug, Clone)]
pub struct RuleCreateArgs {
    /// Firewall ID.
    pub firewall: String,

    /// Protocol the rule applies to.
    #[arg(short, long, default_value = "tcp")]
    pub protocol: String,

    /// First port in the range.
    #[arg(short, long)]
    pub start_port: u16,

    /// Last port in the range; single-port rule when omitted.
    #[arg(short, long)]
    pub end_port: Option<u16>,

    /// CIDR the rule applies to.
    #[arg(short, long, default_value = "0.0.0.0/0")]
    pub cidr: String,

    /// Traffic direction.
    #[arg(short, long, value_enum, default_value_t = Direction::Inbound)]
    pub direction: Direction,
}

/// Traffic direction argument for firewall rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Direction {
    /// Traffic arriving at the instance.
    #[default]
    Inbound,
    /// Traffic leaving the instance.
    Outbound,
}

impl Direction {
    /// The wire value the API expects.
    #[must_use]
    pub const fn wire(self) -> &'static str {
        match self {
            Self::Inbound => "inbound",
            Self::Outbound => "outbound",
        }
    }
}

/// SSH key subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum SshKeyCommands {
    /// List uploaded SSH keys.
    List,

    /// Upload a public key under a name.
    Upload {
        /// Name to store the key under.
        name: String,

        /// Path to the public key file.
        path: PathBuf,
    },

    /// Remove an uploaded key.
    Remove {
        /// Key ID.
        id: String,
    },
}

/// Snapshot subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum SnapshotCommands {
    /// List snapshots.
    List,

    /// Snapshot an instance under a name.
    Create {
        /// Snapshot name.
        name: String,

        /// Instance ID to snapshot.
        #[arg(short, long)]
        instance: String,

        /// Stop the instance before imaging it.
        #[arg(long)]
        safe: bool,
    },

    /// Remove a snapshot by name.
    Remove {
        /// Snapshot name.
        name: String,
    },
}

/// Quota subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum QuotaCommands {
    /// Show the quota limits for an account.
    Show {
        /// Account name; the configured default when omitted.
        #[arg(short, long)]
        account: Option<String>,
    },

    /// Replace quota limits for an account.
    Set(QuotaSetArgs),
}

/// Arguments for setting quota limits. Only supplied limits are sent.
#[derive(Args, Debug, Clone)]
pub struct QuotaSetArgs {
    /// Account name; the configured default when omitted.
    #[arg(short, long)]
    pub account: Option<String>,

    /// Maximum number of instances.
    #[arg(long)]
    pub instances: Option<u32>,

    /// Maximum total CPU cores.
    #[arg(long)]
    pub cpu_cores: Option<u32>,

    /// Maximum total RAM in megabytes.
    #[arg(long)]
    pub ram_mb: Option<u32>,

    /// Maximum total disk in gigabytes.
    #[arg(long)]
    pub disk_gb: Option<u32>,

    /// Maximum number of disk volumes.
    #[arg(long)]
    pub disk_volumes: Option<u32>,

    /// Maximum number of disk snapshots.
    #[arg(long)]
    pub disk_snapshots: Option<u32>,

    /// Maximum number of public IP addresses.
    #[arg(long)]
    pub public_ips: Option<u32>,

    /// Maximum number of subnets.
    #[arg(long)]
    pub subnets: Option<u32>,

    /// Maximum number of private networks.
    #[arg(long)]
    pub networks: Option<u32>,

    /// Maximum number of security groups.
    #[arg(long)]
    pub security_groups: Option<u32>,

    /// Maximum number of security group rules.
    #[arg(long)]
    pub security_group_rules: Option<u32>,

    /// Maximum number of ports.
    #[arg(long)]
    pub ports: Option<u32>,
}

/// Account subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum AccountCommands {
    /// List accounts.
    List,

    /// Create an account.
    Create {
        /// Account name.
        name: String,

        /// Contact email for the account.
        #[arg(short, long)]
        email: String,
    },

    /// Remove an account.
    Remove {
        /// Account ID.
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_help_does_not_panic() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_instance_list() {
        let cli = Cli::parse_from(["cumulo", "instance", "list"]);
        assert!(matches!(
            cli.command,
            Commands::Instance {
                command: InstanceCommands::List
            }
        ));
        assert_eq!(cli.format, Format::Table);
    }

    #[test]
    fn parse_json_format_flag() {
        let cli = Cli::parse_from(["cumulo", "--format", "json", "instance", "list"]);
        assert_eq!(cli.format, Format::Json);
    }

    #[test]
    fn parse_url_override() {
        let cli = Cli::parse_from(["cumulo", "--url", "http://localhost:9000", "sizes"]);
        assert_eq!(cli.url.as_deref(), Some("http://localhost:9000"));
        assert!(matches!(cli.command, Commands::Sizes));
    }

    #[test]
    fn parse_instance_create_defaults() {
        let cli = Cli::parse_from(["cumulo", "instance", "create"]);
        match cli.command {
            Commands::Instance {
                command: InstanceCommands::Create(args),
            } => {
                assert!(args.name.is_none());
                assert_eq!(args.size, "g1.small");
                assert!(args.region.is_none());
                assert_eq!(args.ssh_key, "default");
                assert_eq!(args.template, "ubuntu-22.04");
                assert_eq!(args.initial_user, "cumulo");
                assert!(args.public_ip);
                assert_eq!(args.network, "Default");
                assert_eq!(args.firewall, "default");
                assert_eq!(args.tags, "");
            }
            _ => panic!("expected instance create command"),
        }
    }

    #[test]
    fn parse_instance_create_full() {
        let cli = Cli::parse_from([
            "cumulo",
            "instance",
            "create",
            "--name",
            "test1.example.com",
            "-s",
            "g1.large",
            "-r",
            "nyc1",
            "--public-ip",
            "false",
            "-g",
            "web prod",
        ]);
        match cli.command {
            Commands::Instance {
                command: InstanceCommands::Create(args),
            } => {
                assert_eq!(args.name.as_deref(), Some("test1.example.com"));
                assert_eq!(args.size, "g1.large");
                assert_eq!(args.region.as_deref(), Some("nyc1"));
                assert!(!args.public_ip);
                assert_eq!(args.tags, "web prod");
            }
            _ => panic!("expected instance create command"),
        }
    }

    #[test]
    fn parse_instance_show() {
        let cli = Cli::parse_from(["cumulo", "instance", "show", "web1"]);
        match cli.command {
            Commands::Instance {
                command: InstanceCommands::Show { id },
            } => assert_eq!(id, "web1"),
            _ => panic!("expected instance show command"),
        }
    }

    #[test]
    fn parse_instance_reboot_hard() {
        let cli = Cli::parse_from(["cumulo", "instance", "reboot", "--hard", "abc-123"]);
        match cli.command {
            Commands::Instance {
                command: InstanceCommands::Reboot { id, hard },
            } => {
                assert_eq!(id, "abc-123");
                assert!(hard);
            }
            _ => panic!("expected instance reboot command"),
        }
    }

    #[test]
    fn parse_instance_upgrade() {
        let cli = Cli::parse_from(["cumulo", "instance", "upgrade", "abc-123", "g2.medium"]);
        match cli.command {
            Commands::Instance {
                command: InstanceCommands::Upgrade { id, size },
            } => {
                assert_eq!(id, "abc-123");
                assert_eq!(size, "g2.medium");
            }
            _ => panic!("expected instance upgrade command"),
        }
    }

    #[test]
    fn parse_instance_suggest_name() {
        let cli = Cli::parse_from(["cumulo", "instance", "suggest-name"]);
        assert!(matches!(
            cli.command,
            Commands::Instance {
                command: InstanceCommands::SuggestName
            }
        ));
    }

    #[test]
    fn parse_dns_list() {
        let cli = Cli::parse_from(["cumulo", "dns", "list"]);
        assert!(matches!(
            cli.command,
            Commands::Dns {
                command: DnsCommands::List
            }
        ));
    }

    #[test]
    fn parse_dns_record_create() {
        let cli = Cli::parse_from([
            "cumulo", "dns", "record", "create", "dom-1", "--type", "mx", "--name", "mail",
            "--value", "mail.example.com", "--priority", "10",
        ]);
        match cli.command {
            Commands::Dns {
                command: DnsCommands::Record {
                    command: RecordCommands::Create(args),
                },
            } => {
                assert_eq!(args.domain, "dom-1");
                assert_eq!(args.record_type, RecordType::Mx);
                assert_eq!(args.name, "mail");
                assert_eq!(args.value, "mail.example.com");
                assert_eq!(args.priority, Some(10));
                assert_eq!(args.ttl, 3600);
            }
            _ => panic!("expected dns record create command"),
        }
    }

    #[test]
    fn parse_network_create_with_region() {
        let cli = Cli::parse_from(["cumulo", "network", "create", "backend", "-r", "lon1"]);
        match cli.command {
            Commands::Network {
                command: NetworkCommands::Create { label, region },
            } => {
                assert_eq!(label, "backend");
                assert_eq!(region.as_deref(), Some("lon1"));
            }
            _ => panic!("expected network create command"),
        }
    }

    #[test]
    fn parse_firewall_rule_create_defaults() {
        let cli = Cli::parse_from([
            "cumulo", "firewall", "rule", "create", "fw-1", "--start-port", "22",
        ]);
        match cli.command {
            Commands::Firewall {
                command: FirewallCommands::Rule {
                    command: RuleCommands::Create(args),
                },
            } => {
                assert_eq!(args.firewall, "fw-1");
                assert_eq!(args.protocol, "tcp");
                assert_eq!(args.start_port, 22);
                assert!(args.end_port.is_none());
                assert_eq!(args.cidr, "0.0.0.0/0");
                assert_eq!(args.direction, Direction::Inbound);
            }
            _ => panic!("expected firewall rule create command"),
        }
    }

    #[test]
    fn parse_sshkey_upload() {
        let cli = Cli::parse_from(["cumulo", "sshkey", "upload", "laptop", "/tmp/id_ed25519.pub"]);
        match cli.command {
            Commands::Sshkey {
                command: SshKeyCommands::Upload { name, path },
            } => {
                assert_eq!(name, "laptop");
                assert_eq!(path, PathBuf::from("/tmp/id_ed25519.pub"));
            }
            _ => panic!("expected sshkey upload command"),
        }
    }

    #[test]
    fn parse_snapshot_create_safe() {
        let cli = Cli::parse_from([
            "cumulo", "snapshot", "create", "nightly", "--instance", "abc-123", "--safe",
        ]);
        match cli.command {
            Commands::Snapshot {
                command: SnapshotCommands::Create { name, instance, safe },
            } => {
                assert_eq!(name, "nightly");
                assert_eq!(instance, "abc-123");
                assert!(safe);
            }
            _ => panic!("expected snapshot create command"),
        }
    }

    #[test]
    fn parse_catalog_commands() {
        assert!(matches!(
            Cli::parse_from(["cumulo", "templates"]).command,
            Commands::Templates
        ));
        assert!(matches!(
            Cli::parse_from(["cumulo", "sizes"]).command,
            Commands::Sizes
        ));
        assert!(matches!(
            Cli::parse_from(["cumulo", "regions"]).command,
            Commands::Regions
        ));
    }

    #[test]
    fn parse_quota_show_default_account() {
        let cli = Cli::parse_from(["cumulo", "quota", "show"]);
        match cli.command {
            Commands::Quota {
                command: QuotaCommands::Show { account },
            } => assert!(account.is_none()),
            _ => panic!("expected quota show command"),
        }
    }

    #[test]
    fn parse_quota_set_partial_limits() {
        let cli = Cli::parse_from([
            "cumulo", "quota", "set", "-a", "acme", "--instances", "25", "--ram-mb", "65536",
        ]);
        match cli.command {
            Commands::Quota {
                command: QuotaCommands::Set(args),
            } => {
                assert_eq!(args.account.as_deref(), Some("acme"));
                assert_eq!(args.instances, Some(25));
                assert_eq!(args.ram_mb, Some(65536));
                assert!(args.cpu_cores.is_none());
                assert!(args.ports.is_none());
            }
            _ => panic!("expected quota set command"),
        }
    }

    #[test]
    fn parse_account_create() {
        let cli = Cli::parse_from([
            "cumulo", "account", "create", "acme", "--email", "ops@acme.test",
        ]);
        match cli.command {
            Commands::Account {
                command: AccountCommands::Create { name, email },
            } => {
                assert_eq!(name, "acme");
                assert_eq!(email, "ops@acme.test");
            }
            _ => panic!("expected account create command"),
        }
    }

    #[test]
    fn record_type_wire_values() {
        assert_eq!(RecordType::A.wire(), "a");
        assert_eq!(RecordType::Cname.wire(), "cname");
        assert_eq!(RecordType::Mx.wire(), "mx");
        assert_eq!(RecordType::Txt.wire(), "txt");
    }

    #[test]
    fn direction_wire_values() {
        assert_eq!(Direction::Inbound.wire(), "inbound");
        assert_eq!(Direction::Outbound.wire(), "outbound");
    }

    #[test]
    fn format_default_is_table() {
        assert_eq!(Format::default(), Format::Table);
    }
}
