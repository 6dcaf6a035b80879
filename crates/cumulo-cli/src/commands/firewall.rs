//! Firewall command implementation.

use std::io::Write;

use cumulo_api::resources::firewalls::{self, RuleParams};
use cumulo_api::{ApiConfig, Document, Transport};

use crate::cli::{FirewallCommands, RuleCommands, RuleCreateArgs};
use crate::error::CliError;
use crate::output::{FirewallList, FirewallRow, Message, OutputFormat, RuleList, RuleRow};

/// Firewall command executor.
pub struct FirewallCommand {
    transport: Transport,
}

impl FirewallCommand {
    /// Create a new firewall command.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            transport: Transport::new(config),
        }
    }

    /// Execute a firewall subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation fails.
    pub async fn execute<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
        command: &FirewallCommands,
    ) -> Result<(), CliError> {
        match command {
            FirewallCommands::List => {
                let doc = firewalls::list(&self.transport).await?;
                format.write(writer, &firewall_list(&doc))?;
            }
            FirewallCommands::Create { name, region } => {
                let region = region
                    .clone()
                    .unwrap_or_else(|| self.transport.config().default_region.clone());
                let created = firewalls::create(&self.transport, name, &region).await?;
                format.write(
                    writer,
                    &Message::success(format!(
                        "Firewall {} created with ID {}",
                        created.name, created.id
                    )),
                )?;
            }
            FirewallCommands::Remove { id } => {
                firewalls::destroy(&self.transport, id).await?;
                format.write(writer, &Message::success(format!("Firewall {id} removed")))?;
            }
            FirewallCommands::Rule { command } => {
                self.rule(writer, format, command).await?;
            }
        }
        Ok(())
    }

    async fn rule<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
        command: &RuleCommands,
    ) -> Result<(), CliError> {
        match command {
            RuleCommands::List { firewall } => {
                let doc = firewalls::rules_list(&self.transport, firewall).await?;
                format.write(writer, &rule_list(&doc))?;
            }
            RuleCommands::Create(args) => {
                let id =
                    firewalls::rule_create(&self.transport, &args.firewall, &rule_params(args))
                        .await?;
                format.write(writer, &Message::success(format!("Rule created with ID {id}")))?;
            }
            RuleCommands::Remove { firewall, id } => {
                firewalls::rule_destroy(&self.transport, firewall, id).await?;
                format.write(writer, &Message::success(format!("Rule {id} removed")))?;
            }
        }
        Ok(())
    }
}

fn rule_params(args: &RuleCreateArgs) -> RuleParams {
    RuleParams {
        protocol: args.protocol.clone(),
        start_port: args.start_port.to_string(),
        end_port: args.end_port.map(|p| p.to_string()),
        cidr: args.cidr.clone(),
        direction: args.direction.wire().to_string(),
    }
}

fn firewall_list(doc: &Document) -> FirewallList {
    let firewalls = doc
        .children()
        .iter()
        .map(|item| FirewallRow {
            id: item.text("id"),
            name: item.text("name"),
            region: item.text("region"),
            rules: item.text("rules_count"),
        })
        .collect();
    FirewallList { firewalls }
}

fn rule_list(doc: &Document) -> RuleList {
    let rules = doc
        .children()
        .iter()
        .map(|item| RuleRow {
            id: item.text("id"),
            protocol: item.text("protocol"),
            start_port: item.text("start_port"),
            end_port: item.text("end_port"),
            cidr: item.text("cidr"),
            direction: item.text("direction"),
        })
        .collect();
    RuleList { rules }
}
