//! DNS command implementation.

use std::io::Write;

use cumulo_api::resources::dns::{self, RecordParams};
use cumulo_api::{ApiConfig, Document, Transport};

use crate::cli::{DnsCommands, RecordCommands, RecordCreateArgs};
use crate::error::CliError;
use crate::output::{DomainList, DomainRow, Message, OutputFormat, RecordList, RecordRow};

/// DNS command executor.
pub struct DnsCommand {
    transport: Transport,
}

impl DnsCommand {
    /// Create a new DNS command.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            transport: Transport::new(config),
        }
    }

    /// Execute a DNS subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation fails.
    pub async fn execute<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
        command: &DnsCommands,
    ) -> Result<(), CliError> {
        match command {
            DnsCommands::List => {
                let doc = dns::domains_list(&self.transport).await?;
                format.write(writer, &domain_list(&doc))?;
            }
            DnsCommands::Create { name } => {
                let created = dns::domain_create(&self.transport, name).await?;
                format.write(
                    writer,
                    &Message::success(format!(
                        "Domain {} registered with ID {}",
                        created.name, created.id
                    )),
                )?;
            }
            DnsCommands::Remove { id } => {
                dns::domain_destroy(&self.transport, id).await?;
                format.write(writer, &Message::success(format!("Domain {id} removed")))?;
            }
            DnsCommands::Record { command } => {
                self.record(writer, format, command).await?;
            }
        }
        Ok(())
    }

    async fn record<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
        command: &RecordCommands,
    ) -> Result<(), CliError> {
        match command {
            RecordCommands::List { domain } => {
                let doc = dns::records_list(&self.transport, domain).await?;
                format.write(writer, &record_list(&doc))?;
            }
            RecordCommands::Create(args) => {
                let created =
                    dns::record_create(&self.transport, &args.domain, &record_params(args))
                        .await?;
                format.write(
                    writer,
                    &Message::success(format!(
                        "Record {} created with ID {}",
                        created.name, created.id
                    )),
                )?;
            }
            RecordCommands::Remove { domain, id } => {
                dns::record_destroy(&self.transport, domain, id).await?;
                format.write(writer, &Message::success(format!("Record {id} removed")))?;
            }
        }
        Ok(())
    }
}

fn record_params(args: &RecordCreateArgs) -> RecordParams {
    RecordParams {
        record_type: args.record_type.wire().to_string(),
        name: args.name.clone(),
        value: args.value.clone(),
        priority: args.priority.map(|p| p.to_string()),
        ttl: args.ttl.to_string(),
    }
}

fn domain_list(doc: &Document) -> DomainList {
    let domains = doc
        .children()
        .iter()
        .map(|item| DomainRow {
            id: item.text("id"),
            name: item.text("name"),
        })
        .collect();
    DomainList { domains }
}

fn record_list(doc: &Document) -> RecordList {
    let records = doc
        .children()
        .iter()
        .map(|item| RecordRow {
            id: item.text("id"),
            record_type: item.text("type"),
            name: item.text("name"),
            value: item.text("value"),
            ttl: item.text("ttl"),
            priority: item.text("priority"),
        })
        .collect();
    RecordList { records }
}
