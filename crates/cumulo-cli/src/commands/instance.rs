//! Instance command implementation.
//!
//! Covers listing, show, create (with hostname suggestion and SSH key
//! resolution), power operations, resize, retag, and removal.

use std::io::Write;

use cumulo_api::resources::instances::{self, CreatedInstance, InstanceParams};
use cumulo_api::resources::ssh_keys;
use cumulo_api::{ApiConfig, Document, Transport};

use crate::cli::{InstanceCommands, InstanceCreateArgs};
use crate::error::CliError;
use crate::output::{InstanceDetail, InstanceList, InstanceRow, Message, OutputFormat};

/// Instance command executor.
pub struct InstanceCommand {
    transport: Transport,
}

impl InstanceCommand {
    /// Create a new instance command.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            transport: Transport::new(config),
        }
    }

    /// Execute an instance subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation fails.
    pub async fn execute<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
        command: &InstanceCommands,
    ) -> Result<(), CliError> {
        match command {
            InstanceCommands::List => {
                let doc = instances::list(&self.transport).await?;
                format.write(writer, &instance_list(&doc))?;
            }
            InstanceCommands::Show { id } => {
                let found = instances::find(&self.transport, id).await?.ok_or_else(|| {
                    CliError::InvalidArgument(format!("no instance matching `{id}`"))
                })?;
                format.write(writer, &instance_detail(&found))?;
            }
            InstanceCommands::Create(args) => {
                self.create(writer, format, args).await?;
            }
            InstanceCommands::Reboot { id, hard } => {
                instances::reboot(&self.transport, id, *hard).await?;
                format.write(writer, &Message::success(format!("Instance {id} rebooting")))?;
            }
            InstanceCommands::Stop { id } => {
                instances::stop(&self.transport, id).await?;
                format.write(writer, &Message::success(format!("Instance {id} stopping")))?;
            }
            InstanceCommands::Start { id } => {
                instances::start(&self.transport, id).await?;
                format.write(writer, &Message::success(format!("Instance {id} starting")))?;
            }
            InstanceCommands::Upgrade { id, size } => {
                instances::upgrade(&self.transport, id, size).await?;
                format.write(
                    writer,
                    &Message::success(format!("Instance {id} resizing to {size}")),
                )?;
            }
            InstanceCommands::Tags { id, tags } => {
                instances::retag(&self.transport, id, tags).await?;
                format.write(writer, &Message::success(format!("Instance {id} retagged")))?;
            }
            InstanceCommands::Remove { id } => {
                instances::destroy(&self.transport, id).await?;
                format.write(writer, &Message::success(format!("Instance {id} removed")))?;
            }
            InstanceCommands::SuggestName => {
                let hostname = instances::suggest_hostname(&self.transport).await?;
                format.write(writer, &Message::info(hostname))?;
            }
        }
        Ok(())
    }

    async fn create<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
        args: &InstanceCreateArgs,
    ) -> Result<(), CliError> {
        let hostname = match &args.name {
            Some(name) => name.clone(),
            None => instances::suggest_hostname(&self.transport).await?,
        };

        // The flag takes a key ID or name; resolve names to IDs up front
        // so the create call carries the ID. Unresolvable values pass
        // through for the service to reject.
        let ssh_key_id = if args.ssh_key.is_empty() {
            String::new()
        } else {
            match ssh_keys::find(&self.transport, &args.ssh_key).await? {
                Some(key) => key.string("id")?,
                None => args.ssh_key.clone(),
            }
        };

        let region = match &args.region {
            Some(region) => region.clone(),
            None => self.transport.config().default_region.clone(),
        };

        let params = InstanceParams {
            hostname,
            size: args.size.clone(),
            region,
            ssh_key_id,
            template: args.template.clone(),
            initial_user: args.initial_user.clone(),
            public_ip: args.public_ip,
            network_id: args.network.clone(),
            firewall_id: args.firewall.clone(),
            tags: args.tags.clone(),
        };

        let created = instances::create(&self.transport, &params).await?;
        format.write(writer, &Message::success(created_message(&created)))?;
        Ok(())
    }
}

/// The confirmation line for a successful create: hostname plus the ID
/// prefix before the first hyphen.
fn created_message(created: &CreatedInstance) -> String {
    let prefix = created.id.split('-').next().unwrap_or(&created.id);
    format!("Building instance `{}` with ID {prefix}", created.hostname)
}

fn instance_list(doc: &Document) -> InstanceList {
    let instances = doc
        .children()
        .iter()
        .map(|item| InstanceRow {
            id: item.text("id"),
            hostname: item.text("hostname"),
            size: item.text("size"),
            region: item.text("region"),
            status: item.text("status"),
            public_ip: item.text("public_ip"),
        })
        .collect();
    InstanceList { instances }
}

fn instance_detail(doc: &Document) -> InstanceDetail {
    InstanceDetail {
        id: doc.text("id"),
        hostname: doc.text("hostname"),
        size: doc.text("size"),
        region: doc.text("region"),
        status: doc.text("status"),
        public_ip: doc.text("public_ip"),
        private_ip: doc.text("private_ip"),
        template: doc.text("template"),
        initial_user: doc.text("initial_user"),
        tags: doc.text("tags"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_message_uses_id_prefix_before_first_hyphen() {
        let created = CreatedInstance {
            id: "abcd1234-9c3b-4a2e-8f6d-1f2e3a4b5c6d".to_string(),
            hostname: "test1.example.com".to_string(),
        };
        let message = created_message(&created);
        assert_eq!(
            message,
            "Building instance `test1.example.com` with ID abcd1234"
        );
        assert!(!message.contains("9c3b"));
    }

    #[test]
    fn created_message_without_hyphen_uses_whole_id() {
        let created = CreatedInstance {
            id: "plainid".to_string(),
            hostname: "h".to_string(),
        };
        assert!(created_message(&created).contains("plainid"));
    }

    #[test]
    fn instance_list_maps_rows_in_order() {
        let doc = Document::parse(
            r#"[
                {"id":"a-1","hostname":"web1.example.com","size":"g1.small","region":"nyc1","status":"ACTIVE","public_ip":"203.0.113.10"},
                {"id":"b-2","hostname":"db1.example.com","size":"g1.large","region":"lon1","status":"STOPPED"}
            ]"#,
        )
        .expect("valid json");

        let list = instance_list(&doc);
        assert_eq!(list.instances.len(), 2);
        assert_eq!(list.instances[0].hostname, "web1.example.com");
        assert_eq!(list.instances[0].public_ip, "203.0.113.10");
        // Absent fields render as empty, not as an error.
        assert_eq!(list.instances[1].public_ip, "");
    }

    #[test]
    fn instance_detail_tolerates_absent_fields() {
        let doc = Document::parse(r#"{"id":"a-1","hostname":"web1.example.com"}"#)
            .expect("valid json");
        let detail = instance_detail(&doc);
        assert_eq!(detail.hostname, "web1.example.com");
        assert_eq!(detail.template, "");
        assert_eq!(detail.tags, "");
    }
}
