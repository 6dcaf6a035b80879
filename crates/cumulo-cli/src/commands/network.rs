//! Network command implementation.

use std::io::Write;

use cumulo_api::resources::networks;
use cumulo_api::{ApiConfig, Document, Transport};

use crate::cli::NetworkCommands;
use crate::error::CliError;
use crate::output::{Message, NetworkList, NetworkRow, OutputFormat};

/// Network command executor.
pub struct NetworkCommand {
    transport: Transport,
}

impl NetworkCommand {
    /// Create a new network command.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            transport: Transport::new(config),
        }
    }

    /// Execute a network subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation fails.
    pub async fn execute<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
        command: &NetworkCommands,
    ) -> Result<(), CliError> {
        match command {
            NetworkCommands::List => {
                let doc = networks::list(&self.transport).await?;
                format.write(writer, &network_list(&doc))?;
            }
            NetworkCommands::Create { label, region } => {
                let region = region
                    .clone()
                    .unwrap_or_else(|| self.transport.config().default_region.clone());
                let created = networks::create(&self.transport, label, &region).await?;
                format.write(
                    writer,
                    &Message::success(format!(
                        "Network {} created with ID {}",
                        created.name, created.id
                    )),
                )?;
            }
            NetworkCommands::Remove { id } => {
                networks::destroy(&self.transport, id).await?;
                format.write(writer, &Message::success(format!("Network {id} removed")))?;
            }
        }
        Ok(())
    }
}

fn network_list(doc: &Document) -> NetworkList {
    let networks = doc
        .children()
        .iter()
        .map(|item| NetworkRow {
            id: item.text("id"),
            label: item.text("label"),
            region: item.text("region"),
            default: item.text("default"),
        })
        .collect();
    NetworkList { networks }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_list_maps_rows() {
        let doc = Document::parse(
            r#"[{"id":"net-1","label":"Default","region":"nyc1","default":true}]"#,
        )
        .expect("valid json");
        let list = network_list(&doc);
        assert_eq!(list.networks.len(), 1);
        assert_eq!(list.networks[0].label, "Default");
        assert_eq!(list.networks[0].default, "true");
    }
}
