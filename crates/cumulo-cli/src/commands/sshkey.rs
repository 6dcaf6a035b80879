//! SSH key command implementation.

use std::io::Write;

use cumulo_api::resources::ssh_keys;
use cumulo_api::{ApiConfig, Document, Transport};

use crate::cli::SshKeyCommands;
use crate::error::CliError;
use crate::output::{Message, OutputFormat, SshKeyList, SshKeyRow};

/// SSH key command executor.
pub struct SshKeyCommand {
    transport: Transport,
}

impl SshKeyCommand {
    /// Create a new SSH key command.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            transport: Transport::new(config),
        }
    }

    /// Execute an SSH key subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation fails.
    pub async fn execute<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
        command: &SshKeyCommands,
    ) -> Result<(), CliError> {
        match command {
            SshKeyCommands::List => {
                let doc = ssh_keys::list(&self.transport).await?;
                format.write(writer, &key_list(&doc))?;
            }
            SshKeyCommands::Upload { name, path } => {
                let public_key = std::fs::read_to_string(path)?;
                let created =
                    ssh_keys::upload(&self.transport, name, public_key.trim()).await?;
                format.write(
                    writer,
                    &Message::success(format!(
                        "Key {} uploaded with ID {}",
                        created.name, created.id
                    )),
                )?;
            }
            SshKeyCommands::Remove { id } => {
                ssh_keys::destroy(&self.transport, id).await?;
                format.write(writer, &Message::success(format!("Key {id} removed")))?;
            }
        }
        Ok(())
    }
}

fn key_list(doc: &Document) -> SshKeyList {
    let keys = doc
        .children()
        .iter()
        .map(|item| SshKeyRow {
            id: item.text("id"),
            name: item.text("name"),
            fingerprint: item.text("fingerprint"),
        })
        .collect();
    SshKeyList { keys }
}
