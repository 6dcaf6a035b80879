//! Snapshot command implementation.

use std::io::Write;

use cumulo_api::resources::snapshots;
use cumulo_api::{ApiConfig, Document, Transport};

use crate::cli::SnapshotCommands;
use crate::error::CliError;
use crate::output::{Message, OutputFormat, SnapshotList, SnapshotRow};

/// Snapshot command executor.
pub struct SnapshotCommand {
    transport: Transport,
}

impl SnapshotCommand {
    /// Create a new snapshot command.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            transport: Transport::new(config),
        }
    }

    /// Execute a snapshot subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation fails.
    pub async fn execute<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
        command: &SnapshotCommands,
    ) -> Result<(), CliError> {
        match command {
            SnapshotCommands::List => {
                let doc = snapshots::list(&self.transport).await?;
                format.write(writer, &snapshot_list(&doc))?;
            }
            SnapshotCommands::Create {
                name,
                instance,
                safe,
            } => {
                let created = snapshots::create(&self.transport, name, instance, *safe).await?;
                format.write(
                    writer,
                    &Message::success(format!("Snapshot {} requested", created.name)),
                )?;
            }
            SnapshotCommands::Remove { name } => {
                snapshots::destroy(&self.transport, name).await?;
                format.write(writer, &Message::success(format!("Snapshot {name} removed")))?;
            }
        }
        Ok(())
    }
}

fn snapshot_list(doc: &Document) -> SnapshotList {
    let snapshots = doc
        .children()
        .iter()
        .map(|item| SnapshotRow {
            id: item.text("id"),
            name: item.text("name"),
            instance_id: item.text("instance_id"),
            state: item.text("state"),
        })
        .collect();
    SnapshotList { snapshots }
}
