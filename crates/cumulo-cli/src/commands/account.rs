//! Account administration command implementation.

use std::io::Write;

use cumulo_api::resources::accounts;
use cumulo_api::{ApiConfig, Document, Transport};

use crate::cli::AccountCommands;
use crate::error::CliError;
use crate::output::{AccountList, AccountRow, Message, OutputFormat};

/// Account command executor.
pub struct AccountCommand {
    transport: Transport,
}

impl AccountCommand {
    /// Create a new account command.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            transport: Transport::new(config),
        }
    }

    /// Execute an account subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation fails.
    pub async fn execute<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
        command: &AccountCommands,
    ) -> Result<(), CliError> {
        match command {
            AccountCommands::List => {
                let doc = accounts::list(&self.transport).await?;
                format.write(writer, &account_list(&doc))?;
            }
            AccountCommands::Create { name, email } => {
                let created = accounts::create(&self.transport, name, email).await?;
                format.write(
                    writer,
                    &Message::success(format!(
                        "Account {} created with ID {}",
                        created.name, created.id
                    )),
                )?;
            }
            AccountCommands::Remove { id } => {
                accounts::destroy(&self.transport, id).await?;
                format.write(writer, &Message::success(format!("Account {id} removed")))?;
            }
        }
        Ok(())
    }
}

fn account_list(doc: &Document) -> AccountList {
    let accounts = doc
        .children()
        .iter()
        .map(|item| AccountRow {
            id: item.text("id"),
            name: item.text("name"),
            email: item.text("email"),
        })
        .collect();
    AccountList { accounts }
}
