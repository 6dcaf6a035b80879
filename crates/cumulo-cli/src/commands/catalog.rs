//! Catalog commands: templates, sizes, and regions.
//!
//! All three are read-only listings with no parameters.

use std::io::Write;

use cumulo_api::resources::{regions, sizes, templates};
use cumulo_api::{ApiConfig, Document, Transport};

use crate::error::CliError;
use crate::output::{
    OutputFormat, RegionList, RegionRow, SizeList, SizeRow, TemplateList, TemplateRow,
};

/// Catalog command executor.
pub struct CatalogCommand {
    transport: Transport,
}

impl CatalogCommand {
    /// Create a new catalog command.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            transport: Transport::new(config),
        }
    }

    /// List the OS templates available for new instances.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation fails.
    pub async fn templates<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
    ) -> Result<(), CliError> {
        let doc = templates::list(&self.transport).await?;
        format.write(writer, &template_list(&doc))?;
        Ok(())
    }

    /// List the instance sizes on offer.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation fails.
    pub async fn sizes<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
    ) -> Result<(), CliError> {
        let doc = sizes::list(&self.transport).await?;
        format.write(writer, &size_list(&doc))?;
        Ok(())
    }

    /// List the regions instances can be placed in.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation fails.
    pub async fn regions<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
    ) -> Result<(), CliError> {
        let doc = regions::list(&self.transport).await?;
        format.write(writer, &region_list(&doc))?;
        Ok(())
    }
}

fn template_list(doc: &Document) -> TemplateList {
    let templates = doc
        .children()
        .iter()
        .map(|item| TemplateRow {
            id: item.text("id"),
            name: item.text("name"),
        })
        .collect();
    TemplateList { templates }
}

fn size_list(doc: &Document) -> SizeList {
    let sizes = doc
        .children()
        .iter()
        .map(|item| SizeRow {
            name: item.text("name"),
            cpu_cores: item.text("cpu_cores"),
            ram_mb: item.text("ram_mb"),
            disk_gb: item.text("disk_gb"),
            description: item.text("description"),
        })
        .collect();
    SizeList { sizes }
}

fn region_list(doc: &Document) -> RegionList {
    let regions = doc
        .children()
        .iter()
        .map(|item| RegionRow {
            code: item.text("code"),
            name: item.text("name"),
        })
        .collect();
    RegionList { regions }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_list_maps_numeric_fields_to_text() {
        let doc = Document::parse(
            r#"[{"name":"g1.small","cpu_cores":1,"ram_mb":2048,"disk_gb":25,"description":"Small"}]"#,
        )
        .expect("valid json");
        let list = size_list(&doc);
        assert_eq!(list.sizes[0].cpu_cores, "1");
        assert_eq!(list.sizes[0].ram_mb, "2048");
    }

    #[test]
    fn region_list_maps_rows() {
        let doc = Document::parse(r#"[{"code":"nyc1","name":"New York 1"}]"#).expect("valid json");
        let list = region_list(&doc);
        assert_eq!(list.regions[0].code, "nyc1");
    }
}
