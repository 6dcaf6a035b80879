//! Instance endpoints: lifecycle, power operations, and hostname
//! suggestion.

use reqwest::Method;

use crate::document::Document;
use crate::error::Result;
use crate::params::{FormParams, encode, encode_pairs};
use crate::transport::Transport;

use super::find_by;

/// Parameters for creating an instance.
///
/// Every field is sent verbatim; the service applies its documented
/// defaults to empty values.
#[derive(Debug, Clone, Default)]
pub struct InstanceParams {
    /// Hostname; lowercase, hyphen separated.
    pub hostname: String,
    /// Size code from the sizes catalog.
    pub size: String,
    /// Region code from the regions catalog.
    pub region: String,
    /// Resolved SSH key ID.
    pub ssh_key_id: String,
    /// Template code from the templates catalog.
    pub template: String,
    /// Initial user account created on the instance.
    pub initial_user: String,
    /// Whether to allocate a public IP address.
    pub public_ip: bool,
    /// Network ID or name.
    pub network_id: String,
    /// Firewall ID or name.
    pub firewall_id: String,
    /// Space-separated tag list.
    pub tags: String,
}

impl FormParams for InstanceParams {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("hostname", self.hostname.clone()),
            ("size", self.size.clone()),
            ("region", self.region.clone()),
            ("ssh_key_id", self.ssh_key_id.clone()),
            ("template", self.template.clone()),
            ("initial_user", self.initial_user.clone()),
            ("public_ip", self.public_ip.to_string()),
            ("network_id", self.network_id.clone()),
            ("firewall_id", self.firewall_id.clone()),
            ("tags", self.tags.clone()),
        ]
    }
}

/// Fields extracted from a successful create response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedInstance {
    /// Service-assigned instance ID.
    pub id: String,
    /// Hostname the instance was created with.
    pub hostname: String,
}

/// List all instances on the account.
pub async fn list(transport: &Transport) -> Result<Document> {
    transport.request(Method::GET, "/v1/instances", None).await
}

/// Resolve an ID, ID prefix, hostname, or hostname fragment to the
/// matching instance document. One list call, matched client-side.
pub async fn find(transport: &Transport, query: &str) -> Result<Option<Document>> {
    let listing = list(transport).await?;
    Ok(find_by(&listing, query, "hostname"))
}

/// Create an instance and return its ID and hostname verbatim.
pub async fn create(transport: &Transport, params: &InstanceParams) -> Result<CreatedInstance> {
    let doc = transport
        .request(Method::POST, "/v1/instances", Some(encode(params)))
        .await?;
    Ok(CreatedInstance {
        id: doc.string("id")?,
        hostname: doc.string("hostname")?,
    })
}

/// Destroy an instance permanently.
pub async fn destroy(transport: &Transport, id: &str) -> Result<()> {
    transport
        .send(Method::DELETE, &format!("/v1/instances/{id}"), None)
        .await?;
    Ok(())
}

/// Reboot an instance, either gracefully or by power-cycling it.
pub async fn reboot(transport: &Transport, id: &str, hard: bool) -> Result<()> {
    let action = if hard { "hard_reboots" } else { "soft_reboots" };
    transport
        .send(Method::POST, &format!("/v1/instances/{id}/{action}"), None)
        .await?;
    Ok(())
}

/// Stop a running instance.
pub async fn stop(transport: &Transport, id: &str) -> Result<()> {
    transport
        .send(Method::PUT, &format!("/v1/instances/{id}/stop"), None)
        .await?;
    Ok(())
}

/// Start a stopped instance.
pub async fn start(transport: &Transport, id: &str) -> Result<()> {
    transport
        .send(Method::PUT, &format!("/v1/instances/{id}/start"), None)
        .await?;
    Ok(())
}

/// Resize an instance to a new size code.
pub async fn upgrade(transport: &Transport, id: &str, size: &str) -> Result<()> {
    let body = encode_pairs(&[("size", size)]);
    transport
        .send(Method::PUT, &format!("/v1/instances/{id}/resize"), Some(body))
        .await?;
    Ok(())
}

/// Replace the tag list on an instance.
pub async fn retag(transport: &Transport, id: &str, tags: &str) -> Result<()> {
    let body = encode_pairs(&[("tags", tags)]);
    transport
        .send(Method::PUT, &format!("/v1/instances/{id}/tags"), Some(body))
        .await?;
    Ok(())
}

/// Ask the service for an unused hostname suggestion.
pub async fn suggest_hostname(transport: &Transport) -> Result<String> {
    let doc = transport
        .request(Method::GET, "/v1/instances/suggested_hostname", None)
        .await?;
    doc.string("hostname")
}
