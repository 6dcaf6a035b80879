//! Private network endpoints.

use reqwest::Method;

use crate::document::Document;
use crate::error::Result;
use crate::params::encode_pairs;
use crate::transport::Transport;

use super::Created;

/// List all private networks on the account.
pub async fn list(transport: &Transport) -> Result<Document> {
    transport.request(Method::GET, "/v1/networks", None).await
}

/// Create a private network. An empty region defers to the account
/// default on the service side.
pub async fn create(transport: &Transport, label: &str, region: &str) -> Result<Created> {
    let body = encode_pairs(&[("label", label), ("region", region)]);
    let doc = transport
        .request(Method::POST, "/v1/networks", Some(body))
        .await?;
    Created::from_document(&doc, "label")
}

/// Remove a private network.
pub async fn destroy(transport: &Transport, id: &str) -> Result<()> {
    transport
        .send(Method::DELETE, &format!("/v1/networks/{id}"), None)
        .await?;
    Ok(())
}
