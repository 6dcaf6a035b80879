//! Snapshot endpoints.
//!
//! Snapshots are addressed by name rather than by ID: the name is a path
//! segment on create and destroy, so it never appears in a request body.

use reqwest::Method;

use crate::document::Document;
use crate::error::Result;
use crate::params::encode_pairs;
use crate::transport::Transport;

use super::Created;

/// List all snapshots on the account.
pub async fn list(transport: &Transport) -> Result<Document> {
    transport.request(Method::GET, "/v1/snapshots", None).await
}

/// Snapshot an instance under the given name. A safe snapshot stops the
/// instance before imaging it.
pub async fn create(
    transport: &Transport,
    name: &str,
    instance_id: &str,
    safe: bool,
) -> Result<Created> {
    let body = encode_pairs(&[
        ("instance_id", instance_id),
        ("safe", if safe { "true" } else { "false" }),
    ]);
    let doc = transport
        .request(Method::PUT, &format!("/v1/snapshots/{name}"), Some(body))
        .await?;
    Created::from_document(&doc, "name")
}

/// Remove a snapshot by name.
pub async fn destroy(transport: &Transport, name: &str) -> Result<()> {
    transport
        .send(Method::DELETE, &format!("/v1/snapshots/{name}"), None)
        .await?;
    Ok(())
}
