//! SSH key endpoints.

use reqwest::Method;

use crate::document::Document;
use crate::error::Result;
use crate::params::encode_pairs;
use crate::transport::Transport;

use super::{Created, find_by};

/// List all uploaded SSH keys.
pub async fn list(transport: &Transport) -> Result<Document> {
    transport.request(Method::GET, "/v1/sshkeys", None).await
}

/// Resolve an ID, ID prefix, name, or name fragment to the matching key
/// document. One list call, matched client-side. Used to turn the
/// `--ssh-key` flag on instance create into a key ID.
pub async fn find(transport: &Transport, query: &str) -> Result<Option<Document>> {
    let listing = list(transport).await?;
    Ok(find_by(&listing, query, "name"))
}

/// Upload a public key under a name.
pub async fn upload(transport: &Transport, name: &str, public_key: &str) -> Result<Created> {
    let body = encode_pairs(&[("name", name), ("public_key", public_key)]);
    let doc = transport
        .request(Method::POST, "/v1/sshkeys", Some(body))
        .await?;
    Created::from_document(&doc, "name")
}

/// Remove an uploaded key.
pub async fn destroy(transport: &Transport, id: &str) -> Result<()> {
    transport
        .send(Method::DELETE, &format!("/v1/sshkeys/{id}"), None)
        .await?;
    Ok(())
}
