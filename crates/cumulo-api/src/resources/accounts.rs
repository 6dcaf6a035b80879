//! Account administration endpoints.

use reqwest::Method;

use crate::document::Document;
use crate::error::Result;
use crate::params::encode_pairs;
use crate::transport::Transport;

use super::Created;

/// List all accounts visible to the token.
pub async fn list(transport: &Transport) -> Result<Document> {
    transport.request(Method::GET, "/v1/accounts", None).await
}

/// Create an account.
pub async fn create(transport: &Transport, name: &str, email: &str) -> Result<Created> {
    let body = encode_pairs(&[("name", name), ("email", email)]);
    let doc = transport
        .request(Method::POST, "/v1/accounts", Some(body))
        .await?;
    Created::from_document(&doc, "name")
}

/// Remove an account.
pub async fn destroy(transport: &Transport, id: &str) -> Result<()> {
    transport
        .send(Method::DELETE, &format!("/v1/accounts/{id}"), None)
        .await?;
    Ok(())
}
