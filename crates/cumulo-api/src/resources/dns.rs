//! DNS domain and record endpoints.

use reqwest::Method;

use crate::document::Document;
use crate::error::Result;
use crate::params::{FormParams, encode, encode_pairs, push_opt};
use crate::transport::Transport;

use super::Created;

/// Parameters for creating a DNS record inside a domain.
#[derive(Debug, Clone)]
pub struct RecordParams {
    /// Record type wire value: `a`, `cname`, `mx`, or `txt`.
    pub record_type: String,
    /// Record name, relative to the domain.
    pub name: String,
    /// Record value: an IP address or a target host.
    pub value: String,
    /// Priority; meaningful for MX records only.
    pub priority: Option<String>,
    /// Time to live in seconds.
    pub ttl: String,
}

impl FormParams for RecordParams {
    fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("type", self.record_type.clone()),
            ("name", self.name.clone()),
            ("value", self.value.clone()),
        ];
        push_opt(&mut fields, "priority", self.priority.as_ref());
        fields.push(("ttl", self.ttl.clone()));
        fields
    }
}

/// List all DNS domains on the account.
pub async fn domains_list(transport: &Transport) -> Result<Document> {
    transport.request(Method::GET, "/v1/dns_domains", None).await
}

/// Register a new domain.
pub async fn domain_create(transport: &Transport, name: &str) -> Result<Created> {
    let body = encode_pairs(&[("name", name)]);
    let doc = transport
        .request(Method::POST, "/v1/dns_domains", Some(body))
        .await?;
    Created::from_document(&doc, "name")
}

/// Remove a domain and all of its records.
pub async fn domain_destroy(transport: &Transport, domain_id: &str) -> Result<()> {
    transport
        .send(Method::DELETE, &format!("/v1/dns_domains/{domain_id}"), None)
        .await?;
    Ok(())
}

/// List the records inside a domain.
pub async fn records_list(transport: &Transport, domain_id: &str) -> Result<Document> {
    transport
        .request(Method::GET, &format!("/v1/dns_domains/{domain_id}/records"), None)
        .await
}

/// Create a record inside a domain.
pub async fn record_create(
    transport: &Transport,
    domain_id: &str,
    params: &RecordParams,
) -> Result<Created> {
    let doc = transport
        .request(
            Method::POST,
            &format!("/v1/dns_domains/{domain_id}/records"),
            Some(encode(params)),
        )
        .await?;
    Created::from_document(&doc, "name")
}

/// Remove a record from a domain.
pub async fn record_destroy(
    transport: &Transport,
    domain_id: &str,
    record_id: &str,
) -> Result<()> {
    transport
        .send(
            Method::DELETE,
            &format!("/v1/dns_domains/{domain_id}/records/{record_id}"),
            None,
        )
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_params_use_the_type_wire_name() {
        let params = RecordParams {
            record_type: "mx".to_string(),
            name: "mail".to_string(),
            value: "mail.example.com".to_string(),
            priority: Some("10".to_string()),
            ttl: "3600".to_string(),
        };
        let fields = params.fields();
        assert_eq!(
            fields,
            vec![
                ("type", "mx".to_string()),
                ("name", "mail".to_string()),
                ("value", "mail.example.com".to_string()),
                ("priority", "10".to_string()),
                ("ttl", "3600".to_string()),
            ]
        );
    }

    #[test]
    fn record_params_omit_priority_when_unset() {
        let params = RecordParams {
            record_type: "a".to_string(),
            name: "www".to_string(),
            value: "10.0.0.1".to_string(),
            priority: None,
            ttl: "600".to_string(),
        };
        let body = encode(&params);
        assert!(!body.contains("priority"));
        assert!(body.contains("type=a"));
        assert!(body.contains("ttl=600"));
    }
}
