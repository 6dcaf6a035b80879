//! Firewall and firewall-rule endpoints.

use reqwest::Method;

use crate::document::Document;
use crate::error::Result;
use crate::params::{FormParams, encode, encode_pairs, push_opt};
use crate::transport::Transport;

use super::Created;

/// Parameters for creating a firewall rule.
#[derive(Debug, Clone)]
pub struct RuleParams {
    /// Protocol wire value: `tcp`, `udp`, or `icmp`.
    pub protocol: String,
    /// First port in the range.
    pub start_port: String,
    /// Last port in the range; omitted for single-port rules.
    pub end_port: Option<String>,
    /// CIDR the rule applies to.
    pub cidr: String,
    /// Traffic direction wire value: `inbound` or `outbound`.
    pub direction: String,
}

impl FormParams for RuleParams {
    fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("protocol", self.protocol.clone()),
            ("start_port", self.start_port.clone()),
        ];
        push_opt(&mut fields, "end_port", self.end_port.as_ref());
        fields.push(("cidr", self.cidr.clone()));
        fields.push(("direction", self.direction.clone()));
        fields
    }
}

/// List all firewalls on the account.
pub async fn list(transport: &Transport) -> Result<Document> {
    transport.request(Method::GET, "/v1/firewalls", None).await
}

/// Create a firewall. An empty region defers to the account default.
pub async fn create(transport: &Transport, name: &str, region: &str) -> Result<Created> {
    let body = encode_pairs(&[("name", name), ("region", region)]);
    let doc = transport
        .request(Method::POST, "/v1/firewalls", Some(body))
        .await?;
    Created::from_document(&doc, "name")
}

/// Remove a firewall.
pub async fn destroy(transport: &Transport, id: &str) -> Result<()> {
    transport
        .send(Method::DELETE, &format!("/v1/firewalls/{id}"), None)
        .await?;
    Ok(())
}

/// List the rules attached to a firewall.
pub async fn rules_list(transport: &Transport, firewall_id: &str) -> Result<Document> {
    transport
        .request(Method::GET, &format!("/v1/firewalls/{firewall_id}/rules"), None)
        .await
}

/// Attach a rule to a firewall and return the new rule's ID.
pub async fn rule_create(
    transport: &Transport,
    firewall_id: &str,
    params: &RuleParams,
) -> Result<String> {
    let doc = transport
        .request(
            Method::POST,
            &format!("/v1/firewalls/{firewall_id}/rules"),
            Some(encode(params)),
        )
        .await?;
    doc.string("id")
}

/// Detach a rule from a firewall.
pub async fn rule_destroy(
    transport: &Transport,
    firewall_id: &str,
    rule_id: &str,
) -> Result<()> {
    transport
        .send(
            Method::DELETE,
            &format!("/v1/firewalls/{firewall_id}/rules/{rule_id}"),
            None,
        )
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_params_enumerate_wire_fields_in_order() {
        let params = RuleParams {
            protocol: "tcp".to_string(),
            start_port: "80".to_string(),
            end_port: Some("443".to_string()),
            cidr: "0.0.0.0/0".to_string(),
            direction: "inbound".to_string(),
        };
        let names: Vec<&str> = params.fields().iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            vec!["protocol", "start_port", "end_port", "cidr", "direction"]
        );
    }

    #[test]
    fn single_port_rule_omits_end_port() {
        let params = RuleParams {
            protocol: "tcp".to_string(),
            start_port: "22".to_string(),
            end_port: None,
            cidr: "10.0.0.0/8".to_string(),
            direction: "inbound".to_string(),
        };
        let body = encode(&params);
        assert!(!body.contains("end_port"));
        assert!(body.contains("start_port=22"));
        assert!(body.contains("cidr=10.0.0.0%2F8"));
    }
}
