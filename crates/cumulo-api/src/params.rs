//! Request-body encoding via explicit field mapping tables.
//!
//! Each parameter record enumerates its `(wire name, value)` pairs in
//! [`FormParams::fields`]. A field that travels in the URL path instead of
//! the body — an account name, a snapshot name — is simply not enumerated;
//! that is the whole of the "omit" mechanism, with no reflection or
//! attribute magic involved. Optional fields are enumerated only when set,
//! a per-record decision made (and tested) in each record's `fields()`.

/// A parameter record that can be encoded as a form body.
pub trait FormParams {
    /// The `(wire name, value)` pairs to send, in mapping-table order.
    /// Receivers must treat the body as an unordered field set.
    fn fields(&self) -> Vec<(&'static str, String)>;
}

/// Encode a parameter record as a URL-encoded form body.
#[must_use]
pub fn encode<P: FormParams>(params: &P) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, value) in params.fields() {
        serializer.append_pair(name, &value);
    }
    serializer.finish()
}

/// Encode ad-hoc `(wire name, value)` pairs as a form body. For the
/// handful of endpoints whose body is a single field or two and does not
/// warrant a parameter record.
#[must_use]
pub fn encode_pairs(pairs: &[(&str, &str)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, value) in pairs {
        serializer.append_pair(name, value);
    }
    serializer.finish()
}

/// Append an optional field only when it has a value.
pub(crate) fn push_opt(
    fields: &mut Vec<(&'static str, String)>,
    name: &'static str,
    value: Option<&String>,
) {
    if let Some(value) = value {
        fields.push((name, value.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        name: String,
        region: String,
        note: Option<String>,
    }

    impl FormParams for Sample {
        fn fields(&self) -> Vec<(&'static str, String)> {
            let mut fields = vec![
                ("name", self.name.clone()),
                ("region", self.region.clone()),
            ];
            push_opt(&mut fields, "note", self.note.as_ref());
            fields
        }
    }

    fn decode(body: &str) -> Vec<(String, String)> {
        form_urlencoded::parse(body.as_bytes()).into_owned().collect()
    }

    #[test]
    fn encode_recovers_exactly_the_enumerated_fields() {
        let params = Sample {
            name: "web1".to_string(),
            region: "nyc1".to_string(),
            note: Some("primary".to_string()),
        };
        let decoded = decode(&encode(&params));
        assert_eq!(
            decoded,
            vec![
                ("name".to_string(), "web1".to_string()),
                ("region".to_string(), "nyc1".to_string()),
                ("note".to_string(), "primary".to_string()),
            ]
        );
    }

    #[test]
    fn unset_optional_field_is_omitted() {
        let params = Sample {
            name: "web1".to_string(),
            region: "nyc1".to_string(),
            note: None,
        };
        let body = encode(&params);
        assert!(!body.contains("note"));
        assert_eq!(decode(&body).len(), 2);
    }

    #[test]
    fn empty_required_field_is_sent_verbatim() {
        let params = Sample {
            name: String::new(),
            region: "nyc1".to_string(),
            note: None,
        };
        let decoded = decode(&encode(&params));
        assert!(decoded.contains(&("name".to_string(), String::new())));
    }

    #[test]
    fn encode_pairs_matches_record_encoding() {
        let body = encode_pairs(&[("size", "g1.large"), ("tags", "web prod")]);
        assert_eq!(body, "size=g1.large&tags=web+prod");
    }

    #[test]
    fn values_are_url_encoded() {
        let params = Sample {
            name: "a b&c=d".to_string(),
            region: String::new(),
            note: None,
        };
        let body = encode(&params);
        assert!(body.contains("name=a+b%26c%3Dd"));
        let decoded = decode(&body);
        assert!(decoded.contains(&("name".to_string(), "a b&c=d".to_string())));
    }
}
