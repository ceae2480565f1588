//! Wrapper over iFirma's JSON response envelope.
//!
//! Every JSON endpoint answers with `{"response": {...}}`; inside, `Kod`
//! carries the status (0 is success) and `Informacja` a human-readable
//! message. The remaining fields use the same wire names the request
//! mapping produces, so [`Response::attr`] can resolve symbolic attribute
//! paths through a field-mapping tree.

use serde_json::Value;

use crate::mapping::{FieldMap, FieldNode};

const ENVELOPE_KEY: &str = "response";
const CODE_KEY: &str = "Kod";
const MESSAGE_KEY: &str = "Informacja";
const FULL_NUMBER_KEY: &str = "PelnyNumer";
const INVOICE_ID_KEY: &str = "Identyfikator";

/// A decoded response body from the service.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    body: Value,
}

impl Response {
    /// Wrap an already-unwrapped response object.
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    /// Unwrap the `"response"` envelope of a raw body.
    /// Returns `None` when the envelope key is absent.
    pub fn from_envelope(raw: Value) -> Option<Self> {
        match raw {
            Value::Object(mut map) => map.remove(ENVELOPE_KEY).map(Self::new),
            _ => None,
        }
    }

    /// Did the service report success? iFirma signals this with `Kod == 0`.
    pub fn success(&self) -> bool {
        self.code() == Some(0)
    }

    /// The service status code (`Kod`).
    pub fn code(&self) -> Option<i64> {
        self.body.get(CODE_KEY).and_then(Value::as_i64)
    }

    /// The service status message (`Informacja`).
    pub fn message(&self) -> Option<&str> {
        self.body.get(MESSAGE_KEY).and_then(Value::as_str)
    }

    /// Look up a dot-separated path of wire field names.
    ///
    /// ```
    /// use ifirma::response::Response;
    /// use serde_json::json;
    ///
    /// let r = Response::new(json!({"Kontrahent": {"Nazwa": "Acme"}}));
    /// assert_eq!(r.get("Kontrahent.Nazwa"), Some(&json!("Acme")));
    /// ```
    pub fn get(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(&self.body, |node, segment| node.get(segment))
    }

    /// Look up a dot-separated path of *symbolic* attribute names, resolving
    /// each segment to its wire name through `fields`.
    ///
    /// ```
    /// use ifirma::mapping::MappingConfig;
    /// use ifirma::response::Response;
    /// use serde_json::json;
    ///
    /// let config = MappingConfig::domestic_invoice();
    /// let r = Response::new(json!({"PelnyNumer": "12/2023"}));
    /// assert_eq!(r.attr(&config.fields, "full_number"), Some(&json!("12/2023")));
    /// ```
    pub fn attr<'a>(&'a self, fields: &FieldMap, path: &str) -> Option<&'a Value> {
        let mut table = fields;
        let mut node = &self.body;
        let mut segments = path.split('.').peekable();

        while let Some(segment) = segments.next() {
            match table.get(segment)? {
                FieldNode::Leaf(wire_name) => {
                    // A leaf terminates the resolvable path.
                    if segments.peek().is_some() {
                        return None;
                    }
                    node = node.get(wire_name)?;
                }
                FieldNode::Composite { wire_name, children } => {
                    node = node.get(wire_name)?;
                    table = children;
                }
            }
        }
        Some(node)
    }

    /// The invoice's full number (`PelnyNumer`), e.g. `"12/2023"`.
    pub fn full_number(&self) -> Option<&str> {
        self.body.get(FULL_NUMBER_KEY).and_then(Value::as_str)
    }

    /// The invoice's service-side identifier (`Identyfikator`).
    pub fn invoice_id(&self) -> Option<i64> {
        self.body.get(INVOICE_ID_KEY).and_then(Value::as_i64)
    }

    /// The wrapped response object.
    pub fn body(&self) -> &Value {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_unwrap() {
        let raw = json!({"response": {"Kod": 0, "Informacja": "ok"}});
        let r = Response::from_envelope(raw).unwrap();
        assert!(r.success());
        assert_eq!(r.message(), Some("ok"));
    }

    #[test]
    fn missing_envelope() {
        assert!(Response::from_envelope(json!({"Kod": 0})).is_none());
        assert!(Response::from_envelope(json!("not an object")).is_none());
    }

    #[test]
    fn nonzero_code_is_failure() {
        let r = Response::new(json!({"Kod": 201, "Informacja": "Brak autoryzacji"}));
        assert!(!r.success());
        assert_eq!(r.code(), Some(201));
    }

    #[test]
    fn absent_code_is_failure() {
        assert!(!Response::new(json!({})).success());
    }
}
