use std::collections::HashMap;

use serde_json::Value;

use super::attribute::AttrValue;

/// A pure value-rewriting function: attribute value in, wire value out.
pub type TransformFn = fn(&AttrValue) -> Value;

/// One entry of a [`ValueMap`].
#[derive(Debug, Clone)]
pub enum ValueRule {
    /// Rewrite the value through a function (date formatting, rescaling, ...).
    Transform(TransformFn),
    /// Substitute a symbolic token through an enumerated table.
    /// A token with no entry yields no value at all — see
    /// [`transform`](super::transform).
    Enumerated(HashMap<&'static str, &'static str>),
    /// Rules for the children of a composite attribute.
    Nested(ValueMap),
}

/// Symbolic key → [`ValueRule`] table for one nesting level.
///
/// A key with no entry is passed through unchanged, so most attributes never
/// appear here.
#[derive(Debug, Clone, Default)]
pub struct ValueMap {
    rules: HashMap<&'static str, ValueRule>,
}

impl ValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a transformation function for `key`.
    pub fn transform(mut self, key: &'static str, f: TransformFn) -> Self {
        self.rules.insert(key, ValueRule::Transform(f));
        self
    }

    /// Declare an enumerated substitution table for `key`.
    pub fn enumerated(mut self, key: &'static str, table: &[(&'static str, &'static str)]) -> Self {
        self.rules
            .insert(key, ValueRule::Enumerated(table.iter().copied().collect()));
        self
    }

    /// Declare rules for the children of the composite attribute `key`.
    pub fn nested(mut self, key: &'static str, children: ValueMap) -> Self {
        self.rules.insert(key, ValueRule::Nested(children));
        self
    }

    pub fn get(&self, key: &str) -> Option<&ValueRule> {
        self.rules.get(key)
    }

    /// The nested rule table under `key`, if one was declared.
    pub fn nested_rules(&self, key: &str) -> Option<&ValueMap> {
        match self.rules.get(key) {
            Some(ValueRule::Nested(children)) => Some(children),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_rules_only_match_nested_entries() {
        let map = ValueMap::new()
            .enumerated("type", &[("net", "NET")])
            .nested("items", ValueMap::new().enumerated("vat_type", &[("percent", "PRC")]));

        assert!(map.nested_rules("items").is_some());
        assert!(map.nested_rules("type").is_none());
        assert!(map.nested_rules("missing").is_none());
    }
}
