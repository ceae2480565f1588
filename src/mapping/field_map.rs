use std::collections::HashMap;

/// One entry of a [`FieldMap`]: either a wire field name for a scalar
/// attribute, or the mapping for a composite (nested object or list).
///
/// A composite carries its own wire name explicitly alongside the child
/// table, so the container's name and its children never share a key.
#[derive(Debug, Clone)]
pub enum FieldNode {
    /// Wire field name for a scalar attribute.
    Leaf(&'static str),
    /// Wire name plus child mappings for a nested object or list.
    Composite {
        wire_name: &'static str,
        children: FieldMap,
    },
}

/// Symbolic key → [`FieldNode`] table for one nesting level.
///
/// Declared with the chainable [`leaf`](FieldMap::leaf) /
/// [`composite`](FieldMap::composite) methods and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct FieldMap {
    entries: HashMap<&'static str, FieldNode>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a scalar field mapping.
    pub fn leaf(mut self, key: &'static str, wire_name: &'static str) -> Self {
        self.entries.insert(key, FieldNode::Leaf(wire_name));
        self
    }

    /// Declare a composite field mapping with its own wire name and children.
    pub fn composite(
        mut self,
        key: &'static str,
        wire_name: &'static str,
        children: FieldMap,
    ) -> Self {
        self.entries
            .insert(key, FieldNode::Composite { wire_name, children });
        self
    }

    pub fn get(&self, key: &str) -> Option<&FieldNode> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_and_composite_lookup() {
        let map = FieldMap::new()
            .leaf("number", "Numer")
            .composite("customer", "Kontrahent", FieldMap::new().leaf("name", "Nazwa"));

        assert!(matches!(map.get("number"), Some(FieldNode::Leaf("Numer"))));
        match map.get("customer") {
            Some(FieldNode::Composite { wire_name, children }) => {
                assert_eq!(*wire_name, "Kontrahent");
                assert!(matches!(children.get("name"), Some(FieldNode::Leaf("Nazwa"))));
            }
            other => panic!("expected composite, got {other:?}"),
        }
        assert!(map.get("missing").is_none());
    }
}
