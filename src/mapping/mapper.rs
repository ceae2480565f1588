use serde_json::{Map, Value};

use super::attribute::{AttrTree, AttrValue};
use super::error::MappingError;
use super::field_map::{FieldMap, FieldNode};
use super::transformer::transform;
use super::value_map::ValueMap;

/// Wire-key prefix marking a scalar attribute that had no usable entry in
/// the field-mapping tree. The entry is kept in the output (with the
/// passthrough value) instead of crashing the walk or being silently
/// dropped, so callers and tests can detect the miss.
pub const UNMAPPED_FIELD_PREFIX: &str = "_unmapped:";

/// Translates attribute trees into wire trees.
///
/// Borrows its two tables for the duration of the walk; construct one per
/// mapping call or keep one alive next to the tables, whichever suits the
/// caller. The walk never mutates the input tree or the tables.
///
/// ```
/// use ifirma::mapping::*;
///
/// let config = MappingConfig::domestic_invoice();
/// let attrs = AttrTree::new().set("number", 17);
/// let wire = AttributeMapper::new(&config.fields, &config.values)
///     .map(&attrs)
///     .unwrap();
/// assert_eq!(wire["Numer"], 17);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AttributeMapper<'a> {
    fields: &'a FieldMap,
    values: &'a ValueMap,
}

impl<'a> AttributeMapper<'a> {
    pub fn new(fields: &'a FieldMap, values: &'a ValueMap) -> Self {
        Self { fields, values }
    }

    /// Map an attribute tree to its wire form.
    ///
    /// The output object iterates in the input tree's key order. The only
    /// failure mode is a composite attribute the field table cannot place;
    /// scalar misses become [`UNMAPPED_FIELD_PREFIX`] entries and enumerated
    /// value misses become JSON `null`.
    pub fn map(&self, attrs: &AttrTree) -> Result<Map<String, Value>, MappingError> {
        map_node(attrs, self.fields, Some(self.values), "")
    }
}

fn map_node(
    attrs: &AttrTree,
    fields: &FieldMap,
    values: Option<&ValueMap>,
    path: &str,
) -> Result<Map<String, Value>, MappingError> {
    let mut out = Map::new();

    for (key, value) in attrs.iter() {
        match value {
            AttrValue::List(items) => {
                let (wire_name, children) = composite_entry(fields, key, path)?;
                let child_values = values.and_then(|v| v.nested_rules(key));
                let child_path = join(path, key);

                let mut list = Vec::with_capacity(items.len());
                for item in items {
                    list.push(Value::Object(map_node(
                        item,
                        children,
                        child_values,
                        &child_path,
                    )?));
                }
                out.insert(wire_name.to_string(), Value::Array(list));
            }
            AttrValue::Object(tree) => {
                let (wire_name, children) = composite_entry(fields, key, path)?;
                let child_values = values.and_then(|v| v.nested_rules(key));
                let child_path = join(path, key);

                let nested = map_node(tree, children, child_values, &child_path)?;
                out.insert(wire_name.to_string(), Value::Object(nested));
            }
            scalar => {
                let rule = values.and_then(|v| v.get(key));
                let wire_value = transform(scalar, rule).unwrap_or(Value::Null);
                match fields.get(key) {
                    Some(FieldNode::Leaf(wire_name)) => {
                        out.insert((*wire_name).to_string(), wire_value);
                    }
                    // No leaf wire name to write under: keep the pair
                    // observable instead of dropping it.
                    Some(FieldNode::Composite { .. }) | None => {
                        out.insert(format!("{UNMAPPED_FIELD_PREFIX}{key}"), wire_value);
                    }
                }
            }
        }
    }

    Ok(out)
}

/// Resolve the wire name and child table for a composite attribute.
fn composite_entry<'m>(
    fields: &'m FieldMap,
    key: &str,
    path: &str,
) -> Result<(&'m str, &'m FieldMap), MappingError> {
    match fields.get(key) {
        Some(FieldNode::Composite { wire_name, children }) => Ok((*wire_name, children)),
        Some(FieldNode::Leaf(_)) => Err(MappingError::NotComposite { path: join(path, key) }),
        None => Err(MappingError::MissingMapping { path: join(path, key) }),
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}
