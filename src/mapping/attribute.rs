use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::Value;

/// A single node of the caller-facing attribute tree.
///
/// The vocabulary is closed: every value an invoice attribute can take is one
/// of these shapes, and the mapper matches on them exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Free text.
    Str(String),
    /// A symbolic token, resolved through an enumerated value table
    /// (e.g. `sym("net")` → `"NET"`).
    Sym(String),
    /// Integer quantity or count.
    Int(i64),
    /// Exact decimal — prices, rates. Never floating point.
    Decimal(Decimal),
    /// Flag.
    Bool(bool),
    /// Calendar date.
    Date(NaiveDate),
    /// Nested record (e.g. the customer).
    Object(AttrTree),
    /// Ordered list of records sharing one schema (e.g. line items).
    List(Vec<AttrTree>),
}

impl AttrValue {
    /// Symbolic token constructor.
    pub fn sym(name: impl Into<String>) -> Self {
        Self::Sym(name.into())
    }

    /// Render this value to its untranslated JSON form.
    ///
    /// This is the passthrough encoding used when no transformation rule
    /// applies: strings and symbols render as JSON strings, dates as
    /// `YYYY-MM-DD`, decimals as a JSON number when exactly representable
    /// (decimal string otherwise). Composites keep their symbolic keys —
    /// field-name translation is the mapper's job, not this function's.
    pub fn to_wire(&self) -> Value {
        match self {
            Self::Str(s) => Value::String(s.clone()),
            Self::Sym(s) => Value::String(s.clone()),
            Self::Int(i) => Value::Number((*i).into()),
            Self::Decimal(d) => d
                .to_f64()
                .and_then(serde_json::Number::from_f64)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(d.to_string())),
            Self::Bool(b) => Value::Bool(*b),
            Self::Date(d) => Value::String(d.format("%Y-%m-%d").to_string()),
            Self::Object(tree) => {
                Value::Object(tree.iter().map(|(k, v)| (k.to_string(), v.to_wire())).collect())
            }
            Self::List(items) => Value::Array(
                items
                    .iter()
                    .map(|tree| {
                        Value::Object(
                            tree.iter().map(|(k, v)| (k.to_string(), v.to_wire())).collect(),
                        )
                    })
                    .collect(),
            ),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for AttrValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<Decimal> for AttrValue {
    fn from(d: Decimal) -> Self {
        Self::Decimal(d)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<NaiveDate> for AttrValue {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl From<AttrTree> for AttrValue {
    fn from(tree: AttrTree) -> Self {
        Self::Object(tree)
    }
}

impl From<Vec<AttrTree>> for AttrValue {
    fn from(items: Vec<AttrTree>) -> Self {
        Self::List(items)
    }
}

/// An insertion-ordered set of `(symbolic key, value)` pairs.
///
/// Key order is significant: the mapper walks the tree in the order the
/// caller set the attributes, and the wire tree mirrors that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttrTree {
    entries: Vec<(String, AttrValue)>,
}

impl AttrTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an attribute, chainable.
    ///
    /// Setting the same key twice keeps both entries; the mapper processes
    /// them in order and the later one wins in the wire object.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// Append an attribute in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.entries.push((key.into(), value.into()));
    }

    /// First value set under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
