use crate::error::RenameError;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// A proxy subscription: an opaque top-level `name` and the ordered `proxies` list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    pub proxies: Vec<Entry>,
}

/// One proxy record. Every field is kept as parsed, in its original key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entry(Mapping);

impl Document {
    pub fn from_value(value: Value) -> Result<Document, RenameError> {
        let mut root = match value {
            Value::Mapping(root) => root,
            other => {
                return Err(RenameError::malformed(format!(
                    "document must be a mapping, found {}",
                    value_kind(&other)
                )))
            }
        };

        let proxies = match root.remove("proxies") {
            Some(Value::Sequence(proxies)) => proxies,
            Some(other) => {
                return Err(RenameError::malformed(format!(
                    "proxies must be a sequence, found {}",
                    value_kind(&other)
                )))
            }
            None => return Err(RenameError::malformed("document has no proxies")),
        };

        let proxies = proxies
            .into_iter()
            .enumerate()
            .map(|(index, proxy)| match proxy {
                Value::Mapping(fields) => Ok(Entry(fields)),
                other => Err(RenameError::malformed(format!(
                    "proxy {} must be a mapping, found {}",
                    index,
                    value_kind(&other)
                ))),
            })
            .collect::<Result<Vec<Entry>, RenameError>>()?;

        Ok(Document {
            name: root.remove("name"),
            proxies,
        })
    }
}

impl Entry {
    pub fn new(fields: Mapping) -> Self {
        Entry(fields)
    }

    /// `None` when the entry has no `name` or its `name` is not a string.
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    pub fn fields(&self) -> &Mapping {
        &self.0
    }

    /// Copy of this entry with only `name` replaced; key order is unchanged. Callers
    /// check `name()` first, so the key is always present.
    pub fn with_name(&self, name: String) -> Entry {
        let mut fields = self.0.clone();
        if let Some(value) = fields.get_mut("name") {
            *value = Value::String(name);
        }
        Entry(fields)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
