use crate::domain::constants::CLASS_FIELD;
use crate::domain::errors::CardError;
use serde_json::{Map, Value};
use std::path::Path;

/// What the record currently stores under `class`.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassField {
    Absent,
    Null,
    Value(u32),
    /// Present but not a non-negative integer (string, float, negative...).
    Invalid(Value),
}

impl ClassField {
    pub fn value(&self) -> Option<u32> {
        match self {
            ClassField::Value(v) => Some(*v),
            _ => None,
        }
    }

    /// True when writing `class` would leave the stored field as it is.
    pub fn matches(&self, class: Option<u32>) -> bool {
        match (self, class) {
            (ClassField::Null, None) => true,
            (ClassField::Value(v), Some(c)) => *v == c,
            _ => false,
        }
    }
}

/// One card record kept as an open field map; unrelated keys pass through.
#[derive(Debug, Clone, PartialEq)]
pub struct CardRecord {
    fields: Map<String, Value>,
}

impl CardRecord {
    pub fn parse(path: &Path, raw: &str) -> Result<Self, CardError> {
        let v: Value = serde_json::from_str(raw).map_err(|source| CardError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        match v {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(CardError::NotAnObject(path.to_path_buf())),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(|x| x.as_str())
    }

    pub fn class(&self) -> ClassField {
        match self.fields.get(CLASS_FIELD) {
            None => ClassField::Absent,
            Some(Value::Null) => ClassField::Null,
            Some(v) => match v.as_u64().and_then(|n| u32::try_from(n).ok()) {
                Some(n) => ClassField::Value(n),
                None => ClassField::Invalid(v.clone()),
            },
        }
    }

    pub fn skill_description(&self) -> Option<&str> {
        self.fields
            .get("skill")
            .and_then(|s| s.get("description"))
            .and_then(|d| d.as_str())
    }

    pub fn set_class(&mut self, class: Option<u32>) {
        let v = class.map(Value::from).unwrap_or(Value::Null);
        self.fields.insert(CLASS_FIELD.to_string(), v);
    }

    /// Drops the `class` key; returns whether there was one.
    pub fn remove_class(&mut self) -> bool {
        self.fields.remove(CLASS_FIELD).is_some()
    }

    /// Pretty-printed document with sorted keys and exactly one trailing newline.
    pub fn to_canonical(&self) -> Result<String, CardError> {
        let mut out = serde_json::to_string_pretty(&self.fields)?;
        out.push('\n');
        Ok(out)
    }
}
