use serde_json::{Map, Value};

use crate::error::AppError;

/// A single stored JSON object. Keys keep insertion order.
pub type Record = Map<String, Value>;

/// Describes one collection-backed resource: where its records live and
/// which body fields it keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSpec {
    /// Collection name inside the document store.
    pub collection: &'static str,
    /// Recognized body fields, in the order they are written to a record.
    pub fields: &'static [&'static str],
}

/// Login attempts posted by the admin and client apps.
pub const AUTHORIZATION: ResourceSpec = ResourceSpec {
    collection: "authorization",
    fields: &["email", "password", "app"],
};

/// Pizza orders.
pub const ORDERS: ResourceSpec = ResourceSpec {
    collection: "orders",
    fields: &[
        "name",
        "address",
        "card_number",
        "payment",
        "size",
        "dough",
        "sauces",
        "ingredients",
        "price",
    ],
};

/// Collections every fresh store starts with.
pub const DEFAULT_COLLECTIONS: [&str; 2] = [AUTHORIZATION.collection, ORDERS.collection];

impl ResourceSpec {
    /// Build a new record from a generated id and a request payload.
    ///
    /// Only recognized fields are copied; unknown keys (including a
    /// caller-supplied `id`) are dropped and missing keys stay absent.
    /// Arrays carry no fields. Top-level `null`, strings, numbers and booleans
    /// are not record bodies and are rejected.
    pub fn assemble(&self, id: String, payload: &Value) -> Result<Record, AppError> {
        let mut record = Record::new();
        record.insert("id".to_string(), Value::String(id));

        let body = match payload {
            Value::Object(body) => body,
            Value::Array(_) => return Ok(record),
            other => {
                return Err(AppError::InvalidPayload(format!(
                    "cannot read {} fields from {}",
                    self.collection,
                    json_type(other)
                )));
            }
        };

        for field in self.fields {
            if let Some(value) = body.get(*field) {
                record.insert((*field).to_string(), value.clone());
            }
        }

        Ok(record)
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse a raw request body. An empty (or whitespace-only) body reads as `{}`.
pub fn parse_payload(body: &[u8]) -> Result<Value, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    Ok(serde_json::from_slice(body)?)
}
