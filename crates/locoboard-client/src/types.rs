use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Response body of `POST /api/location/add`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddLocationResponse {
    #[serde(default, deserialize_with = "truthy")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// JavaScript-style truthiness: `false`, `0`, `""` and `null` are falsy.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}
