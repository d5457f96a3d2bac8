//! [`Record`] support for raw `serde_json` objects.
//!
//! Lets a view run over a decoded payload without first mapping it onto a
//! typed struct.

use crate::traits::Record;
use crate::value::{Number, Value};

impl Record for serde_json::Value {
    fn field(&self, name: &str) -> Value<'_> {
        match self.get(name) {
            Some(serde_json::Value::String(s)) => Value::String(s),
            Some(serde_json::Value::Bool(b)) => Value::Bool(*b),
            Some(serde_json::Value::Number(n)) => json_number(n),
            _ => Value::None,
        }
    }
}

impl Record for serde_json::Map<String, serde_json::Value> {
    fn field(&self, name: &str) -> Value<'_> {
        match self.get(name) {
            Some(serde_json::Value::String(s)) => Value::String(s),
            Some(serde_json::Value::Bool(b)) => Value::Bool(*b),
            Some(serde_json::Value::Number(n)) => json_number(n),
            _ => Value::None,
        }
    }
}

fn json_number(n: &serde_json::Number) -> Value<'_> {
    if let Some(i) = n.as_i64() {
        Value::Number(Number::I64(i))
    } else if let Some(u) = n.as_u64() {
        Value::Number(Number::U64(u))
    } else {
        n.as_f64()
            .map_or(Value::None, |f| Value::Number(Number::F64(f)))
    }
}
