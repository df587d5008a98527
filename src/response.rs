//! Response shaping for the passthrough contract.
//!
//! Reads return bare arrays; writes return 200 with an echo of the input.
//! There is no envelope and no 201/204: every success is a plain 200.

use crate::resource::Resource;
use axum::{http::StatusCode, Json};
use serde_json::Value;

/// 200 + bare JSON array. An empty result set is still a 200.
pub fn rows_ok(rows: Vec<Value>) -> (StatusCode, Json<Vec<Value>>) {
    (StatusCode::OK, Json(rows))
}

/// `{id, nome, <extra_column>}` echoing the request fields, with the second
/// key named after the resource variant. The id is generic so the create
/// path's u64 `last_insert_id` keeps full precision.
pub fn echo_record(resource: &Resource, id: impl Into<Value>, nome: Value, extra: Value) -> Value {
    let mut map = serde_json::Map::new();
    map.insert("id".into(), id.into());
    map.insert("nome".into(), nome);
    map.insert(resource.extra_column.to_string(), extra);
    Value::Object(map)
}

/// `{id}` for deletes.
pub fn id_record(id: i64) -> Value {
    serde_json::json!({ "id": id })
}
