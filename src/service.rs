//! Generic CRUD execution against MySQL.
//!
//! Each operation runs exactly one statement on a pooled connection. There is
//! no transaction discipline and no affected-row inspection: UPDATE/DELETE on
//! a missing id is indistinguishable from success, matching the contract.

use crate::error::AppError;
use crate::resource::Resource;
use crate::sql::{self, QueryBuf};
use serde_json::Value;
use sqlx::mysql::{MySql, MySqlArguments, MySqlRow};
use sqlx::query::Query;
use sqlx::MySqlPool;

pub struct CrudService;

impl CrudService {
    /// All rows, optionally filtered by `nome` substring. Natural table order.
    pub async fn list(
        pool: &MySqlPool,
        resource: &Resource,
        nome_filter: Option<&str>,
    ) -> Result<Vec<Value>, AppError> {
        let q = sql::select_list(resource, nome_filter);
        Self::query_many(pool, &q).await
    }

    /// Rows matching the primary key: zero or one element, never an error.
    pub async fn read_by_id(
        pool: &MySqlPool,
        resource: &Resource,
        id: i64,
    ) -> Result<Vec<Value>, AppError> {
        let q = sql::select_by_id(resource, id);
        Self::query_many(pool, &q).await
    }

    /// Insert one row; returns the database-assigned id.
    pub async fn create(
        pool: &MySqlPool,
        resource: &Resource,
        nome: Value,
        extra: Value,
    ) -> Result<u64, AppError> {
        let q = sql::insert(resource, nome, extra);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let result = Self::bind_all(sqlx::query(&q.sql), &q.params)
            .execute(pool)
            .await?;
        Ok(result.last_insert_id())
    }

    /// Replace both mutable columns. A zero-row match is not reported.
    pub async fn update(
        pool: &MySqlPool,
        resource: &Resource,
        id: i64,
        nome: Value,
        extra: Value,
    ) -> Result<(), AppError> {
        let q = sql::update(resource, id, nome, extra);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        Self::bind_all(sqlx::query(&q.sql), &q.params)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Remove by id. A zero-row match is not reported.
    pub async fn delete(pool: &MySqlPool, resource: &Resource, id: i64) -> Result<(), AppError> {
        let q = sql::delete(resource, id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        Self::bind_all(sqlx::query(&q.sql), &q.params)
            .execute(pool)
            .await?;
        Ok(())
    }

    async fn query_many(pool: &MySqlPool, q: &QueryBuf) -> Result<Vec<Value>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let rows = Self::bind_all(sqlx::query(&q.sql), &q.params)
            .fetch_all(pool)
            .await?;
        Ok(rows.iter().map(row_to_json).collect())
    }

    fn bind_all<'q>(
        mut query: Query<'q, MySql, MySqlArguments>,
        params: &'q [Value],
    ) -> Query<'q, MySql, MySqlArguments> {
        for p in params {
            query = bind_value(query, p);
        }
        query
    }
}

/// Bind one JSON value as the matching MySQL type. A missing body field
/// arrives here as Null and binds as SQL NULL.
fn bind_value<'q>(
    query: Query<'q, MySql, MySqlArguments>,
    v: &'q Value,
) -> Query<'q, MySql, MySqlArguments> {
    match v {
        Value::Null => query.bind(None::<String>),
        Value::Bool(b) => query.bind(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                query.bind(i)
            } else {
                query.bind(n.as_f64().unwrap_or(0.0))
            }
        }
        Value::String(s) => query.bind(s.as_str()),
        Value::Array(_) | Value::Object(_) => query.bind(v.to_string()),
    }
}

fn row_to_json(row: &MySqlRow) -> Value {
    use sqlx::Column;
    use sqlx::Row;
    let mut map = serde_json::Map::new();
    for col in row.columns() {
        let name = col.name();
        map.insert(name.to_string(), cell_to_value(row, name));
    }
    Value::Object(map)
}

fn cell_to_value(row: &MySqlRow, name: &str) -> Value {
    use sqlx::Row;
    if let Ok(Some(n)) = row.try_get::<Option<i16>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<i32>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<i64>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<u64>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<f64>, _>(name) {
        if let Some(n) = serde_json::Number::from_f64(n) {
            return Value::Number(n);
        }
    }
    if let Ok(Some(b)) = row.try_get::<Option<bool>, _>(name) {
        return Value::Bool(b);
    }
    if let Ok(Some(d)) = row.try_get::<Option<chrono::DateTime<chrono::Utc>>, _>(name) {
        return Value::String(d.to_rfc3339());
    }
    if let Ok(Some(d)) = row.try_get::<Option<chrono::NaiveDateTime>, _>(name) {
        return Value::String(d.format("%Y-%m-%dT%H:%M:%S%.f").to_string());
    }
    if let Ok(Some(s)) = row.try_get::<Option<String>, _>(name) {
        return Value::String(s);
    }
    Value::Null
}
