//! Safe SQL builder: identifiers from the registry only, values as parameters.
//!
//! Every statement is one of five fixed templates with MySQL `?` placeholders.
//! The `nome` filter pattern (`%substring%`) is bound, never interpolated.

use crate::resource::Resource;
use serde_json::Value;

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<Value>,
}

impl QueryBuf {
    fn new(sql: String) -> Self {
        QueryBuf {
            sql,
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: Value) {
        self.params.push(v);
    }
}

/// Quote identifier for MySQL (identifiers only come from the registry, the
/// quoting guards against reserved words like `users`).
fn quoted(s: &str) -> String {
    format!("`{}`", s.replace('`', "``"))
}

fn column_list(resource: &Resource) -> String {
    resource
        .columns()
        .iter()
        .map(|c| quoted(c))
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT all rows, optionally filtered by `nome LIKE %<filter>%`.
/// No ORDER BY: the contract exposes natural table order.
pub fn select_list(resource: &Resource, nome_filter: Option<&str>) -> QueryBuf {
    let mut q = QueryBuf::new(format!(
        "SELECT {} FROM {}",
        column_list(resource),
        quoted(resource.table_name)
    ));
    if let Some(nome) = nome_filter {
        q.sql.push_str(" WHERE `nome` LIKE ?");
        q.push_param(Value::String(format!("%{}%", nome)));
    }
    q
}

/// SELECT by primary key. Caller binds id as the sole param.
pub fn select_by_id(resource: &Resource, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new(format!(
        "SELECT {} FROM {} WHERE `id` = ?",
        column_list(resource),
        quoted(resource.table_name)
    ));
    q.push_param(Value::Number(id.into()));
    q
}

/// INSERT one row; `id` is assigned by the database.
pub fn insert(resource: &Resource, nome: Value, extra: Value) -> QueryBuf {
    let mut q = QueryBuf::new(format!(
        "INSERT INTO {} (`nome`, {}) VALUES (?, ?)",
        quoted(resource.table_name),
        quoted(resource.extra_column)
    ));
    q.push_param(nome);
    q.push_param(extra);
    q
}

/// UPDATE by id: both mutable columns are always replaced.
pub fn update(resource: &Resource, id: i64, nome: Value, extra: Value) -> QueryBuf {
    let mut q = QueryBuf::new(format!(
        "UPDATE {} SET `nome` = ?, {} = ? WHERE `id` = ?",
        quoted(resource.table_name),
        quoted(resource.extra_column)
    ));
    q.push_param(nome);
    q.push_param(extra);
    q.push_param(Value::Number(id.into()));
    q
}

/// DELETE by id.
pub fn delete(resource: &Resource, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new(format!(
        "DELETE FROM {} WHERE `id` = ?",
        quoted(resource.table_name)
    ));
    q.push_param(Value::Number(id.into()));
    q
}
