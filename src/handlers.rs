//! Resource CRUD handlers: list, read, create, update, delete.
//!
//! One generic handler per verb, resolved against the registry by path
//! segment. Response shapes follow the passthrough contract: reads return a
//! bare JSON array (empty on no match, still 200), writes return 200 with the
//! echoed input. Missing body fields bind as NULL rather than being rejected.

use crate::error::AppError;
use crate::resource::{ColumnKind, Resource};
use crate::response::{echo_record, id_record, rows_ok};
use crate::service::CrudService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use utoipa::ToSchema;

/// Request body for create/update. The second field depends on the resource:
/// `idade` for usuarios/users, `rm` for alunos. Unknown keys are ignored.
#[derive(Deserialize, ToSchema)]
pub struct RecordInput {
    pub nome: Option<String>,
    pub idade: Option<i64>,
    pub rm: Option<i64>,
}

fn resolve<'a>(state: &'a AppState, segment: &str) -> Result<&'a Resource, AppError> {
    state
        .registry
        .by_path(segment)
        .ok_or_else(|| AppError::UnknownResource(segment.to_string()))
}

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id: {}", id_str)))
}

/// Pull `nome` and the resource's second column out of the body. Anything
/// absent becomes Null, which the service binds as SQL NULL.
fn body_fields(resource: &Resource, body: Value) -> Result<(Value, Value), AppError> {
    let Value::Object(map) = body else {
        return Err(AppError::BadRequest("body must be a JSON object".into()));
    };
    let nome = map.get("nome").cloned().unwrap_or(Value::Null);
    let extra = map.get(resource.extra_column).cloned().unwrap_or(Value::Null);
    Ok((nome, coerce_extra(resource.extra_kind, extra)))
}

/// Form clients send numeric fields as strings; an integer-kind column gets
/// the parsed number so the echo matches what the database stores. Anything
/// that does not parse still passes through for the database to judge.
fn coerce_extra(kind: ColumnKind, value: Value) -> Value {
    if kind == ColumnKind::Integer {
        if let Value::String(s) = &value {
            if let Ok(n) = s.trim().parse::<i64>() {
                return Value::Number(n.into());
            }
        }
    }
    value
}

#[utoipa::path(
    get,
    path = "/{resource}",
    params(
        ("resource" = String, Path, description = "usuarios, users or alunos"),
        ("nome" = Option<String>, Query, description = "substring filter on nome")
    ),
    responses(
        (status = 200, description = "All matching records as a JSON array"),
        (status = 500, description = "Database failure")
    )
)]
pub async fn list(
    State(state): State<AppState>,
    Path(segment): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let resource = resolve(&state, &segment)?;
    let nome_filter = params.get("nome").map(|s| s.as_str()).filter(|s| !s.is_empty());
    let rows = CrudService::list(&state.pool, resource, nome_filter).await?;
    Ok(rows_ok(rows))
}

#[utoipa::path(
    get,
    path = "/{resource}/{id}",
    params(
        ("resource" = String, Path, description = "usuarios, users or alunos"),
        ("id" = i64, Path, description = "record id")
    ),
    responses(
        (status = 200, description = "Array with 0 or 1 records; a missing id is an empty array, not 404"),
        (status = 400, description = "Non-numeric id"),
        (status = 500, description = "Database failure")
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path((segment, id_str)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let resource = resolve(&state, &segment)?;
    let id = parse_id(&id_str)?;
    let rows = CrudService::read_by_id(&state.pool, resource, id).await?;
    Ok(rows_ok(rows))
}

#[utoipa::path(
    post,
    path = "/{resource}",
    params(("resource" = String, Path, description = "usuarios, users or alunos")),
    request_body = RecordInput,
    responses(
        (status = 200, description = "New id plus echoed fields"),
        (status = 500, description = "Database failure")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Path(segment): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let resource = resolve(&state, &segment)?;
    let (nome, extra) = body_fields(resource, body)?;
    let id = CrudService::create(&state.pool, resource, nome.clone(), extra.clone()).await?;
    Ok(Json(echo_record(resource, id, nome, extra)))
}

#[utoipa::path(
    put,
    path = "/{resource}/{id}",
    params(
        ("resource" = String, Path, description = "usuarios, users or alunos"),
        ("id" = i64, Path, description = "record id")
    ),
    request_body = RecordInput,
    responses(
        (status = 200, description = "Echoed fields, whether or not a row matched"),
        (status = 400, description = "Non-numeric id"),
        (status = 500, description = "Database failure")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path((segment, id_str)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let resource = resolve(&state, &segment)?;
    let id = parse_id(&id_str)?;
    let (nome, extra) = body_fields(resource, body)?;
    CrudService::update(&state.pool, resource, id, nome.clone(), extra.clone()).await?;
    Ok(Json(echo_record(resource, id, nome, extra)))
}

#[utoipa::path(
    delete,
    path = "/{resource}/{id}",
    params(
        ("resource" = String, Path, description = "usuarios, users or alunos"),
        ("id" = i64, Path, description = "record id")
    ),
    responses(
        (status = 200, description = "The id, whether or not a row was removed"),
        (status = 400, description = "Non-numeric id"),
        (status = 500, description = "Database failure")
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path((segment, id_str)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let resource = resolve(&state, &segment)?;
    let id = parse_id(&id_str)?;
    CrudService::delete(&state.pool, resource, id).await?;
    Ok(Json(id_record(id)))
}
