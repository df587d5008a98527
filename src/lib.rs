//! cadastro-api: passthrough CRUD backend for usuarios/users/alunos.

pub mod config;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod resource;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;

pub use config::AppConfig;
pub use error::AppError;
pub use resource::{ColumnKind, Resource, ResourceRegistry};
pub use routes::{app, common_routes, docs_routes, resource_routes};
pub use service::CrudService;
pub use state::AppState;
