//! Interactive API documentation: OpenAPI document plus a Swagger UI shell.

use axum::response::Html;
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "API de CRUD de usuarios",
        description = "API para criar, ler, atualizar e deletar usuarios, users e alunos"
    ),
    paths(
        crate::handlers::list,
        crate::handlers::read,
        crate::handlers::create,
        crate::handlers::update,
        crate::handlers::delete,
    ),
    components(schemas(crate::handlers::RecordInput))
)]
pub struct ApiDoc;

const SWAGGER_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>API de CRUD de usuarios</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {
      SwaggerUIBundle({ url: "/docs/openapi.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

pub async fn swagger_page() -> Html<&'static str> {
    Html(SWAGGER_PAGE)
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
