use axum::response::Html;
use axum::Json;
use serde_json::Value;

use crate::api::openapi::openapi_document;

const SWAGGER_UI: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Diabetes Prediction API - Docs</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.ui = SwaggerUIBundle({ url: "/openapi.json", dom_id: "#swagger-ui" });
  </script>
</body>
</html>
"##;

/// GET /openapi.json
pub async fn openapi() -> Json<Value> {
    Json(openapi_document())
}

/// GET /docs. Interactive explorer over `/openapi.json`.
pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI)
}
