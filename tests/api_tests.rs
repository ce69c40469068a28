use axum::http::StatusCode;
use axum::{body::Body, http::Request, routing::get, Json, Router};
use serde_json::{json, Value};
use tower::ServiceExt;

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "gestao-frota");
}

#[tokio::test]
async fn test_rota_desconhecida_devolve_404() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/rota-que-nao-existe")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_metodo_nao_permitido_devolve_405() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// App de teste com o mesmo shape do health check real; os fluxos que
// dependem do banco são cobertos pelos testes de unidade dos serviços
fn create_test_app() -> Router {
    Router::new().route(
        "/health",
        get(|| async {
            Json(json!({
                "status": "ok",
                "service": "gestao-frota",
            }))
        }),
    )
}
