use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use cpf_validator::build_router;
use cpf_validator::config::ServerConfig;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn router_with_prefix(prefix: &str) -> Router {
    let config = ServerConfig {
        route_prefix: prefix.to_string(),
        ..ServerConfig::default()
    };
    build_router(&config)
}

async fn send(router: Router, method: Method, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_get_valid_cpf_returns_200() {
    let (status, body) = send(
        router_with_prefix(""),
        Method::GET,
        "/validate-cpf?cpf=52998224725",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"message":"CPF is valid.","cpf":"52998224725"}"#);
}

#[tokio::test]
async fn test_missing_cpf_returns_400() {
    let (status, body) = send(router_with_prefix(""), Method::GET, "/validate-cpf").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"message":"Invalid CPF format or CPF not provided."}"#);
}

#[tokio::test]
async fn test_malformed_cpf_returns_400() {
    for uri in [
        "/validate-cpf?cpf=abc",
        "/validate-cpf?cpf=52998224726",
        "/validate-cpf?cpf=123",
        "/validate-cpf?cpf=",
    ] {
        let (status, body) = send(router_with_prefix(""), Method::GET, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);

        let body: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body, json!({ "message": "Invalid CPF format or CPF not provided." }));
    }
}

#[tokio::test]
async fn test_formatted_cpf_is_echoed_unnormalized() {
    let (status, body) = send(
        router_with_prefix(""),
        Method::GET,
        "/validate-cpf?cpf=529.982.247-25",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["cpf"], "529.982.247-25");
}

#[tokio::test]
async fn test_cpf_found_by_key_among_other_params() {
    let (status, body) = send(
        router_with_prefix(""),
        Method::GET,
        "/validate-cpf?mycpf=1&cpf=52998224725&trace=on",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["cpf"], "52998224725");
}

#[tokio::test]
async fn test_percent_encoded_cpf_is_decoded() {
    let (status, body) = send(
        router_with_prefix(""),
        Method::GET,
        "/validate-cpf?cpf=529%2E982%2E247%2D25",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["cpf"], "529.982.247-25");
}

#[tokio::test]
async fn test_post_reads_query_string() {
    let (status, _) = send(
        router_with_prefix(""),
        Method::POST,
        "/validate-cpf?cpf=52998224725",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(router_with_prefix(""), Method::POST, "/validate-cpf").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_other_methods_are_not_allowed() {
    let (status, _) = send(
        router_with_prefix(""),
        Method::DELETE,
        "/validate-cpf?cpf=52998224725",
    )
    .await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_route_prefix_moves_endpoint() {
    let (status, _) = send(
        router_with_prefix("api"),
        Method::GET,
        "/api/validate-cpf?cpf=52998224725",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        router_with_prefix("api"),
        Method::GET,
        "/validate-cpf?cpf=52998224725",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = send(router_with_prefix(""), Method::GET, "/health").await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_accepted_prefixes_build_working_routes() {
    use cpf_validator::utils::validation::validate_route_prefix;

    for (prefix, path) in [
        ("", "/validate-cpf"),
        ("api", "/api/validate-cpf"),
        ("/api/v1/", "/api/v1/validate-cpf"),
        ("v1.0-beta_2", "/v1.0-beta_2/validate-cpf"),
    ] {
        validate_route_prefix("server.route_prefix", prefix).unwrap();

        let uri = format!("{}?cpf=52998224725", path);
        let (status, _) = send(router_with_prefix(prefix), Method::GET, &uri).await;
        assert_eq!(status, StatusCode::OK, "{:?}", prefix);
    }
}
