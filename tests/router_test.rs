use resource_api::api::{ApiRequest, ResourceRouter, RouteHandler};
use resource_api::framework::mock::MockClient;
use resource_api::framework::FrameworkError;
use resource_api::model::{Product, ProductFilter, User};
use resource_api::product_actor::ProductError;
use serde_json::json;

#[tokio::test]
async fn test_router_serves_its_collection() {
    let mock = MockClient::<User>::new();
    let router = ResourceRouter::new(mock.client());
    assert_eq!(router.collection(), "users");

    let mock = MockClient::<Product>::new();
    let router = ResourceRouter::new(mock.client());
    assert_eq!(router.collection(), "products");
}

#[tokio::test]
async fn test_get_by_id_uses_client() {
    let mut mock = MockClient::<User>::new();
    mock.expect_get(5)
        .return_ok(Some(User::new(5, "Eve", "eve@example.com")));
    let router = ResourceRouter::new(mock.client());

    let request = ApiRequest::new("GET", "/users/5").with_path_param("id", "5");
    let response = router.handle(&request).await;
    assert_eq!(response.status_code, 200);
    assert_eq!(
        response.json().unwrap(),
        json!({"success": true, "data": {"id": 5, "name": "Eve", "email": "eve@example.com"}})
    );
    mock.verify();
}

#[tokio::test]
async fn test_id_falls_back_to_path_segment() {
    let mut mock = MockClient::<User>::new();
    mock.expect_delete(3).return_ok(());
    let router = ResourceRouter::new(mock.client());

    let response = router.handle(&ApiRequest::new("DELETE", "/users/3")).await;
    assert_eq!(response.status_code, 200);
    mock.verify();
}

#[tokio::test]
async fn test_rejected_requests_never_reach_the_actor() {
    // No expectations: any client call would panic the mock and surface as a 500.
    let mock = MockClient::<User>::new();
    let router = ResourceRouter::new(mock.client());

    let cases = [
        (ApiRequest::new("PATCH", "/users/1"), 405),
        (ApiRequest::new("GET", "/users/one"), 400),
        (ApiRequest::new("PUT", "/users"), 400),
        (ApiRequest::new("POST", "/users").with_body("{"), 400),
    ];
    for (request, status) in cases {
        let response = router.handle(&request).await;
        assert_eq!(response.status_code, status, "{} {}", request.http_method, request.path);
    }
    mock.verify();
}

#[tokio::test]
async fn test_unavailable_actor_is_internal_error() {
    let mut mock = MockClient::<Product>::new();
    mock.expect_list().return_err(FrameworkError::ActorClosed);
    let router = ResourceRouter::new(mock.client());

    let response = router.handle(&ApiRequest::new("GET", "/products")).await;
    assert_eq!(response.status_code, 500);
    assert_eq!(
        response.json().unwrap(),
        json!({"success": false, "error": "Internal server error"})
    );
    assert_eq!(response.headers["Access-Control-Allow-Origin"], "*");
}

#[tokio::test]
async fn test_validation_error_message_is_passed_through() {
    let mut mock = MockClient::<Product>::new();
    mock.expect_create().return_err(FrameworkError::EntityError(Box::new(
        ProductError::MissingNameOrPrice,
    )));
    let router = ResourceRouter::new(mock.client());

    let request = ApiRequest::new("POST", "/products").with_body(r#"{"name":"Pen"}"#);
    let response = router.handle(&request).await;
    assert_eq!(response.status_code, 400);
    assert_eq!(
        response.json().unwrap()["error"],
        "Name and valid price are required"
    );
    mock.verify();
}

#[tokio::test]
async fn test_list_payload_echoes_filter() {
    let mut mock = MockClient::<Product>::new();
    mock.expect_list().return_ok(vec![Product::new(
        3,
        "Coffee Mug",
        "Ceramic mug",
        15.99,
        "Home",
    )]);
    let router = ResourceRouter::new(mock.client());

    let request = ApiRequest::new("GET", "/products").with_query_param("category", "Home");
    let data = router.route(&request).await.unwrap();
    assert_eq!(data["total"], 1);
    assert_eq!(data["category"], "Home");
    assert_eq!(data["products"][0]["id"], 3);
    mock.verify();

    let filter = ProductFilter {
        category: "Home".to_string(),
    };
    assert_eq!(serde_json::to_value(&filter).unwrap(), json!({"category": "Home"}));
}

#[tokio::test]
async fn test_update_not_found() {
    let mut mock = MockClient::<Product>::new();
    mock.expect_update(8).return_err(FrameworkError::NotFound(8));
    let router = ResourceRouter::new(mock.client());

    let request = ApiRequest::new("PUT", "/products/8")
        .with_path_param("id", "8")
        .with_body(r#"{"price": 3}"#);
    let response = router.handle(&request).await;
    assert_eq!(response.status_code, 404);
    assert_eq!(response.json().unwrap()["error"], "Product not found");
    mock.verify();
}
