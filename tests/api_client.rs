//! API client behavior against a mock backend: bearer-header attachment,
//! the 401 token-clear convention, payload shapes, and error mapping.

use std::sync::Arc;

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use haven_console::api::{ApiClient, ApiError};
use haven_console::auth::TokenStore;
use haven_console::models::{ContactForm, ContactStatus, PropertyStatus};

fn client(base_url: &str) -> (ApiClient, Arc<TokenStore>, TempDir) {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(TokenStore::new(dir.path()));
    let api = ApiClient::new(base_url, store.clone()).unwrap();
    (api, store, dir)
}

fn empty_list() -> serde_json::Value {
    json!({"data": [], "total": 0, "page": 1, "limit": 50})
}

#[tokio::test]
async fn attaches_bearer_header_from_store() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/blog"))
        .and(header("authorization", "Bearer tok-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_list()))
        .expect(1)
        .mount(&server)
        .await;

    let (api, store, _dir) = client(&server.uri());
    store.set_token("tok-9", 3600);

    api.admin_blog_posts(1, 100, None, None)
        .await
        .expect("request should succeed");
}

#[tokio::test]
async fn unauthorized_clears_stored_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/contact"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "Unauthorized",
            "message": "Invalid or expired token",
            "code": 401
        })))
        .mount(&server)
        .await;

    let (api, store, _dir) = client(&server.uri());
    store.set_token("tok-stale", 3600);

    let err = api.contacts(1, 50, None).await.expect_err("should be rejected");
    assert!(matches!(err, ApiError::Unauthorized));
    assert!(store.raw_token().is_none(), "401 must clear the stored token");
}

#[tokio::test]
async fn parses_property_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/properties"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": "p-1",
                "title": "Haven Gardens Phase 2",
                "slug": "haven-gardens-phase-2",
                "description": "Serviced plots",
                "location": "Epe, Lagos",
                "imageUrl": "https://cdn.haven.test/p-1.jpg",
                "price": 12500000,
                "status": "available",
                "units": 120,
                "acres": 15.5,
                "completionDate": "2027-06-01"
            }],
            "total": 1,
            "page": 1,
            "limit": 50
        })))
        .mount(&server)
        .await;

    let (api, _store, _dir) = client(&server.uri());
    let listing = api.properties(1, 50).await.expect("listing should parse");

    assert_eq!(listing.total, 1);
    assert_eq!(listing.data[0].status, PropertyStatus::Available);
    assert_eq!(listing.data[0].slug, "haven-gardens-phase-2");
}

#[tokio::test]
async fn contact_submission_collapses_name_and_tags_source() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .and(body_json(json!({
            "name": "Ada Obi",
            "email": "ada@example.com",
            "phone": "+2348012345678",
            "message": "I would like to inspect Haven Gardens.",
            "subject": "Contact Form Inquiry",
            "source": "contact-form"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Contact form submitted successfully"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (api, _store, _dir) = client(&server.uri());
    let form = ContactForm {
        first_name: "Ada".to_string(),
        last_name: "Obi".to_string(),
        email: "ada@example.com".to_string(),
        phone: "+2348012345678".to_string(),
        description: "I would like to inspect Haven Gardens.".to_string(),
    };

    let response = api.submit_contact(&form).await.expect("submit should succeed");
    assert!(response.success);
}

#[tokio::test]
async fn subscribe_sends_email_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/newsletter/subscribe"))
        .and(body_json(json!({"email": "ada@example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let (api, _store, _dir) = client(&server.uri());
    api.subscribe_newsletter("ada@example.com")
        .await
        .expect("subscribe should succeed");
}

#[tokio::test]
async fn contact_status_update_sends_status_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/admin/contact/c-1"))
        .and(body_json(json!({"status": "resolved"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let (api, store, _dir) = client(&server.uri());
    store.set_token("tok-9", 3600);

    api.update_contact_status("c-1", ContactStatus::Resolved)
        .await
        .expect("update should succeed");
}

#[tokio::test]
async fn error_body_message_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/admin/properties/p-404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "Not Found",
            "message": "Property not found",
            "code": 404
        })))
        .mount(&server)
        .await;

    let (api, _store, _dir) = client(&server.uri());
    let err = api.delete_property("p-404").await.expect_err("should be rejected");

    match err {
        ApiError::NotFound(message) => assert_eq!(message, "Property not found"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn rate_limited_requests_are_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/properties"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&server)
        .await;

    let (api, _store, _dir) = client(&server.uri());
    let err = api.properties(1, 50).await.expect_err("should be rejected");
    assert!(matches!(err, ApiError::RateLimited));
}

#[tokio::test]
async fn csv_export_returns_raw_body() {
    let server = MockServer::start().await;
    let csv = "id,email\n1,ada@example.com\n";
    Mock::given(method("GET"))
        .and(path("/api/admin/newsletter/export/csv"))
        .and(header("authorization", "Bearer tok-9"))
        .respond_with(ResponseTemplate::new(200).set_body_string(csv))
        .mount(&server)
        .await;

    let (api, store, _dir) = client(&server.uri());
    store.set_token("tok-9", 3600);

    let body = api.export_newsletter_csv().await.expect("export should succeed");
    assert_eq!(body, csv);
}

#[tokio::test]
async fn brochure_request_sends_property_name() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/brochure/request"))
        .and(body_json(json!({
            "email": "ada@example.com",
            "propertyName": "Haven Gardens Phase 2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let (api, _store, _dir) = client(&server.uri());
    let request = haven_console::models::BrochureRequest {
        email: "ada@example.com".to_string(),
        property_name: "Haven Gardens Phase 2".to_string(),
    };
    api.request_brochure(&request).await.expect("request should succeed");
}
