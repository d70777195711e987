//! API client for the Haven Communities backend.
//!
//! This module provides the `ApiClient` struct for the public catalog and
//! lead-capture endpoints and the bearer-authenticated admin endpoints.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::auth::TokenStore;
use crate::models::{
    BlogPost, BlogPostInput, BrochureRequest, Contact, ContactForm, ContactStatus,
    ContactSubmission, ListResponse, LoginRequest, LoginResponse, MessageResponse,
    NewsletterSubscriber, Property, PropertyInput, TokenVerification,
};

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// HTTP request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Subscribe payload for `POST /api/newsletter/subscribe`.
#[derive(Serialize)]
struct SubscribeRequest<'a> {
    email: &'a str,
}

/// Status-change payload for `PUT /api/admin/contact/{id}`.
#[derive(Serialize)]
struct StatusUpdate {
    status: ContactStatus,
}

/// API client for the Haven Communities backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    store: Arc<TokenStore>,
}

impl ApiClient {
    /// Create a new API client against the given base URL. The token store
    /// is read (never written, except for the 401 clear) to attach bearer
    /// headers to admin requests.
    pub fn new(base_url: impl Into<String>, store: Arc<TokenStore>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self {
            client,
            base_url,
            store,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.client.request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = self.store.get_token() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Check if a response is successful, mapping failures to `ApiError`.
    /// A 401 from any endpoint clears the stored token before surfacing.
    async fn check_response(
        &self,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if status == StatusCode::UNAUTHORIZED {
            debug!("Received 401, clearing stored token");
            self.store.clear();
        }
        Err(ApiError::from_status(status, &body))
    }

    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = builder.send().await?;
        let response = self.check_response(response).await?;
        Self::parse(response).await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        self.send(self.request(Method::GET, path).query(query)).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(self.request(Method::PUT, path).json(body)).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.request(Method::DELETE, path)).await
    }

    /// Fetch a text body (CSV exports).
    async fn get_text(&self, path: &str) -> Result<String, ApiError> {
        let response = self.request(Method::GET, path).send().await?;
        let response = self.check_response(response).await?;
        Ok(response.text().await?)
    }

    // ===== Authentication =====

    /// Admin login with email and password.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post("/api/admin/login", &body).await
    }

    /// Verify the stored token with the backend.
    pub async fn verify_token(&self) -> Result<TokenVerification, ApiError> {
        self.send(self.request(Method::POST, "/api/admin/verify-token"))
            .await
    }

    /// Admin logout. The response body is ignored.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let response = self.request(Method::POST, "/api/admin/logout").send().await?;
        self.check_response(response).await?;
        Ok(())
    }

    // ===== Properties (public) =====

    pub async fn properties(&self, page: u32, limit: u32) -> Result<ListResponse<Property>, ApiError> {
        let query = [("page", page.to_string()), ("limit", limit.to_string())];
        self.get("/api/properties", &query).await
    }

    pub async fn property_by_slug(&self, slug: &str) -> Result<Property, ApiError> {
        self.get(&format!("/api/properties/{}", slug), &[]).await
    }

    // ===== Properties (admin) =====

    pub async fn admin_properties(
        &self,
        page: u32,
        limit: u32,
        search: Option<&str>,
    ) -> Result<ListResponse<Property>, ApiError> {
        let mut query = vec![("page", page.to_string()), ("limit", limit.to_string())];
        if let Some(search) = search {
            query.push(("search", search.to_string()));
        }
        self.get("/api/admin/properties", &query).await
    }

    pub async fn admin_property(&self, id: &str) -> Result<Property, ApiError> {
        self.get(&format!("/api/admin/properties/{}", id), &[]).await
    }

    pub async fn create_property(&self, input: &PropertyInput) -> Result<Property, ApiError> {
        self.post("/api/admin/properties", input).await
    }

    pub async fn update_property(
        &self,
        id: &str,
        input: &PropertyInput,
    ) -> Result<Property, ApiError> {
        self.put(&format!("/api/admin/properties/{}", id), input).await
    }

    pub async fn delete_property(&self, id: &str) -> Result<MessageResponse, ApiError> {
        self.delete(&format!("/api/admin/properties/{}", id)).await
    }

    // ===== Blog (public) =====

    /// Fetch published posts, optionally filtered by category.
    pub async fn blog_posts(
        &self,
        page: u32,
        limit: u32,
        category: Option<&str>,
    ) -> Result<ListResponse<BlogPost>, ApiError> {
        let mut query = vec![
            ("page", page.to_string()),
            ("limit", limit.to_string()),
            ("status", "published".to_string()),
        ];
        if let Some(category) = category {
            query.push(("category", category.to_string()));
        }
        self.get("/api/blog", &query).await
    }

    pub async fn blog_post_by_slug(&self, slug: &str) -> Result<BlogPost, ApiError> {
        self.get(&format!("/api/blog/{}", slug), &[]).await
    }

    // ===== Blog (admin) =====

    pub async fn admin_blog_posts(
        &self,
        page: u32,
        limit: u32,
        search: Option<&str>,
        status: Option<&str>,
    ) -> Result<ListResponse<BlogPost>, ApiError> {
        let mut query = vec![("page", page.to_string()), ("limit", limit.to_string())];
        if let Some(search) = search {
            query.push(("search", search.to_string()));
        }
        if let Some(status) = status {
            query.push(("status", status.to_string()));
        }
        self.get("/api/admin/blog", &query).await
    }

    pub async fn admin_blog_post(&self, id: &str) -> Result<BlogPost, ApiError> {
        self.get(&format!("/api/admin/blog/{}", id), &[]).await
    }

    pub async fn create_blog_post(&self, input: &BlogPostInput) -> Result<BlogPost, ApiError> {
        self.post("/api/admin/blog", input).await
    }

    pub async fn update_blog_post(
        &self,
        id: &str,
        input: &BlogPostInput,
    ) -> Result<BlogPost, ApiError> {
        self.put(&format!("/api/admin/blog/{}", id), input).await
    }

    pub async fn delete_blog_post(&self, id: &str) -> Result<MessageResponse, ApiError> {
        self.delete(&format!("/api/admin/blog/{}", id)).await
    }

    // ===== Contact =====

    /// Submit the public contact form. Rate limited on the backend.
    pub async fn submit_contact(&self, form: &ContactForm) -> Result<MessageResponse, ApiError> {
        let submission = ContactSubmission::from(form);
        self.post("/api/contact", &submission).await
    }

    pub async fn contacts(
        &self,
        page: u32,
        limit: u32,
        status: Option<&str>,
    ) -> Result<ListResponse<Contact>, ApiError> {
        let mut query = vec![("page", page.to_string()), ("limit", limit.to_string())];
        if let Some(status) = status {
            query.push(("status", status.to_string()));
        }
        self.get("/api/admin/contact", &query).await
    }

    pub async fn update_contact_status(
        &self,
        id: &str,
        status: ContactStatus,
    ) -> Result<MessageResponse, ApiError> {
        self.put(&format!("/api/admin/contact/{}", id), &StatusUpdate { status })
            .await
    }

    pub async fn delete_contact(&self, id: &str) -> Result<MessageResponse, ApiError> {
        self.delete(&format!("/api/admin/contact/{}", id)).await
    }

    pub async fn export_contacts_csv(&self) -> Result<String, ApiError> {
        self.get_text("/api/admin/contact/export/csv").await
    }

    // ===== Newsletter =====

    /// Subscribe an email address. Rate limited on the backend.
    pub async fn subscribe_newsletter(&self, email: &str) -> Result<MessageResponse, ApiError> {
        self.post("/api/newsletter/subscribe", &SubscribeRequest { email })
            .await
    }

    pub async fn subscribers(
        &self,
        page: u32,
        limit: u32,
        search: Option<&str>,
    ) -> Result<ListResponse<NewsletterSubscriber>, ApiError> {
        let mut query = vec![("page", page.to_string()), ("limit", limit.to_string())];
        if let Some(search) = search {
            query.push(("search", search.to_string()));
        }
        self.get("/api/admin/newsletter", &query).await
    }

    pub async fn delete_subscriber(&self, id: &str) -> Result<MessageResponse, ApiError> {
        self.delete(&format!("/api/admin/newsletter/{}", id)).await
    }

    pub async fn export_newsletter_csv(&self) -> Result<String, ApiError> {
        self.get_text("/api/admin/newsletter/export/csv").await
    }

    // ===== Brochure =====

    pub async fn request_brochure(
        &self,
        request: &BrochureRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.post("/api/brochure/request", request).await
    }
}
