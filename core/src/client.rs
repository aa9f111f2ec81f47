//! Stateless HTTP request builder and response parser for the board API.
//!
//! # Design
//! `ApiClient` holds only a `base_url` and carries no mutable state between
//! calls. Each remote operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The repository executes the round-trip in between.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreatePost, Post, User};

/// Synchronous, stateless client for the `/users` and `/posts` resources.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_users(&self) -> HttpRequest {
        self.bare(HttpMethod::Get, "/users".to_string())
    }

    pub fn build_update_user(&self, user: &User) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Put, format!("/users/{}", user.id), user)
    }

    pub fn build_delete_user(&self, id: u64) -> HttpRequest {
        self.bare(HttpMethod::Delete, format!("/users/{id}"))
    }

    pub fn build_list_posts(&self) -> HttpRequest {
        self.bare(HttpMethod::Get, "/posts".to_string())
    }

    pub fn build_create_post(&self, input: &CreatePost) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Post, "/posts".to_string(), input)
    }

    pub fn build_delete_post(&self, id: u64) -> HttpRequest {
        self.bare(HttpMethod::Delete, format!("/posts/{id}"))
    }

    pub fn parse_list_users(&self, response: HttpResponse) -> Result<Vec<User>, ApiError> {
        parse_json(response)
    }

    pub fn parse_update_user(&self, response: HttpResponse) -> Result<User, ApiError> {
        parse_json(response)
    }

    pub fn parse_delete_user(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_list_posts(&self, response: HttpResponse) -> Result<Vec<Post>, ApiError> {
        parse_json(response)
    }

    pub fn parse_create_post(&self, response: HttpResponse) -> Result<Post, ApiError> {
        parse_json(response)
    }

    pub fn parse_delete_post(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    fn bare(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json<T: Serialize>(&self, method: HttpMethod, path: String, input: &T) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
