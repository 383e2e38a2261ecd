//! API Client
//!
//! Bindings to the S-Brain REST API, organized by domain. Each domain is a
//! trait so forms and pages can be driven by an in-memory double in tests;
//! [`HttpApi`] is the browser implementation.

mod auth;
mod content;
mod error;
mod tag;

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{
    AuthToken, ContentPage, ContentQuery, CreateContent, Envelope, LoginRequest, SignupRequest, Tag,
    UpdateContent,
};

pub use error::{ApiError, ApiResult};

// ========================
// Domain Traits
// ========================

#[async_trait(?Send)]
pub trait ContentApi {
    async fn list_contents(&self, query: &ContentQuery) -> ApiResult<ContentPage>;
    async fn create_content(&self, payload: &CreateContent) -> ApiResult<()>;
    async fn update_content(&self, id: u32, payload: &UpdateContent) -> ApiResult<()>;
    async fn delete_content(&self, id: u32) -> ApiResult<()>;
}

#[async_trait(?Send)]
pub trait TagApi {
    async fn list_tags(&self) -> ApiResult<Vec<Tag>>;
}

#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, request: &LoginRequest) -> ApiResult<AuthToken>;
    async fn signup(&self, request: &SignupRequest) -> ApiResult<AuthToken>;
}

// ========================
// HTTP Implementation
// ========================

/// REST client bound to a base URL and, when signed in, a bearer token
#[derive(Debug, Clone, PartialEq)]
pub struct HttpApi {
    base_url: String,
    token: Option<String>,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Send and turn non-2xx responses into [`ApiError`]
    async fn send(&self, request: Request, fallback: &str) -> ApiResult<Response> {
        let response = request.send().await?;
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_body(status, &body, fallback);
        log::warn!("[API] {} -> {}: {}", response.url(), status, err);
        Err(err)
    }

    async fn get_data<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> ApiResult<T> {
        let url = self.url(path);
        log::debug!("[API] GET {}", url);
        let request = self.authorize(Request::get(&url)).build()?;
        let response = self.send(request, fallback).await?;
        read_data(response, fallback).await
    }

    async fn send_json<B: Serialize>(
        &self,
        builder: RequestBuilder,
        body: &B,
        fallback: &str,
    ) -> ApiResult<Response> {
        let request = self.authorize(builder).json(body)?;
        self.send(request, fallback).await
    }
}

/// Unwrap the `data` field of a success envelope
async fn read_data<T: DeserializeOwned>(response: Response, fallback: &str) -> ApiResult<T> {
    let envelope: Envelope<T> = response
        .json()
        .await
        .map_err(|e| ApiError::new(format!("{}: invalid response ({})", fallback, e)))?;
    if let Some(message) = envelope.message.as_deref() {
        log::debug!("[API] {}", message);
    }
    Ok(envelope.data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let api = HttpApi::new("https://api.example.com/v1/", None);
        assert_eq!(api.url("/content"), "https://api.example.com/v1/content");
        assert_eq!(api.url("tags"), "https://api.example.com/v1/tags");
    }
}
