//! Auth Endpoints
//!
//! Login and signup both answer with a bearer token wrapped in the usual
//! envelope. No token is attached to these requests.

use async_trait::async_trait;
use gloo_net::http::Request;

use super::{read_data, ApiResult, AuthApi, HttpApi};
use crate::models::{AuthToken, LoginRequest, SignupRequest};

#[async_trait(?Send)]
impl AuthApi for HttpApi {
    async fn login(&self, request: &LoginRequest) -> ApiResult<AuthToken> {
        let url = self.url("auth/login");
        log::debug!("[API] POST {}", url);
        let req = Request::post(&url).json(request)?;
        let response = self.send(req, "Login failed").await?;
        read_data(response, "Login failed").await
    }

    async fn signup(&self, request: &SignupRequest) -> ApiResult<AuthToken> {
        let url = self.url("auth/signup");
        log::debug!("[API] POST {}", url);
        let req = Request::post(&url).json(request)?;
        let response = self.send(req, "Sign up failed").await?;
        read_data(response, "Sign up failed").await
    }
}
