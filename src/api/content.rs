//! Content Endpoints

use async_trait::async_trait;
use gloo_net::http::Request;

use super::{ApiResult, ContentApi, HttpApi};
use crate::models::{ContentPage, ContentQuery, CreateContent, UpdateContent};

#[async_trait(?Send)]
impl ContentApi for HttpApi {
    async fn list_contents(&self, query: &ContentQuery) -> ApiResult<ContentPage> {
        let path = format!("content?{}", query.to_query_string());
        self.get_data(&path, "Failed to load content").await
    }

    async fn create_content(&self, payload: &CreateContent) -> ApiResult<()> {
        let url = self.url("content");
        log::debug!("[API] POST {} uniqueId={}", url, payload.unique_id);
        self.send_json(Request::post(&url), payload, "Failed to create content").await?;
        Ok(())
    }

    async fn update_content(&self, id: u32, payload: &UpdateContent) -> ApiResult<()> {
        let url = self.url(&format!("content/{}", id));
        log::debug!("[API] PUT {}", url);
        self.send_json(Request::put(&url), payload, "Failed to update content").await?;
        Ok(())
    }

    async fn delete_content(&self, id: u32) -> ApiResult<()> {
        let url = self.url(&format!("content/{}", id));
        log::debug!("[API] DELETE {}", url);
        let request = self.authorize(Request::delete(&url)).build()?;
        self.send(request, "Failed to delete content").await?;
        Ok(())
    }
}
