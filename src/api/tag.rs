//! Tag Endpoints

use async_trait::async_trait;

use super::{ApiResult, HttpApi, TagApi};
use crate::models::Tag;

#[async_trait(?Send)]
impl TagApi for HttpApi {
    async fn list_tags(&self) -> ApiResult<Vec<Tag>> {
        self.get_data("tags", "Failed to load tags").await
    }
}
