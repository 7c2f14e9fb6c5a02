//! Item Endpoints
//!
//! `/items` and its per-record and query routes.

use serde_json::Value;

use super::{query_path, record_path, ApiClient, Method, Transport};
use crate::error::ApiResult;
use crate::models::{ItemFilter, ItemRecord, ItemSubmission, ItemUpdate};

pub const ITEMS_PATH: &str = "/items";

impl<T: Transport> ApiClient<T> {
    /// POST /items
    pub async fn submit_item(&self, submission: &ItemSubmission) -> ApiResult<()> {
        self.send_json(Method::Post, ITEMS_PATH, submission).await?;
        Ok(())
    }

    /// GET /items
    pub async fn get_items(&self) -> ApiResult<Value> {
        self.fetch_as(ITEMS_PATH).await
    }

    /// GET /items/{id}
    pub async fn get_item(&self, id: &str) -> ApiResult<ItemRecord> {
        self.fetch_as(&record_path(ITEMS_PATH, id)).await
    }

    /// PUT /items/{id}, returning the server's message if any
    pub async fn update_item(&self, id: &str, update: &ItemUpdate) -> ApiResult<Option<String>> {
        let body = self.send_json(Method::Put, &record_path(ITEMS_PATH, id), update).await?;
        Ok(super::acknowledgement(&body))
    }

    /// DELETE /items/{id}
    pub async fn delete_item(&self, id: &str) -> ApiResult<Option<String>> {
        self.delete(&record_path(ITEMS_PATH, id)).await
    }

    /// GET /items/filter
    pub async fn filter_items(&self, filter: &ItemFilter) -> ApiResult<Value> {
        let path = query_path(&format!("{}/filter", ITEMS_PATH), &filter.params());
        self.fetch_as(&path).await
    }

    /// GET /items/aggregate (item counts per owner email)
    pub async fn aggregate_items(&self) -> ApiResult<Value> {
        self.fetch_as(&format!("{}/aggregate", ITEMS_PATH)).await
    }
}
