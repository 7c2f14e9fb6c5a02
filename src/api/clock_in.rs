//! Clock-In Endpoints

use serde_json::Value;

use super::{query_path, record_path, ApiClient, Method, Transport};
use crate::error::ApiResult;
use crate::models::{ClockInFilter, ClockInRecord, ClockInSubmission, ClockInUpdate};

pub const CLOCK_IN_PATH: &str = "/clock-in";

impl<T: Transport> ApiClient<T> {
    /// POST /clock-in
    pub async fn submit_clock_in(&self, submission: &ClockInSubmission) -> ApiResult<()> {
        self.send_json(Method::Post, CLOCK_IN_PATH, submission).await?;
        Ok(())
    }

    /// GET /clock-in
    pub async fn get_clock_ins(&self) -> ApiResult<Value> {
        self.fetch_as(CLOCK_IN_PATH).await
    }

    pub async fn get_clock_in(&self, id: &str) -> ApiResult<ClockInRecord> {
        self.fetch_as(&record_path(CLOCK_IN_PATH, id)).await
    }

    pub async fn update_clock_in(&self, id: &str, update: &ClockInUpdate) -> ApiResult<Option<String>> {
        let body = self.send_json(Method::Put, &record_path(CLOCK_IN_PATH, id), update).await?;
        Ok(super::acknowledgement(&body))
    }

    pub async fn delete_clock_in(&self, id: &str) -> ApiResult<Option<String>> {
        self.delete(&record_path(CLOCK_IN_PATH, id)).await
    }

    /// GET /clock-in/filter, oldest first
    pub async fn filter_clock_ins(&self, filter: &ClockInFilter) -> ApiResult<Value> {
        let path = query_path(&format!("{}/filter", CLOCK_IN_PATH), &filter.params());
        self.fetch_as(&path).await
    }
}
