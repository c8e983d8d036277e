use contracts::dashboards::d400_overview::{OverviewStats, StatsPeriod};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::shared::crud::client::decode_item;
use crate::shared::crud::{ApiError, Credential};

pub fn stats_path(period: StatsPeriod) -> String {
    format!("/stats?filter={}", urlencoding::encode(period.query_value()))
}

/// Order and user counts for `period`
pub async fn fetch_stats(
    period: StatsPeriod,
    credential: &Credential,
) -> Result<OverviewStats, ApiError> {
    let header = credential.header_value().ok_or(ApiError::Unauthenticated)?;
    let url = api_url(&stats_path(period));
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .header("Authorization", &header)
        .send()
        .await
        .map_err(|e| ApiError::Transport(format!("Failed to send request: {}", e)))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(format!("Failed to read response: {}", e)))?;
    decode_item(status, &body)
}
