//! API request handlers
//!
//! Handlers for all REST API endpoints.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use super::server::AppState;
use super::state::PublishedUpload;
use crate::core::{sorted_view, SortColumn, SortDirection, SortState};
use crate::error::GrouperError;
use crate::excel::SpreadsheetExporter;
use crate::pipeline::process_bytes;
use crate::types::{GroupEntry, GroupedData, Language};

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Standard API response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            request_id: Uuid::new_v4().to_string(),
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            request_id: Uuid::new_v4().to_string(),
            data: None,
            error: Some(message.into()),
        }
    }
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ApiResponse::<()>::err(message))).into_response()
}

/// Root endpoint response
#[derive(Serialize)]
pub struct RootResponse {
    pub name: String,
    pub version: String,
    pub description: String,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Serialize)]
pub struct EndpointInfo {
    pub path: String,
    pub method: String,
    pub description: String,
}

impl EndpointInfo {
    fn new(path: &str, method: &str, description: &str) -> Self {
        Self {
            path: path.to_string(),
            method: method.to_string(),
            description: description.to_string(),
        }
    }
}

/// GET / - Root info
pub async fn root(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = RootResponse {
        name: "Sample Grouper API Server".to_string(),
        version: state.version.clone(),
        description: "Groups delivery task exports by sample description".to_string(),
        endpoints: vec![
            EndpointInfo::new("/health", "GET", "Health check endpoint"),
            EndpointInfo::new("/version", "GET", "Get server version"),
            EndpointInfo::new("/api/v1/upload", "POST", "Upload a spreadsheet (raw body)"),
            EndpointInfo::new("/api/v1/groups", "GET", "List groups of the current upload"),
            EndpointInfo::new("/api/v1/groups/:label", "GET", "Entries of one group, optionally sorted"),
            EndpointInfo::new("/api/v1/orders", "GET", "Unique order numbers"),
            EndpointInfo::new("/api/v1/export", "GET", "Download the grouped Excel file"),
        ],
    };
    Json(ApiResponse::ok(response))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_message: String,
}

/// GET /health - Health check
pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::ok(HealthResponse {
        status: "healthy".to_string(),
        uptime_message: "Server is running".to_string(),
    }))
}

/// Version response
#[derive(Serialize)]
pub struct VersionResponse {
    pub version: String,
    pub features: Vec<String>,
}

/// GET /version - Server version
pub async fn version(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::ok(VersionResponse {
        version: state.version.clone(),
        features: vec![
            "upload".to_string(),
            "groups".to_string(),
            "orders".to_string(),
            "export".to_string(),
        ],
    }))
}

/// Label count of one group
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GroupOverview {
    pub label: String,
    pub count: usize,
}

fn overview(data: &GroupedData) -> Vec<GroupOverview> {
    data.iter()
        .map(|g| GroupOverview {
            label: g.label.clone(),
            count: g.len(),
        })
        .collect()
}

/// Upload query parameters
#[derive(Deserialize, Default)]
pub struct UploadParams {
    #[serde(default)]
    pub labels: Language,
}

/// Upload response
#[derive(Serialize, Deserialize, Default, Debug)]
pub struct UploadResponse {
    pub upload_id: u64,
    /// False when a newer upload finished first
    pub applied: bool,
    pub total: usize,
    pub order_count: usize,
    pub groups: Vec<GroupOverview>,
    pub missing_headers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// POST /api/v1/upload - Decode and group a spreadsheet
pub async fn upload(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UploadParams>,
    body: Bytes,
) -> Response {
    let upload_id = state.uploads.begin();
    let labels = params.labels.labels();

    let decoded = tokio::task::spawn_blocking(move || process_bytes(&body, &labels)).await;
    let outcome = match decoded {
        Ok(Ok(outcome)) => outcome,
        Ok(Err(e)) => {
            warn!(upload_id, error = %e, "upload rejected");
            return error_response(StatusCode::BAD_REQUEST, e.to_string());
        }
        Err(e) => {
            warn!(upload_id, error = %e, "upload worker failed");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
        }
    };

    let response = UploadResponse {
        upload_id,
        applied: false,
        total: outcome.summary.total,
        order_count: outcome.summary.orders.len(),
        groups: overview(&outcome.summary.data),
        missing_headers: outcome.missing_headers.clone(),
        notice: outcome.notice(),
    };

    let applied = state
        .uploads
        .publish(PublishedUpload {
            upload_id,
            language: params.labels,
            outcome,
        })
        .await;

    Json(ApiResponse::ok(UploadResponse { applied, ..response })).into_response()
}

/// Groups response
#[derive(Serialize, Deserialize, Default, Debug)]
pub struct GroupsResponse {
    pub upload_id: Option<u64>,
    pub total: usize,
    pub groups: Vec<GroupOverview>,
    pub missing_headers: Vec<String>,
}

/// GET /api/v1/groups - Groups of the current upload
pub async fn groups(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = match state.uploads.current().await {
        Some(current) => GroupsResponse {
            upload_id: Some(current.upload_id),
            total: current.outcome.summary.total,
            groups: overview(&current.outcome.summary.data),
            missing_headers: current.outcome.missing_headers.clone(),
        },
        None => GroupsResponse::default(),
    };
    Json(ApiResponse::ok(response))
}

/// Sort query parameters
#[derive(Deserialize, Default)]
pub struct SortParams {
    pub sort: Option<String>,
    pub direction: Option<String>,
}

impl SortParams {
    pub fn to_state(&self) -> Result<SortState, GrouperError> {
        let Some(column) = self.sort.as_deref() else {
            return Ok(SortState::default());
        };
        let column: SortColumn = column.parse()?;
        let direction = match self.direction.as_deref() {
            Some(d) => d.parse()?,
            None => SortDirection::Ascending,
        };
        Ok(SortState::by(column, direction))
    }
}

/// Group detail response
#[derive(Serialize, Deserialize, Debug)]
pub struct GroupDetailResponse {
    pub label: String,
    pub count: usize,
    pub sort: SortState,
    pub entries: Vec<GroupEntry>,
}

/// GET /api/v1/groups/:label - Entries of one group
pub async fn group_detail(
    State(state): State<Arc<AppState>>,
    Path(label): Path<String>,
    Query(params): Query<SortParams>,
) -> Response {
    let sort = match params.to_state() {
        Ok(sort) => sort,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };

    let current = state.uploads.current().await;
    let Some(group) = current
        .as_ref()
        .and_then(|c| c.outcome.summary.data.get(&label))
    else {
        return error_response(
            StatusCode::NOT_FOUND,
            GrouperError::UnknownGroup(label.clone()).to_string(),
        );
    };

    let entries = sorted_view(&group.entries, &sort).into_iter().cloned().collect();
    Json(ApiResponse::ok(GroupDetailResponse {
        label: group.label.clone(),
        count: group.len(),
        sort,
        entries,
    }))
    .into_response()
}

/// Orders response
#[derive(Serialize, Deserialize, Default, Debug)]
pub struct OrdersResponse {
    pub count: usize,
    pub orders: Vec<String>,
    /// Comma-space joined, ready to paste
    pub joined: String,
}

/// GET /api/v1/orders - Unique order numbers of the current upload
pub async fn orders(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = match state.uploads.current().await {
        Some(current) => {
            let orders = &current.outcome.summary.orders;
            OrdersResponse {
                count: orders.len(),
                orders: orders.iter().map(str::to_string).collect(),
                joined: orders.joined(),
            }
        }
        None => OrdersResponse::default(),
    };
    Json(ApiResponse::ok(response))
}

/// GET /api/v1/export - Grouped workbook as an attachment
pub async fn export(State(state): State<Arc<AppState>>) -> Response {
    let Some(current) = state.uploads.current().await else {
        return error_response(StatusCode::CONFLICT, GrouperError::EmptyData.to_string());
    };

    let labels = current.language.labels();
    let exporter = SpreadsheetExporter::new(&current.outcome.summary.data, labels);
    match exporter.to_buffer() {
        Ok(buffer) => (
            [
                (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", labels.export_filename),
                ),
            ],
            buffer,
        )
            .into_response(),
        Err(GrouperError::EmptyData) => {
            error_response(StatusCode::CONFLICT, GrouperError::EmptyData.to_string())
        }
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}
