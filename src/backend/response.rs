/**
 * Response Envelope
 *
 * Every JSON body the API produces goes through one of three constructors:
 *
 * - `success` / `success_with_msg` - `{"code": 0, "msg": ..., "data": ...}`, HTTP 200
 * - `paged_success` - `{"code": 0, "msg": ..., "list": [...], "pagination": {...}}`, HTTP 200
 * - `failure` - `{"code": <status>, "error": ...}`, HTTP `<status>`
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

/// Default message of a successful response
pub const SUCCESS_MSG: &str = "success";

/// Successful response body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    /// Always 0 on success
    pub code: u16,
    pub msg: String,
    pub data: T,
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Wrap data in a success envelope
pub fn success<T: Serialize>(data: T) -> ApiResponse<T> {
    success_with_msg(data, SUCCESS_MSG)
}

/// Wrap data in a success envelope with a custom message
pub fn success_with_msg<T: Serialize>(data: T, msg: impl Into<String>) -> ApiResponse<T> {
    ApiResponse {
        code: 0,
        msg: msg.into(),
        data,
    }
}

/// Failure response body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FailureBody {
    /// HTTP status code of the failure
    pub code: u16,
    pub error: String,
}

/// Build a failure response
pub fn failure(status: StatusCode, error: impl Into<String>) -> Response {
    let body = FailureBody {
        code: status.as_u16(),
        error: error.into(),
    };
    (status, Json(body)).into_response()
}

/// Page request parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageQuery {
    #[serde(default = "PageQuery::default_current")]
    pub current: u32,
    #[serde(default = "PageQuery::default_page_size")]
    pub page_size: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            current: Self::default_current(),
            page_size: Self::default_page_size(),
        }
    }
}

impl PageQuery {
    fn default_current() -> u32 {
        1
    }

    fn default_page_size() -> u32 {
        10
    }

    /// Rows to skip for this page (pages are 1-based)
    pub fn offset(&self) -> u64 {
        u64::from(self.current.saturating_sub(1)) * u64::from(self.page_size)
    }
}

/// Pagination block of a paged response
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub page_size: u32,
    pub total: u64,
    pub total_pages: u64,
}

impl Pagination {
    pub fn create(current_page: u32, page_size: u32, total: u64) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total.div_ceil(u64::from(page_size))
        };
        Self {
            current_page,
            page_size,
            total,
            total_pages,
        }
    }

    pub fn for_page(page: PageQuery, total: u64) -> Self {
        Self::create(page.current, page.page_size, total)
    }
}

/// Paged response body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PagedResponse<T> {
    pub code: u16,
    pub msg: String,
    pub list: Vec<T>,
    pub pagination: Pagination,
}

impl<T: Serialize> IntoResponse for PagedResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Wrap one page of rows in a paged envelope
pub fn paged_success<T: Serialize>(list: Vec<T>, pagination: Pagination) -> PagedResponse<T> {
    PagedResponse {
        code: 0,
        msg: SUCCESS_MSG.to_string(),
        list,
        pagination,
    }
}
