//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use super::response::ApiResponse;
use super::status::{CommonStatus, RespStatus};

/// 核心错误类型
///
/// 处理器返回 `Result<_, CoreError>` 时，错误会被渲染成
/// `{"code":..,"msg":..,"data":null}` 的响应体。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    BadRequest(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Internal(String),
    /// 任意业务状态
    #[error("{msg} ({code})")]
    Status { code: i32, msg: String },
}

impl CoreError {
    /// 从状态枚举构造业务错误
    pub fn from_status<S: RespStatus + ?Sized>(status: &S) -> Self {
        Self::Status {
            code: status.code(),
            msg: status.msg().to_string(),
        }
    }

    /// 对应的 HTTP 状态码
    ///
    /// `Status` 的业务码落在 400..=599 时沿用为 HTTP 状态码，否则为 200。
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Status { code, .. } => u16::try_from(*code)
                .ok()
                .filter(|c| (400..600).contains(c))
                .and_then(|c| StatusCode::from_u16(c).ok())
                .unwrap_or(StatusCode::OK),
        }
    }
}

impl RespStatus for CoreError {
    fn code(&self) -> i32 {
        match self {
            Self::BadRequest(_) => CommonStatus::BadRequest.code(),
            Self::Unauthorized => CommonStatus::Unauthorized.code(),
            Self::Forbidden => CommonStatus::Forbidden.code(),
            Self::NotFound(_) => CommonStatus::NotFound.code(),
            Self::Conflict(_) => CommonStatus::Conflict.code(),
            Self::Internal(_) => CommonStatus::InternalError.code(),
            Self::Status { code, .. } => *code,
        }
    }

    fn msg(&self) -> &str {
        match self {
            Self::BadRequest(msg)
            | Self::NotFound(msg)
            | Self::Conflict(msg)
            | Self::Internal(msg)
            | Self::Status { msg, .. } => msg,
            Self::Unauthorized => CommonStatus::Unauthorized.msg(),
            Self::Forbidden => CommonStatus::Forbidden.msg(),
        }
    }
}

impl From<CommonStatus> for CoreError {
    fn from(status: CommonStatus) -> Self {
        Self::from_status(&status)
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        if status.is_server_error() {
            error!(code = self.code(), msg = self.msg(), "请求处理失败");
        } else {
            warn!(code = self.code(), msg = self.msg(), "请求被拒绝");
        }

        let body = ApiResponse::<()>::from_status(&self);
        (status, body).into_response()
    }
}
