//! 核心响应处理模块

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::status::{CommonStatus, RespStatus};

const DEFAULT_CODE: i32 = 0;
const DEFAULT_MSG: &str = "ok";

fn default_msg() -> String {
    DEFAULT_MSG.to_string()
}

/// API 响应结构
///
/// 线上格式固定为 `{"code":..,"msg":..,"data":..}`，没有数据时 `data` 为 `null`。
/// `is_ok` / `is_success` 只是方法，不参与序列化。
///
/// ```
/// use web_common::{ApiResponse, CommonStatus};
///
/// let mut resp = ApiResponse::with_data(vec![1, 2, 3]);
/// assert!(resp.is_ok());
///
/// resp.set_status(&CommonStatus::NotFound);
/// assert_eq!(resp.code(), 404);
/// assert_eq!(resp.data(), Some(&vec![1, 2, 3]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    code: i32,
    #[serde(default = "default_msg")]
    msg: String,
    data: Option<T>,
}

impl<T> Default for ApiResponse<T> {
    fn default() -> Self {
        Self {
            code: DEFAULT_CODE,
            msg: default_msg(),
            data: None,
        }
    }
}

impl<T> ApiResponse<T> {
    /// 空响应：`code = 0`，`msg = "ok"`，没有数据
    pub fn new() -> Self {
        Self::default()
    }

    /// 携带数据的成功响应
    pub fn with_data(data: T) -> Self {
        Self {
            data: Some(data),
            ..Self::default()
        }
    }

    /// 同 [`with_data`](Self::with_data)
    pub fn ok(data: T) -> Self {
        Self::with_data(data)
    }

    /// 用状态枚举初始化 `code` 和 `msg`，没有数据
    pub fn from_status<S: RespStatus + ?Sized>(status: &S) -> Self {
        Self::with_status(status.code(), status.msg())
    }

    /// 同 [`from_status`](Self::from_status)
    pub fn error<S: RespStatus + ?Sized>(status: &S) -> Self {
        Self::from_status(status)
    }

    pub fn with_status(code: i32, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
            data: None,
        }
    }

    /// 全参数构造
    pub fn full(code: i32, msg: impl Into<String>, data: T) -> Self {
        Self {
            code,
            msg: msg.into(),
            data: Some(data),
        }
    }

    /// 用状态枚举同时覆盖 `code` 和 `msg`，数据保持不变
    pub fn set_status<S: RespStatus + ?Sized>(&mut self, status: &S) {
        self.set_status_raw(status.code(), status.msg());
    }

    /// 直接覆盖 `code` 和 `msg`，两者是否匹配由调用方负责
    pub fn set_status_raw(&mut self, code: i32, msg: impl Into<String>) {
        let msg = msg.into();
        debug!(from = self.code, to = code, msg = %msg, "覆盖响应状态");
        self.code = code;
        self.msg = msg;
    }

    /// `code == 0` 即成功
    pub fn is_ok(&self) -> bool {
        self.code == DEFAULT_CODE
    }

    /// 与 [`is_ok`](Self::is_ok) 等价
    pub fn is_success(&self) -> bool {
        self.is_ok()
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn msg(&self) -> &str {
        &self.msg
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        self.data.as_mut()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// 取走数据，响应中只留下状态
    pub fn take_data(&mut self) -> Option<T> {
        self.data.take()
    }

    pub fn set_code(&mut self, code: i32) {
        self.code = code;
    }

    pub fn set_msg(&mut self, msg: impl Into<String>) {
        self.msg = msg.into();
    }

    pub fn set_data(&mut self, data: T) {
        self.data = Some(data);
    }

    pub fn clear_data(&mut self) {
        self.data = None;
    }

    /// 转换数据类型，`code` 和 `msg` 原样保留
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ApiResponse {
            code: self.code,
            msg: self.msg,
            data: self.data.map(f),
        }
    }

    pub fn into_parts(self) -> (i32, String, Option<T>) {
        (self.code, self.msg, self.data)
    }
}

impl<T> RespStatus for ApiResponse<T> {
    fn code(&self) -> i32 {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// `Ok(v)` 变成携带数据的成功响应，`Err(e)` 用错误自身的状态填充响应
impl<T, E: RespStatus> From<Result<T, E>> for ApiResponse<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::with_data(data),
            Err(err) => Self::from_status(&err),
        }
    }
}

/// 业务状态写在响应体里，HTTP 状态码总是 200
impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self) {
            Ok(body) => (
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
                .into_response(),
            Err(err) => {
                error!(code = self.code, error = %err, "响应序列化失败");
                let fallback = ApiResponse::<()>::from_status(&CommonStatus::InternalError);
                (StatusCode::INTERNAL_SERVER_ERROR, Json(fallback)).into_response()
            }
        }
    }
}
