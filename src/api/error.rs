//! API 错误类型
//!
//! 传输失败与非 2xx 状态统一收敛为 `ApiError`，原样抛给调用方；
//! 本层不做重试，也不吞掉任何失败。

use std::fmt;

/// API 调用错误
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 网络请求失败（连接失败、请求构建失败等）
    Network(String),
    /// 请求超出全局超时上限
    Timeout,
    /// 请求体或响应体的 JSON 编解码失败
    Serialization(String),
    /// 后端返回非 2xx 状态
    Status { status: u16, body: String },
}

impl ApiError {
    /// 是否为认证失败（401）
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }

    /// 对应的 HTTP 状态码（非状态类错误返回 None）
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "网络错误: {}", msg),
            ApiError::Timeout => write!(f, "请求超时"),
            ApiError::Serialization(msg) => write!(f, "数据解析失败: {}", msg),
            ApiError::Status { status, body } => write!(f, "HTTP {}: {}", status, body),
        }
    }
}

impl std::error::Error for ApiError {}

pub type ApiResult<T> = Result<T, ApiError>;
