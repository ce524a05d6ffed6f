//! 反馈提交 API

use serde::{Deserialize, Serialize};
use std::fmt;

use super::client::ApiClient;
use super::error::ApiResult;
use super::transport::Transport;

/// 反馈类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackType {
    #[default]
    Bug,
    Optimize,
    Request,
}

impl FeedbackType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackType::Bug => "bug",
            FeedbackType::Optimize => "optimize",
            FeedbackType::Request => "request",
        }
    }
}

impl fmt::Display for FeedbackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 反馈请求体
///
/// `page` / `contact` 未填写时不出现在 JSON 中。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub content: String,
    pub feedback_type: FeedbackType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

/// 反馈响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub success: bool,
    pub message: String,
}

impl<T: Transport> ApiClient<T> {
    /// 提交反馈
    pub async fn submit_feedback(&self, payload: &FeedbackRequest) -> ApiResult<FeedbackResponse> {
        self.post("/feedback", payload).await
    }
}
