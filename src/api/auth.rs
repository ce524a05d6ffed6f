//! 认证 API
//!
//! 通过外部标识（WQ ID）登录并获取当前用户信息。

use serde::{Deserialize, Serialize};

use super::client::ApiClient;
use super::error::ApiResult;
use super::query::Query;
use super::transport::Transport;

/// 登录请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub wq_id: String,
}

/// 登录响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub wq_id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

/// 当前用户信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub wq_id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub university: Option<String>,
}

impl<T: Transport> ApiClient<T> {
    /// 使用 WQ ID 登录
    pub async fn login(&self, wq_id: &str) -> ApiResult<LoginResponse> {
        let body = LoginRequest {
            wq_id: wq_id.to_string(),
        };
        self.post("/auth/login", &body).await
    }

    /// 获取当前用户信息
    pub async fn get_current_user(&self, wq_id: &str) -> ApiResult<UserProfile> {
        let query = Query::new().push("wq_id", wq_id);
        self.get("/auth/user/me", query).await
    }
}
