//! 用户档案 API
//!
//! 当前登录用户的历史记录与统计信息；身份由 bearer token 决定，
//! 无需显式传入用户标识。

use serde::{Deserialize, Serialize};

use super::client::ApiClient;
use super::error::ApiResult;
use super::query::Query;
use super::transport::Transport;

/// 用户单日历史记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserHistoryRecord {
    pub record_date: String,
    pub weight_factor: Option<f64>,
    pub value_factor: Option<f64>,
    pub combined_alpha_performance: Option<f64>,
    pub combined_power_pool_alpha_performance: Option<f64>,
    pub combined_selected_alpha_performance: Option<f64>,
    pub submissions_count: Option<u32>,
    pub mean_prod_correlation: Option<f64>,
    pub mean_self_correlation: Option<f64>,
    pub super_alpha_submissions_count: Option<u32>,
    pub super_alpha_mean_prod_correlation: Option<f64>,
    pub super_alpha_mean_self_correlation: Option<f64>,
    pub university: Option<String>,
    pub country: Option<String>,
}

/// Value factor 趋势记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueFactorTrendRecord {
    pub update_date: String,
    pub date_range: String,
    pub value_factor: Option<f64>,
}

/// Combined 指标趋势记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedTrendRecord {
    pub update_date: String,
    pub date_range: String,
    pub combined_alpha_performance: Option<f64>,
    pub combined_power_pool_alpha_performance: Option<f64>,
    pub combined_selected_alpha_performance: Option<f64>,
}

/// 用户历史响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserHistoryResponse {
    pub wq_id: String,
    pub username: Option<String>,
    pub data: Vec<UserHistoryRecord>,
    pub value_factor_trend: Vec<ValueFactorTrendRecord>,
    pub combined_trend: Vec<CombinedTrendRecord>,
}

/// 用户统计信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStatistics {
    pub wq_id: String,
    pub username: Option<String>,
    pub current_weight: f64,
    pub current_value: f64,
    pub current_submissions: u32,
    pub max_weight: f64,
    pub max_daily_change: f64,
    pub max_change_date: Option<String>,
    pub total_submissions: u32,
    pub record_days: u32,
    pub daily_change: f64,
    pub university: Option<String>,
    pub country: Option<String>,
    pub latest_date: Option<String>,
}

impl<T: Transport> ApiClient<T> {
    /// 获取用户历史记录（默认 `limit_days = 30`）
    pub async fn get_user_history(&self, limit_days: u32) -> ApiResult<UserHistoryResponse> {
        let query = Query::new().push("limit_days", limit_days);
        self.get("/user/profile/history", query).await
    }

    /// 获取用户统计信息
    pub async fn get_user_statistics(&self) -> ApiResult<UserStatistics> {
        self.get("/user/profile/statistics", Query::new()).await
    }
}
