//! 仪表盘排名数据形状
//!
//! 与后端 `/dashboard/*` 端点的响应一一对应。所有指标字段均可为空，
//! 表示该周期尚未计算出对应数据。

use serde::{Deserialize, Serialize};

/// 国家排名数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRankingData {
    pub country: String,
    pub user_count: u32,
    pub weight_factor: f64,
    #[serde(default)]
    pub value_factor: Option<f64>,
    pub submissions_count: u32,
    pub super_alpha_submissions_count: u32,
    pub total_submissions: u32,
    #[serde(default)]
    pub mean_prod_correlation: Option<f64>,
    #[serde(default)]
    pub mean_self_correlation: Option<f64>,
    #[serde(default)]
    pub super_alpha_mean_prod_correlation: Option<f64>,
    #[serde(default)]
    pub super_alpha_mean_self_correlation: Option<f64>,
    // 相对上一周期的变化值
    #[serde(default)]
    pub weight_change: Option<f64>,
    #[serde(default)]
    pub value_change: Option<f64>,
    #[serde(default)]
    pub submissions_change: Option<i64>,
    #[serde(default)]
    pub super_alpha_submissions_change: Option<i64>,
    #[serde(default)]
    pub total_submissions_change: Option<i64>,
    #[serde(default)]
    pub prod_corr_change: Option<f64>,
    #[serde(default)]
    pub self_corr_change: Option<f64>,
}

/// 国家历史数据（按日期的单条记录）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryHistoryData {
    pub record_date: String,
    pub user_count: u32,
    pub weight_factor: f64,
    #[serde(default)]
    pub value_factor: Option<f64>,
    pub submissions_count: u32,
    pub super_alpha_submissions_count: u32,
    pub total_submissions: u32,
    #[serde(default)]
    pub mean_prod_correlation: Option<f64>,
    #[serde(default)]
    pub mean_self_correlation: Option<f64>,
    #[serde(default)]
    pub super_alpha_mean_prod_correlation: Option<f64>,
    #[serde(default)]
    pub super_alpha_mean_self_correlation: Option<f64>,
}

/// 大学排名数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniversityRankingData {
    pub university: String,
    pub user_count: u32,
    pub avg_weight: f64,
    pub max_weight: f64,
    pub total_submissions: u32,
}

/// 用户权重排名数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserWeightRankingData {
    pub rank: u32,
    pub user: String,
    pub weight_factor: f64,
    #[serde(default)]
    pub value_factor: Option<f64>,
    pub total_submissions: u32,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub university: Option<String>,
}

/// 用户权重变化排名数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserWeightChangeRankingData {
    pub rank: u32,
    pub user: String,
    pub current_weight: f64,
    pub weight_change: f64,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub university: Option<String>,
}

/// 用户提交数排名数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSubmissionsRankingData {
    pub rank: u32,
    pub user: String,
    #[serde(default)]
    pub weight_factor: Option<f64>,
    pub regular_submissions: u32,
    pub super_alpha_submissions: u32,
    pub total_submissions: u32,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub university: Option<String>,
}

/// 用户相关性排名数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserCorrelationRankingData {
    pub rank: u32,
    pub user: String,
    #[serde(default)]
    pub weight_factor: Option<f64>,
    #[serde(default)]
    pub regular_correlation: Option<f64>,
    #[serde(default)]
    pub super_alpha_correlation: Option<f64>,
    pub avg_correlation: f64,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub university: Option<String>,
}
