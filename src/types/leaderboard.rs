//! 排行榜与时间序列数据形状
//!
//! 与后端 `/leaderboard/*` 端点的响应一一对应。

use serde::{Deserialize, Serialize};

/// 汇总统计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub total_users: u64,
    pub user_change: i64,
    pub total_alpha: u64,
    pub alpha_change: i64,
    pub total_weight: f64,
    pub weight_change: f64,
    pub total_records: u64,
    #[serde(default)]
    pub latest_record_date: Option<String>,
}

/// 国家权重数据（排行榜单条记录）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryWeightData {
    pub record_date: String,
    pub country: String,
    pub weight_factor: Option<f64>,
    pub user: Option<u32>,
    pub value_factor: Option<f64>,
    pub submissions_count: Option<u32>,
    #[serde(default)]
    pub weight_change: Option<f64>,
    #[serde(default)]
    pub weight_change_percent: Option<f64>,
}

/// 用户权重数据（排行榜单条记录）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserWeightData {
    pub record_date: String,
    pub user: String,
    pub weight_factor: Option<f64>,
    pub value_factor: Option<f64>,
    pub submissions_count: Option<u32>,
    pub university: Option<String>,
    pub country: Option<String>,
    #[serde(default)]
    pub weight_change: Option<f64>,
    #[serde(default)]
    pub weight_change_percent: Option<f64>,
}

/// 国家权重时间序列
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryWeightTimeSeries {
    pub country: String,
    pub dates: Vec<String>,
    pub weights: Vec<f64>,
}

/// 国家提交数时间序列
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountrySubmissionTimeSeries {
    pub country: String,
    pub dates: Vec<String>,
    pub submissions_count: Vec<u32>,
    pub super_alpha_submissions_count: Vec<u32>,
    pub submissions_change: Vec<i64>,
    pub super_alpha_submissions_change: Vec<i64>,
}

/// 用户权重时间序列
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserWeightTimeSeries {
    pub user: String,
    pub dates: Vec<String>,
    pub weights: Vec<f64>,
}

/// Genius 国家时间序列（alpha 数量变化）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeniusCountryTimeSeries {
    pub country: String,
    pub dates: Vec<String>,
    pub alpha_count_change: Vec<i64>,
}

/// Genius 等级权重时间序列
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeniusWeightTimeSeries {
    pub genius_level: String,
    pub country: String,
    pub dates: Vec<String>,
    pub weights: Vec<f64>,
}

/// Genius 用户权重变化
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeniusUserWeightChange {
    pub user: String,
    #[serde(default)]
    pub genius_level: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    pub start_weight: f64,
    pub end_weight: f64,
    pub weight_change: f64,
    #[serde(default)]
    pub weight_change_percent: Option<f64>,
    pub rank: u32,
    pub percentile: f64,
}

/// Genius 等级权重变化（按等级聚合）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeniusLevelWeightChange {
    pub genius_level: String,
    pub total_users: u32,
    pub total_weight: f64,
    pub weight_change: f64,
    #[serde(default)]
    pub weight_change_percent: Option<f64>,
}

/// Value factor 用户变化（两个日期之间的对比）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueFactorUserChange {
    pub user: String,
    #[serde(default)]
    pub genius_level: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    pub start_value: f64,
    pub end_value: f64,
    pub value_change: f64,
    #[serde(default)]
    pub value_change_percent: Option<f64>,
    pub rank: u32,
    pub percentile: f64,
}

/// Combined 指标用户变化
///
/// 三个子指标（alpha / power-pool / selected）在基准日期与目标日期之间
/// 的对比；未计算出的变化值为空。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedUserChange {
    pub user: String,
    #[serde(default)]
    pub genius_level: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    pub base_date: String,
    pub target_date: String,
    pub alpha_change: Option<f64>,
    pub power_pool_change: Option<f64>,
    pub selected_change: Option<f64>,
    pub rank: u32,
}
