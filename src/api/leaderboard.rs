//! 排行榜与时间序列 API
//!
//! 覆盖国家/用户权重序列、提交数序列、汇总统计、Genius 分层分析，
//! 以及 value factor 与 combined 指标的分页用户变化列表。

use std::fmt;

use super::client::ApiClient;
use super::error::ApiResult;
use super::query::Query;
use super::transport::Transport;
use crate::types::common::{PaginatedResponse, SortOrder};
use crate::types::leaderboard::{
    CombinedUserChange, CountrySubmissionTimeSeries, CountryWeightData, CountryWeightTimeSeries,
    GeniusCountryTimeSeries, GeniusLevelWeightChange, GeniusUserWeightChange,
    GeniusWeightTimeSeries, SummaryStatistics, UserWeightData, UserWeightTimeSeries,
    ValueFactorUserChange,
};

// =========================================================
// 查询参数对象
// =========================================================

/// Value factor 用户变化列表的排序字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueFactorSort {
    #[default]
    ValueChange,
    ValueChangePercent,
    EndValue,
}

impl ValueFactorSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueFactorSort::ValueChange => "value_change",
            ValueFactorSort::ValueChangePercent => "value_change_percent",
            ValueFactorSort::EndValue => "end_value",
        }
    }
}

impl fmt::Display for ValueFactorSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Combined 用户变化列表的排序字段（三个子指标之一）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CombinedSort {
    #[default]
    AlphaChange,
    PowerPoolChange,
    SelectedChange,
}

impl CombinedSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            CombinedSort::AlphaChange => "alpha_change",
            CombinedSort::PowerPoolChange => "power_pool_change",
            CombinedSort::SelectedChange => "selected_change",
        }
    }
}

impl fmt::Display for CombinedSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value factor 用户变化列表查询
///
/// 带默认值的参数始终随请求发送；`countries` / `genius_levels` /
/// 日期区间等过滤条件未设置时省略。
#[derive(Debug, Clone, PartialEq)]
pub struct ValueFactorChangeQuery {
    pub sort_by: ValueFactorSort,
    pub sort_order: SortOrder,
    pub page: u32,
    pub page_size: u32,
    pub countries: Vec<String>,
    pub genius_levels: Vec<String>,
    pub exclude_both_half: bool,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl Default for ValueFactorChangeQuery {
    fn default() -> Self {
        Self {
            sort_by: ValueFactorSort::default(),
            sort_order: SortOrder::default(),
            page: 1,
            page_size: 50,
            countries: Vec::new(),
            genius_levels: Vec::new(),
            exclude_both_half: false,
            start_date: None,
            end_date: None,
        }
    }
}

/// Combined 指标用户变化列表查询
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedChangeQuery {
    pub sort_by: CombinedSort,
    pub sort_order: SortOrder,
    pub page: u32,
    pub page_size: u32,
    pub countries: Vec<String>,
    pub genius_levels: Vec<String>,
    pub exclude_both_half: bool,
    pub base_date: Option<String>,
    pub target_date: Option<String>,
}

impl Default for CombinedChangeQuery {
    fn default() -> Self {
        Self {
            sort_by: CombinedSort::default(),
            sort_order: SortOrder::default(),
            page: 1,
            page_size: 50,
            countries: Vec::new(),
            genius_levels: Vec::new(),
            exclude_both_half: false,
            base_date: None,
            target_date: None,
        }
    }
}

// =========================================================
// 端点
// =========================================================

impl<T: Transport> ApiClient<T> {
    /// 获取国家权重时间序列
    pub async fn get_country_weight_timeseries(
        &self,
        countries: Option<&str>,
        limit_days: u32,
    ) -> ApiResult<Vec<CountryWeightTimeSeries>> {
        let query = Query::new()
            .push("limit_days", limit_days)
            .push_opt("countries", countries);
        self.get("/leaderboard/country-weight-timeseries", query).await
    }

    /// 获取国家提交数时间序列
    pub async fn get_country_submission_timeseries(
        &self,
        countries: Option<&str>,
        limit_days: u32,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> ApiResult<Vec<CountrySubmissionTimeSeries>> {
        let query = Query::new()
            .push("limit_days", limit_days)
            .push_opt("countries", countries)
            .push_opt("start_date", start_date)
            .push_opt("end_date", end_date);
        self.get("/leaderboard/country-submission-timeseries", query)
            .await
    }

    /// 获取可用国家列表
    pub async fn get_available_countries(&self) -> ApiResult<Vec<String>> {
        self.get("/leaderboard/available-countries", Query::new()).await
    }

    /// 获取国家排行榜
    pub async fn get_country_leaderboard(
        &self,
        limit: u32,
        days: u32,
    ) -> ApiResult<Vec<CountryWeightData>> {
        let query = Query::new().push("limit", limit).push("days", days);
        self.get("/leaderboard/country-leaderboard", query).await
    }

    /// 获取用户排行榜（按 weight 变化量排序）
    pub async fn get_user_leaderboard(
        &self,
        limit: u32,
        days: u32,
        order: SortOrder,
    ) -> ApiResult<Vec<UserWeightData>> {
        let query = Query::new()
            .push("limit", limit)
            .push("days", days)
            .push("order", order);
        self.get("/leaderboard/user-leaderboard", query).await
    }

    /// 获取汇总统计
    pub async fn get_summary_statistics(&self, days: u32) -> ApiResult<SummaryStatistics> {
        let query = Query::new().push("days", days);
        self.get("/leaderboard/summary-statistics", query).await
    }

    /// 获取 Genius 国家时间序列
    pub async fn get_genius_country_timeseries(
        &self,
        countries: Option<&str>,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> ApiResult<Vec<GeniusCountryTimeSeries>> {
        let query = Query::new()
            .push_opt("countries", countries)
            .push_opt("start_date", start_date)
            .push_opt("end_date", end_date);
        self.get("/leaderboard/genius-country-timeseries", query).await
    }

    /// 获取 Genius 等级权重时间序列
    pub async fn get_genius_weight_timeseries(
        &self,
        levels: Option<&str>,
        countries: Option<&str>,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> ApiResult<Vec<GeniusWeightTimeSeries>> {
        let query = Query::new()
            .push_opt("levels", levels)
            .push_opt("countries", countries)
            .push_opt("start_date", start_date)
            .push_opt("end_date", end_date);
        self.get("/leaderboard/genius-weight-timeseries", query).await
    }

    /// 获取 Genius 用户权重变化
    pub async fn get_genius_user_weight_changes(
        &self,
        levels: Option<&str>,
        countries: Option<&str>,
        start_date: Option<&str>,
        end_date: Option<&str>,
        order: SortOrder,
    ) -> ApiResult<Vec<GeniusUserWeightChange>> {
        let query = Query::new()
            .push("order", order)
            .push_opt("levels", levels)
            .push_opt("countries", countries)
            .push_opt("start_date", start_date)
            .push_opt("end_date", end_date);
        self.get("/leaderboard/genius-user-weight-changes", query).await
    }

    /// 获取单个 Genius 用户的权重时间序列
    pub async fn get_genius_user_weight_timeseries(
        &self,
        user: &str,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> ApiResult<UserWeightTimeSeries> {
        let query = Query::new()
            .push("user", user)
            .push_opt("start_date", start_date)
            .push_opt("end_date", end_date);
        self.get("/leaderboard/genius-user-weight-timeseries", query)
            .await
    }

    /// 获取 Genius 数据覆盖的国家列表
    pub async fn get_genius_available_countries(&self) -> ApiResult<Vec<String>> {
        self.get("/leaderboard/genius-available-countries", Query::new())
            .await
    }

    /// 获取 Genius 等级列表
    pub async fn get_genius_available_levels(&self) -> ApiResult<Vec<String>> {
        self.get("/leaderboard/genius-available-levels", Query::new())
            .await
    }

    /// 获取按等级聚合的 Genius 权重变化
    pub async fn get_genius_level_weight_changes(
        &self,
        days: u32,
    ) -> ApiResult<Vec<GeniusLevelWeightChange>> {
        let query = Query::new().push("days", days);
        self.get("/leaderboard/genius-level-weight-changes", query).await
    }

    /// 获取 value factor 用户变化列表（分页）
    pub async fn get_value_factor_user_changes(
        &self,
        q: &ValueFactorChangeQuery,
    ) -> ApiResult<PaginatedResponse<ValueFactorUserChange>> {
        let query = Query::new()
            .push("sort_by", q.sort_by)
            .push("sort_order", q.sort_order)
            .push("page", q.page)
            .push("page_size", q.page_size)
            .push_list("countries", &q.countries)
            .push_list("genius_levels", &q.genius_levels)
            .push("exclude_both_half", q.exclude_both_half)
            .push_opt("start_date", q.start_date.as_deref())
            .push_opt("end_date", q.end_date.as_deref());
        self.get("/leaderboard/value-factor-user-changes", query).await
    }

    /// 获取 combined 指标用户变化列表（分页）
    pub async fn get_combined_user_changes(
        &self,
        q: &CombinedChangeQuery,
    ) -> ApiResult<PaginatedResponse<CombinedUserChange>> {
        let query = Query::new()
            .push("sort_by", q.sort_by)
            .push("sort_order", q.sort_order)
            .push("page", q.page)
            .push("page_size", q.page_size)
            .push_list("countries", &q.countries)
            .push_list("genius_levels", &q.genius_levels)
            .push("exclude_both_half", q.exclude_both_half)
            .push_opt("base_date", q.base_date.as_deref())
            .push_opt("target_date", q.target_date.as_deref());
        self.get("/leaderboard/combined-user-changes", query).await
    }
}
