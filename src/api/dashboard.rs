//! 仪表盘排名 API
//!
//! 分页端点默认 `page = 1, page_size = 50`；可选过滤条件未设置时
//! 完全不出现在查询串中。

use super::client::ApiClient;
use super::error::ApiResult;
use super::query::Query;
use super::transport::Transport;
use crate::types::common::{CorrelationType, PaginatedResponse, SortOrder};
use crate::types::dashboard::{
    CountryHistoryData, CountryRankingData, UniversityRankingData, UserCorrelationRankingData,
    UserSubmissionsRankingData, UserWeightChangeRankingData, UserWeightRankingData,
};

impl<T: Transport> ApiClient<T> {
    /// 获取国家排名
    pub async fn get_country_rankings(
        &self,
        page: u32,
        page_size: u32,
        quarter: Option<&str>,
    ) -> ApiResult<PaginatedResponse<CountryRankingData>> {
        let query = Query::new()
            .push("page", page)
            .push("page_size", page_size)
            .push_opt("quarter", quarter);
        self.get("/dashboard/country-rankings", query).await
    }

    /// 获取大学排名
    pub async fn get_university_rankings(
        &self,
        page: u32,
        page_size: u32,
        quarter: Option<&str>,
    ) -> ApiResult<PaginatedResponse<UniversityRankingData>> {
        let query = Query::new()
            .push("page", page)
            .push("page_size", page_size)
            .push_opt("quarter", quarter);
        self.get("/dashboard/university-rankings", query).await
    }

    /// 获取权重最高用户
    pub async fn get_top_users_by_weight(
        &self,
        page: u32,
        page_size: u32,
        country: Option<&str>,
    ) -> ApiResult<PaginatedResponse<UserWeightRankingData>> {
        let query = Query::new()
            .push("page", page)
            .push("page_size", page_size)
            .push_opt("country", country);
        self.get("/dashboard/top-users-by-weight", query).await
    }

    /// 获取权重变化最大用户
    pub async fn get_top_users_by_weight_change(
        &self,
        page: u32,
        page_size: u32,
        quarter: Option<&str>,
        order: SortOrder,
        country: Option<&str>,
    ) -> ApiResult<PaginatedResponse<UserWeightChangeRankingData>> {
        let query = Query::new()
            .push("page", page)
            .push("page_size", page_size)
            .push_opt("quarter", quarter)
            .push("order", order)
            .push_opt("country", country);
        self.get("/dashboard/top-users-by-weight-change", query).await
    }

    /// 获取提交数最多用户
    pub async fn get_top_users_by_submissions(
        &self,
        page: u32,
        page_size: u32,
        country: Option<&str>,
    ) -> ApiResult<PaginatedResponse<UserSubmissionsRankingData>> {
        let query = Query::new()
            .push("page", page)
            .push("page_size", page_size)
            .push_opt("country", country);
        self.get("/dashboard/top-users-by-submissions", query).await
    }

    /// 获取相关性最高用户
    pub async fn get_top_users_by_correlation(
        &self,
        page: u32,
        page_size: u32,
        correlation_type: CorrelationType,
        country: Option<&str>,
    ) -> ApiResult<PaginatedResponse<UserCorrelationRankingData>> {
        let query = Query::new()
            .push("page", page)
            .push("page_size", page_size)
            .push("correlation_type", correlation_type)
            .push_opt("country", country);
        self.get("/dashboard/top-users-by-correlation", query).await
    }

    /// 获取国家历史数据（默认 `page_size = 20`）
    pub async fn get_country_history(
        &self,
        country: &str,
        page: u32,
        page_size: u32,
    ) -> ApiResult<PaginatedResponse<CountryHistoryData>> {
        let query = Query::new().push("page", page).push("page_size", page_size);
        self.get(&format!("/dashboard/country-history/{}", country), query)
            .await
    }
}
