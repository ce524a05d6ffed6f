//! 跨模块共享的基础类型

use serde::{Deserialize, Serialize};
use std::fmt;

/// 分页响应
///
/// 后端分页契约：`page` 从 1 开始，`total_pages = ceil(total / page_size)`，
/// `data.len() <= page_size`。本层不做校验，仅声明形状。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Desc,
    Asc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Desc => "desc",
            SortOrder::Asc => "asc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 相关性指标类型（生产相关性 / 自相关性）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorrelationType {
    #[default]
    Prod,
    SelfCorrelation,
}

impl CorrelationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CorrelationType::Prod => "prod",
            CorrelationType::SelfCorrelation => "self",
        }
    }
}

impl fmt::Display for CorrelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
