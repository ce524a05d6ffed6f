//! 远程数据访问层
//!
//! 结构分为三部分：
//! - 传输抽象与生产实现（`transport`）、会话中间件（`session_layer`）
//! - 类型化客户端核心（`client`）与查询参数构造（`query`）
//! - 领域 API 模块（认证 / 仪表盘 / 排行榜 / 用户档案 / 反馈），
//!   每个后端端点对应一个函数

pub mod auth;
mod client;
pub mod dashboard;
mod error;
pub mod feedback;
pub mod leaderboard;
mod query;
mod session_layer;
mod transport;
pub mod user;

pub use client::{Api, ApiClient, use_api};
pub use error::{ApiError, ApiResult};
pub use query::Query;
pub use session_layer::SessionLayer;
pub use transport::{API_BASE, ApiRequest, ApiResponse, FetchTransport, HttpMethod, Transport};

#[cfg(test)]
mod tests;
