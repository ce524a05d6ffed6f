//! HTTP 客户端核心
//!
//! 每个领域 API 函数恰好发起一次 HTTP 调用并原样返回结果，
//! 不做本地校验、转换、重试或缓存。

use std::sync::Arc;

use leptos::prelude::use_context;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::{ApiError, ApiResult};
use super::query::Query;
use super::session_layer::SessionLayer;
use super::transport::{API_BASE, ApiRequest, FetchTransport, HttpMethod, Transport};
use crate::session::SessionStore;

/// 类型化的 API 客户端
///
/// 对传输层泛型，使得中间件与测试替身都可以直接替换。
pub struct ApiClient<T: Transport> {
    transport: T,
}

/// 生产环境客户端：fetch 传输 + 会话中间件
pub type Api = ApiClient<SessionLayer<FetchTransport>>;

impl Api {
    /// 构造生产环境客户端
    ///
    /// 中间件在此显式装配，调用方能从类型看到 401 处理的存在。
    pub fn new(session: Arc<SessionStore>, on_unauthorized: Arc<dyn Fn() + Send + Sync>) -> Self {
        ApiClient::with_transport(SessionLayer::new(
            FetchTransport::new(API_BASE),
            session,
            on_unauthorized,
        ))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// 发起 GET 请求
    pub(crate) async fn get<R: DeserializeOwned>(&self, path: &str, query: Query) -> ApiResult<R> {
        let req = ApiRequest::new(HttpMethod::Get, path).with_query(query);
        self.dispatch(req).await
    }

    /// 发起 POST 请求（JSON 请求体）
    pub(crate) async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<R> {
        let body =
            serde_json::to_value(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let req = ApiRequest::new(HttpMethod::Post, path).with_body(body);
        self.dispatch(req).await
    }

    async fn dispatch<R: DeserializeOwned>(&self, req: ApiRequest) -> ApiResult<R> {
        let response = self.transport.send(req).await?;
        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status,
                body: response.body,
            });
        }
        response.json()
    }
}

/// 从 Context 获取 API 客户端
pub fn use_api() -> Arc<Api> {
    use_context::<Arc<Api>>().expect("Api client should be provided")
}
